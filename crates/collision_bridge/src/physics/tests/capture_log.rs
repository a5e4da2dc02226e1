//! Thread-local capturing logger

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Install the capturing logger and clear this thread's records
pub fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in the test binary");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Drain the records logged on this thread
pub fn take() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.borrow_mut().drain(..).collect())
}

/// Records at exactly `level` among `records`
pub fn at_level(records: &[(Level, String)], level: Level) -> Vec<&str> {
    records
        .iter()
        .filter(|(record_level, _)| *record_level == level)
        .map(|(_, message)| message.as_str())
        .collect()
}
