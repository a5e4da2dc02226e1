//! End-to-end adapter scenarios
//!
//! Diagnostics are observed through a capturing logger installed once per
//! test binary; records are kept per thread so parallel tests stay isolated.

mod capture_log;
