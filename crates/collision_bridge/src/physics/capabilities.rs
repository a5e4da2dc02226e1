//! Backend capability declaration
//!
//! A collision backend states which optional operations it honours. Callers
//! check the set instead of assuming a setter had an effect.

use bitflags::bitflags;

bitflags! {
    /// Optional operations a collision backend actually implements
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BackendCapabilities: u8 {
        /// Category bits are stored and used for filtering
        const CATEGORY_BITS = 1 << 0;
        /// Collide bits are stored and used for filtering
        const COLLIDE_BITS = 1 << 1;
        /// Link pose changes are pushed into the external engine
        const POSE_SYNC = 1 << 2;
        /// Geometry can answer directional support-point queries
        const SUPPORT_POINTS = 1 << 3;

        /// Both filtering masks
        const FILTERING = Self::CATEGORY_BITS.bits() | Self::COLLIDE_BITS.bits();
    }
}

impl BackendCapabilities {
    /// Whether collision filtering takes effect for this backend
    pub const fn honours_filtering(self) -> bool {
        self.contains(Self::FILTERING)
    }
}

/// Result of a request the backend may not honour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum FilterOutcome {
    /// The backend stored and will use the value
    Applied,
    /// The backend does not implement this operation; nothing changed
    Ignored,
}

impl FilterOutcome {
    /// `true` for [`FilterOutcome::Applied`]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
