//! Surface properties carried by every collision
//!
//! Values are stored for the contact solver; the adapter itself never reads
//! them when answering bounding queries.

use serde::{Deserialize, Serialize};

/// Coulomb friction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrictionParams {
    /// Friction coefficient along the first friction direction
    pub mu: f32,
    /// Friction coefficient along the second friction direction
    pub mu2: f32,
    /// Force-dependent slip along the first direction
    pub slip1: f32,
    /// Force-dependent slip along the second direction
    pub slip2: f32,
}

impl Default for FrictionParams {
    fn default() -> Self {
        Self {
            mu: 1.0,
            mu2: 1.0,
            slip1: 0.0,
            slip2: 0.0,
        }
    }
}

/// Restitution parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceParams {
    /// Coefficient of restitution in [0, 1]
    pub restitution: f32,
    /// Impact velocity below which no bounce occurs
    pub threshold: f32,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            threshold: 100_000.0,
        }
    }
}

/// Contact stiffness and penetration parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactParams {
    /// Contact stiffness
    pub kp: f32,
    /// Contact damping
    pub kd: f32,
    /// Maximum correcting velocity
    pub max_vel: f32,
    /// Penetration allowed before contact forces apply
    pub min_depth: f32,
    /// Report contacts without generating forces
    pub collide_without_contact: bool,
    /// Mask used together with `collide_without_contact`
    pub collide_without_contact_bitmask: u32,
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            kp: 1e12,
            kd: 1.0,
            max_vel: 0.01,
            min_depth: 0.0,
            collide_without_contact: false,
            collide_without_contact_bitmask: 1,
        }
    }
}

/// Surface properties of one collision
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParams {
    /// Friction
    pub friction: FrictionParams,
    /// Bounce
    pub bounce: BounceParams,
    /// Contact
    pub contact: ContactParams,
}

impl SurfaceParams {
    /// Check every parameter is in range
    pub fn validate(&self) -> Result<(), SurfaceError> {
        let checks: [(&'static str, f32, fn(f32) -> bool); 10] = [
            ("friction.mu", self.friction.mu, non_negative),
            ("friction.mu2", self.friction.mu2, non_negative),
            ("friction.slip1", self.friction.slip1, non_negative),
            ("friction.slip2", self.friction.slip2, non_negative),
            ("bounce.restitution", self.bounce.restitution, unit_interval),
            ("bounce.threshold", self.bounce.threshold, non_negative),
            ("contact.kp", self.contact.kp, non_negative),
            ("contact.kd", self.contact.kd, non_negative),
            ("contact.max_vel", self.contact.max_vel, non_negative),
            ("contact.min_depth", self.contact.min_depth, non_negative),
        ];

        for (field, value, accept) in checks {
            if !accept(value) {
                return Err(SurfaceError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn unit_interval(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Surface parameter errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// A parameter is outside its valid range
    #[error("surface parameter `{field}` out of range: {value}")]
    OutOfRange {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f32,
    },
}
