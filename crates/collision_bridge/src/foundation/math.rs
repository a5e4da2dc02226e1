//! Math utilities and types
//!
//! Provides the f32 nalgebra aliases used for geometry queries and the rigid
//! [`Pose`] that places a collision relative to its link and the world.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix3, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Unit-length 3D vector (query directions)
pub type UnitVec3 = Unit<Vector3<f32>>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Rigid transform: a position and an orientation, no scale
///
/// Serialized as `{ position = [x, y, z], rpy = [roll, pitch, yaw] }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PoseRepr", into = "PoseRepr")]
pub struct Pose {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Pose {
    /// Create a new identity pose
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a pose with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a pose with position and rotation
    pub const fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Create a pose from a position and roll/pitch/yaw angles in radians
    pub fn from_position_rpy(position: Vec3, roll: f32, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_euler_angles(roll, pitch, yaw),
        }
    }

    /// Apply this pose to a point
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(self.rotation * point.coords + self.position)
    }

    /// Apply this pose's rotation to a vector
    pub fn transform_vector(&self, vector: &Vec3) -> Vec3 {
        self.rotation * vector
    }

    /// Rotation part as a 3x3 matrix
    pub fn rotation_matrix(&self) -> Mat3 {
        *self.rotation.to_rotation_matrix().matrix()
    }

    /// Compose `self` (parent frame) with `child` expressed in the parent frame
    pub fn compose(&self, child: &Self) -> Self {
        Self {
            position: self.position + self.rotation * child.position,
            rotation: self.rotation * child.rotation,
        }
    }

    /// Get the inverse pose
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.inverse();
        Self {
            position: inv_rotation * (-self.position),
            rotation: inv_rotation,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
struct PoseRepr {
    position: [f32; 3],
    rpy: [f32; 3],
}

impl Default for PoseRepr {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rpy: [0.0; 3],
        }
    }
}

impl From<PoseRepr> for Pose {
    fn from(repr: PoseRepr) -> Self {
        let [x, y, z] = repr.position;
        let [roll, pitch, yaw] = repr.rpy;
        Self::from_position_rpy(Vec3::new(x, y, z), roll, pitch, yaw)
    }
}

impl From<Pose> for PoseRepr {
    fn from(pose: Pose) -> Self {
        let (roll, pitch, yaw) = pose.rotation.euler_angles();
        Self {
            position: [pose.position.x, pose.position.y, pose.position.z],
            rpy: [roll, pitch, yaw],
        }
    }
}
