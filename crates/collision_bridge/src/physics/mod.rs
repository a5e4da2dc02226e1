//! Physics module: collision interface over external contact geometry
//!
//! Provides the contact-geometry adapter, the link that owns collisions, and a
//! brute-force broad phase over world bounding boxes.

pub mod bounds;
pub mod broad_phase;
pub mod capabilities;
pub mod collision;
pub mod collision_layers;
pub mod geometry;
pub mod link;
pub mod surface;

#[cfg(feature = "rapier")]
pub mod rapier_backend;

#[cfg(test)]
mod tests;

pub use bounds::{Aabb, BoundingSphere};
pub use broad_phase::candidate_pairs;
pub use capabilities::{BackendCapabilities, FilterOutcome};
pub use collision::{
    BoundingBoxMethod, Collision, CollisionConfig, CollisionError, GeometryCollision,
    DEFAULT_COLLISION_NAME,
};
pub use collision_layers::{CollisionFilter, CollisionLayers};
pub use geometry::{ContactGeometry, GeometryConfig, GeometryError, GeometryKind};
pub use link::{CollisionKey, Link, LinkConfig, LinkFrame};
pub use surface::{SurfaceError, SurfaceParams};

#[cfg(feature = "rapier")]
pub use rapier_backend::RapierGeometry;
