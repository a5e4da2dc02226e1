//! # Collision Bridge
//!
//! Exposes contact geometry owned by an external rigid-body toolkit through a
//! generic collision interface that physics-body components can query.
//!
//! ## Features
//!
//! - **Geometry Adapter**: [`GeometryCollision`] owns exactly one geometry handle
//!   and answers bounding-volume queries about it
//! - **Bounding Strategies**: bounding-sphere cube or tight support-point box
//! - **Capability Declaration**: backends state which filtering and pose
//!   operations they actually honour
//! - **Configuration**: TOML and RON collision/link descriptions
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_bridge::prelude::*;
//!
//! let mut link = Link::new("base", Pose::identity());
//! let key = link
//!     .create_collision(&CollisionConfig {
//!         name: Some("hull".into()),
//!         geometry: Some(GeometryConfig::Sphere { radius: 2.0 }),
//!         ..CollisionConfig::default()
//!     })
//!     .unwrap();
//!
//! let bounds = link.collision(key).unwrap().bounding_box();
//! assert_eq!(bounds.max, Vec3::new(2.0, 2.0, 2.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod physics;

pub use physics::{Collision, CollisionError, GeometryCollision, Link};

/// Common imports for adapter users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Point3, Pose, Quat, UnitVec3, Vec3},
        physics::{
            Aabb, BackendCapabilities, BoundingBoxMethod, BoundingSphere, Collision,
            CollisionConfig, CollisionError, CollisionFilter, CollisionKey, CollisionLayers,
            ContactGeometry, FilterOutcome, GeometryCollision, GeometryConfig, GeometryError,
            GeometryKind, Link, LinkConfig, LinkFrame, SurfaceParams,
        },
    };
}
