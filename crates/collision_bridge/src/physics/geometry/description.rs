//! Serializable geometry descriptions
//!
//! ```toml
//! [geometry]
//! type = "box"
//! size = [1.0, 2.0, 0.5]
//! ```

use serde::{Deserialize, Serialize};

use super::{
    Brick, ContactGeometry, ConvexHull, Cylinder, Ellipsoid, GeometryError, GeometryKind, Sphere,
    TriangleMesh,
};
use crate::foundation::math::Vec3;

/// Description of one collision geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryConfig {
    /// Ball
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Box with full edge lengths
    Box {
        /// Edge lengths along X, Y, Z
        size: [f32; 3],
    },
    /// Ellipsoid with semi-axes
    Ellipsoid {
        /// Radii along X, Y, Z
        radii: [f32; 3],
    },
    /// Cylinder along local Z
    Cylinder {
        /// Radius
        radius: f32,
        /// Full length
        length: f32,
    },
    /// Convex hull of the given points
    ConvexHull {
        /// Hull points
        vertices: Vec<[f32; 3]>,
    },
    /// Indexed triangle mesh
    Mesh {
        /// Mesh vertices
        vertices: Vec<[f32; 3]>,
        /// Three indices per triangle
        indices: Vec<u32>,
    },
}

impl GeometryConfig {
    /// Kind of geometry this description builds
    pub const fn kind(&self) -> GeometryKind {
        match self {
            Self::Sphere { .. } => GeometryKind::Sphere,
            Self::Box { .. } => GeometryKind::Brick,
            Self::Ellipsoid { .. } => GeometryKind::Ellipsoid,
            Self::Cylinder { .. } => GeometryKind::Cylinder,
            Self::ConvexHull { .. } => GeometryKind::ConvexHull,
            Self::Mesh { .. } => GeometryKind::TriangleMesh,
        }
    }

    /// Build the geometry handle described here
    pub fn build(&self) -> Result<Box<dyn ContactGeometry>, GeometryError> {
        let geometry: Box<dyn ContactGeometry> = match self {
            Self::Sphere { radius } => Box::new(Sphere::new(*radius)?),
            Self::Box { size } => Box::new(Brick::from_size(Vec3::from(*size))?),
            Self::Ellipsoid { radii } => Box::new(Ellipsoid::new(Vec3::from(*radii))?),
            Self::Cylinder { radius, length } => Box::new(Cylinder::new(*radius, *length)?),
            Self::ConvexHull { vertices } => Box::new(ConvexHull::new(to_vectors(vertices))?),
            Self::Mesh { vertices, indices } => {
                Box::new(TriangleMesh::from_vertices(to_vectors(vertices), indices)?)
            }
        };
        log::debug!("Built {} geometry", geometry.kind());
        Ok(geometry)
    }
}

fn to_vectors(points: &[[f32; 3]]) -> Vec<Vec3> {
    points.iter().map(|p| Vec3::from(*p)).collect()
}
