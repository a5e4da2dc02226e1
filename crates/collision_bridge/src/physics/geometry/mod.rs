//! Contact geometry handles
//!
//! [`ContactGeometry`] is the seam to the rigid-body toolkit: the adapter only
//! ever asks a geometry for its bounding sphere and, when available, for
//! support points. Everything is expressed in the geometry's local frame.
//!
//! # Module Organization
//!
//! - [`primitives`] - Analytic convex shapes (sphere, brick, ellipsoid, cylinder)
//! - [`mesh`] - Vertex-based shapes (convex hull, triangle mesh)
//! - [`description`] - Serializable geometry descriptions and the factory that builds them

pub mod description;
pub mod mesh;
pub mod primitives;

use std::fmt;

use crate::foundation::math::{UnitVec3, Vec3};
use crate::physics::bounds::BoundingSphere;

pub use description::GeometryConfig;
pub use mesh::{ConvexHull, TriangleMesh};
pub use primitives::{Brick, Cylinder, Ellipsoid, Sphere};

/// Geometry handle produced by the rigid-body toolkit
pub trait ContactGeometry: fmt::Debug {
    /// Which kind of primitive this is
    fn kind(&self) -> GeometryKind;

    /// Sphere enclosing the geometry, local frame
    fn bounding_sphere(&self) -> BoundingSphere;

    /// Point of the geometry farthest along `direction`, local frame
    ///
    /// `None` when the geometry has no support mapping.
    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        let _ = direction;
        None
    }
}

/// Geometry primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Ball
    Sphere,
    /// Box given by half extents
    Brick,
    /// Axis-aligned ellipsoid
    Ellipsoid,
    /// Solid cylinder, axis chosen by the geometry
    Cylinder,
    /// Convex hull of a point set
    ConvexHull,
    /// Triangle soup
    TriangleMesh,
    /// Geometry owned by a third-party engine
    External,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sphere => "sphere",
            Self::Brick => "box",
            Self::Ellipsoid => "ellipsoid",
            Self::Cylinder => "cylinder",
            Self::ConvexHull => "convex_hull",
            Self::TriangleMesh => "mesh",
            Self::External => "external",
        };
        f.write_str(name)
    }
}

/// Errors raised while constructing geometry
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimension is zero, negative, or not finite
    #[error("invalid {kind} dimension `{field}`: {value}")]
    InvalidDimension {
        /// Geometry being built
        kind: GeometryKind,
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// Vertex-based geometry without vertices
    #[error("{0} requires at least one vertex")]
    EmptyVertices(GeometryKind),

    /// A vertex coordinate is not finite
    #[error("{kind} vertex {index} is not finite")]
    NonFiniteVertex {
        /// Geometry being built
        kind: GeometryKind,
        /// Vertex index
        index: usize,
    },

    /// Index buffer length is not a multiple of three
    #[error("mesh index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),

    /// Index refers past the vertex buffer
    #[error("mesh index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index
        index: u32,
        /// Number of vertices supplied
        vertex_count: usize,
    },
}

pub(crate) fn check_dimension(
    kind: GeometryKind,
    field: &'static str,
    value: f32,
) -> Result<f32, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { kind, field, value })
    }
}

/// Support point over a finite vertex set
pub(crate) fn support_over_vertices(vertices: &[Vec3], direction: &UnitVec3) -> Option<Vec3> {
    let direction = direction.into_inner();
    vertices
        .iter()
        .max_by(|a, b| a.dot(&direction).total_cmp(&b.dot(&direction)))
        .copied()
}

/// Bounding sphere of a vertex set: box center, farthest vertex distance
pub(crate) fn sphere_around_vertices(vertices: &[Vec3]) -> BoundingSphere {
    let center = crate::physics::bounds::Aabb::from_points(vertices)
        .map(|aabb| aabb.center())
        .unwrap_or_default();
    let radius = vertices
        .iter()
        .map(|vertex| (vertex - center).magnitude())
        .fold(0.0_f32, f32::max);
    BoundingSphere::new(center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimension() {
        assert_eq!(check_dimension(GeometryKind::Sphere, "radius", 1.5), Ok(1.5));
        assert!(check_dimension(GeometryKind::Sphere, "radius", 0.0).is_err());
        assert!(check_dimension(GeometryKind::Sphere, "radius", -1.0).is_err());
        assert!(check_dimension(GeometryKind::Sphere, "radius", f32::NAN).is_err());
        assert!(check_dimension(GeometryKind::Sphere, "radius", f32::INFINITY).is_err());
    }

    #[test]
    fn test_support_over_vertices_picks_extreme() {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(-1.0, 3.0, 0.0),
        ];
        let up = UnitVec3::new_normalize(Vec3::new(0.0, 1.0, 0.0));
        let right = UnitVec3::new_normalize(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(support_over_vertices(&vertices, &up), Some(vertices[2]));
        assert_eq!(support_over_vertices(&vertices, &right), Some(vertices[1]));
        assert_eq!(support_over_vertices(&[], &up), None);
    }

    #[test]
    fn test_sphere_around_vertices_encloses_all() {
        let vertices = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(3.0, 1.0, 1.0),
            Vec3::new(2.0, 4.0, 0.0),
        ];
        let sphere = sphere_around_vertices(&vertices);
        for vertex in &vertices {
            assert!((vertex - sphere.center).magnitude() <= sphere.radius + 1e-5);
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(GeometryKind::Brick.to_string(), "box");
        assert_eq!(GeometryKind::TriangleMesh.to_string(), "mesh");
    }
}
