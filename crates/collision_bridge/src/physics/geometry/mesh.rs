//! Vertex-based collision geometry
//!
//! Vertices are stored in the geometry's local frame and never modified after
//! construction. Support points are taken over the vertex set, so a triangle
//! mesh answers with the support of its convex hull.

use super::{
    sphere_around_vertices, support_over_vertices, ContactGeometry, GeometryError, GeometryKind,
};
use crate::foundation::math::{UnitVec3, Vec3};
use crate::physics::bounds::BoundingSphere;

fn validate_vertices(kind: GeometryKind, vertices: &[Vec3]) -> Result<(), GeometryError> {
    if vertices.is_empty() {
        return Err(GeometryError::EmptyVertices(kind));
    }
    if let Some(index) = vertices
        .iter()
        .position(|vertex| !vertex.iter().all(|c| c.is_finite()))
    {
        return Err(GeometryError::NonFiniteVertex { kind, index });
    }
    Ok(())
}

/// Convex hull of a point set
///
/// The points are kept as given; interior points are harmless for both
/// bounding queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    vertices: Vec<Vec3>,
    bounding_sphere: BoundingSphere,
}

impl ConvexHull {
    /// Creates a hull from at least one finite vertex
    pub fn new(vertices: Vec<Vec3>) -> Result<Self, GeometryError> {
        validate_vertices(GeometryKind::ConvexHull, &vertices)?;
        let bounding_sphere = sphere_around_vertices(&vertices);
        Ok(Self {
            vertices,
            bounding_sphere,
        })
    }

    /// Hull points
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}

impl ContactGeometry for ConvexHull {
    fn kind(&self) -> GeometryKind {
        GeometryKind::ConvexHull
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        support_over_vertices(&self.vertices, direction)
    }
}

/// Indexed triangle mesh
///
/// Only the vertices are kept. The index buffer is checked for complete,
/// in-range triangles, but bounding and support queries never need faces.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    bounding_sphere: BoundingSphere,
}

impl TriangleMesh {
    /// Creates a mesh from vertices and a flat index buffer (three per triangle)
    pub fn from_vertices(vertices: Vec<Vec3>, indices: &[u32]) -> Result<Self, GeometryError> {
        validate_vertices(GeometryKind::TriangleMesh, &vertices)?;
        if indices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangle(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&index| index as usize >= vertices.len()) {
            return Err(GeometryError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }

        let bounding_sphere = sphere_around_vertices(&vertices);
        Ok(Self {
            vertices,
            bounding_sphere,
        })
    }

    /// Mesh vertices
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}

impl ContactGeometry for TriangleMesh {
    fn kind(&self) -> GeometryKind {
        GeometryKind::TriangleMesh
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        support_over_vertices(&self.vertices, direction)
    }
}
