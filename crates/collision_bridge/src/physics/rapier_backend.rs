//! Contact geometry backed by a rapier3d shape
//!
//! Enabled with the `rapier` feature. Queries go straight to parry.

use std::fmt;

use rapier3d::geometry::SharedShape;
use rapier3d::parry::shape::{ShapeType, SupportMap};

use crate::foundation::math::{UnitVec3, Vec3};
use crate::physics::bounds::BoundingSphere;
use crate::physics::geometry::{ContactGeometry, GeometryKind};

/// Geometry handle owned by rapier
#[derive(Clone)]
pub struct RapierGeometry {
    shape: SharedShape,
}

impl RapierGeometry {
    /// Wrap a rapier shape
    pub const fn new(shape: SharedShape) -> Self {
        Self { shape }
    }

    /// Underlying rapier shape
    pub const fn shared_shape(&self) -> &SharedShape {
        &self.shape
    }
}

impl fmt::Debug for RapierGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RapierGeometry")
            .field("shape_type", &self.shape.shape_type())
            .finish()
    }
}

impl ContactGeometry for RapierGeometry {
    fn kind(&self) -> GeometryKind {
        match self.shape.shape_type() {
            ShapeType::Ball => GeometryKind::Sphere,
            ShapeType::Cuboid => GeometryKind::Brick,
            ShapeType::Cylinder => GeometryKind::Cylinder,
            ShapeType::ConvexPolyhedron => GeometryKind::ConvexHull,
            ShapeType::TriMesh => GeometryKind::TriangleMesh,
            _ => GeometryKind::External,
        }
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        let sphere = self.shape.compute_local_bounding_sphere();
        BoundingSphere::new(sphere.center().coords, sphere.radius())
    }

    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        self.shape
            .as_support_map()
            .map(|support: &dyn SupportMap| support.local_support_point_toward(direction).coords)
    }
}
