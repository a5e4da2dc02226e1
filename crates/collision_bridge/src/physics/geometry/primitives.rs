//! Analytic convex primitives
//!
//! All primitives are centered on their local origin.

use super::{check_dimension, ContactGeometry, GeometryError, GeometryKind};
use crate::foundation::math::{UnitVec3, Vec3};
use crate::physics::bounds::BoundingSphere;

const DIRECTION_EPSILON: f32 = 1e-6;

/// Ball of a given radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f32,
}

impl Sphere {
    /// Creates a sphere, rejecting non-positive radii
    pub fn new(radius: f32) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: check_dimension(GeometryKind::Sphere, "radius", radius)?,
        })
    }

    /// Sphere radius
    pub const fn radius(&self) -> f32 {
        self.radius
    }
}

impl ContactGeometry for Sphere {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Sphere
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Vec3::zeros(), self.radius)
    }

    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        Some(direction.into_inner() * self.radius)
    }
}

/// Box given by its half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    half_extents: Vec3,
}

impl Brick {
    /// Creates a brick from half extents
    pub fn new(half_extents: Vec3) -> Result<Self, GeometryError> {
        check_dimension(GeometryKind::Brick, "half_extents.x", half_extents.x)?;
        check_dimension(GeometryKind::Brick, "half_extents.y", half_extents.y)?;
        check_dimension(GeometryKind::Brick, "half_extents.z", half_extents.z)?;
        Ok(Self { half_extents })
    }

    /// Creates a brick from full edge lengths
    pub fn from_size(size: Vec3) -> Result<Self, GeometryError> {
        Self::new(size * 0.5)
    }

    /// Half extents along each local axis
    pub const fn half_extents(&self) -> Vec3 {
        self.half_extents
    }
}

impl ContactGeometry for Brick {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Brick
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Vec3::zeros(), self.half_extents.magnitude())
    }

    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        let h = self.half_extents;
        Some(Vec3::new(
            if direction.x >= 0.0 { h.x } else { -h.x },
            if direction.y >= 0.0 { h.y } else { -h.y },
            if direction.z >= 0.0 { h.z } else { -h.z },
        ))
    }
}

/// Axis-aligned ellipsoid given by its three radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radii: Vec3,
}

impl Ellipsoid {
    /// Creates an ellipsoid from its semi-axes
    pub fn new(radii: Vec3) -> Result<Self, GeometryError> {
        check_dimension(GeometryKind::Ellipsoid, "radii.x", radii.x)?;
        check_dimension(GeometryKind::Ellipsoid, "radii.y", radii.y)?;
        check_dimension(GeometryKind::Ellipsoid, "radii.z", radii.z)?;
        Ok(Self { radii })
    }

    /// Semi-axes
    pub const fn radii(&self) -> Vec3 {
        self.radii
    }
}

impl ContactGeometry for Ellipsoid {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Ellipsoid
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Vec3::zeros(), self.radii.max())
    }

    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        // p = R^2 d / |R d|
        let scaled = self.radii.component_mul(&direction.into_inner());
        let norm = scaled.magnitude();
        if norm < DIRECTION_EPSILON {
            return Some(Vec3::zeros());
        }
        Some(self.radii.component_mul(&scaled) / norm)
    }
}

/// Solid cylinder along the local Z axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f32,
    half_length: f32,
}

impl Cylinder {
    /// Creates a cylinder from its radius and full length
    pub fn new(radius: f32, length: f32) -> Result<Self, GeometryError> {
        let radius = check_dimension(GeometryKind::Cylinder, "radius", radius)?;
        let length = check_dimension(GeometryKind::Cylinder, "length", length)?;
        Ok(Self {
            radius,
            half_length: length * 0.5,
        })
    }

    /// Cylinder radius
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Half of the length along Z
    pub const fn half_length(&self) -> f32 {
        self.half_length
    }
}

impl ContactGeometry for Cylinder {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Cylinder
    }

    fn bounding_sphere(&self) -> BoundingSphere {
        let radius = self.radius.hypot(self.half_length);
        BoundingSphere::new(Vec3::zeros(), radius)
    }

    fn support_point(&self, direction: &UnitVec3) -> Option<Vec3> {
        let radial = direction.x.hypot(direction.y);
        let (x, y) = if radial > DIRECTION_EPSILON {
            (
                self.radius * direction.x / radial,
                self.radius * direction.y / radial,
            )
        } else {
            (0.0, 0.0)
        };
        let z = if direction.z >= 0.0 {
            self.half_length
        } else {
            -self.half_length
        };
        Some(Vec3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axis(x: f32, y: f32, z: f32) -> UnitVec3 {
        UnitVec3::new_normalize(Vec3::new(x, y, z))
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        assert!(Sphere::new(0.0).is_err());
        assert!(matches!(
            Sphere::new(-2.0),
            Err(GeometryError::InvalidDimension { field: "radius", .. })
        ));
    }

    #[test]
    fn test_sphere_queries() {
        let sphere = Sphere::new(2.0).unwrap();
        assert_eq!(sphere.bounding_sphere(), BoundingSphere::new(Vec3::zeros(), 2.0));
        assert_relative_eq!(
            sphere.support_point(&axis(0.0, -1.0, 0.0)).unwrap(),
            Vec3::new(0.0, -2.0, 0.0)
        );
    }

    #[test]
    fn test_brick_support_and_sphere() {
        let brick = Brick::from_size(Vec3::new(2.0, 4.0, 6.0)).unwrap();
        assert_eq!(brick.half_extents(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(brick.bounding_sphere().radius, 14.0_f32.sqrt());
        let corner = brick.support_point(&axis(-1.0, 1.0, -1.0)).unwrap();
        assert_eq!(corner, Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_ellipsoid_support_along_axes() {
        let ellipsoid = Ellipsoid::new(Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_relative_eq!(
            ellipsoid.support_point(&axis(0.0, 0.0, 1.0)).unwrap(),
            Vec3::new(0.0, 0.0, 3.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            ellipsoid.support_point(&axis(0.0, -1.0, 0.0)).unwrap(),
            Vec3::new(0.0, -2.0, 0.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(ellipsoid.bounding_sphere().radius, 3.0);
    }

    #[test]
    fn test_ellipsoid_support_lies_on_surface() {
        let radii = Vec3::new(1.0, 2.0, 3.0);
        let ellipsoid = Ellipsoid::new(radii).unwrap();
        let p = ellipsoid.support_point(&axis(1.0, 1.0, 1.0)).unwrap();
        let surface = (p.x / radii.x).powi(2) + (p.y / radii.y).powi(2) + (p.z / radii.z).powi(2);
        assert_relative_eq!(surface, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cylinder_support() {
        let cylinder = Cylinder::new(1.0, 4.0).unwrap();
        assert_eq!(cylinder.half_length(), 2.0);
        assert_relative_eq!(
            cylinder.support_point(&axis(1.0, 0.0, 0.0)).unwrap().x,
            1.0
        );
        assert_relative_eq!(
            cylinder.support_point(&axis(0.0, 0.0, -1.0)).unwrap(),
            Vec3::new(0.0, 0.0, -2.0)
        );
        assert_relative_eq!(cylinder.bounding_sphere().radius, 5.0_f32.sqrt());
    }
}
