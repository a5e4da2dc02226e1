//! Bounding volumes
//!
//! Spheres are what contact geometries report cheaply; axis-aligned boxes are
//! what the query layer consumes.

use crate::foundation::math::{Point3, Pose, Vec3};

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if a point lies inside or on the sphere
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (point - self.center).magnitude_squared() <= self.radius * self.radius
    }

    /// Get the penetration depth if intersecting (0.0 if not intersecting)
    pub fn penetration_depth(&self, other: &Self) -> f32 {
        let distance = (self.center - other.center).magnitude();
        let radius_sum = self.radius + other.radius;
        if distance < radius_sum {
            radius_sum - distance
        } else {
            0.0
        }
    }
}

/// Axis-aligned bounding box
///
/// The default box is the degenerate box at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Degenerate box collapsed onto a single point
    pub const fn point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Create a box from a center point and half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Cube of side `2 * radius` centered on the sphere center
    pub fn from_bounding_sphere(sphere: &BoundingSphere) -> Self {
        Self::from_center_half_extents(sphere.center, Vec3::repeat(sphere.radius))
    }

    /// Smallest box containing every point, `None` for an empty input
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut aabb = Self::point(*first);
        for point in points {
            aabb.expand_to_include(point);
        }
        Some(aabb)
    }

    /// `min <= max` on every axis
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// `min == max`
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Get the center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents of the box
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Edge lengths
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Expand this box to include a point
    pub fn expand_to_include(&mut self, point: &Vec3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Merge two boxes
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Check if this box overlaps with another (touching counts)
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Check if a point lies inside or on the box
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    /// Box enclosing this box after moving it by `pose`
    pub fn transformed(&self, pose: &Pose) -> Self {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];

        let moved = corners.map(|corner| pose.transform_point(&Point3::from(corner)).coords);
        // Eight corners, never empty
        Self::from_points(moved.iter()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_default_box_is_degenerate() {
        let aabb = Aabb::default();
        assert!(aabb.is_degenerate());
        assert!(aabb.is_valid());
        assert_eq!(aabb.min, Vec3::zeros());
    }

    #[test]
    fn test_box_from_sphere() {
        let sphere = BoundingSphere::new(Vec3::new(1.0, -1.0, 0.5), 2.0);
        let aabb = Aabb::from_bounding_sphere(&sphere);
        assert_eq!(aabb.min, Vec3::new(-1.0, -3.0, -1.5));
        assert_eq!(aabb.max, Vec3::new(3.0, 1.0, 2.5));
        assert_eq!(aabb.center(), sphere.center);
        assert_eq!(aabb.half_extents(), Vec3::repeat(2.0));
    }

    #[test]
    fn test_box_overlap() {
        let a = Aabb::new(Vec3::zeros(), Vec3::repeat(1.0));
        let b = Aabb::new(Vec3::repeat(0.5), Vec3::repeat(1.5));
        let c = Aabb::new(Vec3::repeat(2.0), Vec3::repeat(3.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_merge_and_contains() {
        let a = Aabb::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(2.0, -2.0, 0.5), Vec3::new(3.0, 0.0, 0.75));
        let merged = a.merge(&b);
        assert_eq!(merged.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(merged.max, Vec3::new(3.0, 1.0, 1.0));
        assert!(merged.contains_point(&Vec3::new(2.5, -1.0, 0.6)));
        assert!(!merged.contains_point(&Vec3::new(3.5, 0.0, 0.0)));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb::from_points(std::iter::empty::<&Vec3>()).is_none());
    }

    #[test]
    fn test_transformed_rotated_cube_grows() {
        let cube = Aabb::from_center_half_extents(Vec3::zeros(), Vec3::repeat(1.0));
        let pose = Pose::from_position_rpy(Vec3::new(5.0, 0.0, 0.0), 0.0, 0.0, FRAC_PI_4);
        let moved = cube.transformed(&pose);
        let reach = 2.0_f32.sqrt();
        assert_relative_eq!(moved.min, Vec3::new(5.0 - reach, -reach, -1.0), epsilon = 1e-5);
        assert_relative_eq!(moved.max, Vec3::new(5.0 + reach, reach, 1.0), epsilon = 1e-5);
        assert!(moved.is_valid());
    }

    #[test]
    fn test_sphere_intersection() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        let c = BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 0.5);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_relative_eq!(a.penetration_depth(&b), 0.5);
        assert_eq!(a.penetration_depth(&c), 0.0);
        assert!(a.contains_point(&Vec3::new(0.0, 1.0, 0.0)));
    }
}
