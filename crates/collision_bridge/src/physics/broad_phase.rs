//! Brute-force broad phase over world bounding boxes

use crate::physics::bounds::Aabb;
use crate::physics::collision::Collision;

/// Index pairs `(i, j)`, `i < j`, whose world boxes overlap and whose filters
/// accept each other
///
/// Collisions without geometry take no part.
pub fn candidate_pairs(collisions: &[&dyn Collision]) -> Vec<(usize, usize)> {
    let boxes: Vec<Option<Aabb>> = collisions
        .iter()
        .map(|collision| collision.world_bounding_box().ok())
        .collect();

    let mut pairs = Vec::new();
    for (i, a) in collisions.iter().enumerate() {
        let Some(box_a) = boxes[i] else { continue };
        for (j, b) in collisions.iter().enumerate().skip(i + 1) {
            let Some(box_b) = boxes[j] else { continue };
            if box_a.overlaps(&box_b) && a.filter().allows(&b.filter()) {
                pairs.push((i, j));
            }
        }
    }
    log::trace!(
        "Broad phase: {} candidate pair(s) from {} collisions",
        pairs.len(),
        collisions.len()
    );
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Pose, Vec3};
    use crate::physics::capabilities::{BackendCapabilities, FilterOutcome};
    use crate::physics::collision::{CollisionError, GeometryCollision};
    use crate::physics::collision_layers::{CollisionFilter, CollisionLayers};
    use crate::physics::geometry::Sphere;

    fn sphere_at(x: f32) -> GeometryCollision {
        let mut collision = GeometryCollision::detached();
        collision.set_relative_pose(Pose::from_position(Vec3::new(x, 0.0, 0.0)));
        collision.set_shape(Box::new(Sphere::new(1.0).unwrap()));
        collision
    }

    /// Backend that stores its filter bits
    struct FilteredBox {
        aabb: Aabb,
        filter: CollisionFilter,
    }

    impl Collision for FilteredBox {
        fn name(&self) -> &str {
            "filtered"
        }

        fn capabilities(&self) -> BackendCapabilities {
            BackendCapabilities::FILTERING
        }

        fn try_bounding_box(&self) -> Result<Aabb, CollisionError> {
            Ok(self.aabb)
        }

        fn world_pose(&self) -> Pose {
            Pose::identity()
        }

        fn filter(&self) -> CollisionFilter {
            self.filter
        }

        fn set_category_bits(&mut self, bits: u32) -> FilterOutcome {
            self.filter.category = bits;
            FilterOutcome::Applied
        }

        fn set_collide_bits(&mut self, bits: u32) -> FilterOutcome {
            self.filter.collide = bits;
            FilterOutcome::Applied
        }

        fn on_pose_change(&mut self) {}
    }

    #[test]
    fn test_overlapping_spheres_pair_up() {
        let a = sphere_at(0.0);
        let b = sphere_at(1.5);
        let c = sphere_at(10.0);
        let pairs = candidate_pairs(&[&a, &b, &c]);
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn test_unset_collisions_are_skipped() {
        let a = sphere_at(0.0);
        let empty = GeometryCollision::detached();
        let b = sphere_at(0.5);
        assert_eq!(candidate_pairs(&[&a, &empty, &b]), vec![(0, 2)]);
    }

    #[test]
    fn test_filters_exclude_pairs() {
        let unit = Aabb::from_center_half_extents(Vec3::zeros(), Vec3::repeat(1.0));
        let mut model = FilteredBox {
            aabb: unit,
            filter: CollisionFilter::default(),
        };
        let mut sensor = FilteredBox {
            aabb: unit,
            filter: CollisionFilter::default(),
        };
        assert!(model.set_category_bits(CollisionLayers::MODEL).is_applied());
        assert!(model.set_collide_bits(CollisionLayers::STATIC).is_applied());
        assert!(sensor.set_category_bits(CollisionLayers::SENSOR).is_applied());

        assert!(candidate_pairs(&[&model, &sensor]).is_empty());

        // The adapter ignores filtering, so it pairs with anything it overlaps
        let adapter = sphere_at(0.0);
        assert_eq!(candidate_pairs(&[&model, &adapter]), vec![(0, 1)]);
    }
}
