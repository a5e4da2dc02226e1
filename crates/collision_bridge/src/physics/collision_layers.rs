//! Collision layer system for filtering collision detection
//!
//! A collision sits on the layers in its category mask and collides with the
//! layers in its collide mask. Two collisions interact only if each one's
//! category is accepted by the other's collide mask.

/// Collision layer definitions
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Static environment geometry
    pub const STATIC: u32 = 1 << 0;

    /// Links of articulated models
    pub const MODEL: u32 = 1 << 1;

    /// Range sensors (rays, lasers)
    pub const SENSOR: u32 = 1 << 2;

    /// Ground plane
    pub const GROUND: u32 = 1 << 3;

    /// Check if two collisions should collide based on their category and collide masks
    ///
    /// # Example
    /// ```
    /// use collision_bridge::physics::CollisionLayers;
    ///
    /// let should_collide = CollisionLayers::should_collide(
    ///     CollisionLayers::MODEL, CollisionLayers::ALL,
    ///     CollisionLayers::GROUND, CollisionLayers::MODEL,
    /// );
    /// assert!(should_collide);
    /// ```
    pub const fn should_collide(
        category_a: u32,
        collide_a: u32,
        category_b: u32,
        collide_b: u32,
    ) -> bool {
        (category_a & collide_b) != 0 && (category_b & collide_a) != 0
    }

    /// Helper to create a mask from multiple layers
    pub fn mask(layers: &[u32]) -> u32 {
        layers.iter().fold(0, |acc, &layer| acc | layer)
    }
}

/// Category and collide masks of one collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionFilter {
    /// Layers this collision sits on
    pub category: u32,
    /// Layers this collision accepts
    pub collide: u32,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            category: CollisionLayers::ALL,
            collide: CollisionLayers::ALL,
        }
    }
}

impl CollisionFilter {
    /// Creates a filter from raw masks
    pub const fn new(category: u32, collide: u32) -> Self {
        Self { category, collide }
    }

    /// Mutual acceptance test
    pub const fn allows(&self, other: &Self) -> bool {
        CollisionLayers::should_collide(self.category, self.collide, other.category, other.collide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::MODEL,
            CollisionLayers::STATIC,
            CollisionLayers::STATIC,
            CollisionLayers::MODEL,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Model accepts the sensor layer, sensor does not accept models
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::MODEL,
            CollisionLayers::SENSOR,
            CollisionLayers::SENSOR,
            CollisionLayers::GROUND,
        ));
    }

    #[test]
    fn test_mask_creation() {
        let mask = CollisionLayers::mask(&[CollisionLayers::MODEL, CollisionLayers::GROUND]);
        assert_eq!(mask, CollisionLayers::MODEL | CollisionLayers::GROUND);
    }

    #[test]
    fn test_filter_allows() {
        let any = CollisionFilter::default();
        let model = CollisionFilter::new(CollisionLayers::MODEL, CollisionLayers::STATIC);
        let ground = CollisionFilter::new(CollisionLayers::GROUND, CollisionLayers::ALL);
        let environment = CollisionFilter::new(CollisionLayers::STATIC, CollisionLayers::MODEL);

        assert!(any.allows(&any));
        assert!(!model.allows(&ground));
        assert!(model.allows(&environment));
        assert!(environment.allows(&model));
        assert!(!CollisionFilter::new(CollisionLayers::NONE, CollisionLayers::ALL).allows(&any));
    }
}
