//! Link: the body that owns a set of collisions
//!
//! The link's frame is shared through [`Rc`]; each collision keeps a [`Weak`]
//! back-reference so dropping the link never leaves a cycle behind.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::config::Config;
use crate::foundation::math::Pose;
use crate::physics::bounds::Aabb;
use crate::physics::collision::{Collision, CollisionConfig, CollisionError, GeometryCollision};

new_key_type! {
    /// Handle of a collision registered on a link
    pub struct CollisionKey;
}

/// Name and world pose of a link, shared with its collisions
#[derive(Debug)]
pub struct LinkFrame {
    name: String,
    world_pose: Cell<Pose>,
}

impl LinkFrame {
    /// Link name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current world pose
    pub fn world_pose(&self) -> Pose {
        self.world_pose.get()
    }
}

/// Configuration of a link and its collisions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Link name
    pub name: String,
    /// Initial world pose
    pub pose: Pose,
    /// Collision elements
    #[serde(rename = "collision")]
    pub collisions: Vec<CollisionConfig>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            name: "link".to_string(),
            pose: Pose::identity(),
            collisions: Vec::new(),
        }
    }
}

impl Config for LinkConfig {}

/// Rigid body owning zero or more collisions
#[derive(Debug)]
pub struct Link {
    frame: Rc<LinkFrame>,
    collisions: SlotMap<CollisionKey, GeometryCollision>,
}

impl Link {
    /// Creates an empty link at the given world pose
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            frame: Rc::new(LinkFrame {
                name: name.into(),
                world_pose: Cell::new(pose),
            }),
            collisions: SlotMap::with_key(),
        }
    }

    /// Build a link and all of its collisions from a description
    pub fn from_config(config: &LinkConfig) -> Result<Self, CollisionError> {
        let mut link = Self::new(config.name.clone(), config.pose);
        for collision in &config.collisions {
            link.create_collision(collision)?;
        }
        info!(
            "Link `{}` loaded with {} collision(s)",
            link.name(),
            link.len()
        );
        Ok(link)
    }

    /// Link name
    pub fn name(&self) -> &str {
        self.frame.name()
    }

    /// Shared frame handed to collisions
    pub const fn frame(&self) -> &Rc<LinkFrame> {
        &self.frame
    }

    /// Back-reference for collisions created outside the link
    pub fn downgrade(&self) -> Weak<LinkFrame> {
        Rc::downgrade(&self.frame)
    }

    /// Current world pose
    pub fn world_pose(&self) -> Pose {
        self.frame.world_pose()
    }

    /// Move the link and notify every collision
    pub fn set_world_pose(&mut self, pose: Pose) {
        self.frame.world_pose.set(pose);
        for collision in self.collisions.values_mut() {
            collision.on_pose_change();
        }
    }

    /// Construct, load and register a collision, building its geometry if described
    pub fn create_collision(
        &mut self,
        config: &CollisionConfig,
    ) -> Result<CollisionKey, CollisionError> {
        let mut collision = GeometryCollision::new(self.downgrade());
        collision.load(config)?;
        if let Some(geometry) = &config.geometry {
            collision.set_shape(geometry.build()?);
        }
        Ok(self.register(collision))
    }

    /// Register an existing collision, rebinding it to this link
    pub fn attach_collision(&mut self, mut collision: GeometryCollision) -> CollisionKey {
        collision.bind_link(self.downgrade());
        self.register(collision)
    }

    fn register(&mut self, collision: GeometryCollision) -> CollisionKey {
        debug!("Link `{}`: registered collision `{}`", self.name(), collision.name());
        self.collisions.insert(collision)
    }

    /// Collision by key
    pub fn collision(&self, key: CollisionKey) -> Option<&GeometryCollision> {
        self.collisions.get(key)
    }

    /// Mutable collision by key
    pub fn collision_mut(&mut self, key: CollisionKey) -> Option<&mut GeometryCollision> {
        self.collisions.get_mut(key)
    }

    /// First collision with the given name
    pub fn collision_by_name(&self, name: &str) -> Option<(CollisionKey, &GeometryCollision)> {
        self.collisions
            .iter()
            .find(|(_, collision)| collision.name() == name)
    }

    /// Unregister a collision; its geometry is released with it
    pub fn remove_collision(&mut self, key: CollisionKey) -> Option<GeometryCollision> {
        let mut removed = self.collisions.remove(key)?;
        removed.bind_link(Weak::new());
        debug!("Link `{}`: removed collision `{}`", self.name(), removed.name());
        Some(removed)
    }

    /// All collisions with their keys
    pub fn collisions(&self) -> impl Iterator<Item = (CollisionKey, &GeometryCollision)> {
        self.collisions.iter()
    }

    /// Number of collisions
    pub fn len(&self) -> usize {
        self.collisions.len()
    }

    /// Whether the link has no collisions
    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }

    /// World box enclosing every collision that has geometry
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.collisions
            .values()
            .filter_map(|collision| collision.world_bounding_box().ok())
            .reduce(|acc, aabb| acc.merge(&aabb))
    }
}
