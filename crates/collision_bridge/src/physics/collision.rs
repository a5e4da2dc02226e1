//! Collision interface and the contact-geometry adapter
//!
//! [`Collision`] is what physics-body components and query layers talk to.
//! [`GeometryCollision`] implements it on top of a single [`ContactGeometry`]
//! handle owned by the adapter.
//!
//! The adapter honours neither category/collide bits nor pose propagation:
//! [`GeometryCollision::capabilities`] reports only
//! [`BackendCapabilities::SUPPORT_POINTS`], the filter setters return
//! [`FilterOutcome::Ignored`] and [`Collision::on_pose_change`] does nothing.

use std::rc::{Rc, Weak};

use log::{debug, error, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::{Pose, UnitVec3, Vec3};
use crate::physics::bounds::Aabb;
use crate::physics::capabilities::{BackendCapabilities, FilterOutcome};
use crate::physics::collision_layers::CollisionFilter;
use crate::physics::geometry::{ContactGeometry, GeometryConfig, GeometryError, GeometryKind};
use crate::physics::link::LinkFrame;
use crate::physics::surface::{SurfaceError, SurfaceParams};

/// Name given to adapters before a configuration renames them
pub const DEFAULT_COLLISION_NAME: &str = "geometry_collision";

/// Default contact budget per collision
pub const DEFAULT_MAX_CONTACTS: u32 = 10;

/// Collision errors
#[derive(thiserror::Error, Debug)]
pub enum CollisionError {
    /// Bounding query on an adapter whose geometry was never set
    #[error("collision `{name}` has no contact geometry")]
    ShapeUnset {
        /// Collision name
        name: String,
    },

    /// Geometry reported a bounding sphere that bounds nothing
    #[error("collision `{name}`: {kind} bounding sphere is invalid (radius {radius})")]
    InvalidBoundingSphere {
        /// Collision name
        name: String,
        /// Kind reported by the geometry
        kind: GeometryKind,
        /// Reported radius
        radius: f32,
    },

    /// Geometry could not be built
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Surface parameters rejected
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// Configuration could not be read
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// How a bounding box is derived from the contact geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundingBoxMethod {
    /// Cube around the geometry's bounding sphere (over-approximation)
    #[default]
    Sphere,
    /// Tight box from support points along the six axis directions
    SupportPoints,
}

/// Configuration of one collision element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Collision name, default name kept when absent
    pub name: Option<String>,
    /// Pose relative to the owning link
    pub pose: Pose,
    /// Geometry the owning link builds and hands to the adapter
    pub geometry: Option<GeometryConfig>,
    /// Surface properties
    pub surface: SurfaceParams,
    /// Contact budget
    pub max_contacts: u32,
    /// Retro-reflectance seen by laser sensors
    pub laser_retro: f32,
    /// Requested category bits
    pub category_bits: Option<u32>,
    /// Requested collide bits
    pub collide_bits: Option<u32>,
    /// Bounding box derivation
    pub bounding_box_method: BoundingBoxMethod,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            name: None,
            pose: Pose::identity(),
            geometry: None,
            surface: SurfaceParams::default(),
            max_contacts: DEFAULT_MAX_CONTACTS,
            laser_retro: 0.0,
            category_bits: None,
            collide_bits: None,
            bounding_box_method: BoundingBoxMethod::default(),
        }
    }
}

impl Config for CollisionConfig {}

/// Generic collision interface used by physics-body components
pub trait Collision {
    /// Collision name
    fn name(&self) -> &str;

    /// Optional operations this backend honours
    fn capabilities(&self) -> BackendCapabilities;

    /// Local-frame bounding box, always with `min <= max`
    ///
    /// `ShapeUnset` when there is nothing to bound, `InvalidBoundingSphere`
    /// when the geometry reports a negative or non-finite sphere.
    fn try_bounding_box(&self) -> Result<Aabb, CollisionError>;

    /// Local-frame bounding box
    ///
    /// Failures are logged once and degrade to the zero box.
    fn bounding_box(&self) -> Aabb {
        self.try_bounding_box().unwrap_or_else(|err| {
            error!("{err}");
            Aabb::default()
        })
    }

    /// Pose of the collision in the world frame
    fn world_pose(&self) -> Pose;

    /// World-frame bounding box
    fn world_bounding_box(&self) -> Result<Aabb, CollisionError> {
        Ok(self.try_bounding_box()?.transformed(&self.world_pose()))
    }

    /// Filter in effect, accept-all when the backend does not filter
    fn filter(&self) -> CollisionFilter {
        CollisionFilter::default()
    }

    /// Request new category bits
    fn set_category_bits(&mut self, bits: u32) -> FilterOutcome;

    /// Request new collide bits
    fn set_collide_bits(&mut self, bits: u32) -> FilterOutcome;

    /// Called by the owning link after its world pose changed
    fn on_pose_change(&mut self);
}

/// Collision backed by one contact geometry handle
#[derive(Debug)]
pub struct GeometryCollision {
    name: String,
    link: Weak<LinkFrame>,
    shape: Option<Box<dyn ContactGeometry>>,
    surface: SurfaceParams,
    relative_pose: Pose,
    bounding_box_method: BoundingBoxMethod,
    max_contacts: u32,
    laser_retro: f32,
}

impl GeometryCollision {
    const CAPABILITIES: BackendCapabilities = BackendCapabilities::SUPPORT_POINTS;

    /// Creates an adapter for the given link with no geometry attached
    pub fn new(link: Weak<LinkFrame>) -> Self {
        Self {
            name: DEFAULT_COLLISION_NAME.to_string(),
            link,
            shape: None,
            surface: SurfaceParams::default(),
            relative_pose: Pose::identity(),
            bounding_box_method: BoundingBoxMethod::default(),
            max_contacts: DEFAULT_MAX_CONTACTS,
            laser_retro: 0.0,
        }
    }

    /// Creates an adapter that belongs to no link
    pub fn detached() -> Self {
        Self::new(Weak::new())
    }

    /// Apply a collision description
    ///
    /// Geometry is not built here; the owning link attaches it with
    /// [`GeometryCollision::set_shape`]. Requested filter bits are forwarded to
    /// the setters; this backend answers [`FilterOutcome::Ignored`] and the
    /// outcome is only logged.
    pub fn load(&mut self, config: &CollisionConfig) -> Result<(), CollisionError> {
        config.surface.validate()?;

        if let Some(name) = &config.name {
            self.name.clone_from(name);
        }
        self.relative_pose = config.pose;
        self.surface = config.surface;
        self.max_contacts = config.max_contacts;
        self.laser_retro = config.laser_retro;
        self.bounding_box_method = config.bounding_box_method;

        if let Some(bits) = config.category_bits {
            if !self.set_category_bits(bits).is_applied() {
                debug!("Collision `{}`: configured category bits not honoured", self.name);
            }
        }
        if let Some(bits) = config.collide_bits {
            if !self.set_collide_bits(bits).is_applied() {
                debug!("Collision `{}`: configured collide bits not honoured", self.name);
            }
        }

        debug!(
            "Loaded collision `{}` (method {:?}, max_contacts {})",
            self.name, self.bounding_box_method, self.max_contacts
        );
        Ok(())
    }

    /// Take ownership of a geometry handle
    ///
    /// A previously attached geometry is released.
    pub fn set_shape(&mut self, shape: Box<dyn ContactGeometry>) {
        let kind = shape.kind();
        if let Some(previous) = self.shape.replace(shape) {
            warn!(
                "Collision `{}`: replacing {} geometry with {kind}, previous handle released",
                self.name,
                previous.kind()
            );
        } else {
            debug!("Collision `{}`: attached {kind} geometry", self.name);
        }
    }

    /// Borrow the geometry handle, `None` if unset
    pub fn shape(&self) -> Option<&dyn ContactGeometry> {
        self.shape.as_deref()
    }

    /// Whether a geometry handle is attached
    pub const fn has_shape(&self) -> bool {
        self.shape.is_some()
    }

    /// Rename the collision
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Owning link, if it still exists
    pub fn link(&self) -> Option<Rc<LinkFrame>> {
        self.link.upgrade()
    }

    pub(crate) fn bind_link(&mut self, link: Weak<LinkFrame>) {
        self.link = link;
    }

    /// Surface properties
    pub const fn surface(&self) -> &SurfaceParams {
        &self.surface
    }

    /// Mutable surface properties
    pub fn surface_mut(&mut self) -> &mut SurfaceParams {
        &mut self.surface
    }

    /// Pose relative to the owning link
    pub const fn relative_pose(&self) -> &Pose {
        &self.relative_pose
    }

    /// Move the collision relative to its link
    pub fn set_relative_pose(&mut self, pose: Pose) {
        self.relative_pose = pose;
    }

    /// Contact budget
    pub const fn max_contacts(&self) -> u32 {
        self.max_contacts
    }

    /// Set the contact budget
    pub fn set_max_contacts(&mut self, max_contacts: u32) {
        self.max_contacts = max_contacts;
    }

    /// Retro-reflectance seen by laser sensors
    pub const fn laser_retro(&self) -> f32 {
        self.laser_retro
    }

    /// Set the retro-reflectance
    pub fn set_laser_retro(&mut self, laser_retro: f32) {
        self.laser_retro = laser_retro;
    }

    /// Bounding box derivation in use
    pub const fn bounding_box_method(&self) -> BoundingBoxMethod {
        self.bounding_box_method
    }

    /// Choose how bounding boxes are derived
    pub fn set_bounding_box_method(&mut self, method: BoundingBoxMethod) {
        self.bounding_box_method = method;
    }

    fn sphere_box(&self, shape: &dyn ContactGeometry) -> Result<Aabb, CollisionError> {
        let sphere = shape.bounding_sphere();
        let center_finite = sphere.center.iter().all(|c| c.is_finite());
        if !center_finite || !sphere.radius.is_finite() || sphere.radius < 0.0 {
            return Err(CollisionError::InvalidBoundingSphere {
                name: self.name.clone(),
                kind: shape.kind(),
                radius: sphere.radius,
            });
        }
        Ok(Aabb::from_bounding_sphere(&sphere))
    }

    fn support_box(shape: &dyn ContactGeometry) -> Option<Aabb> {
        let mut min = Vec3::zeros();
        let mut max = Vec3::zeros();
        for axis in 0..3 {
            let direction = Vec3::ith_axis(axis);
            let opposite = UnitVec3::new_unchecked(-direction.into_inner());
            let positive = shape.support_point(&direction)?;
            let negative = shape.support_point(&opposite)?;
            max[axis] = positive[axis];
            min[axis] = negative[axis];
        }
        // Non-finite support points are treated as no support mapping
        if !min.iter().chain(max.iter()).all(|c| c.is_finite()) {
            return None;
        }
        Some(Aabb::new(min.inf(&max), min.sup(&max)))
    }
}

impl Collision for GeometryCollision {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> BackendCapabilities {
        Self::CAPABILITIES
    }

    fn try_bounding_box(&self) -> Result<Aabb, CollisionError> {
        let shape = self.shape().ok_or_else(|| CollisionError::ShapeUnset {
            name: self.name.clone(),
        })?;

        match self.bounding_box_method {
            BoundingBoxMethod::Sphere => self.sphere_box(shape),
            BoundingBoxMethod::SupportPoints => match Self::support_box(shape) {
                Some(aabb) => Ok(aabb),
                None => {
                    warn!(
                        "Collision `{}`: {} support mapping unusable, using bounding sphere",
                        self.name,
                        shape.kind()
                    );
                    self.sphere_box(shape)
                }
            },
        }
    }

    fn world_pose(&self) -> Pose {
        self.link().map_or(self.relative_pose, |frame| {
            frame.world_pose().compose(&self.relative_pose)
        })
    }

    fn set_category_bits(&mut self, bits: u32) -> FilterOutcome {
        debug!("Collision `{}`: category bits {bits:#x} ignored", self.name);
        FilterOutcome::Ignored
    }

    fn set_collide_bits(&mut self, bits: u32) -> FilterOutcome {
        debug!("Collision `{}`: collide bits {bits:#x} ignored", self.name);
        FilterOutcome::Ignored
    }

    fn on_pose_change(&mut self) {
        trace!("Collision `{}`: pose change not propagated", self.name);
    }
}
