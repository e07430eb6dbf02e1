use core::cmp::Ordering;
use core::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Matrix, Point, Real, Vector};
use crate::shape::{Shape, ShapeError};

static NEXT_SHAPE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identifier of a [`RigidShape`], in creation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ShapeId(u64);

impl ShapeId {
    fn next() -> Self {
        ShapeId(NEXT_SHAPE_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// The raw value of this identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Non-owning reference to the rigid body a shape is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub u32);

/// A shape together with the derived data a rigid body needs from it.
///
/// The mass properties and the world-space Aabb are cached. They are refreshed together
/// by [`RigidShape::update_shape`], which must be called after the shape is modified
/// through [`RigidShape::shape_mut`]. Moving the shape with [`RigidShape::set_pose`] only
/// refreshes the Aabb.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use convex3d::math::Vector;
/// use convex3d::shape::{Cuboid, RigidShape};
///
/// let mut rigid = RigidShape::new(Cuboid::new(Vector::repeat(1.0))).unwrap();
/// assert_eq!(rigid.mass(), 8.0);
///
/// rigid.shape_mut().half_extents = Vector::repeat(2.0);
/// assert!(rigid.is_dirty());
/// rigid.update_shape().unwrap();
/// assert_eq!(rigid.mass(), 64.0);
/// # }
/// ```
#[derive(Debug)]
pub struct RigidShape<S: Shape + ?Sized = dyn Shape> {
    id: ShapeId,
    pose: Isometry<Real>,
    mass_properties: MassProperties,
    world_aabb: Aabb,
    owner: Option<BodyHandle>,
    dirty: bool,
    shape: Box<S>,
}

impl<S: Shape> RigidShape<S> {
    /// Wraps `shape` at the identity pose and computes its cached data.
    pub fn new(shape: S) -> Result<Self, ShapeError> {
        Self::with_pose(shape, Isometry::identity())
    }

    /// Wraps `shape` at the given pose and computes its cached data.
    pub fn with_pose(shape: S, pose: Isometry<Real>) -> Result<Self, ShapeError> {
        Self::from_box(Box::new(shape), pose)
    }

    /// Erases the concrete type of the wrapped shape.
    pub fn into_dyn(self) -> RigidShape {
        RigidShape {
            id: self.id,
            pose: self.pose,
            mass_properties: self.mass_properties,
            world_aabb: self.world_aabb,
            owner: self.owner,
            dirty: self.dirty,
            shape: self.shape,
        }
    }
}

impl<S: Shape + ?Sized> RigidShape<S> {
    /// Wraps an already boxed shape at the given pose and computes its cached data.
    pub fn from_box(shape: Box<S>, pose: Isometry<Real>) -> Result<Self, ShapeError> {
        let mass_properties = shape.mass_properties()?;
        let world_aabb = shape.compute_aabb(&pose);

        Ok(Self {
            id: ShapeId::next(),
            pose,
            mass_properties,
            world_aabb,
            owner: None,
            dirty: false,
            shape,
        })
    }

    /// The unique identifier of this shape.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// The wrapped shape.
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// A mutable reference to the wrapped shape.
    ///
    /// The cached data is flagged as stale until the next call to
    /// [`RigidShape::update_shape`].
    pub fn shape_mut(&mut self) -> &mut S {
        self.dirty = true;
        &mut self.shape
    }

    /// Is the cached data stale?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recomputes the mass properties and the world-space Aabb of the shape.
    ///
    /// On failure nothing is modified and the cache stays flagged as stale.
    pub fn update_shape(&mut self) -> Result<(), ShapeError> {
        let mass_properties = match self.shape.mass_properties() {
            Ok(mprops) => mprops,
            Err(err) => {
                log::warn!("failed to update the shape {:?}: {}", self.id, err);
                return Err(err);
            }
        };

        self.mass_properties = mass_properties;
        self.world_aabb = self.shape.compute_aabb(&self.pose);
        self.dirty = false;
        Ok(())
    }

    /// The pose of the shape in world-space.
    pub fn pose(&self) -> &Isometry<Real> {
        &self.pose
    }

    /// Moves the shape and recomputes its world-space Aabb.
    pub fn set_pose(&mut self, pose: Isometry<Real>) {
        self.pose = pose;
        self.world_aabb = self.shape.compute_aabb(&pose);
    }

    /// The cached mass properties, for a unit density.
    pub fn mass_properties(&self) -> &MassProperties {
        &self.mass_properties
    }

    /// The cached mass, for a unit density.
    pub fn mass(&self) -> Real {
        self.mass_properties.mass
    }

    /// The cached inertia tensor about the local origin, for a unit density.
    pub fn inertia(&self) -> &Matrix<Real> {
        &self.mass_properties.inertia
    }

    /// The cached center of mass in local-space.
    pub fn geometric_center(&self) -> Point<Real> {
        self.mass_properties.local_com
    }

    /// The cached world-space Aabb.
    pub fn world_aabb(&self) -> &Aabb {
        &self.world_aabb
    }

    /// Inflates the cached world-space Aabb toward `motion`.
    ///
    /// The inflation lasts until the Aabb is recomputed.
    pub fn swept_expand(&mut self, motion: &Vector<Real>) {
        self.world_aabb = self.world_aabb.swept(motion);
    }

    /// The body this shape is attached to, if any.
    pub fn owner(&self) -> Option<BodyHandle> {
        self.owner
    }

    /// Attaches this shape to `body`.
    ///
    /// Fails if the shape is already attached, to `body` or to another one.
    pub fn attach(&mut self, body: BodyHandle) -> Result<(), ShapeError> {
        match self.owner {
            Some(owner) => Err(ShapeError::AlreadyAttached(owner)),
            None => {
                self.owner = Some(body);
                Ok(())
            }
        }
    }

    /// Detaches this shape from its body, returning it. Does nothing if the shape is not
    /// attached.
    pub fn detach(&mut self) -> Option<BodyHandle> {
        self.owner.take()
    }
}

impl<S: Shape + ?Sized> PartialEq for RigidShape<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: Shape + ?Sized> Eq for RigidShape<S> {}

impl<S: Shape + ?Sized> PartialOrd for RigidShape<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Shape + ?Sized> Ord for RigidShape<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
