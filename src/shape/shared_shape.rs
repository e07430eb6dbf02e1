use core::fmt;
use core::ops::Deref;
use std::sync::Arc;

use crate::math::{Real, Vector};
use crate::shape::{Ball, Capsule, Cone, Cuboid, Cylinder, Shape};

/// The shape of a collider, shared behind an `Arc`.
///
/// Cloning a `SharedShape` never copies the underlying shape.
#[derive(Clone)]
pub struct SharedShape(pub Arc<dyn Shape>);

impl Deref for SharedShape {
    type Target = dyn Shape;
    fn deref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl AsRef<dyn Shape> for SharedShape {
    fn as_ref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedShape ( Arc<{:?}> )", self.0.shape_type())
    }
}

impl SharedShape {
    /// Wraps the given shape as a shared shape.
    pub fn new(shape: impl Shape) -> Self {
        Self(Arc::new(shape))
    }

    /// If this shape is shared, then the content of `self` is cloned into a unique instance,
    /// and a mutable reference to that instance is returned.
    pub fn make_mut(&mut self) -> &mut dyn Shape {
        if Arc::get_mut(&mut self.0).is_none() {
            self.0 = self.0.clone_dyn().into();
        }

        match Arc::get_mut(&mut self.0) {
            Some(shape) => shape,
            None => unreachable!("the shape was just made unique"),
        }
    }

    /// Initialize a ball shape defined by its radius.
    pub fn ball(radius: Real) -> Self {
        SharedShape(Arc::new(Ball::new(radius)))
    }

    /// Initialize a cuboid shape defined by its half-extents.
    pub fn cuboid(hx: Real, hy: Real, hz: Real) -> Self {
        SharedShape(Arc::new(Cuboid::new(Vector::new(hx, hy, hz))))
    }

    /// Initialize a capsule shape aligned with the `y` axis.
    pub fn capsule(half_height: Real, radius: Real) -> Self {
        SharedShape(Arc::new(Capsule::new(half_height, radius)))
    }

    /// Initialize a cylindrical shape defined by its half-height
    /// (along along the y axis) and its radius.
    pub fn cylinder(half_height: Real, radius: Real) -> Self {
        SharedShape(Arc::new(Cylinder::new(half_height, radius)))
    }

    /// Initialize a cone shape defined by its height (along the y axis) and the radius
    /// of its base.
    pub fn cone(height: Real, radius: Real) -> Self {
        SharedShape(Arc::new(Cone::new(height, radius)))
    }
}
