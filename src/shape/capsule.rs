use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A capsule shape defined as a round segment aligned with the local `y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Capsule {
    /// Half the length of the capsule's inner segment.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis, with the given segment
    /// half-length and radius.
    pub fn new(half_height: Real, radius: Real) -> Self {
        assert!(
            half_height >= 0.0 && radius >= 0.0,
            "The dimensions of a capsule must not be negative."
        );
        Capsule {
            half_height,
            radius,
        }
    }

    /// The total height of this capsule, caps included.
    pub fn height(&self) -> Real {
        (self.half_height + self.radius) * 2.0
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or_else(Vector::y_axis);
        self.local_support_point_toward(&dir)
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        let mut res = **dir * self.radius;
        res.y += self.half_height.copysign(dir.y);
        Point::from(res)
    }
}
