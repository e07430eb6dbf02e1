//! Support mapping based Cone shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use num::Zero;

/// Cone shape with its principal axis aligned with the `y` axis.
///
/// The local origin is the center of mass: the base disk lies at `y = -height / 4`
/// and the apex at `y = 3 * height / 4`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cone {
    /// The distance from the base to the apex.
    pub height: Real,
    /// The base radius of the cone.
    pub radius: Real,
}

impl Cone {
    /// Creates a new cone.
    ///
    /// # Arguments:
    /// * `height` - the distance between the base disk and the apex, along `y`.
    /// * `radius` - the radius of the base disk.
    pub fn new(height: Real, radius: Real) -> Cone {
        assert!(
            height >= 0.0 && radius >= 0.0,
            "The dimensions of a cone must not be negative."
        );
        Cone { height, radius }
    }

    /// The apex of this cone.
    #[inline]
    pub fn apex(&self) -> Point<Real> {
        Point::new(0.0, self.height * 0.75, 0.0)
    }

    /// The center of the base disk of this cone.
    #[inline]
    pub fn base_center(&self) -> Point<Real> {
        Point::new(0.0, -self.height * 0.25, 0.0)
    }
}

impl SupportMap for Cone {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut radial = *dir;
        radial[1] = 0.0;

        let mut disk = self.base_center();
        if !radial.normalize_mut().is_zero() {
            disk.coords += radial * self.radius;
        }

        let apex = self.apex();
        if disk.coords.dot(dir) > apex.coords.dot(dir) {
            disk
        } else {
            apex
        }
    }
}
