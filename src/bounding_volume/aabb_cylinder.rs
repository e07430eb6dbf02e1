use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Cylinder;
use num::Zero;

/// Half-extents of a disk of the given radius whose normal is the unit vector `axis`.
#[inline]
pub(crate) fn disk_half_extents(axis: &Vector<Real>, radius: Real) -> Vector<Real> {
    axis.map(|a| radius * (1.0 - a * a).max(Real::zero()).sqrt())
}

impl Cylinder {
    /// Computes the world-space Aabb of this cylinder, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let axis = pos.rotation * Vector::y();
        let half_extents =
            (axis * self.half_height).abs() + disk_half_extents(&axis, self.radius);

        Aabb::from_half_extents(Point::from(pos.translation.vector), half_extents)
    }

    /// Computes the local-space Aabb of this cylinder.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Vector::new(self.radius, self.half_height, self.radius);
        Aabb::from_half_extents(Point::origin(), half_extents)
    }
}
