use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// Computes the world-space Aabb of this capsule, transformed by `pos`.
    ///
    /// The segment endpoints sit at `±half_height` along the rotated local `y` axis and
    /// the round caps add `radius` on every axis.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let axis = pos.rotation * Vector::y();
        let half_extents = (axis * self.half_height).abs() + Vector::repeat(self.radius);

        Aabb::from_half_extents(Point::from(pos.translation.vector), half_extents)
    }

    /// Computes the local-space Aabb of this capsule.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Vector::new(
            self.radius,
            self.half_height + self.radius,
            self.radius,
        );
        Aabb::from_half_extents(Point::origin(), half_extents)
    }
}
