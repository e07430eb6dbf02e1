use crate::bounding_volume::aabb_cylinder::disk_half_extents;
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Cone;

impl Cone {
    /// Computes the world-space Aabb of this cone, transformed by `pos`.
    ///
    /// The box is the union of the apex and the extent of the rotated base disk.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let axis = pos.rotation * Vector::y();
        let apex = pos * self.apex();
        let base_center = pos * self.base_center();
        let disk = disk_half_extents(&axis, self.radius);

        let mut aabb = Aabb::new(base_center - disk, base_center + disk);
        aabb.take_point(apex);
        aabb
    }

    /// Computes the local-space Aabb of this cone.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(
            Point::new(-self.radius, self.base_center().y, -self.radius),
            Point::new(self.radius, self.apex().y, self.radius),
        )
    }
}
