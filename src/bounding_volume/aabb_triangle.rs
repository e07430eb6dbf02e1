use crate::bounding_volume::details::{local_point_cloud_aabb, point_cloud_aabb};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Real};
use crate::shape::{MeshTriangle, Triangle, TRIANGLE_AABB_MARGIN};

impl Triangle {
    /// Computes the world-space Aabb of this triangle, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        point_cloud_aabb(pos, &self.vertices())
    }

    /// Computes the local-space Aabb of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        local_point_cloud_aabb(&self.vertices())
    }
}

impl MeshTriangle {
    /// The world-space Aabb of this mesh triangle, enlarged by [`TRIANGLE_AABB_MARGIN`].
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.triangle().aabb(pos).loosened(TRIANGLE_AABB_MARGIN)
    }

    /// The local-space Aabb of this mesh triangle, enlarged by [`TRIANGLE_AABB_MARGIN`].
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.triangle().local_aabb().loosened(TRIANGLE_AABB_MARGIN)
    }
}
