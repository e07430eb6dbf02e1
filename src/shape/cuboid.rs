//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils::WSign;

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be non-negative.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        assert!(
            half_extents.iter().all(|e| *e >= 0.0),
            "The half-extents of a cuboid must not be negative."
        );
        Cuboid { half_extents }
    }

    /// Creates a new box from its full size along each axis.
    #[inline]
    pub fn from_size(size: Vector<Real>) -> Cuboid {
        Self::new(size * 0.5)
    }

    /// The eight corners of this cuboid.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let he = self.half_extents;
        [
            Point::new(-he.x, -he.y, -he.z),
            Point::new(he.x, -he.y, -he.z),
            Point::new(he.x, he.y, -he.z),
            Point::new(-he.x, he.y, -he.z),
            Point::new(-he.x, -he.y, he.z),
            Point::new(he.x, -he.y, he.z),
            Point::new(he.x, he.y, he.z),
            Point::new(-he.x, he.y, he.z),
        ]
    }

    /// The twelve outward-facing triangles of the boundary of this cuboid, indexing
    /// [`Cuboid::vertices`].
    pub fn faces() -> [[u32; 3]; 12] {
        [
            [4, 5, 6],
            [4, 6, 7],
            [0, 2, 1],
            [0, 3, 2],
            [1, 2, 6],
            [1, 6, 5],
            [0, 7, 3],
            [0, 4, 7],
            [3, 7, 6],
            [3, 6, 2],
            [0, 1, 5],
            [0, 5, 4],
        ]
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}
