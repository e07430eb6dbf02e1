use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::SupportMap;

/// Computes the Aabb of a support mapped shape transformed by `m`.
///
/// Each of the six signed world axes is pulled back into the shape's local frame,
/// queried, and the resulting support point projected back onto that axis.
pub fn support_map_aabb<G>(m: &Isometry<Real>, i: &G) -> Aabb
where
    G: SupportMap + ?Sized,
{
    let mut min = na::zero::<Vector<Real>>();
    let mut max = na::zero::<Vector<Real>>();
    let mut basis = na::zero::<Vector<Real>>();

    for d in 0..DIM {
        basis[d] = 1.0;
        max[d] = i.support_point(m, &basis)[d];

        basis[d] = -1.0;
        min[d] = i.support_point(m, &basis)[d];

        basis[d] = 0.0;
    }

    Aabb::new(Point::from(min), Point::from(max))
}

/// Computes the Aabb of a support mapped shape in its local frame.
pub fn local_support_map_aabb<G>(i: &G) -> Aabb
where
    G: SupportMap + ?Sized,
{
    let mut min = na::zero::<Vector<Real>>();
    let mut max = na::zero::<Vector<Real>>();
    let mut basis = na::zero::<Vector<Real>>();

    for d in 0..DIM {
        basis[d] = 1.0;
        max[d] = i.local_support_point(&basis)[d];

        basis[d] = -1.0;
        min[d] = i.local_support_point(&basis)[d];

        basis[d] = 0.0;
    }

    Aabb::new(Point::from(min), Point::from(max))
}

/// Computes the Aabb of a set of points transformed by `m`.
///
/// An empty set yields [`Aabb::new_invalid`].
pub fn point_cloud_aabb<'a, I>(m: &Isometry<Real>, pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    Aabb::from_points(pts.into_iter().map(|pt| m * pt))
}

/// Computes the Aabb of a set of points.
///
/// An empty set yields [`Aabb::new_invalid`].
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    Aabb::from_points(pts.into_iter().copied())
}
