use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns `None` if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use convex3d::utils::center;
/// use convex3d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points).unwrap();
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    let (first, rest) = pts.split_first()?;
    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));
    let mut res = *first * denom;

    for pt in rest {
        res += pt.coords * denom;
    }

    Some(res)
}
