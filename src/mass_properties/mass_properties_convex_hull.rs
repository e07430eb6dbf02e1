use crate::mass_properties::MassProperties;
use crate::shape::{ConvexHull, ShapeError};
use crate::utils;

impl MassProperties {
    /// Computes the mass properties of a convex hull, shift included.
    ///
    /// Every triangle is first oriented away from the centroid of the hull vertices so
    /// that the tetrahedra it forms with the origin carry a consistent sign. This is a
    /// heuristic: it is exact for convex input only.
    pub fn from_convex_hull(hull: &ConvexHull) -> Result<Self, ShapeError> {
        let points = hull.points();
        let within = utils::center(points).ok_or(ShapeError::EmptyTriangles)?;

        let triangles = hull.triangles().iter().map(|idx| {
            let [a, b, c] = idx.map(|i| points[i as usize]);
            let normal = (b - a).cross(&(c - a));
            if (a - within).dot(&normal) < 0.0 {
                [c, b, a]
            } else {
                [a, b, c]
            }
        });

        Ok(Self::from_triangles(triangles)?.translated(&hull.shift()))
    }
}
