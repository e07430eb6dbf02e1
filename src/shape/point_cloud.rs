use std::sync::Arc;

use crate::mass_properties::details::sample_hull;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap};
use crate::utils;

/// An unstructured set of points, treated as the convex hull it spans.
///
/// The support query scans every point so this is meant for small clouds. Points are
/// shared between clones while the `shift` added to support points is per-instance.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointCloud {
    points: Arc<[Point<Real>]>,
    shift: Vector<Real>,
}

impl PointCloud {
    /// Creates a point cloud. Fails if `points` is empty.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        if points.is_empty() {
            return Err(ShapeError::EmptyPointCloud);
        }

        Ok(Self {
            points: points.into(),
            shift: Vector::zeros(),
        })
    }

    /// Samples the boundary of any support-mapped shape.
    ///
    /// See [`sample_hull`] for the meaning of `subdivisions`.
    pub fn from_support_map<S>(shape: &S, subdivisions: u32) -> Result<Self, ShapeError>
    where
        S: SupportMap + ?Sized,
    {
        Self::new(sample_hull(shape, subdivisions))
    }

    /// The points of this cloud, without the shift.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The point buffer shared by all the clones of this cloud.
    pub fn geometry(&self) -> &Arc<[Point<Real>]> {
        &self.points
    }

    /// The offset added to every support point.
    pub fn shift(&self) -> Vector<Real> {
        self.shift
    }

    /// Sets the offset added to every support point.
    pub fn set_shift(&mut self, shift: Vector<Real>) {
        self.shift = shift;
    }
}

impl SupportMap for PointCloud {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points) + self.shift
    }
}
