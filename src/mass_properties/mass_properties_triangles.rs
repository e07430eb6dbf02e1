use super::details::make_hull;
use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{ShapeError, SupportMap};

/// Second moments of the canonical tetrahedron `(0, e1, e2, e3)`, scaled by its
/// determinant.
const CANONICAL_DIAGONAL: Real = 1.0 / 60.0;
const CANONICAL_OFF_DIAGONAL: Real = 1.0 / 120.0;

impl MassProperties {
    /// Integrates the mass properties of the volume enclosed by a closed triangle mesh.
    ///
    /// Each triangle forms a tetrahedron with the local origin whose signed volume,
    /// centroid, and second moments are accumulated. The triangles must be wound
    /// consistently. If they all point inward the result is flipped so the mass stays
    /// positive.
    ///
    /// Fails with [`ShapeError::ZeroVolume`] if the enclosed volume vanishes.
    pub fn from_triangles<I>(triangles: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = [Point<Real>; 3]>,
    {
        let canonical = Matrix::new(
            CANONICAL_DIAGONAL,
            CANONICAL_OFF_DIAGONAL,
            CANONICAL_OFF_DIAGONAL,
            CANONICAL_OFF_DIAGONAL,
            CANONICAL_DIAGONAL,
            CANONICAL_OFF_DIAGONAL,
            CANONICAL_OFF_DIAGONAL,
            CANONICAL_OFF_DIAGONAL,
            CANONICAL_DIAGONAL,
        );

        let mut volume: Real = 0.0;
        let mut unsigned_volume: Real = 0.0;
        let mut moment = Vector::zeros();
        let mut second_moment = Matrix::zeros();

        for [a, b, c] in triangles {
            let basis = Matrix::from_columns(&[a.coords, b.coords, c.coords]);
            let det = basis.determinant();
            let tetra_volume = det / 6.0;

            volume += tetra_volume;
            unsigned_volume += tetra_volume.abs();
            moment += (a.coords + b.coords + c.coords) * (tetra_volume / 4.0);
            second_moment += basis * canonical * basis.transpose() * det;
        }

        if !volume.is_finite() || volume.abs() <= unsigned_volume * DEFAULT_EPSILON {
            return Err(ShapeError::ZeroVolume);
        }

        let sign = volume.signum();
        let inertia = Matrix::from_diagonal_element(second_moment.trace()) - second_moment;

        Ok(Self {
            mass: volume * sign,
            local_com: Point::from(moment / volume),
            inertia: inertia * sign,
        })
    }

    /// Approximates the mass properties of any support-mapped shape.
    ///
    /// The boundary of the shape is triangulated by [`make_hull`] with the given number
    /// of subdivision levels, then integrated with [`MassProperties::from_triangles`].
    /// The accuracy improves with `subdivisions`.
    pub fn from_support_map<S>(shape: &S, subdivisions: u32) -> Result<Self, ShapeError>
    where
        S: SupportMap + ?Sized,
    {
        Self::from_triangles(make_hull(shape, subdivisions))
    }
}
