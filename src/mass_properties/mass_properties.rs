use approx::{AbsDiffEq, RelativeEq};

use crate::math::{Matrix, Point, PrincipalAngularInertia, Real, Rotation, Vector};
use crate::utils::MatrixOps;
use num::Zero;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

const EPSILON: Real = f32::EPSILON as Real;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The mass, center of mass and inertia tensor of a shape with unit density.
///
/// The inertia tensor is expressed about the origin of the shape's local frame, not
/// about its center of mass. Use [`MassProperties::central_inertia`] to get the latter.
pub struct MassProperties {
    /// The mass of the shape. With a unit density this is also its volume.
    pub mass: Real,
    /// The center of mass of the shape expressed in its local-space.
    pub local_com: Point<Real>,
    /// The inertia tensor about the local-space origin.
    pub inertia: Matrix<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from a center of mass, a mass, and an inertia
    /// tensor expressed about the center of mass.
    pub fn with_central_inertia(
        local_com: Point<Real>,
        mass: Real,
        central_inertia: Matrix<Real>,
    ) -> Self {
        Self {
            mass,
            local_com,
            inertia: central_inertia + Matrix::parallel_axis_term(&local_com.coords) * mass,
        }
    }

    /// The inertia tensor about the center of mass.
    pub fn central_inertia(&self) -> Matrix<Real> {
        self.inertia - Matrix::parallel_axis_term(&self.local_com.coords) * self.mass
    }

    /// The principal angular inertia and the rotation of the principal axes.
    ///
    /// The principal axes are the columns of the returned rotation. Negative eigenvalues
    /// caused by round-off are clamped to zero.
    pub fn principal_inertia(&self) -> (PrincipalAngularInertia<Real>, Rotation<Real>) {
        let eigen = self.central_inertia().symmetric_eigen();
        let frame = Rotation::from_matrix_eps(&eigen.eigenvectors, 1.0e-6, 10, na::one());
        // Drop negative eigenvalues.
        let principal = eigen.eigenvalues.map(|e| if e < EPSILON { 0.0 } else { e });
        (principal, frame)
    }

    /// The mass properties of the same shape after translating it by `translation`.
    #[must_use]
    pub fn translated(&self, translation: &Vector<Real>) -> Self {
        Self::with_central_inertia(
            self.local_com + translation,
            self.mass,
            self.central_inertia(),
        )
    }

    /// The mass properties of the same shape after mapping it by `linear` then
    /// translating it by `translation`.
    ///
    /// The mass is left untouched even if `linear` is not a rotation. The central inertia
    /// is conjugated by `linear` and moved to the new center of mass. When the center of
    /// mass is at the origin this is `M·I·Mᵗ + m·(|t|²·E − t⊗t)`.
    #[must_use]
    pub fn transformed(&self, linear: &Matrix<Real>, translation: &Vector<Real>) -> Self {
        let local_com = Point::from(linear * self.local_com.coords + translation);
        let central = linear * self.central_inertia() * linear.transpose();
        Self::with_central_inertia(local_com, self.mass, central)
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            mass: 0.0,
            local_com: Point::origin(),
            inertia: Matrix::zeros(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add<MassProperties> for MassProperties {
    type Output = Self;

    fn add(self, other: MassProperties) -> Self {
        let mass = self.mass + other.mass;
        let local_com = if mass.is_zero() {
            Point::origin()
        } else {
            Point::from(
                (self.local_com.coords * self.mass + other.local_com.coords * other.mass) / mass,
            )
        };

        Self {
            mass,
            local_com,
            // Both tensors are expressed about the same origin.
            inertia: self.inertia + other.inertia,
        }
    }
}

impl AddAssign<MassProperties> for MassProperties {
    fn add_assign(&mut self, rhs: MassProperties) {
        *self = *self + rhs
    }
}

impl Sum<MassProperties> for MassProperties {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(), |acc, mp| acc + mp)
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.mass.abs_diff_eq(&other.mass, epsilon)
            && self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.inertia.abs_diff_eq(&other.inertia, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self
                .local_com
                .relative_eq(&other.local_com, epsilon, max_relative)
            && self
                .inertia
                .relative_eq(&other.inertia, epsilon, max_relative)
    }
}

#[cfg(test)]
mod test {
    use super::MassProperties;
    use crate::math::{Matrix, Point, Real, Vector};
    use crate::utils::MatrixOps;
    use num::Zero;

    #[test]
    fn translation_round_trip() {
        let mp = MassProperties::from_cuboid(Vector::new(1.0, 2.0, 3.0));
        let t = Vector::new(0.5, -4.0, 2.0);
        let moved = mp.translated(&t);
        assert_relative_eq!(moved.local_com, Point::from(t));
        assert_relative_eq!(moved.central_inertia(), mp.central_inertia(), epsilon = 1.0e-2);
        assert_relative_eq!(moved.translated(&-t), mp, epsilon = 1.0e-2);
    }

    #[test]
    fn transformed_centered_shape() {
        let mp = MassProperties::from_ball(1.5);
        let t = Vector::new(1.0, 2.0, -2.0);
        let linear = Matrix::new(2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.5);
        let expected = linear * mp.inertia * linear.transpose()
            + Matrix::parallel_axis_term(&t) * mp.mass;

        let transformed = mp.transformed(&linear, &t);
        assert_eq!(transformed.mass, mp.mass);
        assert_relative_eq!(transformed.inertia, expected, epsilon = 1.0e-4);
    }

    #[test]
    fn sum_of_split_cuboid() {
        // Two unit cubes side by side make a 2x1x1 box centered at the origin.
        let half = MassProperties::from_cuboid(Vector::repeat(0.5));
        let left = half.translated(&Vector::new(-0.5, 0.0, 0.0));
        let right = half.translated(&Vector::new(0.5, 0.0, 0.0));
        let total: MassProperties = [left, right].iter().copied().sum();
        let expected = MassProperties::from_cuboid(Vector::new(1.0, 0.5, 0.5));
        assert_relative_eq!(total, expected, epsilon = 1.0e-5);
    }

    #[test]
    fn sum_of_nothing_has_no_nan() {
        let mp: MassProperties = [MassProperties::zero()].iter().copied().sum();
        assert!(!mp.local_com.coords.iter().any(|e: &Real| e.is_nan()));
    }

    #[test]
    fn principal_inertia_of_rotated_cuboid() {
        let mp = MassProperties::from_cuboid(Vector::new(3.0, 2.0, 1.0));
        let rot = na::Rotation3::from_scaled_axis(Vector::new(0.3, -0.2, 0.7));
        let rotated = mp.transformed(rot.matrix(), &Vector::zeros());

        let (mut principal, _) = rotated.principal_inertia();
        let (mut expected, _) = mp.principal_inertia();
        principal.as_mut_slice().sort_by(|a, b| a.total_cmp(b));
        expected.as_mut_slice().sort_by(|a, b| a.total_cmp(b));
        assert_relative_eq!(principal, expected, max_relative = 1.0e-4);
    }
}
