use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real};
use na::RealField;

impl MassProperties {
    /// Computes the mass properties of a ball centered at the origin.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use convex3d::mass_properties::MassProperties;
    ///
    /// let ball = MassProperties::from_ball(1.0);
    /// assert!((ball.mass - 4.18879).abs() < 1.0e-4);
    /// # }
    /// ```
    pub fn from_ball(radius: Real) -> Self {
        let mass = ball_volume(radius);
        let inertia = mass * radius * radius * 2.0 / 5.0;

        Self {
            mass,
            local_com: Point::origin(),
            inertia: Matrix::from_diagonal_element(inertia),
        }
    }
}

/// The volume of a ball.
#[inline]
pub(crate) fn ball_volume(radius: Real) -> Real {
    Real::pi() * radius * radius * radius * 4.0 / 3.0
}
