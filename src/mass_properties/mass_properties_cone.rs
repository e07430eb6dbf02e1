use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector};
use na::RealField;

impl MassProperties {
    /// Computes the mass properties of a cone aligned with the `y` axis.
    ///
    /// The origin is the center of mass: the base sits at `-height / 4` and the apex
    /// at `3 * height / 4`.
    pub fn from_cone(height: Real, radius: Real) -> Self {
        let r2 = radius * radius;
        let mass = Real::pi() * r2 * height / 3.0;
        let off_principal = mass * (r2 * 3.0 / 20.0 + height * height * 3.0 / 80.0);
        let principal = mass * r2 * 3.0 / 10.0;

        Self {
            mass,
            local_com: Point::origin(),
            inertia: Matrix::from_diagonal(&Vector::new(off_principal, principal, off_principal)),
        }
    }
}
