use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector};
use na::RealField;

impl MassProperties {
    /// Computes the mass properties of a cylinder aligned with the `y` axis and
    /// centered at the origin.
    pub fn from_cylinder(half_height: Real, radius: Real) -> Self {
        let (mass, inertia) = cylinder_mass_and_inertia(half_height, radius);

        Self {
            mass,
            local_com: Point::origin(),
            inertia: Matrix::from_diagonal(&inertia),
        }
    }
}

/// Mass and diagonal inertia of a `y`-aligned cylinder, about its center.
pub(crate) fn cylinder_mass_and_inertia(half_height: Real, radius: Real) -> (Real, Vector<Real>) {
    let height = half_height * 2.0;
    let mass = Real::pi() * radius * radius * height;
    let off_principal = mass * (radius * radius * 3.0 + height * height) / 12.0;
    let principal = mass * radius * radius / 2.0;

    (mass, Vector::new(off_principal, principal, off_principal))
}
