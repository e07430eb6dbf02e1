use super::mass_properties_ball::ball_volume;
use super::mass_properties_cylinder::cylinder_mass_and_inertia;
use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector};

impl MassProperties {
    /// Computes the mass properties of a capsule aligned with the `y` axis and centered
    /// at the origin.
    ///
    /// The cylindrical body and the two hemispherical caps are accounted for as
    /// independent contributions. Each cap is moved to its actual position along the
    /// axis with the parallel-axis theorem.
    pub fn from_capsule(half_height: Real, radius: Real) -> Self {
        let (cyl_mass, cyl_inertia) = cylinder_mass_and_inertia(half_height, radius);

        let caps_mass = ball_volume(radius);
        let r2 = radius * radius;
        let caps_principal = caps_mass * r2 * 2.0 / 5.0;
        let caps_off_principal = caps_mass
            * (r2 * 2.0 / 5.0 + half_height * half_height + half_height * radius * 3.0 / 4.0);
        let caps_inertia = Vector::new(caps_off_principal, caps_principal, caps_off_principal);

        Self {
            mass: cyl_mass + caps_mass,
            local_com: Point::origin(),
            inertia: Matrix::from_diagonal(&(cyl_inertia + caps_inertia)),
        }
    }
}
