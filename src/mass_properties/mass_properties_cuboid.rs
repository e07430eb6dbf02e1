use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector};

impl MassProperties {
    /// Computes the mass properties of a cuboid centered at the origin.
    pub fn from_cuboid(half_extents: Vector<Real>) -> Self {
        let mass = half_extents.x * half_extents.y * half_extents.z * 8.0;
        let ix = half_extents.x * half_extents.x / 3.0;
        let iy = half_extents.y * half_extents.y / 3.0;
        let iz = half_extents.z * half_extents.z / 3.0;
        let inertia = Vector::new(iy + iz, ix + iz, ix + iy) * mass;

        Self {
            mass,
            local_com: Point::origin(),
            inertia: Matrix::from_diagonal(&inertia),
        }
    }
}
