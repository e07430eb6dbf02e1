//! Mass properties (mass, center of mass, inertia) of shapes.
//!
//! Every value computed here assumes a unit density, so the mass of a shape equals its
//! volume. Closed forms are provided for the primitive shapes while any other support
//! mapped shape goes through a polyhedral approximation built by subdividing an
//! icosahedron against its support map.

pub use self::mass_properties::MassProperties;

/// Number of subdivision levels used by the generic mass integration.
pub const DEFAULT_MASS_SUBDIVISIONS: u32 = 4;
/// Triangles whose squared doubled area is below this value are not emitted by
/// [`details::make_hull`].
pub const DEGENERATE_TRIANGLE_EPSILON: Real = 1.0e-16;

use crate::math::Real;

mod make_hull;
mod mass_properties;
mod mass_properties_ball;
mod mass_properties_capsule;
mod mass_properties_convex_hull;
mod mass_properties_cone;
mod mass_properties_cuboid;
mod mass_properties_cylinder;
mod mass_properties_triangles;

/// Free functions exposing the building blocks of the generic mass integration.
pub mod details {
    pub use super::make_hull::{make_hull, sample_hull};
}
