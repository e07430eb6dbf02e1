//! Transformation of point sets into meshes.

pub use self::convex_hull3::convex_hull;

mod convex_hull3;
