//! Shapes supported by convex3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_hull::{ConvexHull, HullGeometry, HULL_MAX_VERTICES};
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::error::ShapeError;
pub use self::point_cloud::PointCloud;
pub use self::rigid_shape::{BodyHandle, RigidShape, ShapeId};
pub use self::shape::{Shape, ShapeType, TypedShape};
pub use self::shared_shape::SharedShape;
pub use self::support_map::SupportMap;
pub use self::transformed::{TransformKind, Transformed, ROTATION_EPSILON};
pub use self::triangle::Triangle;
pub use self::trimesh::{MeshTriangle, TriMesh};

use crate::math::Real;

/// Margin added around the bounding box of a [`MeshTriangle`].
pub const TRIANGLE_AABB_MARGIN: Real = 0.01;

mod ball;
mod capsule;
mod cone;
mod convex_hull;
mod cuboid;
mod cylinder;
mod error;
mod point_cloud;
mod rigid_shape;
mod shape;
mod shared_shape;
mod support_map;
mod transformed;
mod triangle;
mod trimesh;
