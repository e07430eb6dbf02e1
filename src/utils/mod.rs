//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::isometry_ops::{IsometryOps, MatrixOps};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub(crate) use self::wops::WSign;

mod center;
pub mod hashmap;
mod isometry_ops;
mod point_cloud_support_point;
mod wops;
