mod convex_hull;
mod point_cloud;
mod primitives;
mod rigid_shape;
mod transformed;
