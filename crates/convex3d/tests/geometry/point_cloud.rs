use std::sync::Arc;

use approx::assert_relative_eq;
use convex3d::math::{Point, Real, Vector};
use convex3d::shape::{Cuboid, PointCloud, Shape, ShapeError, SupportMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn cube_corners() -> Vec<Point<Real>> {
    Cuboid::new(Vector::repeat(0.5)).vertices().to_vec()
}

#[test]
fn empty_cloud_is_rejected() {
    assert_eq!(PointCloud::new(vec![]).unwrap_err(), ShapeError::EmptyPointCloud);
}

#[test]
fn cube_corners_behave_like_the_cube() {
    let cloud = PointCloud::new(cube_corners()).unwrap();
    let mprops = cloud.mass_properties().unwrap();
    assert_relative_eq!(mprops.mass, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(mprops.local_com, Point::origin(), epsilon = 1.0e-3);

    let aabb = cloud.compute_local_aabb();
    assert_eq!(aabb.mins, Point::new(-0.5, -0.5, -0.5));
    assert_eq!(aabb.maxs, Point::new(0.5, 0.5, 0.5));
}

#[test]
fn interior_points_never_support() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut points = cube_corners();
    points.extend((0..50).map(|_| {
        Point::new(
            rng.gen_range(-0.4..0.4),
            rng.gen_range(-0.4..0.4),
            rng.gen_range(-0.4..0.4),
        )
    }));
    let cloud = PointCloud::new(points).unwrap();

    for _ in 0..100 {
        let dir = Vector::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let support = cloud.local_support_point(&dir);
        assert_eq!(support.coords.abs(), Vector::repeat(0.5));
    }
}

#[test]
fn clones_share_their_points() {
    let cloud = PointCloud::new(cube_corners()).unwrap();
    let mut moved = cloud.clone();
    moved.set_shift(Vector::new(-2.0, 0.0, 0.0));

    assert!(Arc::ptr_eq(cloud.geometry(), moved.geometry()));
    assert_eq!(cloud.shift(), Vector::zeros());
    assert_eq!(moved.local_support_point(&Vector::x()).x, -1.5);
    assert_eq!(cloud.local_support_point(&Vector::x()).x, 0.5);
}

#[test]
fn sampling_a_cuboid_keeps_its_corners() {
    let cloud = PointCloud::from_support_map(&Cuboid::new(Vector::repeat(1.0)), 2).unwrap();
    assert_eq!(cloud.points().len(), 8);
    assert!(cloud.points().iter().all(|pt| pt.coords.abs() == Vector::repeat(1.0)));
}
