use std::sync::Arc;

use approx::assert_relative_eq;
use convex3d::math::{Point, Real, Vector};
use convex3d::shape::{Ball, Cone, ConvexHull, Cuboid, Cylinder, Shape, SupportMap, TriMesh};
use convex3d::utils::point_cloud_support_point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn unit_cube() -> ConvexHull {
    let cuboid = Cuboid::new(Vector::repeat(0.5));
    let vertices = cuboid.vertices();
    let triangles: Vec<_> = Cuboid::faces()
        .iter()
        .map(|idx| idx.map(|i| vertices[i as usize]))
        .collect();
    ConvexHull::new(&triangles).unwrap()
}

fn random_direction(rng: &mut StdRng) -> Vector<Real> {
    Vector::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}

#[test]
fn unit_cube_hull() {
    let hull = unit_cube();
    assert_eq!(hull.points().len(), 8);

    // Every corner is connected to its three cube edges.
    for (i, pt) in hull.points().iter().enumerate() {
        let edges = hull
            .neighbors(i)
            .iter()
            .filter(|n| {
                let delta = hull.points()[**n as usize] - pt;
                delta.iter().filter(|e| **e != 0.0).count() == 1
            })
            .count();
        assert_eq!(edges, 3);
    }

    assert_eq!(
        hull.local_support_point(&Vector::new(1.0, 1.0, 1.0)),
        Point::new(0.5, 0.5, 0.5)
    );

    let mprops = hull.mass_properties().unwrap();
    assert_relative_eq!(mprops.mass, 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(mprops.local_com, Point::origin(), epsilon = 1.0e-5);
    assert_relative_eq!(
        mprops.inertia,
        convex3d::math::Matrix::from_diagonal_element(1.0 / 6.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn hill_climbing_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0);
    let hulls = [
        unit_cube(),
        ConvexHull::from_support_map(&Ball::new(2.0), 3).unwrap(),
    ];

    for hull in &hulls {
        for _ in 0..500 {
            let dir = random_direction(&mut rng);
            let climbed = hull.local_support_point(&dir);
            let brute = point_cloud_support_point(&dir, hull.points());
            assert!(climbed.coords.dot(&dir) >= brute.coords.dot(&dir) - 1.0e-6);
        }
    }
}

#[test]
fn flat_faced_hulls_support_like_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    let shapes: [Box<dyn Shape>; 2] = [
        Box::new(Cylinder::new(0.5, 1.0)),
        Box::new(Cone::new(1.5, 0.8)),
    ];

    for shape in &shapes {
        for subdivisions in [3, 4] {
            let hull = ConvexHull::from_support_map(&**shape, subdivisions).unwrap();
            for _ in 0..2000 {
                let dir = random_direction(&mut rng);
                let climbed = hull.local_support_point(&dir).coords.dot(&dir);
                let brute = point_cloud_support_point(&dir, hull.points()).coords.dot(&dir);
                assert!(climbed >= brute - 1.0e-4, "{} < {}", climbed, brute);
            }
        }
    }
}

#[test]
fn flat_faced_hulls_stay_inside_the_shape() {
    let shapes: [Box<dyn Shape>; 2] = [
        Box::new(Cylinder::new(0.5, 1.0)),
        Box::new(Cone::new(1.5, 0.8)),
    ];

    for shape in &shapes {
        let exact = shape.mass_properties().unwrap();
        for subdivisions in [3, 4] {
            let hull = ConvexHull::from_support_map(&**shape, subdivisions).unwrap();
            let approx = hull.mass_properties().unwrap();

            // The hull is inscribed in the shape.
            assert!(approx.mass <= exact.mass * (1.0 + 1.0e-5));
            assert_relative_eq!(approx.mass, exact.mass, max_relative = 0.05);
            assert_relative_eq!(approx.local_com, exact.local_com, epsilon = 0.05);
        }
    }
}

#[test]
fn clones_share_their_geometry() {
    let hull = unit_cube();
    let mut moved = hull.clone();
    assert!(Arc::ptr_eq(hull.geometry(), moved.geometry()));

    moved.set_shift(Vector::new(0.0, 3.0, 0.0));
    assert!(Arc::ptr_eq(hull.geometry(), moved.geometry()));
    assert_eq!(hull.shift(), Vector::zeros());

    assert_eq!(
        moved.local_support_point(&Vector::y()).y,
        hull.local_support_point(&Vector::y()).y + 3.0
    );

    let a = hull.mass_properties().unwrap();
    let b = moved.mass_properties().unwrap();
    assert_relative_eq!(a.mass, b.mass, epsilon = 1.0e-6);
    assert_relative_eq!(b.local_com, Point::new(0.0, 3.0, 0.0), epsilon = 1.0e-5);
    assert!(b.inertia[(0, 0)] > a.inertia[(0, 0)]);

    let aabb_a = hull.compute_local_aabb();
    let aabb_b = moved.compute_local_aabb();
    assert_eq!(aabb_b.mins.y, aabb_a.mins.y + 3.0);
}

#[test]
fn hull_from_trimesh() {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let mesh = TriMesh::new(vertices, vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]).unwrap();
    let hull = ConvexHull::from_trimesh(&mesh).unwrap();

    assert_eq!(hull.points().len(), 4);
    for i in 0..4 {
        assert_eq!(hull.neighbors(i).len(), 3);
    }

    let mprops = hull.mass_properties().unwrap();
    assert_relative_eq!(mprops.mass, 1.0 / 6.0, epsilon = 1.0e-6);
    assert_relative_eq!(mprops.local_com, Point::new(0.25, 0.25, 0.25), epsilon = 1.0e-6);
}
