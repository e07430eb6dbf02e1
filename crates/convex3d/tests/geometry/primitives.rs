use approx::assert_relative_eq;
use convex3d::bounding_volume::details::support_map_aabb;
use convex3d::math::{Isometry, Matrix, Point, Real, Vector};
use convex3d::shape::{Ball, Capsule, Cone, Cuboid, Cylinder, Shape, SupportMap};
use oorandom::Rand32;

fn random_direction(rng: &mut Rand32) -> Vector<Real> {
    loop {
        let v = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );
        if v.norm_squared() > 1.0e-3 {
            return v;
        }
    }
}

fn primitives() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Cuboid::new(Vector::new(0.5, 1.5, 2.0))),
        Box::new(Ball::new(1.3)),
        Box::new(Capsule::new(1.0, 0.4)),
        Box::new(Cylinder::new(0.7, 1.1)),
        Box::new(Cone::new(2.0, 0.8)),
    ]
}

#[test]
fn box_of_size_two() {
    let cuboid = Cuboid::from_size(Vector::new(2.0, 2.0, 2.0));
    let mprops = cuboid.mass_properties().unwrap();
    assert_relative_eq!(mprops.mass, 8.0);
    assert_relative_eq!(
        mprops.inertia,
        Matrix::from_diagonal_element(8.0 * 8.0 / 12.0),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(mprops.local_com, Point::origin());

    let aabb = cuboid.compute_aabb(&Isometry::identity());
    assert_eq!(aabb.mins, Point::new(-1.0, -1.0, -1.0));
    assert_eq!(aabb.maxs, Point::new(1.0, 1.0, 1.0));
}

#[test]
fn unit_sphere() {
    let ball = Ball::new(1.0);
    assert_relative_eq!(
        ball.local_support_point(&Vector::new(1.0, 0.0, 0.0)),
        Point::new(1.0, 0.0, 0.0)
    );
    assert_relative_eq!(
        ball.mass_properties().unwrap().mass,
        4.18879,
        epsilon = 1.0e-4
    );
}

#[test]
fn support_points_are_extreme() {
    let mut rng = Rand32::new(42);

    for shape in primitives() {
        // Support points along other directions are points of the shape.
        let samples: Vec<_> = (0..200)
            .map(|_| shape.local_support_point(&random_direction(&mut rng)))
            .collect();

        for _ in 0..100 {
            let dir = random_direction(&mut rng);
            let best = shape.local_support_point(&dir).coords.dot(&dir);
            for pt in &samples {
                assert!(
                    pt.coords.dot(&dir) <= best + 1.0e-5,
                    "{:?} is not extreme along {:?}",
                    shape,
                    dir
                );
            }
        }
    }
}

#[test]
fn centrally_symmetric_support() {
    let mut rng = Rand32::new(7);
    let symmetric: Vec<Box<dyn Shape>> = vec![
        Box::new(Ball::new(0.5)),
        Box::new(Cuboid::new(Vector::new(1.0, 2.0, 3.0))),
        Box::new(Capsule::new(2.0, 0.5)),
        Box::new(Cylinder::new(1.5, 0.25)),
    ];

    for shape in symmetric {
        for _ in 0..50 {
            let dir = random_direction(&mut rng);
            let pos = shape.local_support_point(&dir);
            let neg = shape.local_support_point(&-dir);
            assert_relative_eq!(pos, -neg, epsilon = 1.0e-6);
        }
    }
}

#[test]
fn masses_are_positive() {
    for shape in primitives() {
        assert!(shape.mass_properties().unwrap().mass > 0.0);
    }
}

#[test]
fn doubling_a_box_multiplies_its_mass_by_eight() {
    let small = Cuboid::new(Vector::new(0.3, 1.2, 0.7));
    let large = Cuboid::new(small.half_extents * 2.0);
    let ratio = large.mass_properties().unwrap().mass / small.mass_properties().unwrap().mass;
    assert_relative_eq!(ratio, 8.0, epsilon = 1.0e-5);
}

#[test]
fn closed_form_aabbs_match_the_generic_one() {
    let mut rng = Rand32::new(1234);

    for shape in primitives() {
        for _ in 0..20 {
            let pos = Isometry::new(
                random_direction(&mut rng) * 10.0,
                random_direction(&mut rng) * 3.0,
            );
            let closed = shape.compute_aabb(&pos);
            let generic = support_map_aabb(&pos, &*shape);
            assert_relative_eq!(closed.mins, generic.mins, epsilon = 1.0e-4);
            assert_relative_eq!(closed.maxs, generic.maxs, epsilon = 1.0e-4);
        }
    }
}

#[test]
fn closed_form_masses_match_the_generic_integration() {
    for shape in primitives() {
        let closed = shape.mass_properties().unwrap();
        let generic = convex3d::mass_properties::MassProperties::from_support_map(&*shape, 5)
            .unwrap();
        assert_relative_eq!(closed.mass, generic.mass, max_relative = 0.05);
        assert_relative_eq!(closed.local_com, generic.local_com, epsilon = 0.05);
    }
}
