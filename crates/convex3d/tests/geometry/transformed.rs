use approx::assert_relative_eq;
use convex3d::math::{Isometry, Matrix, Point, Real, Vector};
use convex3d::shape::{Shape, SharedShape, SupportMap, TransformKind, Transformed};
use convex3d::utils::MatrixOps;
use oorandom::Rand32;

fn random_direction(rng: &mut Rand32) -> Vector<Real> {
    Vector::new(
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    )
}

#[test]
fn translated_unit_sphere() {
    let shape = Transformed::new(
        SharedShape::ball(1.0),
        Matrix::identity(),
        Vector::new(5.0, 0.0, 0.0),
    );
    assert_eq!(shape.kind(), TransformKind::Identity);
    assert_relative_eq!(
        shape.local_support_point(&Vector::x()),
        Point::new(6.0, 0.0, 0.0)
    );
}

#[test]
fn identity_transform_is_transparent() {
    let inner = SharedShape::cone(1.5, 0.5);
    let shape = Transformed::new(inner.clone(), Matrix::identity(), Vector::zeros());
    let mut rng = Rand32::new(7);

    for _ in 0..50 {
        let dir = random_direction(&mut rng);
        assert_eq!(
            shape.local_support_point(&dir),
            inner.local_support_point(&dir)
        );
    }

    let pos = Isometry::new(Vector::new(1.0, 2.0, 3.0), Vector::new(0.3, 0.0, -0.2));
    let expected = inner.compute_aabb(&pos);
    let aabb = shape.compute_aabb(&pos);
    assert_relative_eq!(aabb.mins, expected.mins, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, expected.maxs, epsilon = 1.0e-5);

    let expected = inner.mass_properties().unwrap();
    let mprops = shape.mass_properties().unwrap();
    assert_relative_eq!(mprops, expected, epsilon = 1.0e-5);
}

#[test]
fn translated_sphere_inertia() {
    let t = Vector::new(1.0, -2.0, 0.5);
    let sphere = SharedShape::ball(0.8);
    let shape = Transformed::new(sphere.clone(), Matrix::identity(), t);

    let base = sphere.mass_properties().unwrap();
    let mprops = shape.mass_properties().unwrap();
    let expected = base.inertia + Matrix::parallel_axis_term(&t) * base.mass;

    assert_relative_eq!(mprops.mass, base.mass);
    assert_relative_eq!(mprops.local_com, Point::from(t), epsilon = 1.0e-6);
    assert_relative_eq!(mprops.inertia, expected, epsilon = 1.0e-5);
}

#[test]
fn ellipsoid_aabb() {
    let scale = Matrix::from_diagonal(&Vector::new(2.0, 1.0, 3.0));
    let shape = Transformed::new(SharedShape::ball(1.0), scale, Vector::zeros());
    assert_eq!(shape.kind(), TransformKind::General);

    let aabb = shape.compute_local_aabb();
    assert_relative_eq!(aabb.half_extents(), Vector::new(2.0, 1.0, 3.0), epsilon = 1.0e-6);
    assert_relative_eq!(aabb.center(), Point::origin(), epsilon = 1.0e-6);
}

#[test]
fn rotated_box_support_is_extreme() {
    let pos = Isometry::rotation(Vector::new(0.4, -0.7, 1.1));
    let shape = Transformed::from_isometry(SharedShape::cuboid(1.0, 0.5, 0.25), &pos);
    assert_eq!(shape.kind(), TransformKind::Rotation);

    let cuboid = shape.inner().as_cuboid().unwrap();
    let corners = cuboid.vertices().map(|pt| pos * pt);
    let mut rng = Rand32::new(3);

    for _ in 0..50 {
        let dir = random_direction(&mut rng);
        let support = shape.local_support_point(&dir);
        let best = corners
            .iter()
            .map(|pt| pt.coords.dot(&dir))
            .fold(Real::MIN, Real::max);
        assert_relative_eq!(support.coords.dot(&dir), best, epsilon = 1.0e-5);
    }
}
