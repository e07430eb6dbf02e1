use std::sync::Arc;

use approx::assert_relative_eq;
use convex3d::math::{Isometry, Matrix, Point, Real, Vector};
use convex3d::shape::{
    Ball, BodyHandle, MeshTriangle, RigidShape, SharedShape, ShapeError, TriMesh, Transformed,
    TRIANGLE_AABB_MARGIN,
};

#[test]
fn transformed_lifecycle() {
    let shape = Transformed::new(SharedShape::ball(1.0), Matrix::identity(), Vector::zeros());
    let mut rigid = RigidShape::new(shape).unwrap();
    let mass = rigid.mass();
    assert_relative_eq!(rigid.geometric_center(), Point::origin());

    rigid.shape_mut().set_translation(Vector::new(0.0, 0.0, 4.0));
    assert!(rigid.is_dirty());
    // The cache is untouched until the next update.
    assert_relative_eq!(rigid.geometric_center(), Point::origin());

    rigid.update_shape().unwrap();
    assert!(!rigid.is_dirty());
    assert_relative_eq!(rigid.mass(), mass);
    assert_relative_eq!(
        rigid.geometric_center(),
        Point::new(0.0, 0.0, 4.0),
        epsilon = 1.0e-6
    );
    assert_relative_eq!(rigid.world_aabb().mins.z, 3.0, epsilon = 1.0e-6);

    rigid.set_pose(Isometry::translation(1.0, 0.0, 0.0));
    assert_relative_eq!(
        rigid.world_aabb().center(),
        Point::new(1.0, 0.0, 4.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn shapes_sort_by_creation_order() {
    let mut shapes: Vec<RigidShape> = (0..5)
        .map(|i| {
            RigidShape::new(Ball::new(1.0 + i as Real))
                .unwrap()
                .into_dyn()
        })
        .collect();
    let ids: Vec<_> = shapes.iter().map(|s| s.id()).collect();

    shapes.reverse();
    shapes.sort();
    assert_eq!(shapes.iter().map(|s| s.id()).collect::<Vec<_>>(), ids);
    assert_eq!(shapes[0].shape().as_ball().map(|b| b.radius), Some(1.0));
}

#[test]
fn mesh_triangle_envelope() {
    let mesh = Arc::new(
        TriMesh::new(
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(2.0, 0.0, 0.0),
                Point::new(0.0, 2.0, 0.0),
                Point::new(2.0, 2.0, 0.0),
            ],
            vec![[0, 1, 2], [1, 3, 2]],
        )
        .unwrap(),
    );

    assert_eq!(
        MeshTriangle::new(mesh.clone(), 2).unwrap_err(),
        ShapeError::TriangleIdOutOfBounds { id: 2, len: 2 }
    );

    let triangle = MeshTriangle::new(mesh, 1).unwrap();
    let mut rigid = RigidShape::new(triangle).unwrap();
    assert_eq!(rigid.mass(), 1.0);
    assert_eq!(*rigid.inertia(), Matrix::identity());

    let aabb = rigid.world_aabb();
    assert_relative_eq!(
        aabb.mins,
        Point::new(0.0, 0.0, 0.0) - Vector::repeat(TRIANGLE_AABB_MARGIN)
    );
    assert_relative_eq!(
        aabb.maxs,
        Point::new(2.0, 2.0, 0.0) + Vector::repeat(TRIANGLE_AABB_MARGIN)
    );

    assert_eq!(rigid.attach(BodyHandle(0)), Ok(()));
    assert_eq!(
        rigid.attach(BodyHandle(1)),
        Err(ShapeError::AlreadyAttached(BodyHandle(0)))
    );
}
