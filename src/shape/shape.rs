use core::fmt::Debug;

use crate::bounding_volume::details::{local_support_map_aabb, support_map_aabb};
use crate::bounding_volume::Aabb;
use crate::mass_properties::{MassProperties, DEFAULT_MASS_SUBDIVISIONS};
use crate::math::{Isometry, Matrix, Real};
use crate::shape::{
    Ball, Capsule, Cone, ConvexHull, Cuboid, Cylinder, MeshTriangle, PointCloud, ShapeError,
    SupportMap, Transformed,
};
use downcast_rs::{impl_downcast, DowncastSync};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A ball shape.
    Ball,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A cylindrical shape.
    Cylinder,
    /// A conical shape.
    Cone,
    /// A triangle of a shared mesh.
    MeshTriangle,
    /// A convex hull with vertex adjacency.
    ConvexHull,
    /// An unstructured cloud of points.
    PointCloud,
    /// A shape mapped by an affine transformation.
    Transformed,
    /// A custom user-defined shape.
    Custom,
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A ball shape.
    Ball(&'a Ball),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// A capsule shape.
    Capsule(&'a Capsule),
    /// A cylindrical shape.
    Cylinder(&'a Cylinder),
    /// A conical shape.
    Cone(&'a Cone),
    /// A triangle of a shared mesh.
    MeshTriangle(&'a MeshTriangle),
    /// A convex hull with vertex adjacency.
    ConvexHull(&'a ConvexHull),
    /// An unstructured cloud of points.
    PointCloud(&'a PointCloud),
    /// A shape mapped by an affine transformation.
    Transformed(&'a Transformed),
    /// A custom user-defined shape.
    Custom,
}

/// Trait implemented by shapes usable as the geometry of a rigid body.
///
/// Only the support map is mandatory: bounding boxes and mass properties default to
/// generic algorithms built on top of it. Shapes with closed forms override them.
pub trait Shape: SupportMap + DowncastSync + Debug {
    /// Computes the Aabb of this shape.
    fn compute_local_aabb(&self) -> Aabb {
        local_support_map_aabb(self)
    }

    /// Computes the Aabb of this shape with the given position.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        support_map_aabb(position, self)
    }

    /// Compute the mass-properties of this shape with a unit density.
    ///
    /// By default, the boundary is approximated with [`DEFAULT_MASS_SUBDIVISIONS`] levels
    /// of subdivision and integrated.
    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        MassProperties::from_support_map(self, DEFAULT_MASS_SUBDIVISIONS)
    }

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType {
        ShapeType::Custom
    }

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Custom
    }

    /// Clones this shape into a boxed trait-object.
    fn clone_dyn(&self) -> Box<dyn Shape>;
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }
    /// Converts this abstract shape to the given mutable shape, if it is one.
    pub fn as_shape_mut<T: Shape>(&mut self) -> Option<&mut T> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }
    /// Converts this abstract shape to a mutable ball, if it is one.
    pub fn as_ball_mut(&mut self) -> Option<&mut Ball> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }
    /// Converts this abstract shape to a mutable cuboid, if it is one.
    pub fn as_cuboid_mut(&mut self) -> Option<&mut Cuboid> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cylinder, if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cone, if it is one.
    pub fn as_cone(&self) -> Option<&Cone> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a mesh triangle, if it is one.
    pub fn as_mesh_triangle(&self) -> Option<&MeshTriangle> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a convex hull, if it is one.
    pub fn as_convex_hull(&self) -> Option<&ConvexHull> {
        self.downcast_ref()
    }
    /// Converts this abstract shape to a mutable convex hull, if it is one.
    pub fn as_convex_hull_mut(&mut self) -> Option<&mut ConvexHull> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a point cloud, if it is one.
    pub fn as_point_cloud(&self) -> Option<&PointCloud> {
        self.downcast_ref()
    }
    /// Converts this abstract shape to a mutable point cloud, if it is one.
    pub fn as_point_cloud_mut(&mut self) -> Option<&mut PointCloud> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a transformed shape, if it is one.
    pub fn as_transformed(&self) -> Option<&Transformed> {
        self.downcast_ref()
    }
    /// Converts this abstract shape to a mutable transformed shape, if it is one.
    pub fn as_transformed_mut(&mut self) -> Option<&mut Transformed> {
        self.downcast_mut()
    }
}

impl Shape for Ball {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(MassProperties::from_ball(self.radius))
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Ball
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Ball(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

impl Shape for Cuboid {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(MassProperties::from_cuboid(self.half_extents))
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

impl Shape for Capsule {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(MassProperties::from_capsule(self.half_height, self.radius))
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Capsule(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

impl Shape for Cylinder {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(MassProperties::from_cylinder(self.half_height, self.radius))
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cylinder(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

impl Shape for Cone {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(MassProperties::from_cone(self.height, self.radius))
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cone
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cone(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

impl Shape for MeshTriangle {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    /// A triangle has no volume: its mass is the sentinel `1` and its inertia the identity.
    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(MassProperties {
            mass: 1.0,
            local_com: self.triangle().center(),
            inertia: Matrix::identity(),
        })
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::MeshTriangle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::MeshTriangle(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

impl Shape for ConvexHull {
    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        MassProperties::from_convex_hull(self)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexHull
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::ConvexHull(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

// The generic mass integration is the only one available for point clouds.
impl Shape for PointCloud {
    fn shape_type(&self) -> ShapeType {
        ShapeType::PointCloud
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::PointCloud(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

impl Shape for Transformed {
    fn compute_local_aabb(&self) -> Aabb {
        self.aabb(&Isometry::identity())
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        let inner = self.inner().mass_properties()?;
        Ok(inner.transformed(self.linear(), self.translation()))
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Transformed
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Transformed(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod test {
    use super::{Shape, ShapeType, TypedShape};
    use crate::math::{Point, Real, Vector};
    use crate::shape::{Ball, SharedShape, SupportMap};

    /// A shape only known through its support map.
    #[derive(Clone, Debug)]
    struct Octahedron(Real);

    impl SupportMap for Octahedron {
        fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
            let i = dir.iamax();
            let mut pt = Point::origin();
            pt[i] = self.0.copysign(dir[i]);
            pt
        }
    }

    impl Shape for Octahedron {
        fn clone_dyn(&self) -> Box<dyn Shape> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn custom_shape_uses_generic_paths() {
        let shape: Box<dyn Shape> = Box::new(Octahedron(1.0));
        assert_eq!(shape.shape_type(), ShapeType::Custom);
        assert!(matches!(shape.as_typed_shape(), TypedShape::Custom));

        let aabb = shape.compute_local_aabb();
        assert_eq!(aabb.mins, Point::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 1.0, 1.0));

        // The volume of a unit octahedron is 4/3.
        let mp = shape.mass_properties().unwrap();
        assert_relative_eq!(mp.mass, 4.0 / 3.0, epsilon = 1.0e-4);
    }

    #[test]
    fn downcasts() {
        let mut shared = SharedShape::ball(1.0);
        let other = shared.clone();
        assert!(shared.as_cuboid().is_none());
        shared.make_mut().as_ball_mut().unwrap().radius = 2.0;
        assert_eq!(shared.as_ball(), Some(&Ball::new(2.0)));
        assert_eq!(other.as_ball(), Some(&Ball::new(1.0)));
    }
}
