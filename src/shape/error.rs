use crate::shape::BodyHandle;

/// Errors that can occur while building a shape or deriving its properties.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A hull or mesh was built from an empty list of triangles.
    #[error("at least one triangle is required")]
    EmptyTriangles,
    /// A point cloud was built from an empty list of points.
    #[error("at least one point is required")]
    EmptyPointCloud,
    /// The hull has more distinct vertices than its vertex indices can address.
    #[error("the hull has {count} distinct vertices but at most {max} are supported")]
    TooManyVertices {
        /// Number of distinct vertices found in the input.
        count: usize,
        /// Maximum number of vertices supported.
        max: usize,
    },
    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references the vertex {index} which does not exist")]
    IndexOutOfBounds {
        /// Index of the faulty triangle.
        triangle: usize,
        /// The out-of-bounds vertex index.
        index: u32,
    },
    /// A mesh triangle was built with an id past the end of the mesh.
    #[error("triangle id {id} is out of bounds for a mesh with {len} triangles")]
    TriangleIdOutOfBounds {
        /// The requested triangle id.
        id: u32,
        /// The number of triangles of the mesh.
        len: usize,
    },
    /// The mass integration accumulated a zero (or non-finite) volume.
    #[error("the shape encloses no volume")]
    ZeroVolume,
    /// The shape is already attached to a body.
    #[error("the shape is already attached to the body {0:?}")]
    AlreadyAttached(BodyHandle),
}
