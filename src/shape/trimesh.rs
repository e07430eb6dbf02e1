use std::sync::Arc;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap, Triangle};

/// An indexed triangle mesh.
///
/// The vertex and index buffers are validated once at construction and never mutated
/// afterward, so the mesh can be shared between the [`MeshTriangle`] shapes that
/// reference it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// Fails if there is no triangle or if an index is out of bounds.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Result<Self, ShapeError> {
        if indices.is_empty() {
            return Err(ShapeError::EmptyTriangles);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(ShapeError::IndexOutOfBounds {
                    triangle,
                    index: *index,
                });
            }
        }

        Ok(TriMesh { vertices, indices })
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Gets the i-th mesh element.
    ///
    /// Panics if `i` is out of bounds.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }

    /// The local-space Aabb of all the vertices of this mesh.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

/// A single triangle of a shared [`TriMesh`], usable as a shape.
///
/// It has no volume: its mass is the sentinel `1` and its bounding box is enlarged by
/// [`TRIANGLE_AABB_MARGIN`](crate::shape::TRIANGLE_AABB_MARGIN).
#[derive(Clone, Debug)]
pub struct MeshTriangle {
    mesh: Arc<TriMesh>,
    id: u32,
}

impl MeshTriangle {
    /// References the triangle `id` of `mesh`.
    pub fn new(mesh: Arc<TriMesh>, id: u32) -> Result<Self, ShapeError> {
        if id as usize >= mesh.num_triangles() {
            return Err(ShapeError::TriangleIdOutOfBounds {
                id,
                len: mesh.num_triangles(),
            });
        }

        Ok(MeshTriangle { mesh, id })
    }

    /// The mesh this triangle belongs to.
    pub fn mesh(&self) -> &Arc<TriMesh> {
        &self.mesh
    }

    /// The index of this triangle in its mesh.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The current vertices of this triangle.
    pub fn triangle(&self) -> Triangle {
        self.mesh.triangle(self.id)
    }
}

impl SupportMap for MeshTriangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.triangle().local_support_point(dir)
    }
}
