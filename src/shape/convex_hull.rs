use std::sync::Arc;

use crate::mass_properties::details::sample_hull;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap, TriMesh};
use crate::transformation;
use crate::utils::hashmap::{HashMap, PointKey};

/// Maximum number of distinct vertices of a [`ConvexHull`]. Vertices are identified by
/// `u16` indices.
pub const HULL_MAX_VERTICES: usize = u16::MAX as usize + 1;

/// The immutable geometry of a [`ConvexHull`]: deduplicated vertices, triangles, and the
/// edge-adjacency of every vertex.
///
/// Each vertex owns the half-open range `neighbor_ranges[i]` of the flat `neighbors`
/// array.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HullGeometry {
    points: Vec<Point<Real>>,
    neighbor_ranges: Vec<[u32; 2]>,
    neighbors: Vec<u16>,
    triangles: Vec<[u16; 3]>,
}

impl HullGeometry {
    fn new(triangles: &[[Point<Real>; 3]]) -> Result<Self, ShapeError> {
        if triangles.is_empty() {
            return Err(ShapeError::EmptyTriangles);
        }

        let mut lookup = HashMap::default();
        let mut points = Vec::new();
        let mut indexed = Vec::with_capacity(triangles.len());

        for tri in triangles {
            indexed.push(tri.map(|pt| {
                *lookup.entry(PointKey::new(&pt)).or_insert_with(|| {
                    points.push(pt);
                    points.len() - 1
                })
            }));
        }

        if points.len() > HULL_MAX_VERTICES {
            return Err(ShapeError::TooManyVertices {
                count: points.len(),
                max: HULL_MAX_VERTICES,
            });
        }

        let mut adjacency: Vec<Vec<u16>> = vec![Vec::new(); points.len()];
        let mut hull_triangles = Vec::with_capacity(indexed.len());
        let mut seen = HashMap::default();
        let mut degenerate = 0;
        let mut duplicates = 0;

        for [a, b, c] in indexed {
            // Vertices that collapsed onto the same point share their index, so the
            // duplicated edge is not recorded.
            for (i, j) in [(a, b), (b, c), (c, a)] {
                if i != j {
                    if !adjacency[i].contains(&(j as u16)) {
                        adjacency[i].push(j as u16);
                    }
                    if !adjacency[j].contains(&(i as u16)) {
                        adjacency[j].push(i as u16);
                    }
                }
            }

            if a == b || b == c || c == a {
                degenerate += 1;
                continue;
            }

            let mut key = [a, b, c];
            key.sort_unstable();
            if seen.insert(key, ()).is_some() {
                duplicates += 1;
            } else {
                hull_triangles.push([a as u16, b as u16, c as u16]);
            }
        }

        if degenerate > 0 {
            log::warn!(
                "convex hull: {} degenerate triangles collapsed during vertex deduplication",
                degenerate
            );
        }

        if duplicates > 0 {
            log::warn!(
                "convex hull: {} triangles dropped as duplicates of another triangle",
                duplicates
            );
        }

        let mut neighbor_ranges = Vec::with_capacity(points.len());
        let mut neighbors = Vec::new();
        for adj in adjacency {
            let start = neighbors.len() as u32;
            neighbors.extend_from_slice(&adj);
            neighbor_ranges.push([start, neighbors.len() as u32]);
        }

        log::debug!(
            "convex hull: {} vertices, {} triangles, {} neighbor entries",
            points.len(),
            hull_triangles.len(),
            neighbors.len()
        );

        Ok(Self {
            points,
            neighbor_ranges,
            neighbors,
            triangles: hull_triangles,
        })
    }

    /// The deduplicated vertices of the hull.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The non-degenerate triangles of the hull, indexing [`HullGeometry::points`].
    pub fn triangles(&self) -> &[[u16; 3]] {
        &self.triangles
    }

    /// The vertices sharing an edge with the vertex `i`.
    pub fn neighbors(&self, i: usize) -> &[u16] {
        let [start, end] = self.neighbor_ranges[i];
        &self.neighbors[start as usize..end as usize]
    }

    /// Index of the vertex maximizing its dot product with `dir`, found by hill climbing
    /// along the edges from the vertex `0`.
    ///
    /// The result is only guaranteed to be the global maximum if the vertices are in
    /// convex position.
    pub fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        let mut best = 0;
        let mut best_score = self.points[0].coords.dot(dir);
        let mut jumps = 0u32;

        'climb: loop {
            for &n in self.neighbors(best) {
                let score = self.points[n as usize].coords.dot(dir);
                if score > best_score {
                    best = n as usize;
                    best_score = score;
                    jumps += 1;
                    continue 'climb;
                }
            }

            break;
        }

        log::trace!("hull support reached vertex {} after {} jumps", best, jumps);
        best
    }
}

/// A convex polyhedron given by its boundary triangles.
///
/// Support queries hill-climb the vertex adjacency graph. The geometry is shared by all
/// the clones of a hull: only the `shift` applied to every support point is specific to
/// each instance.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use convex3d::math::{Point, Vector};
/// use convex3d::shape::{ConvexHull, SupportMap};
///
/// let a = Point::origin();
/// let b = Point::new(1.0, 0.0, 0.0);
/// let c = Point::new(0.0, 1.0, 0.0);
/// let d = Point::new(0.0, 0.0, 1.0);
/// let hull = ConvexHull::new(&[[a, c, b], [a, b, d], [a, d, c], [b, c, d]]).unwrap();
///
/// assert_eq!(hull.points().len(), 4);
/// assert_eq!(hull.local_support_point(&Vector::new(1.0, 2.0, 0.5)), c);
/// # }
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexHull {
    geometry: Arc<HullGeometry>,
    shift: Vector<Real>,
}

impl ConvexHull {
    /// Builds a hull from a list of triangles.
    ///
    /// Vertices are deduplicated by exact position and triangles sharing the same three
    /// vertices are kept once. The input is assumed to be the boundary of a convex
    /// polyhedron: this is not checked. Use [`ConvexHull::from_points`] to build a hull
    /// from arbitrary points.
    pub fn new(triangles: &[[Point<Real>; 3]]) -> Result<Self, ShapeError> {
        Ok(Self {
            geometry: Arc::new(HullGeometry::new(triangles)?),
            shift: Vector::zeros(),
        })
    }

    /// Builds a hull from the triangles of a mesh.
    pub fn from_trimesh(mesh: &TriMesh) -> Result<Self, ShapeError> {
        let triangles: Vec<_> = mesh.triangles().map(|t| t.vertices()).collect();
        Self::new(&triangles)
    }

    /// Computes the convex hull of a set of points.
    ///
    /// Points strictly inside the hull, or on its boundary without being one of its
    /// corners, are discarded. Fails with [`ShapeError::ZeroVolume`] if the points are
    /// coplanar.
    pub fn from_points(points: &[Point<Real>]) -> Result<Self, ShapeError> {
        let triangles: Vec<_> = transformation::convex_hull(points)?
            .into_iter()
            .map(|tri| tri.map(|i| points[i as usize]))
            .collect();
        Self::new(&triangles)
    }

    /// Builds a polyhedral approximation of any support-mapped shape.
    ///
    /// The shape is sampled by [`sample_hull`] with the given number of `subdivisions`,
    /// then the convex hull of the samples is computed.
    pub fn from_support_map<S>(shape: &S, subdivisions: u32) -> Result<Self, ShapeError>
    where
        S: SupportMap + ?Sized,
    {
        Self::from_points(&sample_hull(shape, subdivisions))
    }

    /// The shared geometry of this hull.
    pub fn geometry(&self) -> &Arc<HullGeometry> {
        &self.geometry
    }

    /// The deduplicated vertices of this hull, without the shift.
    pub fn points(&self) -> &[Point<Real>] {
        self.geometry.points()
    }

    /// The triangles of this hull.
    pub fn triangles(&self) -> &[[u16; 3]] {
        self.geometry.triangles()
    }

    /// The vertices sharing an edge with the vertex `i`.
    pub fn neighbors(&self, i: usize) -> &[u16] {
        self.geometry.neighbors(i)
    }

    /// The offset added to every support point.
    pub fn shift(&self) -> Vector<Real> {
        self.shift
    }

    /// Sets the offset added to every support point.
    pub fn set_shift(&mut self, shift: Vector<Real>) {
        self.shift = shift;
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.points()[self.geometry.support_point_id(dir)] + self.shift
    }
}
