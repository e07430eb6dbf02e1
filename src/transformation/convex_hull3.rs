use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::ShapeError;
use crate::utils::hashmap::HashMap;
use crate::utils::{self, point_cloud_support_point_id};

/// Distance below which a point is considered to lie on a facet plane, once the input
/// has been centered and scaled to fit the unit ball.
const PLANE_TOLERANCE: Real = DEFAULT_EPSILON * 100.0;

#[derive(Debug)]
struct TriangleFacet {
    valid: bool,
    pts: [u32; 3],
    normal: Vector<Real>,
    offset: Real,
    visible_points: Vec<u32>,
}

impl TriangleFacet {
    fn new(pts: [u32; 3], points: &[Point<Real>]) -> Self {
        let [a, b, c] = pts.map(|i| points[i as usize]);
        // A degenerate facet gets a zero normal: nothing is ever above it.
        let normal = (b - a)
            .cross(&(c - a))
            .try_normalize(0.0)
            .unwrap_or_else(Vector::zeros);

        TriangleFacet {
            valid: true,
            pts,
            normal,
            offset: normal.dot(&a.coords),
            visible_points: Vec::new(),
        }
    }

    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    fn edges(&self) -> [(u32, u32); 3] {
        let [a, b, c] = self.pts;
        [(a, b), (b, c), (c, a)]
    }
}

/// Centers `points` on their centroid and scales them to fit the unit ball.
///
/// Returns `None` if all the points coincide.
fn normalize(points: &[Point<Real>]) -> Option<Vec<Point<Real>>> {
    let center = utils::center(points)?;
    let radius = points
        .iter()
        .map(|pt| (pt - center).norm())
        .fold(0.0, Real::max);

    if radius <= DEFAULT_EPSILON {
        return None;
    }

    Some(
        points
            .iter()
            .map(|pt| Point::from((pt - center) / radius))
            .collect(),
    )
}

/// Picks four affinely independent points and returns them wound so the facets
/// `[a, b, c]`, `[a, d, b]`, `[b, d, c]` and `[c, d, a]` point outward.
fn initial_simplex(points: &[Point<Real>]) -> Option<[u32; 4]> {
    let farthest = |score: &dyn Fn(&Point<Real>) -> Real| {
        points
            .iter()
            .enumerate()
            .map(|(i, pt)| (i, score(pt)))
            .fold((0, Real::MIN), |best, curr| if curr.1 > best.1 { curr } else { best })
    };

    let a = point_cloud_support_point_id(&Vector::x(), points);
    let pa = points[a];
    let (b, dist_ab) = farthest(&|pt| (pt - pa).norm());
    if dist_ab <= PLANE_TOLERANCE {
        return None;
    }

    let ab = (points[b] - pa) / dist_ab;
    let (c, dist_line) = farthest(&|pt| (pt - pa).cross(&ab).norm());
    if dist_line <= PLANE_TOLERANCE {
        return None;
    }

    let normal = ab.cross(&(points[c] - pa)).normalize();
    let (d, dist_plane) = farthest(&|pt| normal.dot(&(pt - pa)).abs());
    if dist_plane <= PLANE_TOLERANCE {
        return None;
    }

    let [a, b, c, d] = [a, b, c, d].map(|i| i as u32);
    if normal.dot(&(points[d as usize] - pa)) > 0.0 {
        Some([a, c, b, d])
    } else {
        Some([a, b, c, d])
    }
}

/// Computes the convex hull of a set of 3D points with the quickhull algorithm.
///
/// Returns outward-wound triangles indexing `points`. Points lying on the boundary
/// of the hull without being one of its corners are left out.
///
/// Fails with [`ShapeError::EmptyPointCloud`] on an empty input and with
/// [`ShapeError::ZeroVolume`] if all the points are coplanar.
pub fn convex_hull(points: &[Point<Real>]) -> Result<Vec<[u32; 3]>, ShapeError> {
    if points.is_empty() {
        return Err(ShapeError::EmptyPointCloud);
    }

    let normalized = normalize(points).ok_or(ShapeError::ZeroVolume)?;
    let [a, b, c, d] = initial_simplex(&normalized).ok_or(ShapeError::ZeroVolume)?;

    let mut facets: Vec<TriangleFacet> = [[a, b, c], [a, d, b], [b, d, c], [c, d, a]]
        .into_iter()
        .map(|pts| TriangleFacet::new(pts, &normalized))
        .collect();

    let mut edges = HashMap::default();
    for (id, facet) in facets.iter().enumerate() {
        for edge in facet.edges() {
            let _ = edges.insert(edge, id);
        }
    }

    for pid in 0..normalized.len() as u32 {
        let pt = &normalized[pid as usize];
        if let Some(facet) = facets
            .iter_mut()
            .find(|f| f.distance_to_point(pt) > PLANE_TOLERANCE)
        {
            facet.visible_points.push(pid);
        }
    }

    let mut visible = Vec::new();
    let mut horizon = Vec::new();
    let mut i = 0;

    // New facets are appended, so a single forward pass reaches every facet that
    // still has points above it.
    while i != facets.len() {
        if !facets[i].valid || facets[i].visible_points.is_empty() {
            i += 1;
            continue;
        }

        let apex = {
            let facet = &facets[i];
            facet
                .visible_points
                .iter()
                .copied()
                .fold((u32::MAX, Real::MIN), |best, pid| {
                    let dist = facet.distance_to_point(&normalized[pid as usize]);
                    if dist > best.1 {
                        (pid, dist)
                    } else {
                        best
                    }
                })
                .0
        };
        let apex_pt = normalized[apex as usize];

        // Flood the facets seen from the apex, recording the silhouette edges.
        visible.clear();
        horizon.clear();
        visible.push(i);
        facets[i].valid = false;

        let mut k = 0;
        while k != visible.len() {
            let current = visible[k];
            k += 1;

            for (p, q) in facets[current].edges() {
                let Some(&adj) = edges.get(&(q, p)) else {
                    continue;
                };

                if !facets[adj].valid {
                    continue;
                }

                if facets[adj].distance_to_point(&apex_pt) > PLANE_TOLERANCE {
                    facets[adj].valid = false;
                    visible.push(adj);
                } else {
                    horizon.push((p, q));
                }
            }
        }

        let mut orphans = Vec::new();
        for &id in &visible {
            for edge in facets[id].edges() {
                let _ = edges.remove(&edge);
            }
            orphans.append(&mut facets[id].visible_points);
        }

        let first_new = facets.len();
        for &(p, q) in &horizon {
            let facet = TriangleFacet::new([p, q, apex], &normalized);
            let id = facets.len();
            for edge in facet.edges() {
                let _ = edges.insert(edge, id);
            }
            facets.push(facet);
        }

        for pid in orphans {
            if pid == apex {
                continue;
            }

            let pt = &normalized[pid as usize];
            if let Some(facet) = facets[first_new..]
                .iter_mut()
                .find(|f| f.distance_to_point(pt) > PLANE_TOLERANCE)
            {
                facet.visible_points.push(pid);
            }
        }

        i += 1;
    }

    let triangles: Vec<_> = facets.iter().filter(|f| f.valid).map(|f| f.pts).collect();
    log::debug!(
        "quickhull: {} input points, {} facets created, {} kept",
        points.len(),
        facets.len(),
        triangles.len()
    );

    Ok(triangles)
}

#[cfg(test)]
mod test {
    use super::convex_hull;
    use crate::math::{Point, Real, Vector};
    use crate::shape::{Cuboid, ShapeError};

    #[test]
    fn interior_points_are_dropped() {
        let mut points = Cuboid::new(Vector::repeat(1.0)).vertices().to_vec();
        points.push(Point::origin());
        points.push(Point::new(0.2, -0.3, 0.1));
        points.push(Point::new(-0.9, 0.9, 0.5));

        let triangles = convex_hull(&points).unwrap();
        assert_eq!(triangles.len(), 12);
        assert!(triangles.iter().flatten().all(|i| *i < 8));

        // Every triangle faces away from the center.
        for tri in &triangles {
            let [a, b, c] = tri.map(|i| points[i as usize]);
            let normal = (b - a).cross(&(c - a));
            assert!(normal.dot(&a.coords) > 0.0);
        }
    }

    #[test]
    fn closed_manifold_output() {
        let points: Vec<_> = (0..40)
            .map(|i| {
                let t = i as Real * 0.7;
                Point::new(t.cos() * (1.0 + 0.1 * t.sin()), (t * 0.3).sin(), t.sin())
            })
            .collect();
        let triangles = convex_hull(&points).unwrap();

        // Every directed edge is matched by its opposite.
        for tri in &triangles {
            for k in 0..3 {
                let (p, q) = (tri[k], tri[(k + 1) % 3]);
                let twins = triangles
                    .iter()
                    .filter(|t| (0..3).any(|m| t[m] == q && t[(m + 1) % 3] == p))
                    .count();
                assert_eq!(twins, 1);
            }
        }
    }

    #[test]
    fn flat_input_is_rejected() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
        ];
        assert_eq!(convex_hull(&points), Err(ShapeError::ZeroVolume));
        assert_eq!(convex_hull(&[]), Err(ShapeError::EmptyPointCloud));
    }
}
