use smallvec::SmallVec;

use super::DEGENERATE_TRIANGLE_EPSILON;
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils::hashmap::{HashMap, PointKey};

const GOLDEN_RATIO: Real = 1.618_034;

const ICOSAHEDRON_VERTICES: [[Real; 3]; 12] = [
    [-1.0, GOLDEN_RATIO, 0.0],
    [1.0, GOLDEN_RATIO, 0.0],
    [-1.0, -GOLDEN_RATIO, 0.0],
    [1.0, -GOLDEN_RATIO, 0.0],
    [0.0, -1.0, GOLDEN_RATIO],
    [0.0, 1.0, GOLDEN_RATIO],
    [0.0, -1.0, -GOLDEN_RATIO],
    [0.0, 1.0, -GOLDEN_RATIO],
    [GOLDEN_RATIO, 0.0, -1.0],
    [GOLDEN_RATIO, 0.0, 1.0],
    [-GOLDEN_RATIO, 0.0, -1.0],
    [-GOLDEN_RATIO, 0.0, 1.0],
];

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// A triangle of the direction template with the support points of its corners.
struct Patch {
    dirs: [Vector<Real>; 3],
    pts: [Point<Real>; 3],
    depth: u32,
}

/// Subdivides the icosahedron template against `shape`, calling `leaf` on every
/// triangle of the last level.
///
/// The recursion is unrolled into an explicit stack so its depth does not depend on
/// `subdivisions`.
fn subdivide<S, F>(shape: &S, subdivisions: u32, mut leaf: F)
where
    S: SupportMap + ?Sized,
    F: FnMut(&[Point<Real>; 3]),
{
    let template: SmallVec<[Vector<Real>; 12]> = ICOSAHEDRON_VERTICES
        .iter()
        .map(|v| Vector::from(*v).normalize())
        .collect();
    let mut stack: SmallVec<[Patch; 64]> = SmallVec::new();

    for face in ICOSAHEDRON_FACES.iter() {
        let (mut a, b, mut c) = (template[face[0]], template[face[1]], template[face[2]]);
        // Make every face of the template point outward.
        if a.dot(&(b - a).cross(&(c - a))) < 0.0 {
            core::mem::swap(&mut a, &mut c);
        }

        let dirs = [a, b, c];
        stack.push(Patch {
            pts: dirs.map(|d| shape.local_support_point(&d)),
            dirs,
            depth: subdivisions.max(1),
        });
    }

    while let Some(Patch { dirs, pts, depth }) = stack.pop() {
        if depth <= 1 {
            leaf(&pts);
            continue;
        }

        let [v1, v2, v3] = dirs;
        let [p1, p2, p3] = pts;
        let h1 = (v1 + v2).normalize();
        let h2 = (v2 + v3).normalize();
        let h3 = (v3 + v1).normalize();
        let q1 = shape.local_support_point(&h1);
        let q2 = shape.local_support_point(&h2);
        let q3 = shape.local_support_point(&h3);
        let depth = depth - 1;

        stack.push(Patch {
            dirs: [v1, h1, h3],
            pts: [p1, q1, q3],
            depth,
        });
        stack.push(Patch {
            dirs: [h1, v2, h2],
            pts: [q1, p2, q2],
            depth,
        });
        stack.push(Patch {
            dirs: [h3, h2, v3],
            pts: [q3, q2, p3],
            depth,
        });
        stack.push(Patch {
            dirs: [h2, h3, h1],
            pts: [q2, q3, q1],
            depth,
        });
    }
}

/// Builds a closed triangulation of the boundary of a support-mapped shape.
///
/// Starting from a regular icosahedron, each face is split `subdivisions - 1` times into
/// four triangles whose corners are the support points of the shape along the template
/// directions. Triangles with a (nearly) zero area are discarded. The returned triangles
/// are wound counter-clockwise when seen from outside the shape.
pub fn make_hull<S>(shape: &S, subdivisions: u32) -> Vec<[Point<Real>; 3]>
where
    S: SupportMap + ?Sized,
{
    let mut triangles = Vec::new();
    let mut degenerate = 0usize;

    subdivide(shape, subdivisions, |&[p1, p2, p3]| {
        let normal = (p3 - p1).cross(&(p2 - p1));
        if normal.norm_squared() > DEGENERATE_TRIANGLE_EPSILON {
            triangles.push([p1, p2, p3]);
        } else {
            degenerate += 1;
        }
    });

    log::debug!(
        "hull subdivision ({} levels) emitted {} triangles, skipped {} degenerate ones",
        subdivisions,
        triangles.len(),
        degenerate
    );
    triangles
}

/// Samples the boundary of a support-mapped shape along the directions of a subdivided
/// icosahedron.
///
/// Returns every distinct support point reached by the same subdivision as
/// [`make_hull`], in the order they were first reached.
pub fn sample_hull<S>(shape: &S, subdivisions: u32) -> Vec<Point<Real>>
where
    S: SupportMap + ?Sized,
{
    let mut seen = HashMap::default();
    let mut points = Vec::new();

    subdivide(shape, subdivisions, |pts| {
        for pt in pts {
            if seen.insert(PointKey::new(pt), ()).is_none() {
                points.push(*pt);
            }
        }
    });

    points
}
