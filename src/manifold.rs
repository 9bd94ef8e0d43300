//! Watertightness check for triangulated surfaces.

use crate::float_types::Real;
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use hashbrown::HashMap;
use nalgebra::Point3;

/// Vertices closer than this (in mm) are treated as the same point when
/// matching edges.
const SNAP_TOLERANCE: Real = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct QuantizedPoint(i64, i64, i64);

fn quantize_point(p: &Point3<Real>) -> QuantizedPoint {
    QuantizedPoint(
        (p.x / SNAP_TOLERANCE).round() as i64,
        (p.y / SNAP_TOLERANCE).round() as i64,
        (p.z / SNAP_TOLERANCE).round() as i64,
    )
}

/// Check whether a triangle stream bounds a closed, orientable solid.
///
/// After snapping vertices to the tolerance grid, every directed edge must
/// occur exactly once and its reverse must also occur exactly once; each
/// undirected edge is then shared by two oppositely wound triangles.
/// Degenerate (zero-length) edges fail the check immediately.
pub fn is_manifold<T: Triangulated3D>(shape: &T) -> bool {
    let mut directed: HashMap<(QuantizedPoint, QuantizedPoint), u32> = HashMap::new();
    let mut degenerate = false;

    shape.visit_triangles(|tri: [Vertex; 3]| {
        for &(i0, i1) in &[(0, 1), (1, 2), (2, 0)] {
            let a = quantize_point(&tri[i0].pos);
            let b = quantize_point(&tri[i1].pos);
            if a == b {
                degenerate = true;
                return;
            }
            *directed.entry((a, b)).or_insert(0) += 1;
        }
    });

    if degenerate || directed.is_empty() {
        return false;
    }

    directed
        .iter()
        .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
}
