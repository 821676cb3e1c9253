//! Merge pass: thin out runs of near-coincident vertices.

use crate::core::Vertex;

/// Drop vertices that sit within `merge_threshold` of the last kept vertex.
///
/// The first vertex is always kept and becomes the initial comparison basis.
/// Each kept vertex becomes the new basis, so a long drifting run of closely
/// spaced vertices is thinned to roughly one vertex per threshold distance
/// rather than collapsed onto its first point. The comparison is strict: a
/// vertex exactly `merge_threshold` away is kept.
pub fn merge_close_points(vertices: &[Vertex], merge_threshold: f64) -> Vec<Vertex> {
    let mut kept: Vec<Vertex> = Vec::with_capacity(vertices.len());
    for &v in vertices {
        match kept.last() {
            Some(last) if last.distance(&v) < merge_threshold => {}
            _ => kept.push(v),
        }
    }
    kept
}
