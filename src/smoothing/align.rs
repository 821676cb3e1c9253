//! Alignment pass: snap nearly axis-aligned neighbors onto shared lines.

use crate::core::Vertex;

/// Snap decision for a pair of neighboring vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    /// Both vertices take this shared x coordinate
    X(f64),
    /// Both vertices take this shared y coordinate
    Y(f64),
}

/// Decide whether two neighboring vertices should share an axis line.
///
/// The x axis is checked first, so when both coordinate differences are
/// under `align_threshold` the pair snaps vertically (shared x). The shared
/// coordinate is the floor of the pair's average, keeping snapped edges on
/// the integer pixel grid the layouts were traced from. A difference exactly
/// equal to the threshold does not align.
pub fn alignment_candidate(a: Vertex, b: Vertex, align_threshold: f64) -> Option<Alignment> {
    if (a.x - b.x).abs() < align_threshold {
        Some(Alignment::X(snapped_average(a.x, b.x)))
    } else if (a.y - b.y).abs() < align_threshold {
        Some(Alignment::Y(snapped_average(a.y, b.y)))
    } else {
        None
    }
}

/// Shared coordinate for a snapped pair: floor of the average.
#[inline]
fn snapped_average(a: f64, b: f64) -> f64 {
    ((a + b) / 2.0).floor()
}

/// One circular alignment pass over a polygon ring, in place.
///
/// Each vertex is checked against its previous and its next neighbor, with
/// indices wrapping around the ring. Snaps mutate the ring immediately:
/// later checks in the same pass see coordinates already moved by earlier
/// ones, and the wraparound pair is examined from both ends. Degenerate
/// rings take the same path with no special case; a lone vertex is its own
/// neighbor.
pub(super) fn align_axis_neighbors(vertices: &mut [Vertex], align_threshold: f64) {
    let n = vertices.len();
    for i in 0..n {
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        snap_pair(vertices, i, prev, align_threshold);
        snap_pair(vertices, i, next, align_threshold);
    }
}

fn snap_pair(vertices: &mut [Vertex], i: usize, j: usize, align_threshold: f64) {
    match alignment_candidate(vertices[i], vertices[j], align_threshold) {
        Some(Alignment::X(x)) => {
            vertices[i].x = x;
            vertices[j].x = x;
        }
        Some(Alignment::Y(y)) => {
            vertices[i].y = y;
            vertices[j].y = y;
        }
        None => {}
    }
}
