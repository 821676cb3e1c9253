//! Polygon vertex smoothing.
//!
//! Floor-plan polygons traced from store images carry contour noise: runs of
//! nearly coincident vertices, and edges that are a few pixels off a true
//! horizontal or vertical. Smoothing cleans both up in two phases:
//!
//! 1. **Merge phase**: drop vertices closer than `merge_threshold` to the
//!    previously kept vertex, thinning noisy runs while keeping overall
//!    shape.
//!
//! 2. **Alignment phase**: one circular pass over the merged ring, snapping
//!    each vertex and its neighbors onto shared axis lines when they are
//!    within `align_threshold` of each other. The pass mutates the ring as
//!    it goes, so earlier snaps are visible to later checks.
//!
//! Vertex order is preserved; smoothing never reorders or invents vertices.

mod align;
mod config;
mod merge;

// Re-export public API
pub use align::{alignment_candidate, Alignment};
pub use config::SmoothingConfig;
pub use merge::merge_close_points;

use crate::core::Vertex;

/// Smooth one polygon ring.
///
/// Runs the merge phase and then a single circular alignment pass over what
/// remains. The input is not modified; the result may be shorter than the
/// input but never longer.
///
/// # Example
/// ```
/// use vipani_map::core::Vertex;
/// use vipani_map::smoothing::{smoothen_polygon, SmoothingConfig};
///
/// // Traced outline of a rectangular store with one jitter vertex
/// let traced = vec![
///     Vertex::new(0.0, 0.0),
///     Vertex::new(3.0, 0.0),
///     Vertex::new(100.0, 0.0),
///     Vertex::new(100.0, 100.0),
///     Vertex::new(0.0, 100.0),
/// ];
///
/// let smooth = smoothen_polygon(&traced, &SmoothingConfig::default());
/// assert_eq!(smooth.len(), 4);
/// ```
pub fn smoothen_polygon(vertices: &[Vertex], config: &SmoothingConfig) -> Vec<Vertex> {
    let mut ring = merge_close_points(vertices, config.merge_threshold);
    align::align_axis_neighbors(&mut ring, config.align_threshold);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polygon() {
        let out = smoothen_polygon(&[], &SmoothingConfig::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_traced_rectangle_scenario() {
        // The jitter vertex at (3, 0) merges into (0, 0); the survivors
        // already form an axis-aligned rectangle, so alignment changes
        // nothing.
        let traced = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(3.0, 0.0),
            Vertex::new(100.0, 0.0),
            Vertex::new(100.0, 100.0),
            Vertex::new(0.0, 100.0),
        ];
        let out = smoothen_polygon(&traced, &SmoothingConfig::default());
        assert_eq!(
            out,
            vec![
                Vertex::new(0.0, 0.0),
                Vertex::new(100.0, 0.0),
                Vertex::new(100.0, 100.0),
                Vertex::new(0.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let inputs: Vec<Vec<Vertex>> = vec![
            vec![],
            vec![Vertex::new(1.0, 1.0)],
            vec![
                Vertex::new(0.0, 0.0),
                Vertex::new(1.0, 2.0),
                Vertex::new(2.0, 4.0),
                Vertex::new(90.0, 3.0),
                Vertex::new(91.0, 88.0),
            ],
        ];
        let config = SmoothingConfig::default();
        for vertices in &inputs {
            let out = smoothen_polygon(vertices, &config);
            assert!(out.len() <= vertices.len());
        }
    }

    #[test]
    fn test_well_separated_off_axis_polygon_unchanged() {
        // All gaps exceed the merge threshold and no neighbor pair is
        // within the alignment threshold on either axis.
        let vertices = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(40.0, 37.0),
            Vertex::new(85.0, 90.0),
        ];
        let out = smoothen_polygon(&vertices, &SmoothingConfig::default());
        assert_eq!(out, vertices);
    }

    #[test]
    fn test_aligned_rectangle_is_fixed_point() {
        let rectangle = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(100.0, 0.0),
            Vertex::new(100.0, 100.0),
            Vertex::new(0.0, 100.0),
        ];
        let once = smoothen_polygon(&rectangle, &SmoothingConfig::default());
        let twice = smoothen_polygon(&once, &SmoothingConfig::default());
        assert_eq!(once, rectangle);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_merge_runs_before_alignment() {
        // Dropping the jitter vertex leaves two vertices whose y values are
        // close enough to snap into one horizontal edge.
        let vertices = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(5.0, 3.0),
            Vertex::new(98.0, 2.0),
        ];
        let out = smoothen_polygon(&vertices, &SmoothingConfig::default());
        assert_eq!(out, vec![Vertex::new(0.0, 1.0), Vertex::new(98.0, 1.0)]);
    }

    #[test]
    fn test_single_vertex_polygon() {
        // A lone vertex is its own neighbor in the circular pass, so a
        // fractional x self-snaps to its floored value.
        let out = smoothen_polygon(&[Vertex::new(7.0, 9.0)], &SmoothingConfig::default());
        assert_eq!(out, vec![Vertex::new(7.0, 9.0)]);

        let out = smoothen_polygon(&[Vertex::new(3.7, 9.2)], &SmoothingConfig::default());
        assert_eq!(out, vec![Vertex::new(3.0, 9.2)]);
    }

    #[test]
    fn test_custom_thresholds() {
        let vertices = vec![Vertex::new(0.0, 0.0), Vertex::new(6.0, 0.0)];

        // Under the default threshold the second vertex merges away
        let out = smoothen_polygon(&vertices, &SmoothingConfig::default());
        assert_eq!(out.len(), 1);

        // With a tighter merge threshold both survive
        let config = SmoothingConfig::new().with_merge_threshold(5.0);
        let out = smoothen_polygon(&vertices, &config);
        assert_eq!(out.len(), 2);
    }
}
