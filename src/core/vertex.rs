//! Vertex type for floor-plan polygons.

use serde::{Deserialize, Serialize};

/// A polygon vertex in image pixel coordinates.
///
/// Layout documents store vertices as two-element `[x, y]` arrays, so the
/// serde form is the pair rather than a `{"x": .., "y": ..}` object. Anything
/// that is not a two-number array fails to parse.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vertex {
    /// X coordinate (column, pixels)
    pub x: f64,
    /// Y coordinate (row, pixels)
    pub y: f64,
}

impl Vertex {
    /// Create a new vertex
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another vertex
    #[inline]
    pub fn distance(&self, other: &Vertex) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<[f64; 2]> for Vertex {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vertex> for [f64; 2] {
    #[inline]
    fn from(v: Vertex) -> Self {
        [v.x, v.y]
    }
}
