//! Store layout documents.
//!
//! A layout document describes one floor of one store: the traced outer
//! boundary (`store_vertices`) plus the internal polygons (aisles, displays,
//! checkout blocks). Documents come out of an image tracing pipeline and
//! carry arbitrary extra metadata; only the vertex lists are interpreted
//! here, everything else passes through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Vertex;
use crate::smoothing::{smoothen_polygon, SmoothingConfig};

/// One internal polygon of a floor layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutPolygon {
    /// Ring of vertices outlining the polygon
    pub polygon_vertices: Vec<Vertex>,
    /// Any other fields (name, category, ...) carried through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A floor layout document: store outline plus internal polygons.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FloorLayout {
    /// Outer boundary of the store floor
    pub store_vertices: Vec<Vertex>,
    /// Internal polygons of the floor
    pub polygons: Vec<LayoutPolygon>,
    /// Store identifier, attached at import time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Floor identifier, attached at import time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    /// Any other fields carried through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FloorLayout {
    /// Return a smoothed copy of this layout.
    ///
    /// The store outline and every internal polygon are smoothed
    /// independently with the same configuration; all other fields are
    /// cloned unchanged. `self` is not modified.
    pub fn smoothened(&self, config: &SmoothingConfig) -> FloorLayout {
        let mut out = self.clone();
        out.store_vertices = smoothen_polygon(&self.store_vertices, config);
        for polygon in &mut out.polygons {
            polygon.polygon_vertices = smoothen_polygon(&polygon.polygon_vertices, config);
        }
        out
    }

    /// Total vertex count across the outline and all internal polygons.
    pub fn vertex_count(&self) -> usize {
        self.store_vertices.len()
            + self
                .polygons
                .iter()
                .map(|p| p.polygon_vertices.len())
                .sum::<usize>()
    }
}
