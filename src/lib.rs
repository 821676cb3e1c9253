//! # Vipani-Map: Store Floor-Plan Smoothing and Layout Catalog
//!
//! Backend pieces of a store-navigation demo. Store floor plans are traced
//! from images as polygons, and tracing leaves contour noise: runs of nearly
//! coincident vertices and edges a few pixels off a true horizontal or
//! vertical. The vertex smoother cleans each polygon once, offline; the
//! smoothed layout is then imported into a small document catalog that the
//! query server reads at runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use vipani_map::core::Vertex;
//! use vipani_map::smoothing::{smoothen_polygon, SmoothingConfig};
//!
//! let traced = vec![
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(3.0, 0.0), // tracing jitter, merges away
//!     Vertex::new(100.0, 0.0),
//!     Vertex::new(100.0, 100.0),
//!     Vertex::new(0.0, 100.0),
//! ];
//!
//! let smooth = smoothen_polygon(&traced, &SmoothingConfig::default());
//! assert_eq!(smooth.len(), 4);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: the [`Vertex`] type
//! - [`smoothing`]: merge and axis-alignment passes over polygon rings
//! - [`layout`]: floor layout documents with passthrough metadata
//! - [`io`]: layout JSON files, the smoothing pipeline, the items CSV reader
//! - [`catalog`]: file-backed document store behind the query API
//! - [`config`]: application configuration
//!
//! ## Data Flow
//!
//! ```text
//! vertices.json ──► smoothen_vertices ──► smoothened_vertices.json
//!                                                  │
//! items.csv ──────────► import_data ◄──────────────┘
//!                            │
//!                            ▼
//!                      data/ catalog ──► serve ──► /api/...
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod layout;
pub mod smoothing;

// Re-export main types at crate root
pub use crate::catalog::{ItemDoc, StoreCatalog};
pub use crate::config::AppConfig;
pub use crate::core::Vertex;
pub use crate::error::{Error, Result};
pub use crate::layout::{FloorLayout, LayoutPolygon};
pub use crate::smoothing::{
    alignment_candidate, merge_close_points, smoothen_polygon, Alignment, SmoothingConfig,
};
