//! Core types for the vipani-map library.
//!
//! - [`Vertex`]: a polygon vertex in image pixel coordinates, serialized as
//!   an `[x, y]` pair the way layout documents store it

mod vertex;

pub use vertex::Vertex;
