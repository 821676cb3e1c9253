//! File formats: layout JSON documents and the items CSV export.

mod items_csv;
mod layout_json;

pub use items_csv::{parse_items_csv, read_items_csv};
pub use layout_json::{process_vertices, read_layout, write_layout};
