//! Layout JSON files and the smoothing pipeline.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::layout::FloorLayout;
use crate::smoothing::SmoothingConfig;

/// Load a floor layout document from a JSON file.
pub fn read_layout(path: &Path) -> Result<FloorLayout> {
    let text = fs::read_to_string(path)?;
    let layout = serde_json::from_str(&text)?;
    Ok(layout)
}

/// Save a floor layout document as pretty-printed JSON (2-space indent).
pub fn write_layout(layout: &FloorLayout, path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(layout)?;
    fs::write(path, json)?;
    Ok(())
}

/// Run the smoothing pipeline over one layout file.
///
/// Reads `input`, smooths the store outline and every internal polygon, and
/// writes the result to `output`. Returns the smoothed document.
pub fn process_vertices(
    input: &Path,
    output: &Path,
    config: &SmoothingConfig,
) -> Result<FloorLayout> {
    let layout = read_layout(input)?;
    let before = layout.vertex_count();
    let smooth = layout.smoothened(config);
    info!(
        "Smoothed {} -> {} vertices across {} rings",
        before,
        smooth.vertex_count(),
        smooth.polygons.len() + 1
    );
    write_layout(&smooth, output)?;
    Ok(smooth)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_LAYOUT: &str = r#"{
        "store_vertices": [[0, 0], [3, 0], [100, 0], [100, 100], [0, 100]],
        "polygons": [
            {
                "name": "aisle-1",
                "polygon_vertices": [[10, 10], [12, 11], [40, 10], [40, 30], [10, 30]]
            }
        ],
        "blocks": []
    }"#;

    #[test]
    fn test_layout_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");

        let layout: FloorLayout = serde_json::from_str(RAW_LAYOUT).unwrap();
        write_layout(&layout, &path).unwrap();
        let back = read_layout(&path).unwrap();

        assert_eq!(back.store_vertices, layout.store_vertices);
        assert_eq!(back.polygons.len(), 1);
        assert!(back.extra.contains_key("blocks"));
    }

    #[test]
    fn test_written_json_is_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");

        let layout: FloorLayout = serde_json::from_str(RAW_LAYOUT).unwrap();
        write_layout(&layout, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"store_vertices\""));
    }

    #[test]
    fn test_process_vertices_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("vertices.json");
        let output = dir.path().join("smoothened_vertices.json");
        fs::write(&input, RAW_LAYOUT).unwrap();

        let smooth = process_vertices(&input, &output, &SmoothingConfig::default()).unwrap();
        assert_eq!(smooth.store_vertices.len(), 4);
        assert_eq!(smooth.polygons[0].polygon_vertices.len(), 4);

        // Input file is untouched, output holds the smoothed document
        let raw_again = read_layout(&input).unwrap();
        assert_eq!(raw_again.store_vertices.len(), 5);
        let written = read_layout(&output).unwrap();
        assert_eq!(written.store_vertices.len(), 4);
        assert!(written.extra.contains_key("blocks"));
    }

    #[test]
    fn test_read_layout_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_layout(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_read_layout_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(read_layout(&path).is_err());
    }
}
