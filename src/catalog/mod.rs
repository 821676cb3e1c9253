//! Store catalog: the document collections behind the query API.
//!
//! Two collections, persisted as JSON array files inside a data directory:
//! `store_layouts.json` holds one smoothed layout per store floor, and
//! `items.json` holds the schema-free item rows from the CSV import. The
//! catalog is loaded fully into memory; the demo data set is a handful of
//! floors and at most a few thousand items.

use std::fs;
use std::path::Path;

use log::info;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::layout::FloorLayout;

/// File name of the layouts collection inside the data directory.
pub const LAYOUTS_FILE: &str = "store_layouts.json";
/// File name of the items collection inside the data directory.
pub const ITEMS_FILE: &str = "items.json";

/// A store item row, schema-free: whatever columns the items CSV carried.
pub type ItemDoc = Map<String, Value>;

/// In-memory document store for layouts and items.
#[derive(Debug, Default)]
pub struct StoreCatalog {
    layouts: Vec<FloorLayout>,
    items: Vec<ItemDoc>,
}

impl StoreCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the catalog from a data directory.
    ///
    /// A missing directory or missing collection file reads as an empty
    /// collection, so opening before the first import yields an empty
    /// catalog rather than an error.
    pub fn open(dir: &Path) -> Result<Self> {
        let layouts = read_collection(&dir.join(LAYOUTS_FILE))?;
        let items = read_collection(&dir.join(ITEMS_FILE))?;
        info!(
            "Opened catalog from {}: {} layouts, {} items",
            dir.display(),
            layouts.len(),
            items.len()
        );
        Ok(Self { layouts, items })
    }

    /// Write both collections to a data directory, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        write_collection(&dir.join(LAYOUTS_FILE), &self.layouts)?;
        write_collection(&dir.join(ITEMS_FILE), &self.items)?;
        info!(
            "Saved catalog to {}: {} layouts, {} items",
            dir.display(),
            self.layouts.len(),
            self.items.len()
        );
        Ok(())
    }

    /// Insert a layout, replacing any existing layout for the same
    /// `(store_id, floor_id)`.
    ///
    /// The layout must carry both identifiers; a layout without them would
    /// be unreachable through every query.
    pub fn insert_layout(&mut self, layout: FloorLayout) -> Result<()> {
        let (store_id, floor_id) = match (&layout.store_id, &layout.floor_id) {
            (Some(s), Some(f)) => (s.clone(), f.clone()),
            _ => {
                return Err(Error::Catalog(
                    "layout is missing store_id or floor_id".into(),
                ))
            }
        };
        if let Some(existing) = self.layouts.iter_mut().find(|l| {
            l.store_id.as_deref() == Some(store_id.as_str())
                && l.floor_id.as_deref() == Some(floor_id.as_str())
        }) {
            *existing = layout;
        } else {
            self.layouts.push(layout);
        }
        Ok(())
    }

    /// Append item rows to the items collection.
    pub fn insert_items(&mut self, items: Vec<ItemDoc>) {
        self.items.extend(items);
    }

    /// Distinct store identifiers, sorted.
    pub fn store_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .layouts
            .iter()
            .filter_map(|l| l.store_id.clone())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Floor identifiers available for one store, in import order.
    pub fn floors(&self, store_id: &str) -> Vec<String> {
        self.layouts
            .iter()
            .filter(|l| l.store_id.as_deref() == Some(store_id))
            .filter_map(|l| l.floor_id.clone())
            .collect()
    }

    /// Look up the layout of one store floor.
    pub fn layout(&self, store_id: &str, floor_id: &str) -> Option<&FloorLayout> {
        self.layouts.iter().find(|l| {
            l.store_id.as_deref() == Some(store_id) && l.floor_id.as_deref() == Some(floor_id)
        })
    }

    /// All item rows. The demo data set covers a single store, so items are
    /// not partitioned by store or floor.
    pub fn items(&self) -> &[ItemDoc] {
        &self.items
    }

    /// Number of layouts in the catalog.
    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Number of item rows in the catalog.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path)?;
    let docs = serde_json::from_str(&text)?;
    Ok(docs)
}

fn write_collection<T: serde::Serialize>(path: &Path, docs: &[T]) -> Result<()> {
    let json = serde_json::to_vec_pretty(docs)?;
    fs::write(path, json)?;
    Ok(())
}
