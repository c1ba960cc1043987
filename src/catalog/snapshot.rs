// src/catalog/snapshot.rs
use crate::catalog::extractor::ProductEntry;
use crate::domain::errors::{CatalogError, CatalogResult};
use crate::ui::modal::Element;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A cart row that was already rendered when the page loaded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartEntry {
    pub name: Option<String>,
    pub unit_text: Option<String>,
    pub qty_text: Option<String>,
    pub image: Option<String>,
}

/// Everything the page renders before the controller takes over
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    pub products: Vec<ProductEntry>,
    pub cart: Vec<CartEntry>,
    pub filter_chips: Vec<String>,
    /// Focus-relevant elements (search boxes, buttons, modal fields) in document order
    pub elements: Vec<Element>,
}

impl PageSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json(contents: &str) -> CatalogResult<Self> {
        serde_json::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Load a snapshot from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            CatalogError::Read(format!("{}: {}", path.display(), e))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            CatalogError::Read(format!("{}: {}", path.display(), e))
        })?;

        let snapshot = Self::from_json(&contents)?;
        log::info!(
            "Loaded page snapshot from {} ({} products, {} cart rows)",
            path.display(),
            snapshot.products.len(),
            snapshot.cart.len()
        );
        Ok(snapshot)
    }
}
