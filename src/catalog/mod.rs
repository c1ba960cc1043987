// src/catalog/mod.rs
pub mod extractor;
pub mod snapshot;

pub use extractor::{Catalog, ProductEntry};
pub use snapshot::{CartEntry, PageSnapshot};
