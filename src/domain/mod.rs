// src/domain/mod.rs
pub mod errors;
pub mod models;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, CatalogError, CatalogResult};
pub use models::{
    CartLine, OrderConfirmation, Product, Promo, PromoKind, SortKey, Totals, MAX_QTY, MIN_QTY,
};
