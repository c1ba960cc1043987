// src/cart/mod.rs
pub mod promo;
pub mod store;
pub mod totals;

pub use promo::{apply_promo, compute_discount, PromoOutcome};
pub use store::Cart;
pub use totals::compute_totals;
