// src/domain/models.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest quantity a cart line may hold
pub const MIN_QTY: u32 = 1;

/// Highest quantity a cart line may hold
pub const MAX_QTY: u32 = 999;

/// Catalog entry built once from the rendered product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub rating: u32,
    pub stock_out: bool,
    pub image: String,
    pub alt: String,
    /// Position in the original rendered order
    pub featured_idx: usize,
}

impl Product {
    /// Whether the product matches an already normalized search query
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(query) || self.alt.to_lowercase().contains(query)
    }
}

/// One cart entry; name, price and image are snapshots taken when the line was last added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub qty: u32,
    pub image: String,
}

impl CartLine {
    /// Unit price times quantity, saturating at the decimal range
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.qty))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoKind {
    Percent,
    Fixed,
}

impl fmt::Display for PromoKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PromoKind::Percent => write!(f, "percent"),
            PromoKind::Fixed => write!(f, "fixed"),
        }
    }
}

/// The single active promo code, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promo {
    pub code: String,
    pub kind: PromoKind,
    pub value: Decimal,
}

/// Derived totals; recomputed from the cart on every mutation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    /// Subtotal after discount, unrounded
    pub taxable: Decimal,
    pub tax: Decimal,
    pub grand: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortKey {
    /// Parse a select value; anything unrecognized means featured
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price-asc") => SortKey::PriceAsc,
            Some("price-desc") => SortKey::PriceDesc,
            Some("rating-desc") => SortKey::RatingDesc,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Produced when the checkout modal is confirmed; nothing is submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub confirmed_at: DateTime<Utc>,
    pub item_count: u32,
    pub totals: Totals,
}
