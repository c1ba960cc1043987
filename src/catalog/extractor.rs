// src/catalog/extractor.rs
use crate::domain::models::Product;
use crate::format::{parse_currency, slugify};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filled rating symbol; any other glyph in the rating text is ignored
pub const RATING_GLYPH: char = '★';

/// A product card as the page renders it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductEntry {
    pub name: Option<String>,
    pub price_text: Option<String>,
    pub rating_text: Option<String>,
    /// Out-of-stock marker (or a disabled add button)
    pub stock_out: bool,
    pub image: Option<String>,
    pub alt: Option<String>,
}

/// Product list derived from the rendered catalog, in featured order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build products from rendered entries, assigning unique identifiers
    pub fn from_entries(entries: &[ProductEntry]) -> Self {
        let mut taken = HashSet::with_capacity(entries.len());
        let mut products = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let positional = format!("product-{}", index + 1);

            let name = entry
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| positional.clone());

            let slug = slugify(&name);
            let id = if !slug.is_empty() && !taken.contains(&slug) {
                slug
            } else {
                if !slug.is_empty() {
                    log::warn!(
                        "Duplicate product identifier '{}' at position {}, using positional id",
                        slug,
                        index + 1
                    );
                }
                unique_id(&positional, &taken)
            };
            taken.insert(id.clone());

            products.push(Product {
                id,
                name,
                price: parse_currency(entry.price_text.as_deref().unwrap_or_default()),
                rating: count_rating(entry.rating_text.as_deref().unwrap_or_default()),
                stock_out: entry.stock_out,
                image: entry.image.clone().unwrap_or_default(),
                alt: entry.alt.clone().unwrap_or_default(),
                featured_idx: index,
            });
        }

        log::debug!("Catalog built with {} products", products.len());
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by identifier
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find the product whose display name normalizes to `slug`
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        if slug.is_empty() {
            return None;
        }
        self.products.iter().find(|p| slugify(&p.name) == slug)
    }

    /// Apply a re-rendered price to a product. Cart lines pick it up on their next add.
    pub fn reprice(&mut self, id: &str, price: Decimal) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                log::debug!("Repriced {} from {} to {}", id, product.price, price);
                product.price = price;
                true
            }
            None => false,
        }
    }
}

/// Count filled rating glyphs
pub fn count_rating(text: &str) -> u32 {
    text.chars().filter(|c| *c == RATING_GLYPH).count() as u32
}

fn unique_id(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
