// src/cart/store.rs
use crate::catalog::{CartEntry, Catalog};
use crate::domain::models::{CartLine, MAX_QTY, MIN_QTY};
use crate::format::{clamp_qty, parse_currency, parse_quantity, slugify};

/// Cart lines keyed by product identifier, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take over cart rows that were rendered before the controller started
    pub fn seed(&mut self, entries: &[CartEntry], catalog: &Catalog) {
        for (index, entry) in entries.iter().enumerate() {
            let name = entry.name.as_deref().unwrap_or_default().trim().to_string();
            let slug = slugify(&name);
            let id = if slug.is_empty() {
                format!("item-{}", index + 1)
            } else {
                slug.clone()
            };

            // Prefer the live catalog price and image when the product is known
            let (price, image) = match catalog.find_by_slug(&slug) {
                Some(product) => (product.price, product.image.clone()),
                None => (
                    parse_currency(entry.unit_text.as_deref().unwrap_or_default()),
                    entry.image.clone().unwrap_or_default(),
                ),
            };

            let qty = parse_quantity(entry.qty_text.as_deref().unwrap_or("1"));
            self.upsert(CartLine {
                id,
                name,
                price,
                qty,
                image,
            });
        }

        log::debug!("Seeded cart with {} lines", self.lines.len());
    }

    /// Add `qty` units of a product. Unknown and stock-out products are ignored.
    pub fn add(&mut self, catalog: &Catalog, product_id: &str, qty: u32) -> bool {
        let product = match catalog.get(product_id) {
            Some(product) => product,
            None => {
                log::debug!("Ignoring add for unknown product {}", product_id);
                return false;
            }
        };
        if product.stock_out {
            log::debug!("Ignoring add for stock-out product {}", product_id);
            return false;
        }

        let current = self.get(product_id).map(|line| line.qty).unwrap_or(0);
        let next = clamp_qty(i64::from(current) + i64::from(qty));

        // Name, price and image are re-snapshotted on every add
        self.upsert(CartLine {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty: next,
            image: product.image.clone(),
        });
        true
    }

    /// Set a line's quantity from raw input text; invalid or non-positive input means 1
    pub fn update_qty(&mut self, id: &str, raw_qty: &str) -> bool {
        let qty = parse_quantity(raw_qty);
        self.apply_qty(id, qty)
    }

    /// Set a line's quantity, clamped to the allowed range
    pub fn set_qty(&mut self, id: &str, qty: i64) -> bool {
        let qty = if qty == 0 { MIN_QTY } else { clamp_qty(qty) };
        self.apply_qty(id, qty)
    }

    /// Stepper "+": one more unit, capped
    pub fn increase(&mut self, id: &str) -> bool {
        match self.get(id) {
            Some(line) => {
                let next = (line.qty + 1).min(MAX_QTY);
                self.apply_qty(id, next)
            }
            None => false,
        }
    }

    /// Stepper "-": one fewer unit; never drops below one
    pub fn decrease(&mut self, id: &str) -> bool {
        match self.get(id) {
            Some(line) => {
                let next = line.qty.saturating_sub(1).max(MIN_QTY);
                self.apply_qty(id, next)
            }
            None => false,
        }
    }

    /// Delete a line; removing an absent id is a no-op
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        before != self.lines.len()
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines
    pub fn total_qty(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).sum()
    }

    fn apply_qty(&mut self, id: &str, qty: u32) -> bool {
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.qty = qty;
                true
            }
            None => {
                log::debug!("Ignoring quantity change for {} (not in cart)", id);
                false
            }
        }
    }

    // Replace in place so an existing line keeps its position
    fn upsert(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => *existing = line,
            None => self.lines.push(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductEntry;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        Catalog::from_entries(&[
            ProductEntry {
                name: Some("Mug".to_string()),
                price_text: Some("$10.00".to_string()),
                image: Some("img/mug.png".to_string()),
                ..Default::default()
            },
            ProductEntry {
                name: Some("Lamp".to_string()),
                price_text: Some("$35.00".to_string()),
                stock_out: true,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn add_creates_then_increments() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert!(cart.add(&catalog, "mug", 1));
        assert!(cart.add(&catalog, "mug", 2));

        let line = cart.get("mug").unwrap();
        assert_eq!(line.qty, 3);
        assert_eq!(line.name, "Mug");
        assert_eq!(line.price, dec!(10.00));
        assert_eq!(line.image, "img/mug.png");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn add_clamps_to_max() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "mug", 998);
        cart.add(&catalog, "mug", 5);
        assert_eq!(cart.get("mug").unwrap().qty, 999);
    }

    #[test]
    fn add_zero_on_new_line_floors_at_one() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "mug", 0);
        assert_eq!(cart.get("mug").unwrap().qty, 1);
    }

    #[test]
    fn add_ignores_unknown_and_stock_out() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert!(!cart.add(&catalog, "lamp", 1));
        assert!(!cart.add(&catalog, "teapot", 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn add_resnapshots_price() {
        let mut catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&catalog, "mug", 1);
        catalog.reprice("mug", dec!(7.25));
        assert_eq!(cart.get("mug").unwrap().price, dec!(10.00));

        cart.add(&catalog, "mug", 1);
        assert_eq!(cart.get("mug").unwrap().price, dec!(7.25));
        assert_eq!(cart.get("mug").unwrap().qty, 2);
    }

    #[test]
    fn update_qty_coerces_bad_input() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "mug", 4);

        assert!(cart.update_qty("mug", "abc"));
        assert_eq!(cart.get("mug").unwrap().qty, 1);

        cart.update_qty("mug", "12");
        assert_eq!(cart.get("mug").unwrap().qty, 12);

        cart.update_qty("mug", "-3");
        assert_eq!(cart.get("mug").unwrap().qty, 1);

        cart.update_qty("mug", "2500");
        assert_eq!(cart.get("mug").unwrap().qty, 999);

        assert!(!cart.update_qty("teapot", "2"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn stepper_respects_bounds() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "mug", 1);

        cart.decrease("mug");
        assert_eq!(cart.get("mug").unwrap().qty, 1);

        cart.increase("mug");
        assert_eq!(cart.get("mug").unwrap().qty, 2);

        cart.set_qty("mug", 999);
        cart.increase("mug");
        assert_eq!(cart.get("mug").unwrap().qty, 999);
    }

    #[test]
    fn remove_is_idempotent() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "mug", 2);

        assert!(cart.remove("mug"));
        assert!(!cart.remove("mug"));
        assert!(cart.is_empty());
    }

    #[test]
    fn seed_prefers_catalog_values() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.seed(
            &[
                CartEntry {
                    name: Some(" mug ".to_string()),
                    unit_text: Some("$99.00 each".to_string()),
                    qty_text: Some("3".to_string()),
                    image: Some("stale.png".to_string()),
                },
                CartEntry {
                    name: Some("Poster".to_string()),
                    unit_text: Some("$4.50 each".to_string()),
                    qty_text: Some("zero".to_string()),
                    image: Some("poster.png".to_string()),
                },
                CartEntry::default(),
            ],
            &catalog,
        );

        let mug = cart.get("mug").unwrap();
        assert_eq!(mug.name, "mug");
        assert_eq!(mug.price, dec!(10.00));
        assert_eq!(mug.image, "img/mug.png");
        assert_eq!(mug.qty, 3);

        let poster = cart.get("poster").unwrap();
        assert_eq!(poster.price, dec!(4.50));
        assert_eq!(poster.image, "poster.png");
        assert_eq!(poster.qty, 1);

        assert_eq!(cart.get("item-3").unwrap().qty, 1);
        assert_eq!(cart.total_qty(), 5);
    }
}
