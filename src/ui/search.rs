// src/ui/search.rs
use crate::domain::models::{Product, SortKey};
use std::cmp::Ordering;

/// The two search boxes on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    Toolbar,
    Header,
}

impl SearchSource {
    /// Element id of the input on the page
    pub fn element_id(&self) -> &'static str {
        match self {
            SearchSource::Toolbar => "toolbar-search",
            SearchSource::Header => "global-search",
        }
    }
}

/// A filter chip. Chips only carry an active state for now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub active: bool,
}

/// Search, sort and chip state plus the resulting catalog display
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    query: String,
    sort: SortKey,
    toolbar_input: String,
    header_input: String,
    chips: Vec<Chip>,
    // Indexed by featured position
    visible: Vec<bool>,
    // Child order of the product list container, as featured positions
    display_order: Vec<usize>,
}

impl CatalogView {
    pub fn new(product_count: usize, chip_labels: &[String]) -> Self {
        Self {
            visible: vec![true; product_count],
            display_order: (0..product_count).collect(),
            chips: chip_labels
                .iter()
                .map(|label| Chip {
                    label: label.clone(),
                    active: false,
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Store a new query and mirror the raw text into whichever search box is not focused
    pub fn set_query(&mut self, raw: &str, focused: Option<SearchSource>, products: &[Product]) {
        self.query = raw.trim().to_lowercase();

        if focused != Some(SearchSource::Toolbar) {
            self.toolbar_input = raw.to_string();
        }
        if focused != Some(SearchSource::Header) {
            self.header_input = raw.to_string();
        }

        self.apply_filter_and_sort(products);
    }

    /// Record what the user typed into a box without running a search
    pub fn set_input(&mut self, source: SearchSource, value: &str) {
        match source {
            SearchSource::Toolbar => self.toolbar_input = value.to_string(),
            SearchSource::Header => self.header_input = value.to_string(),
        }
    }

    pub fn set_sort(&mut self, key: Option<&str>, products: &[Product]) {
        self.sort = SortKey::parse(key);
        self.apply_filter_and_sort(products);
    }

    /// Activate one chip and deactivate the rest. The filter predicate ignores chips.
    pub fn toggle_chip(&mut self, index: usize, products: &[Product]) {
        if index >= self.chips.len() {
            log::debug!("Ignoring toggle for unknown chip {}", index);
            return;
        }
        for (i, chip) in self.chips.iter_mut().enumerate() {
            chip.active = i == index;
        }
        // Chips carry no category yet, so visibility is unchanged
        self.apply_filter_and_sort(products);
    }

    /// Recompute visibility, then move visible products to the end in sort order
    pub fn apply_filter_and_sort(&mut self, products: &[Product]) {
        if self.visible.len() != products.len() {
            self.visible = vec![true; products.len()];
            self.display_order = (0..products.len()).collect();
        }

        for (idx, product) in products.iter().enumerate() {
            self.visible[idx] = product.matches(&self.query);
        }

        let mut sorted: Vec<&Product> = products
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.visible[*idx])
            .map(|(_, product)| product)
            .collect();
        sorted.sort_by(|a, b| compare(self.sort, a, b));

        // Hidden products stay where they were; visible ones are re-appended
        let visible = &self.visible;
        self.display_order.retain(|idx| !visible[*idx]);
        self.display_order
            .extend(sorted.iter().map(|product| product.featured_idx));

        log::debug!(
            "Catalog filtered by '{}' sorted by {}: {} of {} visible",
            self.query,
            self.sort,
            sorted.len(),
            products.len()
        );
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn input(&self, source: SearchSource) -> &str {
        match source {
            SearchSource::Toolbar => &self.toolbar_input,
            SearchSource::Header => &self.header_input,
        }
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn is_visible(&self, featured_idx: usize) -> bool {
        self.visible.get(featured_idx).copied().unwrap_or(false)
    }

    /// Container order, hidden products included
    pub fn display_order(&self) -> &[usize] {
        &self.display_order
    }

    /// Identifiers of displayed products, in display order
    pub fn visible_ids<'a>(&self, products: &'a [Product]) -> Vec<&'a str> {
        self.display_order
            .iter()
            .filter(|idx| self.is_visible(**idx))
            .filter_map(|idx| products.get(*idx))
            .map(|product| product.id.as_str())
            .collect()
    }
}

fn compare(sort: SortKey, a: &Product, b: &Product) -> Ordering {
    match sort {
        SortKey::Featured => a.featured_idx.cmp(&b.featured_idx),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::RatingDesc => b.rating.cmp(&a.rating),
    }
}
