// src/storefront.rs
use crate::cart::{apply_promo, compute_totals, Cart, PromoOutcome};
use crate::catalog::{Catalog, PageSnapshot};
use crate::domain::models::{OrderConfirmation, Promo, Totals};
use crate::ui::{
    Action, CatalogView, Dispatched, Document, FocusHost, Key, KeyEvent, KeyHandling,
    ModalController, Page, SearchSource,
};
use chrono::Utc;
use rust_decimal::Decimal;

pub const ORDER_CONFIRMED_NOTICE: &str = "Order confirmed! (demo)";

/// Storefront controller: owns all page state and keeps the rendered page in sync.
/// Every operation mutates state and then rebuilds the affected regions before returning.
pub struct Storefront<H: FocusHost = Document> {
    catalog: Catalog,
    cart: Cart,
    promo: Option<Promo>,
    tax_rate: Decimal,
    view: CatalogView,
    modal: ModalController,
    page: Page,
    host: H,
}

impl<H: FocusHost> Storefront<H> {
    /// Take over a rendered page: build the catalog, seed the cart, render once
    pub fn new(snapshot: &PageSnapshot, tax_rate: Decimal, host: H) -> Self {
        let catalog = Catalog::from_entries(&snapshot.products);
        let mut cart = Cart::new();
        cart.seed(&snapshot.cart, &catalog);
        let view = CatalogView::new(catalog.len(), &snapshot.filter_chips);

        let mut storefront = Self {
            catalog,
            cart,
            promo: None,
            tax_rate,
            view,
            modal: ModalController::new(),
            page: Page::default(),
            host,
        };

        storefront.render_cart();
        storefront.view.apply_filter_and_sort(storefront.catalog.products());

        log::info!(
            "Storefront ready: {} products, {} cart lines, tax rate {}",
            storefront.catalog.len(),
            storefront.cart.len(),
            tax_rate
        );
        storefront
    }

    /// Route a UI action to its operation
    pub fn dispatch(&mut self, action: Action) -> Dispatched {
        log::debug!("Dispatching {}", action.name());
        self.page.notice = None;

        match action {
            Action::AddToCart { product_id, qty } => self.add_to_cart(&product_id, qty),
            Action::IncreaseQty { id } => self.increase_qty(&id),
            Action::DecreaseQty { id } => self.decrease_qty(&id),
            Action::SetQty { id, raw } => self.update_qty(&id, &raw),
            Action::RemoveFromCart { id } => self.remove_from_cart(&id),
            Action::ApplyPromo { code } => {
                self.apply_promo(code.as_deref());
            }
            Action::Search { source, value } => self.search(source, &value),
            Action::Sort { key } => self.set_sort(key.as_deref()),
            Action::ToggleChip { index } => self.toggle_chip(index),
            Action::OpenCheckout => {
                if self.modal.is_open() {
                    return Dispatched::Ignored;
                }
                self.open_checkout();
            }
            Action::CloseCheckout => {
                if !self.modal.is_open() {
                    return Dispatched::Ignored;
                }
                self.close_checkout();
            }
            Action::ConfirmCheckout => {
                return match self.confirm_checkout() {
                    Some(confirmation) => Dispatched::OrderConfirmed(confirmation),
                    None => Dispatched::Ignored,
                };
            }
            Action::KeyDown(event) => return Dispatched::Key(self.key_down(event)),
        }

        Dispatched::Rendered
    }

    // Cart operations

    /// Add units of a product; unknown or stock-out products leave the cart untouched
    pub fn add_to_cart(&mut self, product_id: &str, qty: u32) {
        self.cart.add(&self.catalog, product_id, qty);
        self.render_cart();
    }

    /// Set a line quantity from raw input text
    pub fn update_qty(&mut self, id: &str, raw_qty: &str) {
        self.cart.update_qty(id, raw_qty);
        self.render_cart();
    }

    pub fn increase_qty(&mut self, id: &str) {
        self.cart.increase(id);
        self.render_cart();
    }

    pub fn decrease_qty(&mut self, id: &str) {
        self.cart.decrease(id);
        self.render_cart();
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.remove(id);
        self.render_cart();
    }

    // Promo

    /// Apply, replace or clear the active promo code
    pub fn apply_promo(&mut self, raw_code: Option<&str>) -> PromoOutcome {
        let outcome = apply_promo(raw_code);
        match &outcome {
            PromoOutcome::Applied { promo, .. } => {
                log::info!("Promo {} applied ({} {})", promo.code, promo.kind, promo.value)
            }
            PromoOutcome::Cleared => log::info!("Promo cleared"),
            PromoOutcome::Invalid => log::info!("Rejected promo code"),
        }

        self.promo = outcome.promo().cloned();
        self.page.promo_feedback = outcome.feedback().to_string();
        let totals = self.totals();
        self.page.render_totals(&totals);
        outcome
    }

    // Search, sort, filter

    /// Handle typing in one of the search boxes
    pub fn search(&mut self, source: SearchSource, value: &str) {
        self.view.set_input(source, value);
        self.set_query(value);
    }

    /// Set the query and mirror it into the search box that is not focused
    pub fn set_query(&mut self, raw: &str) {
        let focused = self.focused_search();
        self.view.set_query(raw, focused, self.catalog.products());
    }

    pub fn set_sort(&mut self, key: Option<&str>) {
        self.view.set_sort(key, self.catalog.products());
    }

    pub fn toggle_chip(&mut self, index: usize) {
        self.view.toggle_chip(index, self.catalog.products());
    }

    fn focused_search(&self) -> Option<SearchSource> {
        let active = self.host.active_element()?;
        [SearchSource::Toolbar, SearchSource::Header]
            .into_iter()
            .find(|source| source.element_id() == active)
    }

    // Checkout modal

    pub fn open_checkout(&mut self) {
        self.modal.open(&mut self.host);
    }

    pub fn close_checkout(&mut self) {
        self.modal.close(&mut self.host);
    }

    /// Close the modal and report the order. Nothing is submitted.
    pub fn confirm_checkout(&mut self) -> Option<OrderConfirmation> {
        if !self.modal.is_open() {
            return None;
        }
        self.modal.close(&mut self.host);

        let confirmation = OrderConfirmation {
            confirmed_at: Utc::now(),
            item_count: self.cart.total_qty(),
            totals: self.totals(),
        };
        self.page.notice = Some(ORDER_CONFIRMED_NOTICE.to_string());

        log::info!(
            "Order confirmed: {} items, grand total {}",
            confirmation.item_count,
            confirmation.totals.grand
        );
        Some(confirmation)
    }

    /// Global keydown; Tab presses the modal does not intercept fall through to normal navigation
    pub fn key_down(&mut self, event: KeyEvent) -> KeyHandling {
        let handling = self.modal.on_key(&mut self.host, event);
        if event.key == Key::Tab && !handling.prevent_default {
            self.host.advance_focus(event.shift);
        }
        handling
    }

    // Rendering and accessors

    fn render_cart(&mut self) {
        let totals = self.totals();
        self.page.render_cart(self.cart.lines(), &totals);
    }

    /// Totals derived from the current cart, promo and tax rate
    pub fn totals(&self) -> Totals {
        compute_totals(self.cart.lines(), self.promo.as_ref(), self.tax_rate)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog mutations are not re-rendered into the cart until the next add
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn promo(&self) -> Option<&Promo> {
        self.promo.as_ref()
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Identifiers of the products currently displayed, in display order
    pub fn visible_products(&self) -> Vec<&str> {
        self.view.visible_ids(self.catalog.products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CartEntry, ProductEntry};
    use rust_decimal_macros::dec;

    fn snapshot() -> PageSnapshot {
        let entry = |name: &str, price: &str| ProductEntry {
            name: Some(name.to_string()),
            price_text: Some(price.to_string()),
            ..Default::default()
        };
        PageSnapshot {
            products: vec![entry("Mug", "$10.00"), entry("Tea", "$5.00")],
            cart: vec![CartEntry {
                name: Some("Tea".to_string()),
                qty_text: Some("2".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn initial_render_reflects_seeded_cart() {
        let storefront = Storefront::new(&snapshot(), dec!(0.083), Document::new(Vec::new()));

        assert_eq!(storefront.cart().len(), 1);
        assert_eq!(storefront.page().badge_text, "2");
        assert!(!storefront.page().empty_cart_visible);
        assert!(storefront.page().totals_html.contains("$10.00"));
        assert_eq!(storefront.visible_products(), vec!["mug", "tea"]);
    }

    #[test]
    fn promo_feedback_and_totals_render_together() {
        let mut storefront = Storefront::new(&snapshot(), dec!(0), Document::new(Vec::new()));

        storefront.apply_promo(Some("save10"));
        assert_eq!(storefront.page().promo_feedback, "Applied: SAVE10 (10% off).");
        assert!(storefront.page().totals_html.contains("− $1.00"));

        storefront.apply_promo(Some("nope"));
        assert!(storefront.promo().is_none());
        assert_eq!(storefront.page().promo_feedback, "Sorry, that code is not valid.");
        assert!(storefront.page().totals_html.contains("<div>Discount</div><div>$0.00</div>"));
    }

    #[test]
    fn confirm_requires_open_modal() {
        let mut storefront = Storefront::new(&snapshot(), dec!(0.083), Document::new(Vec::new()));

        assert_eq!(storefront.dispatch(Action::ConfirmCheckout), Dispatched::Ignored);
        assert!(storefront.page().notice.is_none());
    }
}
