// src/ui/dispatch.rs
use crate::domain::models::OrderConfirmation;
use crate::ui::modal::{KeyEvent, KeyHandling};
use crate::ui::search::SearchSource;

/// Every UI action the storefront reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddToCart { product_id: String, qty: u32 },
    IncreaseQty { id: String },
    DecreaseQty { id: String },
    /// Raw text from the quantity input
    SetQty { id: String, raw: String },
    RemoveFromCart { id: String },
    ApplyPromo { code: Option<String> },
    Search { source: SearchSource, value: String },
    Sort { key: Option<String> },
    ToggleChip { index: usize },
    OpenCheckout,
    CloseCheckout,
    ConfirmCheckout,
    KeyDown(KeyEvent),
}

impl Action {
    /// Interpret a click on a cart row control from its accessible label
    pub fn from_cart_control(row_id: &str, label: &str, is_remove: bool) -> Option<Self> {
        let id = row_id.to_string();
        if is_remove {
            return Some(Action::RemoveFromCart { id });
        }

        let label = label.to_lowercase();
        if label.contains("decrease") {
            Some(Action::DecreaseQty { id })
        } else if label.contains("increase") {
            Some(Action::IncreaseQty { id })
        } else if label.contains("remove") {
            Some(Action::RemoveFromCart { id })
        } else {
            None
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddToCart { .. } => "add-to-cart",
            Action::IncreaseQty { .. } => "increase-qty",
            Action::DecreaseQty { .. } => "decrease-qty",
            Action::SetQty { .. } => "set-qty",
            Action::RemoveFromCart { .. } => "remove-from-cart",
            Action::ApplyPromo { .. } => "apply-promo",
            Action::Search { .. } => "search",
            Action::Sort { .. } => "sort",
            Action::ToggleChip { .. } => "toggle-chip",
            Action::OpenCheckout => "open-checkout",
            Action::CloseCheckout => "close-checkout",
            Action::ConfirmCheckout => "confirm-checkout",
            Action::KeyDown(_) => "key-down",
        }
    }
}

/// What a dispatched action did
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    /// State changed (or was left alone) and the page was rebuilt
    Rendered,
    Key(KeyHandling),
    OrderConfirmed(OrderConfirmation),
    /// Nothing to do in the current state
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_controls_map_to_actions() {
        assert_eq!(
            Action::from_cart_control("mug", "Decrease quantity", false),
            Some(Action::DecreaseQty { id: "mug".to_string() })
        );
        assert_eq!(
            Action::from_cart_control("mug", "Increase quantity", false),
            Some(Action::IncreaseQty { id: "mug".to_string() })
        );
        assert_eq!(
            Action::from_cart_control("mug", "", true),
            Some(Action::RemoveFromCart { id: "mug".to_string() })
        );
        assert_eq!(Action::from_cart_control("mug", "Quantity", false), None);
    }
}
