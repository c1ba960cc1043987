// src/ui/render.rs
use crate::domain::models::{CartLine, Totals};
use crate::format::{escape_html, format_currency};
use rust_decimal::Decimal;

/// Everything the controller writes back to the page. Each render rebuilds
/// its regions from state, never from what was rendered before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Markup of the cart rows, in cart order
    pub cart_items_html: String,
    pub empty_cart_visible: bool,
    pub badge_text: String,
    pub badge_label: String,
    /// The four label/value rows of the totals grid
    pub totals_html: String,
    pub promo_feedback: String,
    /// Transient message shown after checkout confirmation
    pub notice: Option<String>,
}

impl Page {
    /// Rebuild cart rows, badge and totals
    pub fn render_cart(&mut self, lines: &[CartLine], totals: &Totals) {
        self.empty_cart_visible = lines.is_empty();
        self.cart_items_html = lines.iter().map(render_cart_row).collect();
        self.render_badge(lines);
        self.render_totals(totals);
    }

    pub fn render_badge(&mut self, lines: &[CartLine]) {
        let total_qty: u32 = lines.iter().map(|line| line.qty).sum();
        self.badge_text = total_qty.to_string();
        self.badge_label = format!("items in cart: {}", total_qty);
    }

    pub fn render_totals(&mut self, totals: &Totals) {
        self.totals_html = render_totals(totals);
    }
}

/// Markup for one cart line
pub fn render_cart_row(line: &CartLine) -> String {
    let name = escape_html(&line.name);
    [
        format!(r#"<div class="cart-item" data-id="{}">"#, escape_html(&line.id)),
        format!(
            r#"<img src="{}" alt="{} thumbnail" />"#,
            escape_html(&line.image),
            name
        ),
        r#"<div class="details">"#.to_string(),
        format!(r#"  <div class="name">{}</div>"#, name),
        format!(
            r#"  <div class="unit">{} each</div>"#,
            escape_html(&format_currency(line.price))
        ),
        "</div>".to_string(),
        r#"<div class="qty" aria-label="Quantity controls">"#.to_string(),
        r#"  <button class="icon-btn" type="button" aria-label="Decrease quantity">−</button>"#
            .to_string(),
        format!(
            r#"  <input class="qty-input" type="number" inputmode="numeric" min="1" value="{}" aria-label="Quantity" />"#,
            line.qty
        ),
        r#"  <button class="icon-btn" type="button" aria-label="Increase quantity">+</button>"#
            .to_string(),
        "</div>".to_string(),
        format!(
            r#"<div class="line-total">{}</div>"#,
            escape_html(&format_currency(line.line_total()))
        ),
        r#"<button class="icon-btn remove" type="button" aria-label="Remove item">✕</button>"#
            .to_string(),
        "</div>".to_string(),
    ]
    .concat()
}

/// Markup for the totals grid
pub fn render_totals(totals: &Totals) -> String {
    let discount_sign = if totals.discount > Decimal::ZERO { "− " } else { "" };
    [
        format!(
            "<div>Subtotal</div><div>{}</div>",
            escape_html(&format_currency(totals.subtotal))
        ),
        format!(
            "<div>Discount</div><div>{}{}</div>",
            discount_sign,
            escape_html(&format_currency(totals.discount))
        ),
        format!(
            "<div>Tax</div><div>{}</div>",
            escape_html(&format_currency(totals.tax))
        ),
        format!(
            r#"<div class="grand">Grand Total</div><div class="grand">{}</div>"#,
            escape_html(&format_currency(totals.grand))
        ),
    ]
    .concat()
}
