// src/cart/totals.rs
use crate::cart::promo::compute_discount;
use crate::domain::models::{CartLine, Promo, Totals};
use crate::format::round2;
use rust_decimal::Decimal;

/// Recompute totals from the authoritative cart lines.
/// Arithmetic saturates at the decimal range instead of overflowing.
pub fn compute_totals(lines: &[CartLine], promo: Option<&Promo>, tax_rate: Decimal) -> Totals {
    let subtotal = lines
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total()));
    let discount = compute_discount(promo, subtotal);
    let taxable = subtotal.saturating_sub(discount).max(Decimal::ZERO);
    let tax = round2(taxable.saturating_mul(tax_rate));
    let grand = round2(taxable.saturating_add(tax));

    Totals {
        subtotal: round2(subtotal),
        discount,
        taxable,
        tax,
        grand,
    }
}
