// src/cart/promo.rs
use crate::domain::models::{Promo, PromoKind};
use crate::format::round2;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const NO_PROMO_FEEDBACK: &str = "No promo applied.";
pub const INVALID_PROMO_FEEDBACK: &str = "Sorry, that code is not valid.";

/// Result of submitting a promo code
#[derive(Debug, Clone, PartialEq)]
pub enum PromoOutcome {
    /// Empty input; any active promo is dropped
    Cleared,
    /// Known code; replaces any active promo
    Applied { promo: Promo, feedback: &'static str },
    /// Unknown code; any active promo is dropped
    Invalid,
}

impl PromoOutcome {
    /// The promo that should be active afterwards
    pub fn promo(&self) -> Option<&Promo> {
        match self {
            PromoOutcome::Applied { promo, .. } => Some(promo),
            _ => None,
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            PromoOutcome::Cleared => NO_PROMO_FEEDBACK,
            PromoOutcome::Applied { feedback, .. } => *feedback,
            PromoOutcome::Invalid => INVALID_PROMO_FEEDBACK,
        }
    }
}

/// Normalize and look up a user-entered code
pub fn apply_promo(raw_code: Option<&str>) -> PromoOutcome {
    let normalized = raw_code.unwrap_or_default().trim().to_uppercase();
    if normalized.is_empty() {
        return PromoOutcome::Cleared;
    }

    match lookup(&normalized) {
        Some((promo, feedback)) => PromoOutcome::Applied { promo, feedback },
        None => PromoOutcome::Invalid,
    }
}

// Fixed code table
fn lookup(code: &str) -> Option<(Promo, &'static str)> {
    let (kind, value, feedback) = match code {
        "SAVE10" => (PromoKind::Percent, dec!(10), "Applied: SAVE10 (10% off)."),
        // No shipping line is modelled, so this discount is always zero
        "FREESHIP" => (
            PromoKind::Fixed,
            dec!(0),
            "Applied: FREESHIP (free shipping at fulfillment).",
        ),
        _ => return None,
    };

    Some((
        Promo {
            code: code.to_string(),
            kind,
            value,
        },
        feedback,
    ))
}

/// Discount a promo grants on `subtotal`; never more than the subtotal
pub fn compute_discount(promo: Option<&Promo>, subtotal: Decimal) -> Decimal {
    let promo = match promo {
        Some(promo) => promo,
        None => return Decimal::ZERO,
    };

    match promo.kind {
        PromoKind::Percent => round2(promo.value / dec!(100) * subtotal),
        PromoKind::Fixed => round2(promo.value.min(subtotal)).max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_and_space_insensitive() {
        let outcome = apply_promo(Some("  save10 "));
        let promo = outcome.promo().unwrap();
        assert_eq!(promo.code, "SAVE10");
        assert_eq!(promo.kind, PromoKind::Percent);
        assert_eq!(promo.value, dec!(10));
        assert_eq!(outcome.feedback(), "Applied: SAVE10 (10% off).");
        assert_eq!(apply_promo(Some("SAVE10")), outcome);
    }

    #[test]
    fn empty_code_clears() {
        assert_eq!(apply_promo(Some("   ")), PromoOutcome::Cleared);
        assert_eq!(apply_promo(None), PromoOutcome::Cleared);
        assert_eq!(PromoOutcome::Cleared.feedback(), NO_PROMO_FEEDBACK);
    }

    #[test]
    fn unknown_code_is_invalid() {
        let outcome = apply_promo(Some("BOGUS"));
        assert_eq!(outcome, PromoOutcome::Invalid);
        assert!(outcome.promo().is_none());
        assert_eq!(outcome.feedback(), INVALID_PROMO_FEEDBACK);
    }

    #[test]
    fn percent_discount() {
        let promo = apply_promo(Some("SAVE10")).promo().cloned();
        assert_eq!(compute_discount(promo.as_ref(), dec!(25.00)), dec!(2.50));
        assert_eq!(compute_discount(promo.as_ref(), dec!(0.05)), dec!(0.01));
        assert_eq!(compute_discount(None, dec!(25.00)), Decimal::ZERO);
    }

    #[test]
    fn freeship_is_a_zero_discount() {
        let promo = apply_promo(Some("freeship")).promo().cloned();
        assert_eq!(promo.as_ref().map(|p| p.kind), Some(PromoKind::Fixed));
        assert_eq!(compute_discount(promo.as_ref(), dec!(80.00)), Decimal::ZERO);
    }

    #[test]
    fn fixed_discount_is_capped_at_subtotal() {
        let promo = Promo {
            code: "TAKE5".to_string(),
            kind: PromoKind::Fixed,
            value: dec!(5),
        };
        assert_eq!(compute_discount(Some(&promo), dec!(20)), dec!(5));
        assert_eq!(compute_discount(Some(&promo), dec!(3.40)), dec!(3.40));
        assert_eq!(compute_discount(Some(&promo), Decimal::ZERO), Decimal::ZERO);
    }
}
