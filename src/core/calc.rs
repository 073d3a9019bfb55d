use rust_decimal::Decimal;

use super::types::{LineItem, Summary};

/// Compute invoice totals from line items, a fractional tax rate, and an
/// absolute discount:
///
/// ```text
/// subtotal = Σ(quantity × price)
/// tax      = subtotal × tax_rate
/// total    = subtotal + tax − discount
/// ```
///
/// Each reported field is rounded half-up to 2 decimal places
/// independently; intermediates stay exact. Deterministic, no clamping of
/// negative totals — that is the caller's responsibility.
///
/// Expects inputs within the bounds enforced by
/// [`validate_invoice`](super::validate_invoice) ([`MAX_QUANTITY`] and
/// [`MAX_AMOUNT`]); amounts past those bounds are rejected there precisely
/// because they could overflow this arithmetic.
///
/// [`MAX_QUANTITY`]: super::MAX_QUANTITY
/// [`MAX_AMOUNT`]: super::MAX_AMOUNT
pub fn calculate_summary(items: &[LineItem], tax_rate: Decimal, discount: Decimal) -> Summary {
    let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
    let tax = subtotal * tax_rate;
    let total = subtotal + tax - discount;

    Summary {
        subtotal: round_half_up(subtotal, 2),
        tax: round_half_up(tax, 2),
        discount: round_half_up(discount, 2),
        total: round_half_up(total, 2),
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
