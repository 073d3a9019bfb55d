use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::Invoice;

/// Largest accepted quantity per line item.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Largest accepted money amount (unit price, discount).
///
/// Together with [`MAX_QUANTITY`] this keeps every derived amount far inside
/// the 96-bit `Decimal` mantissa, so summation and tax multiplication cannot
/// overflow downstream in `calculate_summary`.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// Validate an invoice record before calculation and rendering.
/// Returns all validation errors found (not just the first). Pure — the
/// record is never transformed.
///
/// Missing required fields (`company`, `customer`, `items`, per-item
/// `name`/`quantity`/`price`) are rejected earlier, at the typed
/// deserialization boundary.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "item list must not be empty",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        let prefix = format!("items[{i}]");

        if item.name.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.name"),
                "item name must not be empty",
            ));
        }

        if item.quantity <= 0 {
            errors.push(ValidationError::new(
                format!("{prefix}.quantity"),
                format!("quantity must be positive, got {}", item.quantity),
            ));
        } else if item.quantity > MAX_QUANTITY {
            errors.push(ValidationError::new(
                format!("{prefix}.quantity"),
                format!("quantity must not exceed {MAX_QUANTITY}"),
            ));
        }

        if item.price.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.price"),
                format!("price must not be negative, got {}", item.price),
            ));
        } else if item.price > MAX_AMOUNT {
            errors.push(ValidationError::new(
                format!("{prefix}.price"),
                format!("price must not exceed {MAX_AMOUNT}"),
            ));
        }
    }

    if invoice.tax_rate.is_sign_negative() {
        errors.push(ValidationError::new(
            "tax_rate",
            format!("tax rate must not be negative, got {}", invoice.tax_rate),
        ));
    } else if invoice.tax_rate > Decimal::ONE {
        errors.push(ValidationError::new(
            "tax_rate",
            format!(
                "tax rate must be a fraction between 0 and 1, got {}",
                invoice.tax_rate
            ),
        ));
    }

    if invoice.discount.is_sign_negative() {
        errors.push(ValidationError::new(
            "discount",
            format!("discount must not be negative, got {}", invoice.discount),
        ));
    } else if invoice.discount > MAX_AMOUNT {
        errors.push(ValidationError::new(
            "discount",
            format!("discount must not exceed {MAX_AMOUNT}"),
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Company, Customer, LineItem};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn invoice_with_items(items: Vec<LineItem>) -> Invoice {
        Invoice {
            company: Company::default(),
            customer: Customer::default(),
            items,
            tax_rate: Decimal::ZERO,
            discount: Decimal::ZERO,
            number: None,
            issue_date: None,
            due_date: None,
        }
    }

    #[test]
    fn accepts_minimal_valid_record() {
        let invoice = invoice_with_items(vec![LineItem::new("A", 1, dec!(10))]);
        assert!(validate_invoice(&invoice).is_empty());
    }

    #[test]
    fn rejects_empty_item_list() {
        let invoice = invoice_with_items(vec![]);
        let errors = validate_invoice(&invoice);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "items");
    }

    #[test]
    fn rejects_zero_quantity() {
        let invoice = invoice_with_items(vec![LineItem::new("A", 0, dec!(10))]);
        let errors = validate_invoice(&invoice);
        assert!(errors.iter().any(|e| e.field == "items[0].quantity"));
    }

    #[test]
    fn rejects_negative_price() {
        let invoice = invoice_with_items(vec![LineItem::new("A", 1, dec!(-0.01))]);
        let errors = validate_invoice(&invoice);
        assert!(errors.iter().any(|e| e.field == "items[0].price"));
    }

    #[test]
    fn rejects_empty_item_name() {
        let invoice = invoice_with_items(vec![LineItem::new("  ", 1, dec!(10))]);
        let errors = validate_invoice(&invoice);
        assert!(errors.iter().any(|e| e.field == "items[0].name"));
    }

    #[test]
    fn collects_all_errors_not_just_first() {
        let invoice = invoice_with_items(vec![
            LineItem::new("", 0, dec!(-1)),
            LineItem::new("B", -2, dec!(5)),
        ]);
        let errors = validate_invoice(&invoice);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn rejects_price_beyond_supported_range() {
        // Near Decimal::MAX: summing such line totals would overflow
        let invoice = invoice_with_items(vec![LineItem::new(
            "A",
            2,
            Decimal::from_str_exact("79228162514264337593543950335").unwrap(),
        )]);
        let errors = validate_invoice(&invoice);
        assert!(errors.iter().any(|e| e.field == "items[0].price"));
    }

    #[test]
    fn rejects_quantity_beyond_supported_range() {
        let invoice = invoice_with_items(vec![LineItem::new("A", MAX_QUANTITY + 1, dec!(1))]);
        let errors = validate_invoice(&invoice);
        assert!(errors.iter().any(|e| e.field == "items[0].quantity"));
    }

    #[test]
    fn rejects_tax_rate_above_one() {
        let mut invoice = invoice_with_items(vec![LineItem::new("A", 1, dec!(10))]);
        invoice.tax_rate = dec!(1.01);
        let errors = validate_invoice(&invoice);
        assert!(errors.iter().any(|e| e.field == "tax_rate"));
    }

    #[test]
    fn accepts_values_at_the_bounds() {
        let mut invoice =
            invoice_with_items(vec![LineItem::new("A", MAX_QUANTITY, MAX_AMOUNT)]);
        invoice.tax_rate = Decimal::ONE;
        invoice.discount = MAX_AMOUNT;
        assert!(validate_invoice(&invoice).is_empty());
    }

    #[test]
    fn zero_price_is_allowed() {
        let invoice = invoice_with_items(vec![LineItem::new("Gratis", 1, Decimal::ZERO)]);
        assert!(validate_invoice(&invoice).is_empty());
    }
}
