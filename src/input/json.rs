//! JSON invoice records.

use std::fs;
use std::path::Path;

use crate::core::{Invoice, InvoiceError};

/// Parse an invoice from a JSON string.
///
/// Monetary fields accept both JSON numbers and decimal strings; dates are
/// ISO 8601 (`"2026-08-30"`). Malformed documents and missing required
/// fields (`company`, `customer`, `items`, per-item `price`) are rejected.
pub fn from_json_str(json: &str) -> Result<Invoice, InvoiceError> {
    serde_json::from_str(json).map_err(|e| InvoiceError::Input(format!("invalid invoice JSON: {e}")))
}

/// Read and parse an invoice from a JSON file.
pub fn from_json_file(path: &Path) -> Result<Invoice, InvoiceError> {
    let json = fs::read_to_string(path)?;
    from_json_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_full_record() {
        let invoice = from_json_str(
            r#"{
                "company": {"name": "ACME Corp", "address": "123 Business Street"},
                "customer": {"name": "Jane Doe", "email": "jane@example.com"},
                "items": [
                    {"name": "Consulting", "quantity": 2, "price": 49.99},
                    {"name": "Hardware", "quantity": 1, "price": "150.00"}
                ],
                "tax_rate": 0.18,
                "discount": 10,
                "invoice_no": "INV-2026-001",
                "invoice_date": "2026-08-30"
            }"#,
        )
        .unwrap();

        assert_eq!(invoice.company.name, "ACME Corp");
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].price, dec!(49.99));
        assert_eq!(invoice.items[1].price, dec!(150.00));
        assert_eq!(invoice.tax_rate, dec!(0.18));
        assert_eq!(invoice.number.as_deref(), Some("INV-2026-001"));
    }

    #[test]
    fn minimal_record_defaults_optional_fields() {
        let invoice = from_json_str(
            r#"{
                "company": {},
                "customer": {},
                "items": [{"name": "A", "quantity": 1, "price": 10}]
            }"#,
        )
        .unwrap();

        assert!(invoice.company.name.is_empty());
        assert_eq!(invoice.tax_rate, rust_decimal::Decimal::ZERO);
        assert!(invoice.number.is_none());
        assert!(invoice.issue_date.is_none());
    }

    #[test]
    fn item_without_price_is_rejected() {
        let err = from_json_str(
            r#"{
                "company": {},
                "customer": {},
                "items": [{"name": "A", "quantity": 1}]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, InvoiceError::Input(_)));
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let err = from_json_str("{not json").unwrap_err();
        assert!(matches!(err, InvoiceError::Input(_)));
        assert!(err.to_string().contains("invalid invoice JSON"));
    }
}
