//! Spreadsheet (CSV) line-item import.
//!
//! Spreadsheets carry only line items, so company, customer, tax rate, and
//! discount come from [`SheetDefaults`]. The built-in defaults are
//! deliberately generic placeholders — callers with real party data should
//! override them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::core::{Company, Customer, Invoice, InvoiceError, LineItem};

/// Invoice-level values a spreadsheet cannot supply.
#[derive(Debug, Clone)]
pub struct SheetDefaults {
    pub company: Company,
    pub customer: Customer,
    /// Applied to every imported invoice (18% unless overridden).
    pub tax_rate: Decimal,
    pub discount: Decimal,
}

impl Default for SheetDefaults {
    fn default() -> Self {
        Self {
            company: Company {
                name: "Spreadsheet Import".into(),
                address: "Auto Generated".into(),
            },
            customer: Customer {
                name: "Spreadsheet Client".into(),
                email: "client@example.com".into(),
            },
            tax_rate: dec!(0.18),
            discount: Decimal::ZERO,
        }
    }
}

/// Expected header row: `Item,Quantity,Price`.
#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "Price")]
    price: Decimal,
}

/// Parse line items from CSV data and assemble an invoice with `defaults`.
///
/// Rows with a malformed quantity or price are rejected with the row's
/// position in the error. An empty sheet parses successfully and fails
/// validation downstream.
pub fn from_csv_reader<R: Read>(reader: R, defaults: &SheetDefaults) -> Result<Invoice, InvoiceError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut items = Vec::new();

    for (idx, row) in csv_reader.deserialize::<SheetRow>().enumerate() {
        let row = row.map_err(|e| {
            // csv reports 1-based record numbers itself; keep ours aligned
            InvoiceError::Input(format!("spreadsheet row {}: {e}", idx + 1))
        })?;
        items.push(LineItem::new(row.item, row.quantity, row.price));
    }

    Ok(Invoice {
        company: defaults.company.clone(),
        customer: defaults.customer.clone(),
        items,
        tax_rate: defaults.tax_rate,
        discount: defaults.discount,
        number: None,
        issue_date: None,
        due_date: None,
    })
}

/// Read and parse line items from a CSV file.
pub fn from_csv_file(path: &Path, defaults: &SheetDefaults) -> Result<Invoice, InvoiceError> {
    let file = File::open(path)?;
    from_csv_reader(file, defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_rows_with_defaults() {
        let csv = "Item,Quantity,Price\nConsulting,2,49.99\nHardware,1,150.00\n";
        let invoice = from_csv_reader(csv.as_bytes(), &SheetDefaults::default()).unwrap();

        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].name, "Consulting");
        assert_eq!(invoice.items[0].quantity, 2);
        assert_eq!(invoice.items[0].price, dec!(49.99));
        assert_eq!(invoice.tax_rate, dec!(0.18));
        assert_eq!(invoice.company.name, "Spreadsheet Import");
    }

    #[test]
    fn custom_defaults_override_placeholders() {
        let defaults = SheetDefaults {
            company: Company {
                name: "ACME Corp".into(),
                address: "HQ".into(),
            },
            tax_rate: dec!(0.07),
            ..SheetDefaults::default()
        };
        let csv = "Item,Quantity,Price\nWidget,1,10\n";
        let invoice = from_csv_reader(csv.as_bytes(), &defaults).unwrap();

        assert_eq!(invoice.company.name, "ACME Corp");
        assert_eq!(invoice.tax_rate, dec!(0.07));
    }

    #[test]
    fn malformed_quantity_is_an_input_error() {
        let csv = "Item,Quantity,Price\nWidget,two,10\n";
        let err = from_csv_reader(csv.as_bytes(), &SheetDefaults::default()).unwrap_err();
        assert!(matches!(err, InvoiceError::Input(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn empty_sheet_parses_with_no_items() {
        let csv = "Item,Quantity,Price\n";
        let invoice = from_csv_reader(csv.as_bytes(), &SheetDefaults::default()).unwrap();
        assert!(invoice.items.is_empty());
    }
}
