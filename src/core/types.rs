use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice record — the input to calculation and rendering.
///
/// `company`, `customer`, and `items` are required on deserialization;
/// everything else defaults. Document identity (`number`, `issue_date`,
/// `due_date`) is optional here and resolved into a [`DocumentMeta`] at
/// generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Issuing company block (may be empty for minimal records).
    pub company: Company,
    /// Billed customer block (may be empty for minimal records).
    pub customer: Customer,
    /// Billable line items. Must be non-empty to validate.
    pub items: Vec<LineItem>,
    /// Tax rate as a fraction (e.g. 0.18 for 18%).
    #[serde(default)]
    pub tax_rate: Decimal,
    /// Absolute discount amount deducted after tax.
    #[serde(default)]
    pub discount: Decimal,
    /// Invoice number. Defaults to a timestamp-derived number when absent.
    #[serde(default, rename = "invoice_no")]
    pub number: Option<String>,
    /// Issue date (ISO 8601 in JSON). Defaults to today when absent.
    #[serde(default, rename = "invoice_date")]
    pub issue_date: Option<NaiveDate>,
    /// Payment due date. Defaults to issue date + configured due days.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Issuing company as it appears on the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Billed customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// One billable entry with quantity and unit price.
///
/// All three fields are required on deserialization — a row missing `price`
/// is rejected at the input boundary. Immutable once validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Extended amount: quantity × unit price, unrounded.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// Computed invoice totals. Each field is rounded to 2 decimal places
/// independently; derived by [`calculate_summary`](super::calculate_summary)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Resolved document identity: number and dates with defaults filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl DocumentMeta {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            due_date,
        }
    }

    /// Resolve document identity from an invoice, filling defaults:
    /// a timestamp-derived number, today's date, and today + `default_due_days`.
    pub fn resolve(invoice: &Invoice, default_due_days: i64) -> Self {
        let now = Local::now();
        let today = now.date_naive();

        let number = invoice
            .number
            .clone()
            .unwrap_or_else(|| format!("INV-{:05}", now.timestamp().rem_euclid(100_000)));
        let issue_date = invoice.issue_date.unwrap_or(today);
        let due_date = invoice
            .due_date
            .unwrap_or_else(|| issue_date + chrono::Duration::days(default_due_days));

        Self {
            number,
            issue_date,
            due_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_is_quantity_times_price() {
        let item = LineItem::new("Widget", 3, dec!(19.99));
        assert_eq!(item.line_total(), dec!(59.97));
    }

    #[test]
    fn resolve_keeps_explicit_meta() {
        let invoice = Invoice {
            company: Company::default(),
            customer: Customer::default(),
            items: vec![LineItem::new("A", 1, dec!(10))],
            tax_rate: Decimal::ZERO,
            discount: Decimal::ZERO,
            number: Some("INV-00042".into()),
            issue_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 31),
        };

        let meta = DocumentMeta::resolve(&invoice, 30);
        assert_eq!(meta.number, "INV-00042");
        assert_eq!(meta.issue_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(meta.due_date, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
    }

    #[test]
    fn resolve_defaults_due_date_from_issue_date() {
        let invoice = Invoice {
            company: Company::default(),
            customer: Customer::default(),
            items: vec![LineItem::new("A", 1, dec!(10))],
            tax_rate: Decimal::ZERO,
            discount: Decimal::ZERO,
            number: None,
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 15),
            due_date: None,
        };

        let meta = DocumentMeta::resolve(&invoice, 30);
        assert_eq!(meta.due_date, NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
        assert!(meta.number.starts_with("INV-"));
    }
}
