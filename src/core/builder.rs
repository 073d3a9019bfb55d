use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{InvoiceError, validation_failure};
use super::types::*;
use super::validation::validate_invoice;

/// Builder for constructing valid invoice records — the typed equivalent of
/// manual data entry.
///
/// ```
/// use billcraft::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new()
///     .company("ACME Corp", "123 Business Street, Suite 100")
///     .customer("Jane Doe", "jane@example.com")
///     .add_item("Consulting", 2, dec!(49.99))
///     .tax_rate(dec!(0.18))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct InvoiceBuilder {
    company: Company,
    customer: Customer,
    items: Vec<LineItem>,
    tax_rate: Decimal,
    discount: Decimal,
    number: Option<String>,
    issue_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
}

impl InvoiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.company = Company {
            name: name.into(),
            address: address.into(),
        };
        self
    }

    pub fn customer(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.customer = Customer {
            name: name.into(),
            email: email.into(),
        };
        self
    }

    pub fn add_item(mut self, name: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        self.items.push(LineItem::new(name, quantity, price));
        self
    }

    pub fn items(mut self, items: Vec<LineItem>) -> Self {
        self.items = items;
        self
    }

    /// Tax rate as a fraction, e.g. `dec!(0.18)` for 18%.
    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Absolute discount amount.
    pub fn discount(mut self, amount: Decimal) -> Self {
        self.discount = amount;
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Build the invoice, running validation.
    /// Returns all validation errors (not just the first) joined into one.
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let invoice = self.build_unchecked();
        let errors = validate_invoice(&invoice);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }
        Ok(invoice)
    }

    /// Build without validation — useful for tests or importing external data
    /// that will be validated later.
    pub fn build_unchecked(self) -> Invoice {
        Invoice {
            company: self.company,
            customer: self.customer,
            items: self.items,
            tax_rate: self.tax_rate,
            discount: self.discount,
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
        }
    }
}
