//! # billcraft
//!
//! Invoice generation library: validated invoice records, exact decimal
//! totals, Tera-based HTML rendering, and PDF output through an ordered
//! chain of renderer backends with automatic fallback.
//!
//! ## Quick start
//!
//! ```
//! use billcraft::{InvoiceBuilder, calculate_summary};
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), billcraft::InvoiceError> {
//! let invoice = InvoiceBuilder::new()
//!     .company("ACME Corp", "123 Business Street")
//!     .customer("Jane Doe", "jane@example.com")
//!     .add_item("Consulting", 2, dec!(49.99))
//!     .add_item("Hardware", 1, dec!(150))
//!     .tax_rate(dec!(0.18))
//!     .discount(dec!(10))
//!     .build()?;
//!
//! let summary = calculate_summary(&invoice.items, invoice.tax_rate, invoice.discount);
//! assert_eq!(summary.subtotal, dec!(249.98));
//! assert_eq!(summary.tax, dec!(45.00));
//! assert_eq!(summary.total, dec!(284.98));
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! | Feature  | Description                                              |
//! |----------|----------------------------------------------------------|
//! | `core`   | Types, validation, totals, numbering, config, journal    |
//! | `render` | HTML rendering with Tera templates                       |
//! | `pdf`    | PDF backends (wkhtmltopdf + structured layout) and the generator |
//! | `input`  | JSON and spreadsheet (CSV) input adapters                |
//! | `full`   | All of the above (default)                               |
//!
//! All monetary arithmetic uses [`rust_decimal::Decimal`]; totals are
//! rounded half-up to 2 decimal places only at the final step.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "input")]
pub mod input;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "core")]
pub use crate::core::*;
