//! Input adapters that parse external data into [`Invoice`](crate::core::Invoice)
//! records.
//!
//! Adapters only parse — structural problems surface as
//! [`InvoiceError::Input`](crate::core::InvoiceError::Input), and the parsed
//! record still goes through [`validate_invoice`](crate::core::validate_invoice)
//! before generation.

mod json;
mod sheet;

pub use json::*;
pub use sheet::*;
