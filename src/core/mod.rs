//! Core invoice types, validation, totals, numbering, and configuration.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Records are validated at the boundary before entering calculation or
//! rendering.

mod builder;
mod calc;
mod config;
mod error;
mod journal;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use calc::*;
pub use config::*;
pub use error::*;
pub use journal::*;
pub use numbering::*;
pub use types::*;
pub use validation::*;
