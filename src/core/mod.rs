//! Shared code tables, check-digit arithmetic and error types.
//!
//! Every other module builds on the ISO country and currency tables and on
//! the error types defined here.

mod change;
pub mod checksum;
pub mod countries;
pub mod currencies;
mod error;
pub mod units;
#[cfg(any(feature = "postal", feature = "region"))]
pub mod xml;

pub use change::*;
pub use countries::{is_eu_member_state, is_known_country_code};
pub use currencies::{Currency, currency, is_known_currency_code, round_to_currency};
pub use error::*;
pub use units::{Unit, UnitSector, is_known_unit_code};
