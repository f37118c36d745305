//! IBAN and BIC validation.
//!
//! The IBAN checksum works on any string; full validation additionally
//! checks the country's BBAN layout from an [`IbanRegistry`].
//!
//! # Example
//!
//! ```
//! use masterdata::bank::*;
//!
//! assert!(is_valid_iban_checksum("DE89 3704 0044 0532 0130 00"));
//!
//! let registry = IbanRegistry::bundled().unwrap();
//! let iban = registry.parse("DE89370400440532013000").unwrap();
//! assert_eq!(iban.element(IbanElementKind::BankCode), Some("37040044"));
//! assert!(is_valid_bic("COBADEFFXXX"));
//! ```

mod bic;
mod country_data;
mod iban;

pub use bic::{Bic, is_valid_bic};
pub use country_data::{Charset, IbanCountryData, IbanElement, IbanElementKind, IbanRegistry};
pub use iban::{
    Iban, IbanError, calculate_iban_check_digits, electronic_iban, is_valid_iban_checksum,
};
