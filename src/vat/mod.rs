//! VAT identification numbers and UN/EDIFACT tax code lists.
//!
//! VATINs are checked by structure only (country prefix plus national
//! pattern); there is no online lookup.
//!
//! # Example
//!
//! ```
//! use masterdata::vat::*;
//!
//! let structures = VatinStructures::bundled().unwrap();
//! assert!(structures.is_valid_vatin("DE123456789"));
//! assert_eq!(TaxCategory::from_code("AE"), Some(TaxCategory::ReverseCharge));
//! assert_eq!(tax_type("VAT").unwrap().name, "Value added tax");
//! ```

mod tax_category;
mod tax_type;
mod vatin;

pub use tax_category::TaxCategory;
pub use tax_type::{TaxType, tax_type, tax_types};
pub use vatin::{Vatin, VatinError, VatinStructure, VatinStructures, normalize_vatin};
