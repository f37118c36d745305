//! Country-specific postal code formats.
//!
//! Formats are declared with placeholder tokens (`N` digit, `A` letter,
//! `C` country code character) and compiled to anchored regular
//! expressions. Countries without any information are treated as valid so
//! that missing data never blocks data entry.
//!
//! ```
//! use masterdata::postal::PostalCodeRegistry;
//!
//! let registry = PostalCodeRegistry::bundled().unwrap();
//! assert!(registry.is_valid_postal_code("AT", "1010"));
//! assert!(!registry.is_valid_postal_code("DE", "1010"));
//! assert!(registry.is_valid_postal_code("ZZ", "whatever"));
//! ```

mod format;
mod registry;

pub use format::{PostalCodeFormat, PostalCodeToken};
pub use registry::{PostalCodeCountry, PostalCodeRegistry};
