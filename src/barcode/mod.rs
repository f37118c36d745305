//! GS1 barcode numbers (EAN-8, EAN-13, UPC-A, UPC-E, GTIN-14, SSCC) and ISBNs.
//!
//! # Example
//!
//! ```
//! use masterdata::barcode::*;
//!
//! assert_eq!(Ean8::new("1234567").with_correct_checksum().unwrap(), "12345670");
//! assert_eq!(
//!     compact_upca("042100005264", ChecksumMode::Check).unwrap().as_deref(),
//!     Some("04252614")
//! );
//! assert!(is_valid_isbn13("9780321312556"));
//! ```

mod gtin;
mod isbn;
mod upce;

pub use gtin::*;
pub use isbn::*;
pub use upce::*;
