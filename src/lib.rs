//! # masterdata
//!
//! Reference data and validators for business applications: IBAN/BIC,
//! VAT identification numbers, UN/EDIFACT tax codes, postal code formats,
//! NUTS/LAU regions, EAN/UPC/GTIN/SSCC and ISBN check digits, German
//! Leitweg-IDs, Incoterms, DIN/ISO paper sizes, vehicle country signs and
//! tenant bookkeeping.
//!
//! Checksum predicates never fail: malformed input is simply invalid.
//! Registries are built explicitly (from bundled data or caller-supplied
//! XML) and are read-only afterwards, see [`MasterData`].
//!
//! ## Quick Start
//!
//! ```rust
//! use masterdata::MasterData;
//! use masterdata::leitweg::is_leitweg_id_valid;
//!
//! let data = MasterData::load().unwrap();
//! assert!(data.iban.is_valid_iban("GB82 WEST 1234 5698 7654 32"));
//! assert!(data.postal.is_valid_postal_code("PL", "00-950"));
//! assert!(!data.postal.is_valid_postal_code("PL", "00950"));
//! assert!(is_leitweg_id_valid("04011000-1234512345-06"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Countries, currencies, units, check-digit arithmetic, errors |
//! | `bank` | IBAN country layouts, IBAN and BIC validation |
//! | `barcode` | EAN-8/13, UPC-A/E, GTIN-14, SSCC, ISBN-10/13 |
//! | `vat` | VATIN structures, UNTDID 5305 and 5153 code lists |
//! | `leitweg` | German Leitweg-ID |
//! | `postal` | Postal code formats per country |
//! | `region` | NUTS hierarchy and LAU |
//! | `trade` | Incoterms, exchange ratios, price graduations |
//! | `paper` | DIN/ISO paper sizes |
//! | `vehicle` | International vehicle registration codes |
//! | `tenancy` | Tenants, bookkeeping, e-mail and phone value objects |
//! | `all` (default) | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "bank")]
pub mod bank;

#[cfg(feature = "barcode")]
pub mod barcode;

#[cfg(feature = "vat")]
pub mod vat;

#[cfg(feature = "leitweg")]
pub mod leitweg;

#[cfg(feature = "postal")]
pub mod postal;

#[cfg(feature = "region")]
pub mod region;

#[cfg(feature = "trade")]
pub mod trade;

#[cfg(feature = "paper")]
pub mod paper;

#[cfg(feature = "vehicle")]
pub mod vehicle;

#[cfg(feature = "tenancy")]
pub mod tenancy;

#[cfg(all(
    feature = "bank",
    feature = "vat",
    feature = "postal",
    feature = "region",
    feature = "vehicle"
))]
mod master_data;

#[cfg(all(
    feature = "bank",
    feature = "vat",
    feature = "postal",
    feature = "region",
    feature = "vehicle"
))]
pub use master_data::{MasterData, MasterDataBuilder};

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
