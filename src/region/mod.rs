//! European statistical regions: NUTS hierarchy and local administrative
//! units (LAU).
//!
//! ```
//! use masterdata::region::{LauRegistry, NutsRegistry};
//!
//! let nuts = NutsRegistry::bundled().unwrap();
//! let lau = LauRegistry::bundled().unwrap();
//! let graz = lau.get("60101").unwrap();
//! assert_eq!(nuts.get(&graz.nuts_code).unwrap().display_name(), "Graz");
//! ```

mod lau;
mod nuts;

pub use lau::{LauItem, LauRegistry};
pub use nuts::{MAX_NUTS_LEVEL, NutsItem, NutsRegistry};
