//! German Leitweg-ID: routing identifier for invoices to public bodies.
//!
//! Structure is `<coarse>-[<fine>-]<checksum>` where the two-digit checksum
//! is ISO 7064 MOD 97-10 over the routing parts.
//!
//! ```
//! use masterdata::leitweg::*;
//!
//! assert!(is_leitweg_id_valid("04011000-1234512345-06"));
//! assert!(!is_leitweg_id_valid("04011000-1234512345-07"));
//! ```

mod id;

pub use id::*;
