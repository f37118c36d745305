//! Trade terms and pricing: Incoterms, dated exchange ratios and
//! quantity-based price graduations.

mod exchange;
mod incoterms;
mod price;

pub use exchange::{ExchangeRatio, ExchangeRatioList};
pub use incoterms::{Incoterm, IncotermsVersion, TransportMode};
pub use price::{Price, PriceGraduation, PriceGraduationItem};
