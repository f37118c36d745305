//! DIN/ISO paper sizes with pixel and point conversion.
//!
//! ```
//! use masterdata::paper::PaperSize;
//!
//! assert_eq!(PaperSize::A4.width_px(300), 2480);
//! ```

mod din;

pub use din::{PaperSeries, PaperSize};
