//! International vehicle registration codes (distinguishing signs).

mod signs;

pub use signs::VehicleSigns;
