//! UN/CEFACT Recommendation 20 unit codes, grouped by sector.
//!
//! The full Rec 20 list has ~2000 codes; this covers the subset used in
//! commercial documents. Sectors follow the Rec 20 quantity groups, with
//! packaging units (Rec 21 "X" codes and their Rec 20 counterparts) as an
//! extra sector.

use serde::{Deserialize, Serialize};

/// Quantity group a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitSector {
    /// Length, area, volume, time, velocity.
    SpaceAndTime,
    /// Frequencies.
    Periodic,
    /// Mass, force, pressure, mechanical energy.
    Mechanics,
    /// Temperature.
    Heat,
    /// Electrical power, energy, voltage.
    Electricity,
    /// Sound levels.
    Acoustics,
    /// Counts and dimensionless ratios.
    Dimensionless,
    /// Packaging and shipping units.
    Packaging,
}

impl UnitSector {
    /// All sectors in declaration order.
    pub const ALL: [Self; 8] = [
        Self::SpaceAndTime,
        Self::Periodic,
        Self::Mechanics,
        Self::Heat,
        Self::Electricity,
        Self::Acoustics,
        Self::Dimensionless,
        Self::Packaging,
    ];

    /// Rec 20 group number (packaging has none and uses 99).
    pub fn group_number(self) -> u8 {
        match self {
            Self::SpaceAndTime => 1,
            Self::Periodic => 2,
            Self::Mechanics => 3,
            Self::Heat => 4,
            Self::Electricity => 5,
            Self::Acoustics => 7,
            Self::Dimensionless => 11,
            Self::Packaging => 99,
        }
    }
}

/// A Rec 20 unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Common code (e.g. "KGM").
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Quantity group.
    pub sector: UnitSector,
}

/// Check whether `code` is a known UN/CEFACT Rec 20 unit code.
pub fn is_known_unit_code(code: &str) -> bool {
    unit(code).is_some()
}

/// Look up a unit by its common code.
pub fn unit(code: &str) -> Option<&'static Unit> {
    UNITS
        .binary_search_by(|u| u.code.cmp(code))
        .ok()
        .map(|idx| &UNITS[idx])
}

/// All units in `sector`, in code order.
pub fn units_in_sector(sector: UnitSector) -> impl Iterator<Item = &'static Unit> {
    UNITS.iter().filter(move |u| u.sector == sector)
}

const fn u(code: &'static str, name: &'static str, sector: UnitSector) -> Unit {
    Unit { code, name, sector }
}

use UnitSector::*;

/// Sorted by code for binary search.
static UNITS: &[Unit] = &[
    u("2N", "decibel", Acoustics),
    u("4K", "kilovolt ampere (reactive)", Electricity),
    u("ANN", "year", SpaceAndTime),
    u("BAR", "bar", Mechanics),
    u("BLL", "barrel (US)", SpaceAndTime),
    u("BX", "box", Packaging),
    u("C62", "one", Dimensionless),
    u("CCM", "cubic centimetre", SpaceAndTime),
    u("CEL", "degree Celsius", Heat),
    u("CLT", "centilitre", SpaceAndTime),
    u("CMK", "square centimetre", SpaceAndTime),
    u("CMT", "centimetre", SpaceAndTime),
    u("CS", "case", Packaging),
    u("CT", "carton", Packaging),
    u("DAY", "day", SpaceAndTime),
    u("DMQ", "cubic decimetre", SpaceAndTime),
    u("DMT", "decimetre", SpaceAndTime),
    u("DZN", "dozen", Dimensionless),
    u("EA", "each", Dimensionless),
    u("FAH", "degree Fahrenheit", Heat),
    u("FOT", "foot", SpaceAndTime),
    u("GLL", "gallon (US)", SpaceAndTime),
    u("GM", "gram per square metre", Mechanics),
    u("GRM", "gram", Mechanics),
    u("GRO", "gross", Dimensionless),
    u("GWH", "gigawatt hour", Electricity),
    u("HAR", "hectare", SpaceAndTime),
    u("HLT", "hectolitre", SpaceAndTime),
    u("HTZ", "hertz", Periodic),
    u("HUR", "hour", SpaceAndTime),
    u("INH", "inch", SpaceAndTime),
    u("JOU", "joule", Mechanics),
    u("KEL", "kelvin", Heat),
    u("KGM", "kilogram", Mechanics),
    u("KGS", "kilogram per second", Mechanics),
    u("KHZ", "kilohertz", Periodic),
    u("KMH", "kilometre per hour", SpaceAndTime),
    u("KMT", "kilometre", SpaceAndTime),
    u("KVA", "kilovolt - ampere", Electricity),
    u("KVT", "kilovolt", Electricity),
    u("KWH", "kilowatt hour", Electricity),
    u("KWT", "kilowatt", Electricity),
    u("LBR", "pound", Mechanics),
    u("LM", "linear metre", SpaceAndTime),
    u("LPA", "litre of pure alcohol", Dimensionless),
    u("LS", "lump sum", Dimensionless),
    u("LTR", "litre", SpaceAndTime),
    u("MAW", "megawatt", Electricity),
    u("MBR", "millibar", Mechanics),
    u("MGM", "milligram", Mechanics),
    u("MHZ", "megahertz", Periodic),
    u("MIN", "minute [unit of time]", SpaceAndTime),
    u("MLT", "millilitre", SpaceAndTime),
    u("MMK", "square millimetre", SpaceAndTime),
    u("MMT", "millimetre", SpaceAndTime),
    u("MON", "month", SpaceAndTime),
    u("MQH", "cubic metre per hour", SpaceAndTime),
    u("MTK", "square metre", SpaceAndTime),
    u("MTQ", "cubic metre", SpaceAndTime),
    u("MTR", "metre", SpaceAndTime),
    u("MTS", "metre per second", SpaceAndTime),
    u("MWH", "megawatt hour (1000 kW.h)", Electricity),
    u("NAR", "number of articles", Dimensionless),
    u("NPR", "number of pairs", Dimensionless),
    u("P1", "percent", Dimensionless),
    u("PA", "packet", Packaging),
    u("PK", "pack", Packaging),
    u("PR", "pair", Dimensionless),
    u("RO", "roll", Packaging),
    u("SA", "sack", Packaging),
    u("SEC", "second [unit of time]", SpaceAndTime),
    u("SET", "set", Dimensionless),
    u("SMI", "mile (statute mile)", SpaceAndTime),
    u("ST", "sheet", Packaging),
    u("STN", "ton (US) or short ton (UK/US)", Mechanics),
    u("TNE", "tonne (metric ton)", Mechanics),
    u("WEE", "week", SpaceAndTime),
    u("XBD", "bundle", Packaging),
    u("XBG", "bag", Packaging),
    u("XBX", "box", Packaging),
    u("XCT", "carton", Packaging),
    u("XPA", "packet", Packaging),
    u("XPK", "package", Packaging),
    u("XPX", "pallet", Packaging),
    u("XRO", "roll", Packaging),
    u("XSA", "sack", Packaging),
    u("XST", "sheet", Packaging),
    u("YRD", "yard", SpaceAndTime),
];
