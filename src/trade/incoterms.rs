//! Incoterms 2000, 2010 and 2020.

use serde::{Deserialize, Serialize};

/// Published editions of the ICC Incoterms rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncotermsVersion {
    V2000,
    V2010,
    V2020,
}

impl IncotermsVersion {
    pub fn year(self) -> u16 {
        match self {
            Self::V2000 => 2000,
            Self::V2010 => 2010,
            Self::V2020 => 2020,
        }
    }
}

/// Modes of transport a rule may be used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    /// Any mode or modes of transport.
    Any,
    /// Sea and inland waterway transport only.
    SeaAndInlandWaterway,
}

/// ICC Incoterms delivery rules, including those withdrawn in later editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Incoterm {
    /// `EXW`: Ex Works.
    Exw,
    /// `FCA`: Free Carrier.
    Fca,
    /// `FAS`: Free Alongside Ship.
    Fas,
    /// `FOB`: Free On Board.
    Fob,
    /// `CFR`: Cost and Freight.
    Cfr,
    /// `CIF`: Cost, Insurance and Freight.
    Cif,
    /// `CPT`: Carriage Paid To.
    Cpt,
    /// `CIP`: Carriage and Insurance Paid To.
    Cip,
    /// `DAT`: Delivered At Terminal (2010 only).
    Dat,
    /// `DPU`: Delivered at Place Unloaded (2020).
    Dpu,
    /// `DAP`: Delivered At Place.
    Dap,
    /// `DAF`: Delivered At Frontier (2000 only).
    Daf,
    /// `DES`: Delivered Ex Ship (2000 only).
    Des,
    /// `DEQ`: Delivered Ex Quay (2000 only).
    Deq,
    /// `DDU`: Delivered Duty Unpaid (2000 only).
    Ddu,
    /// `DDP`: Delivered Duty Paid.
    Ddp,
}

use IncotermsVersion::{V2000, V2010, V2020};

impl Incoterm {
    pub const ALL: [Self; 16] = [
        Self::Exw,
        Self::Fca,
        Self::Fas,
        Self::Fob,
        Self::Cfr,
        Self::Cif,
        Self::Cpt,
        Self::Cip,
        Self::Dat,
        Self::Dpu,
        Self::Dap,
        Self::Daf,
        Self::Des,
        Self::Deq,
        Self::Ddu,
        Self::Ddp,
    ];

    /// Three-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Exw => "EXW",
            Self::Fca => "FCA",
            Self::Fas => "FAS",
            Self::Fob => "FOB",
            Self::Cfr => "CFR",
            Self::Cif => "CIF",
            Self::Cpt => "CPT",
            Self::Cip => "CIP",
            Self::Dat => "DAT",
            Self::Dpu => "DPU",
            Self::Dap => "DAP",
            Self::Daf => "DAF",
            Self::Des => "DES",
            Self::Deq => "DEQ",
            Self::Ddu => "DDU",
            Self::Ddp => "DDP",
        }
    }

    /// Parse a code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|term| term.code().eq_ignore_ascii_case(code))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exw => "Ex Works",
            Self::Fca => "Free Carrier",
            Self::Fas => "Free Alongside Ship",
            Self::Fob => "Free On Board",
            Self::Cfr => "Cost and Freight",
            Self::Cif => "Cost, Insurance and Freight",
            Self::Cpt => "Carriage Paid To",
            Self::Cip => "Carriage and Insurance Paid To",
            Self::Dat => "Delivered At Terminal",
            Self::Dpu => "Delivered at Place Unloaded",
            Self::Dap => "Delivered At Place",
            Self::Daf => "Delivered At Frontier",
            Self::Des => "Delivered Ex Ship",
            Self::Deq => "Delivered Ex Quay",
            Self::Ddu => "Delivered Duty Unpaid",
            Self::Ddp => "Delivered Duty Paid",
        }
    }

    /// Editions that define this rule.
    pub fn versions(&self) -> &'static [IncotermsVersion] {
        match self {
            Self::Exw | Self::Fca | Self::Fas | Self::Fob | Self::Cfr | Self::Cif | Self::Cpt
            | Self::Cip | Self::Ddp => &[V2000, V2010, V2020],
            Self::Dap => &[V2010, V2020],
            Self::Dat => &[V2010],
            Self::Dpu => &[V2020],
            Self::Daf | Self::Des | Self::Deq | Self::Ddu => &[V2000],
        }
    }

    pub fn is_in_version(&self, version: IncotermsVersion) -> bool {
        self.versions().contains(&version)
    }

    /// Part of the current (2020) edition.
    pub fn is_current(&self) -> bool {
        self.is_in_version(V2020)
    }

    pub fn transport_mode(&self) -> TransportMode {
        match self {
            Self::Fas | Self::Fob | Self::Cfr | Self::Cif | Self::Des | Self::Deq => {
                TransportMode::SeaAndInlandWaterway
            }
            _ => TransportMode::Any,
        }
    }

    /// Rules of one edition, in declaration order.
    pub fn of_version(version: IncotermsVersion) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |term| term.is_in_version(version))
    }
}

impl std::fmt::Display for Incoterm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
