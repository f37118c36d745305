//! UN/EDIFACT 5305: duty or tax or fee category codes.

use serde::{Deserialize, Serialize};

/// A tax category code, e.g. `S` for the standard rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxCategory {
    /// `A`: Mixed tax rate.
    MixedTaxRate,
    /// `AA`: Lower rate.
    LowerRate,
    /// `AB`: Exempt for resale.
    ExemptForResale,
    /// `AC`: VAT not now due for payment.
    VatNotNowDue,
    /// `AD`: VAT due from a previous invoice.
    VatDueFromPreviousInvoice,
    /// `AE`: Reverse charge.
    ReverseCharge,
    /// `B`: Transferred (VAT).
    TransferredVat,
    /// `C`: Duty paid by supplier.
    DutyPaidBySupplier,
    /// `D`: VAT margin scheme, travel agents.
    MarginSchemeTravelAgents,
    /// `E`: Exempt from tax.
    Exempt,
    /// `F`: VAT margin scheme, second-hand goods.
    MarginSchemeSecondHandGoods,
    /// `G`: Free export item, tax not charged.
    Export,
    /// `H`: Higher rate.
    HigherRate,
    /// `I`: VAT margin scheme, works of art.
    MarginSchemeWorksOfArt,
    /// `J`: VAT margin scheme, collectors' items and antiques.
    MarginSchemeCollectorsItems,
    /// `K`: VAT exempt for EEA intra-community supply of goods and services.
    IntraCommunitySupply,
    /// `L`: Canary Islands general indirect tax (IGIC).
    CanaryIslandsTax,
    /// `M`: Tax for production, services and importation in Ceuta and Melilla (IPSI).
    CeutaMelillaTax,
    /// `O`: Services outside scope of tax.
    NotSubjectToVat,
    /// `S`: Standard rate.
    StandardRate,
    /// `Z`: Zero rated goods.
    ZeroRated,
}

impl TaxCategory {
    /// All categories in code order.
    pub const ALL: [Self; 21] = [
        Self::MixedTaxRate,
        Self::LowerRate,
        Self::ExemptForResale,
        Self::VatNotNowDue,
        Self::VatDueFromPreviousInvoice,
        Self::ReverseCharge,
        Self::TransferredVat,
        Self::DutyPaidBySupplier,
        Self::MarginSchemeTravelAgents,
        Self::Exempt,
        Self::MarginSchemeSecondHandGoods,
        Self::Export,
        Self::HigherRate,
        Self::MarginSchemeWorksOfArt,
        Self::MarginSchemeCollectorsItems,
        Self::IntraCommunitySupply,
        Self::CanaryIslandsTax,
        Self::CeutaMelillaTax,
        Self::NotSubjectToVat,
        Self::StandardRate,
        Self::ZeroRated,
    ];

    /// UNTDID 5305 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MixedTaxRate => "A",
            Self::LowerRate => "AA",
            Self::ExemptForResale => "AB",
            Self::VatNotNowDue => "AC",
            Self::VatDueFromPreviousInvoice => "AD",
            Self::ReverseCharge => "AE",
            Self::TransferredVat => "B",
            Self::DutyPaidBySupplier => "C",
            Self::MarginSchemeTravelAgents => "D",
            Self::Exempt => "E",
            Self::MarginSchemeSecondHandGoods => "F",
            Self::Export => "G",
            Self::HigherRate => "H",
            Self::MarginSchemeWorksOfArt => "I",
            Self::MarginSchemeCollectorsItems => "J",
            Self::IntraCommunitySupply => "K",
            Self::CanaryIslandsTax => "L",
            Self::CeutaMelillaTax => "M",
            Self::NotSubjectToVat => "O",
            Self::StandardRate => "S",
            Self::ZeroRated => "Z",
        }
    }

    /// Parse from UNTDID 5305 code string.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// English code name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MixedTaxRate => "Mixed tax rate",
            Self::LowerRate => "Lower rate",
            Self::ExemptForResale => "Exempt for resale",
            Self::VatNotNowDue => "Value Added Tax (VAT) not now due for payment",
            Self::VatDueFromPreviousInvoice => "Value Added Tax (VAT) now due from a previous invoice",
            Self::ReverseCharge => "VAT Reverse Charge",
            Self::TransferredVat => "Transferred (VAT)",
            Self::DutyPaidBySupplier => "Duty paid by supplier",
            Self::MarginSchemeTravelAgents => "Value Added Tax (VAT) margin scheme - travel agents",
            Self::Exempt => "Exempt from tax",
            Self::MarginSchemeSecondHandGoods => {
                "Value Added Tax (VAT) margin scheme - second-hand goods"
            }
            Self::Export => "Free export item, tax not charged",
            Self::HigherRate => "Higher rate",
            Self::MarginSchemeWorksOfArt => "Value Added Tax (VAT) margin scheme - works of art",
            Self::MarginSchemeCollectorsItems => {
                "Value Added Tax (VAT) margin scheme - collectors' items and antiques"
            }
            Self::IntraCommunitySupply => {
                "VAT exempt for EEA intra-community supply of goods and services"
            }
            Self::CanaryIslandsTax => "Canary Islands general indirect tax",
            Self::CeutaMelillaTax => {
                "Tax for production, services and importation in Ceuta and Melilla"
            }
            Self::NotSubjectToVat => "Services outside scope of tax",
            Self::StandardRate => "Standard rate",
            Self::ZeroRated => "Zero rated goods",
        }
    }

    /// Categories under which no VAT amount is charged on the document.
    pub fn is_exempt(&self) -> bool {
        matches!(
            self,
            Self::ExemptForResale
                | Self::ReverseCharge
                | Self::Exempt
                | Self::Export
                | Self::IntraCommunitySupply
                | Self::NotSubjectToVat
                | Self::ZeroRated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for cat in TaxCategory::ALL {
            assert_eq!(TaxCategory::from_code(cat.code()), Some(cat));
        }
        assert_eq!(TaxCategory::from_code("X"), None);
        assert_eq!(TaxCategory::from_code("s"), None);
    }

    #[test]
    fn codes_are_sorted_and_unique() {
        for window in TaxCategory::ALL.windows(2) {
            assert!(window[0].code() < window[1].code());
        }
    }

    #[test]
    fn exemptions() {
        assert!(TaxCategory::ReverseCharge.is_exempt());
        assert!(TaxCategory::ZeroRated.is_exempt());
        assert!(!TaxCategory::StandardRate.is_exempt());
        assert!(!TaxCategory::CanaryIslandsTax.is_exempt());
    }

    #[test]
    fn names() {
        assert_eq!(TaxCategory::StandardRate.name(), "Standard rate");
        assert_eq!(TaxCategory::from_code("AE").unwrap().name(), "VAT Reverse Charge");
    }
}
