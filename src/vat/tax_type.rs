//! UN/EDIFACT 5153: duty or tax or fee type name codes.

use serde::Serialize;

/// A duty, tax or fee type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaxType {
    /// Three-letter code (e.g. "VAT").
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
}

impl TaxType {
    /// Value added tax.
    pub const VAT: Self = Self::new("VAT", "Value added tax");
    /// Goods and services tax.
    pub const GST: Self = Self::new("GST", "Goods and services tax");
    /// Customs duty.
    pub const CUSTOMS_DUTY: Self = Self::new("CUD", "Customs duty");
    /// Excise duty.
    pub const EXCISE_DUTY: Self = Self::new("EXC", "Excise duty");
    /// Environmental tax.
    pub const ENVIRONMENTAL: Self = Self::new("ENV", "Environmental tax");

    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Same as [`tax_type`], by value.
    pub fn from_code(code: &str) -> Option<Self> {
        tax_type(code).copied()
    }
}

/// Look up a tax type by its 5153 code.
pub fn tax_type(code: &str) -> Option<&'static TaxType> {
    TAX_TYPES
        .binary_search_by(|t| t.code.cmp(code))
        .ok()
        .map(|idx| &TAX_TYPES[idx])
}

/// All known 5153 tax types in code order.
pub fn tax_types() -> &'static [TaxType] {
    TAX_TYPES
}

/// Sorted by code for binary search.
static TAX_TYPES: &[TaxType] = &[
    TaxType::new("AAA", "Petroleum tax"),
    TaxType::new("AAB", "Provisional countervailing duty cash"),
    TaxType::new("AAC", "Provisional countervailing duty bond"),
    TaxType::new("AAD", "Tobacco tax"),
    TaxType::new("AAE", "Energy fee"),
    TaxType::new("AAF", "Coffee tax"),
    TaxType::new("AAG", "Harmonised sales tax, Canadian"),
    TaxType::new("AAH", "Quebec sales tax"),
    TaxType::new("AAI", "Canadian provincial sales tax"),
    TaxType::new("AAJ", "Tax on replacement part"),
    TaxType::new("AAK", "Mineral oil tax"),
    TaxType::new("AAL", "Special tax"),
    TaxType::new("ADD", "Anti-dumping duty"),
    TaxType::new("BOL", "Stamp duty (Imposta di Bollo)"),
    TaxType::new("CAP", "Agricultural levy"),
    TaxType::new("CAR", "Car tax"),
    TaxType::new("COC", "Paper consortium tax"),
    TaxType::new("CST", "Commodity specific tax"),
    TaxType::CUSTOMS_DUTY,
    TaxType::new("CVD", "Countervailing duty"),
    TaxType::ENVIRONMENTAL,
    TaxType::EXCISE_DUTY,
    TaxType::new("EXP", "Agricultural export rebate"),
    TaxType::new("FET", "Federal excise tax"),
    TaxType::new("FRE", "Free"),
    TaxType::new("GCN", "General construction tax"),
    TaxType::GST,
    TaxType::new("ILL", "Illuminants tax"),
    TaxType::new("IMP", "Import tax"),
    TaxType::new("IND", "Individual tax"),
    TaxType::new("LAC", "Business license fee"),
    TaxType::new("LCN", "Local construction tax"),
    TaxType::new("LDP", "Light dues payable"),
    TaxType::new("LOC", "Local sales taxes"),
    TaxType::new("LST", "Lust tax"),
    TaxType::new("MCA", "Monetary compensatory amount"),
    TaxType::new("MCD", "Miscellaneous cash deposit"),
    TaxType::new("OTH", "Other taxes"),
    TaxType::new("PDB", "Provisional duty bond"),
    TaxType::new("PDC", "Provisional duty cash"),
    TaxType::new("PRF", "Preference duty"),
    TaxType::new("SCN", "Special construction tax"),
    TaxType::new("SSS", "Shifted social securities"),
    TaxType::new("STT", "State/provincial sales tax"),
    TaxType::new("SUP", "Suspended duty"),
    TaxType::new("SUR", "Surtax"),
    TaxType::new("SWT", "Shifted wage tax"),
    TaxType::new("TAC", "Alcohol mark tax"),
    TaxType::new("TOT", "Total"),
    TaxType::new("TOX", "Turnover tax"),
    TaxType::new("TTA", "Tonnage taxes"),
    TaxType::new("VAD", "Valuation deposit"),
    TaxType::VAT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        assert_eq!(tax_type("VAT"), Some(&TaxType::VAT));
        assert_eq!(tax_type("GST").unwrap().name, "Goods and services tax");
        assert_eq!(tax_type("ADD").unwrap().name, "Anti-dumping duty");
        assert!(tax_type("vat").is_none());
        assert!(tax_type("XYZ").is_none());
        assert_eq!(TaxType::from_code("EXC"), Some(TaxType::EXCISE_DUTY));
        assert_eq!(TaxType::VAT.code(), "VAT");
    }

    #[test]
    fn list_is_sorted() {
        for window in tax_types().windows(2) {
            assert!(
                window[0].code < window[1].code,
                "tax types not sorted: {} >= {}",
                window[0].code,
                window[1].code
            );
        }
    }
}
