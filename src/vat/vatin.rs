//! VAT identification number (VATIN) structure validation.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;

use crate::core::MasterDataError;

/// Error returned when a VATIN fails structure validation.
#[derive(Debug, Clone)]
pub struct VatinError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for VatinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid VATIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for VatinError {}

/// A VATIN split into its country prefix and national number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vatin {
    /// VAT prefix (ISO code, except `EL` for Greece and `XI` for Northern Ireland).
    pub prefix: String,
    /// National part without separators.
    pub number: String,
}

impl fmt::Display for Vatin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

/// Structural patterns and sample numbers of one VAT prefix.
#[derive(Debug, Clone)]
pub struct VatinStructure {
    prefix: &'static str,
    patterns: Vec<Regex>,
    examples: &'static [&'static str],
}

impl VatinStructure {
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Whether the national part (without prefix) matches any pattern.
    pub fn matches(&self, number: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(number))
    }

    /// Sample VATINs including prefix.
    pub fn examples(&self) -> &'static [&'static str] {
        self.examples
    }
}

/// Remove whitespace, dots, dashes and slashes; upper-case letters.
pub fn normalize_vatin(vatin: &str) -> String {
    vatin
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '-' | '/'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// VATIN structures keyed by VAT prefix.
#[derive(Debug, Clone)]
pub struct VatinStructures {
    structures: BTreeMap<&'static str, VatinStructure>,
}

impl VatinStructures {
    /// Structures for all EU member states plus CH, GB, NO and XI.
    pub fn bundled() -> Result<Self, MasterDataError> {
        let mut structures = BTreeMap::new();
        for &(prefix, patterns, examples) in VATIN_PATTERNS {
            let patterns = patterns
                .iter()
                .map(|p| {
                    Regex::new(&format!("^(?:{p})$")).map_err(|e| {
                        MasterDataError::InvalidArgument(format!("VATIN pattern for {prefix}: {e}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let structure = VatinStructure {
                prefix,
                patterns,
                examples,
            };
            if structures.insert(prefix, structure).is_some() {
                return Err(MasterDataError::DuplicateKey {
                    registry: "VATIN structures",
                    key: prefix.to_string(),
                });
            }
        }
        tracing::debug!(prefixes = structures.len(), "loaded VATIN structures");
        Ok(Self { structures })
    }

    /// Structure for a VAT prefix.
    pub fn structure(&self, prefix: &str) -> Option<&VatinStructure> {
        self.structures.get(prefix)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.structures.keys().copied()
    }

    /// Validate a VATIN by structure (no network call).
    ///
    /// The input must include the 2-letter prefix (e.g. "DE123456789").
    /// Separators (spaces, dots, dashes, slashes) are ignored.
    pub fn validate_vatin(&self, vatin: &str) -> Result<Vatin, VatinError> {
        let cleaned = normalize_vatin(vatin);
        if cleaned.len() < 4 || !cleaned.is_ascii() {
            return Err(VatinError {
                value: vatin.into(),
                reason: "too short, must be at least 4 characters".into(),
            });
        }

        let (prefix, number) = cleaned.split_at(2);
        let structure = self.structure(prefix).ok_or_else(|| VatinError {
            value: vatin.into(),
            reason: format!("unknown country prefix '{prefix}'"),
        })?;

        if !structure.matches(number) {
            return Err(VatinError {
                value: vatin.into(),
                reason: format!("invalid format for country {prefix}"),
            });
        }

        Ok(Vatin {
            prefix: prefix.to_string(),
            number: number.to_string(),
        })
    }

    /// Check whether `vatin` has a known prefix and a matching structure.
    pub fn is_valid_vatin(&self, vatin: &str) -> bool {
        self.validate_vatin(vatin).is_ok()
    }

    /// Sample VATINs for a prefix (empty for unknown prefixes).
    pub fn examples(&self, prefix: &str) -> &'static [&'static str] {
        self.structure(prefix).map_or(&[], |s| s.examples)
    }
}

type PatternRow = (&'static str, &'static [&'static str], &'static [&'static str]);

/// (prefix, patterns for the national part, examples)
static VATIN_PATTERNS: &[PatternRow] = &[
    ("AT", &[r"U\d{8}"], &["ATU13585627"]),
    ("BE", &[r"[01]\d{9}"], &["BE0776091951", "BE1234567890"]),
    ("BG", &[r"\d{9,10}"], &["BG123456789", "BG1234567890"]),
    ("CH", &[r"E\d{9}(?:MWST|TVA|IVA)?"], &["CHE123456789", "CHE123456789MWST"]),
    ("CY", &[r"\d{8}[A-Z]"], &["CY10259033P"]),
    ("CZ", &[r"\d{8,10}"], &["CZ12345678", "CZ1234567890"]),
    ("DE", &[r"[1-9]\d{8}"], &["DE123456789"]),
    ("DK", &[r"\d{8}"], &["DK13585628"]),
    ("EE", &[r"\d{9}"], &["EE100931558"]),
    ("EL", &[r"\d{9}"], &["EL094259216"]),
    ("ES", &[r"[A-Z0-9]\d{7}[A-Z0-9]"], &["ESA12345674", "ESX1234567X"]),
    ("FI", &[r"\d{8}"], &["FI20774740"]),
    ("FR", &[r"[A-Z0-9]{2}\d{9}"], &["FR40303265045", "FRK7399859412"]),
    ("GB", &[r"\d{9}", r"\d{12}", r"GD\d{3}", r"HA\d{3}"], &["GB123456789", "GBGD001"]),
    ("HR", &[r"\d{11}"], &["HR12345678901"]),
    ("HU", &[r"\d{8}"], &["HU12892312"]),
    ("IE", &[r"\d{7}[A-W][A-IW]?", r"\d[A-Z+*]\d{5}[A-W]"], &["IE6388047V", "IE1234567WA", "IE8Z49289F"]),
    ("IT", &[r"\d{11}"], &["IT12345678901"]),
    ("LT", &[r"\d{9}", r"\d{12}"], &["LT123456789", "LT123456789012"]),
    ("LU", &[r"\d{8}"], &["LU26375245"]),
    ("LV", &[r"\d{11}"], &["LV40003521600"]),
    ("MT", &[r"\d{8}"], &["MT12345678"]),
    ("NL", &[r"\d{9}B\d{2}"], &["NL123456789B01"]),
    ("NO", &[r"\d{9}(?:MVA)?"], &["NO123456789MVA"]),
    ("PL", &[r"\d{10}"], &["PL1234567890"]),
    ("PT", &[r"\d{9}"], &["PT123456789"]),
    ("RO", &[r"[1-9]\d{1,9}"], &["RO99", "RO1234567890"]),
    ("SE", &[r"\d{10}01"], &["SE123456789701"]),
    ("SI", &[r"[1-9]\d{7}"], &["SI12345678"]),
    ("SK", &[r"[1-9]\d{9}"], &["SK1234567890"]),
    ("XI", &[r"\d{9}", r"\d{12}", r"GD\d{3}", r"HA\d{3}"], &["XI123456789"]),
];
