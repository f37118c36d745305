//! IBAN checksum (ISO 7064 MOD 97-10) and structural parsing.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::country_data::{IbanElementKind, IbanRegistry};
use crate::core::checksum::mod97_folded;

/// Normalize an IBAN to its electronic form: no whitespace, upper case.
pub fn electronic_iban(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Verify the MOD 97-10 checksum of an IBAN.
///
/// Whitespace is ignored. Inputs shorter than 5 characters or containing
/// anything but ASCII letters and digits are invalid. No country layout is
/// consulted; use [`IbanRegistry::is_valid_iban`] for a full check.
pub fn is_valid_iban_checksum(iban: &str) -> bool {
    let iban = electronic_iban(iban);
    if iban.len() < 5 || !iban.is_ascii() {
        return false;
    }
    let rotated = format!("{}{}", &iban[4..], &iban[..4]);
    mod97_folded(&rotated) == Some(1)
}

/// Compute the two IBAN check digits for a country code and BBAN.
///
/// Returns `None` if either part contains non-alphanumeric characters.
pub fn calculate_iban_check_digits(country_code: &str, bban: &str) -> Option<String> {
    let bban = electronic_iban(bban);
    let country = country_code.to_ascii_uppercase();
    let remainder = mod97_folded(&format!("{bban}{country}00"))?;
    Some(format!("{:02}", 98 - remainder))
}

/// Why an IBAN was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IbanError {
    /// Fewer than 5 characters after removing whitespace.
    TooShort,
    /// A character other than A-Z / 0-9.
    InvalidCharacter(char),
    /// No IBAN layout is registered for the country.
    UnknownCountry(String),
    /// Wrong total length for the country.
    InvalidLength { expected: usize, actual: usize },
    /// A BBAN element violates its character class.
    InvalidElement { kind: IbanElementKind, value: String },
    /// The country mandates fixed check digits and they differ.
    FixedCheckDigits { expected: String, actual: String },
    /// MOD 97-10 verification failed.
    Checksum,
    /// The country's IBAN scheme is not in force on the given date.
    NotInForce(NaiveDate),
    /// The stored BBAN elements do not spell out the BBAN.
    ElementsMismatch,
}

impl fmt::Display for IbanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "IBAN too short"),
            Self::InvalidCharacter(c) => write!(f, "IBAN contains invalid character '{c}'"),
            Self::UnknownCountry(cc) => write!(f, "no IBAN layout for country '{cc}'"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "IBAN has {actual} characters, expected {expected}")
            }
            Self::InvalidElement { kind, value } => {
                write!(f, "IBAN element {kind:?} '{value}' has invalid characters")
            }
            Self::FixedCheckDigits { expected, actual } => {
                write!(f, "IBAN check digits must be {expected}, got {actual}")
            }
            Self::Checksum => write!(f, "IBAN checksum mismatch"),
            Self::NotInForce(date) => write!(f, "IBAN scheme not in force on {date}"),
            Self::ElementsMismatch => write!(f, "IBAN elements do not match the BBAN"),
        }
    }
}

impl std::error::Error for IbanError {}

/// A structurally valid IBAN with its BBAN split into elements.
///
/// Deserialized values are checked without a registry: electronic form,
/// MOD 97-10 and elements covering the BBAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IbanData")]
pub struct Iban {
    value: String,
    elements: Vec<(IbanElementKind, String)>,
}

#[derive(Deserialize)]
struct IbanData {
    value: String,
    elements: Vec<(IbanElementKind, String)>,
}

impl TryFrom<IbanData> for Iban {
    type Error = IbanError;

    fn try_from(data: IbanData) -> Result<Self, Self::Error> {
        let IbanData { value, elements } = data;
        if let Some(c) = value
            .chars()
            .find(|c| !c.is_ascii_digit() && !c.is_ascii_uppercase())
        {
            return Err(IbanError::InvalidCharacter(c));
        }
        if value.len() < 5 {
            return Err(IbanError::TooShort);
        }
        if !value[2..4].chars().all(|c| c.is_ascii_digit()) || !is_valid_iban_checksum(&value) {
            return Err(IbanError::Checksum);
        }
        let spelled: String = elements.iter().map(|(_, part)| part.as_str()).collect();
        if spelled != value[4..] {
            return Err(IbanError::ElementsMismatch);
        }
        Ok(Self { value, elements })
    }
}

impl Iban {
    /// Parse and fully validate an IBAN against the country layouts in `registry`.
    pub fn parse(input: &str, registry: &IbanRegistry) -> Result<Self, IbanError> {
        let value = electronic_iban(input);
        if let Some(c) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(IbanError::InvalidCharacter(c));
        }
        if value.len() < 5 {
            return Err(IbanError::TooShort);
        }

        let country = &value[..2];
        let data = registry
            .country(country)
            .ok_or_else(|| IbanError::UnknownCountry(country.to_string()))?;

        if value.len() != data.expected_length() {
            return Err(IbanError::InvalidLength {
                expected: data.expected_length(),
                actual: value.len(),
            });
        }

        let check_digits = &value[2..4];
        if !check_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IbanError::Checksum);
        }
        if let Some(fixed) = data.fixed_check_digits() {
            if fixed != check_digits {
                return Err(IbanError::FixedCheckDigits {
                    expected: fixed.to_string(),
                    actual: check_digits.to_string(),
                });
            }
        }

        let mut elements = Vec::with_capacity(data.elements().len());
        let mut offset = 4;
        for element in data.elements() {
            let part = &value[offset..offset + element.length];
            if !part.chars().all(|c| element.charset.matches(c)) {
                return Err(IbanError::InvalidElement {
                    kind: element.kind,
                    value: part.to_string(),
                });
            }
            elements.push((element.kind, part.to_string()));
            offset += element.length;
        }

        if !is_valid_iban_checksum(&value) {
            return Err(IbanError::Checksum);
        }

        Ok(Self { value, elements })
    }

    /// Like [`Iban::parse`], additionally requiring the country's scheme to
    /// be in force on `date`.
    pub fn parse_at(
        input: &str,
        registry: &IbanRegistry,
        date: NaiveDate,
    ) -> Result<Self, IbanError> {
        let iban = Self::parse(input, registry)?;
        let in_force = registry
            .country(iban.country_code())
            .is_some_and(|data| data.is_valid_at(date));
        if !in_force {
            return Err(IbanError::NotInForce(date));
        }
        Ok(iban)
    }

    pub fn country_code(&self) -> &str {
        &self.value[..2]
    }

    pub fn check_digits(&self) -> &str {
        &self.value[2..4]
    }

    pub fn bban(&self) -> &str {
        &self.value[4..]
    }

    /// Electronic form (no spaces).
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// First BBAN element of the given kind.
    pub fn element(&self, kind: IbanElementKind) -> Option<&str> {
        self.elements
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| v.as_str())
    }

    /// All BBAN elements in layout order.
    pub fn elements(&self) -> &[(IbanElementKind, String)] {
        &self.elements
    }

    /// Print form: groups of four separated by single spaces.
    pub fn formatted(&self) -> String {
        self.value
            .as_bytes()
            .chunks(4)
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl IbanRegistry {
    /// Full IBAN check: country layout, element charsets, fixed check digits
    /// and MOD 97-10.
    pub fn is_valid_iban(&self, iban: &str) -> bool {
        Iban::parse(iban, self).is_ok()
    }

    /// [`IbanRegistry::is_valid_iban`] restricted to schemes in force on `date`.
    pub fn is_valid_iban_at(&self, iban: &str, date: NaiveDate) -> bool {
        Iban::parse_at(iban, self, date).is_ok()
    }

    /// Parse an IBAN against this registry.
    pub fn parse(&self, iban: &str) -> Result<Iban, IbanError> {
        Iban::parse(iban, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::IbanCountryData;

    fn registry() -> IbanRegistry {
        IbanRegistry::bundled().unwrap()
    }

    #[test]
    fn checksum_valid() {
        assert!(is_valid_iban_checksum("DE89370400440532013000"));
        assert!(is_valid_iban_checksum("DE89 3704 0044 0532 0130 00"));
        assert!(is_valid_iban_checksum("gb82west12345698765432"));
    }

    #[test]
    fn checksum_invalid() {
        assert!(!is_valid_iban_checksum("DE88370400440532013000"));
        assert!(!is_valid_iban_checksum("DE89"));
        assert!(!is_valid_iban_checksum(""));
        assert!(!is_valid_iban_checksum("DE89-3704-0044-0532-0130-00"));
        assert!(!is_valid_iban_checksum("DE89370400440532013ÄÖ"));
    }

    #[test]
    fn check_digit_calculation() {
        assert_eq!(calculate_iban_check_digits("DE", "370400440532013000").as_deref(), Some("89"));
        assert_eq!(calculate_iban_check_digits("GB", "WEST12345698765432").as_deref(), Some("82"));
        assert_eq!(calculate_iban_check_digits("BE", "539007547034").as_deref(), Some("68"));
        assert_eq!(calculate_iban_check_digits("DE", "37-04"), None);
    }

    #[test]
    fn parse_exposes_elements() {
        let iban = Iban::parse("DE89 3704 0044 0532 0130 00", &registry()).unwrap();
        assert_eq!(iban.country_code(), "DE");
        assert_eq!(iban.check_digits(), "89");
        assert_eq!(iban.bban(), "370400440532013000");
        assert_eq!(iban.element(IbanElementKind::BankCode), Some("37040044"));
        assert_eq!(iban.element(IbanElementKind::AccountNumber), Some("0532013000"));
        assert_eq!(iban.element(IbanElementKind::BranchCode), None);
        assert_eq!(iban.formatted(), "DE89 3704 0044 0532 0130 00");
        assert_eq!(iban.to_string(), iban.formatted());
    }

    #[test]
    fn parse_errors() {
        let r = registry();
        assert_eq!(Iban::parse("DE89", &r), Err(IbanError::TooShort));
        assert_eq!(
            Iban::parse("ZZ89370400440532013000", &r),
            Err(IbanError::UnknownCountry("ZZ".into()))
        );
        assert_eq!(
            Iban::parse("DE8937040044053201300", &r),
            Err(IbanError::InvalidLength {
                expected: 22,
                actual: 21
            })
        );
        assert_eq!(Iban::parse("DE88370400440532013000", &r), Err(IbanError::Checksum));
        assert!(matches!(
            Iban::parse("DE89 3704 0044 0532 0130 0!", &r),
            Err(IbanError::InvalidCharacter('!'))
        ));
    }

    #[test]
    fn element_charset_enforced() {
        // GB bank code must be letters.
        let err = Iban::parse("GB82123412345698765432", &registry()).unwrap_err();
        assert!(matches!(
            err,
            IbanError::InvalidElement {
                kind: IbanElementKind::BankCode,
                ..
            }
        ));
    }

    #[test]
    fn fixed_check_digits_enforced() {
        let r = registry();
        assert!(r.is_valid_iban("BA391290079401028494"));
        // Checksum-correct IBAN for BA with check digits other than 39.
        let bban = "1290079401028495";
        let digits = calculate_iban_check_digits("BA", bban).unwrap();
        assert_ne!(digits, "39");
        let err = Iban::parse(&format!("BA{digits}{bban}"), &r).unwrap_err();
        assert!(matches!(err, IbanError::FixedCheckDigits { .. }));
    }

    #[test]
    fn validity_period_applied() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let de = IbanCountryData::new("DE", 22, "B8n A10n")
            .unwrap()
            .with_validity(Some(d(2008, 1, 1)), None);
        let r = IbanRegistry::from_entries([de]).unwrap();
        assert!(r.is_valid_iban_at("DE89370400440532013000", d(2024, 1, 1)));
        assert!(!r.is_valid_iban_at("DE89370400440532013000", d(2007, 12, 31)));
        assert!(r.is_valid_iban("DE89370400440532013000"));
    }
}
