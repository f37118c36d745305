//! Per-country IBAN layouts (SWIFT IBAN registry).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::MasterDataError;

/// Semantic role of a BBAN element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IbanElementKind {
    BankCode,
    BranchCode,
    AccountNumber,
    /// National check digits inside the BBAN (not the IBAN check digits).
    NationalCheckDigits,
    AccountType,
    OwnerAccountType,
    IdentificationNumber,
    Currency,
    Reserved,
}

impl IbanElementKind {
    fn from_letter(c: char) -> Option<Self> {
        Some(match c {
            'B' => Self::BankCode,
            'S' => Self::BranchCode,
            'A' => Self::AccountNumber,
            'K' => Self::NationalCheckDigits,
            'T' => Self::AccountType,
            'O' => Self::OwnerAccountType,
            'I' => Self::IdentificationNumber,
            'W' => Self::Currency,
            'X' => Self::Reserved,
            _ => return None,
        })
    }
}

/// Character class of a BBAN element, as in the SWIFT registry notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Charset {
    /// `n`: digits 0-9.
    Digits,
    /// `a`: upper-case letters A-Z.
    Letters,
    /// `c`: upper-case letters and digits.
    Alphanumeric,
}

impl Charset {
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Digits => c.is_ascii_digit(),
            Self::Letters => c.is_ascii_uppercase(),
            Self::Alphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::Digits),
            'a' => Some(Self::Letters),
            'c' => Some(Self::Alphanumeric),
            _ => None,
        }
    }
}

/// One fixed-length element of a country's BBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbanElement {
    pub kind: IbanElementKind,
    pub length: usize,
    pub charset: Charset,
}

/// IBAN structure of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IbanCountryDataRaw")]
pub struct IbanCountryData {
    country_code: String,
    expected_length: usize,
    elements: Vec<IbanElement>,
    fixed_check_digits: Option<String>,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct IbanCountryDataRaw {
    country_code: String,
    expected_length: usize,
    elements: Vec<IbanElement>,
    fixed_check_digits: Option<String>,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
}

impl TryFrom<IbanCountryDataRaw> for IbanCountryData {
    type Error = MasterDataError;

    fn try_from(raw: IbanCountryDataRaw) -> Result<Self, Self::Error> {
        let mut data = Self::from_elements(raw.country_code, raw.expected_length, raw.elements)?;
        data.fixed_check_digits = raw.fixed_check_digits;
        data.valid_from = raw.valid_from;
        data.valid_to = raw.valid_to;
        Ok(data)
    }
}

impl IbanCountryData {
    /// Build country data from a compact layout string.
    ///
    /// The layout is a space separated list of `<kind><length><charset>`
    /// tokens, e.g. `"B8n A10n"` for Germany. Kinds: `B` bank, `S` branch,
    /// `A` account, `K` national check digits, `T` account type, `O` owner
    /// account type, `I` identification number, `W` currency, `X` reserved.
    /// Charsets: `n` digits, `a` letters, `c` alphanumeric.
    ///
    /// Fails if the layout is malformed or its lengths do not add up to
    /// `expected_length - 4`.
    pub fn new(
        country_code: impl Into<String>,
        expected_length: usize,
        layout: &str,
    ) -> Result<Self, MasterDataError> {
        let country_code = country_code.into();
        let elements = layout
            .split_whitespace()
            .map(|token| parse_element(token, &country_code))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_elements(country_code, expected_length, elements)
    }

    /// Build country data from already parsed elements, checking the same
    /// invariants as [`IbanCountryData::new`].
    pub fn from_elements(
        country_code: String,
        expected_length: usize,
        elements: Vec<IbanElement>,
    ) -> Result<Self, MasterDataError> {
        if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(MasterDataError::InvalidArgument(format!(
                "IBAN country code '{country_code}' must be two upper-case letters"
            )));
        }
        if elements.iter().any(|e| e.length == 0) {
            return Err(MasterDataError::InvalidArgument(format!(
                "IBAN layout for {country_code} has an empty element"
            )));
        }

        let covered = elements
            .iter()
            .try_fold(4usize, |acc, e| acc.checked_add(e.length));
        if covered != Some(expected_length) {
            return Err(MasterDataError::InvalidArgument(format!(
                "IBAN layout for {country_code} does not cover {expected_length} characters"
            )));
        }

        Ok(Self {
            country_code,
            expected_length,
            elements,
            fixed_check_digits: None,
            valid_from: None,
            valid_to: None,
        })
    }

    /// Require fixed IBAN check digits (e.g. "39" for Bosnia and Herzegovina).
    pub fn with_fixed_check_digits(mut self, digits: impl Into<String>) -> Self {
        self.fixed_check_digits = Some(digits.into());
        self
    }

    /// Restrict the period in which IBANs of this country are accepted.
    pub fn with_validity(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.valid_from = from;
        self.valid_to = to;
        self
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Total IBAN length including country code and check digits.
    pub fn expected_length(&self) -> usize {
        self.expected_length
    }

    pub fn elements(&self) -> &[IbanElement] {
        &self.elements
    }

    pub fn fixed_check_digits(&self) -> Option<&str> {
        self.fixed_check_digits.as_deref()
    }

    pub fn valid_from(&self) -> Option<NaiveDate> {
        self.valid_from
    }

    pub fn valid_to(&self) -> Option<NaiveDate> {
        self.valid_to
    }

    /// Whether IBANs of this country are accepted on `date` (bounds inclusive).
    pub fn is_valid_at(&self, date: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| date >= from)
            && self.valid_to.is_none_or(|to| date <= to)
    }
}

fn parse_element(token: &str, country: &str) -> Result<IbanElement, MasterDataError> {
    let bad = || {
        MasterDataError::InvalidArgument(format!("malformed IBAN layout token '{token}' for {country}"))
    };
    let mut chars = token.chars();
    let kind = chars.next().and_then(IbanElementKind::from_letter).ok_or_else(bad)?;
    let charset = chars.next_back().and_then(Charset::from_letter).ok_or_else(bad)?;
    let length: usize = chars.as_str().parse().map_err(|_| bad())?;
    if length == 0 {
        return Err(bad());
    }
    Ok(IbanElement {
        kind,
        length,
        charset,
    })
}

/// Registry of IBAN country layouts, keyed by ISO country code.
#[derive(Debug, Clone, Default)]
pub struct IbanRegistry {
    countries: BTreeMap<String, IbanCountryData>,
}

impl IbanRegistry {
    /// Build a registry from explicit entries. Duplicate countries are rejected.
    pub fn from_entries(
        entries: impl IntoIterator<Item = IbanCountryData>,
    ) -> Result<Self, MasterDataError> {
        let mut countries = BTreeMap::new();
        for data in entries {
            let key = data.country_code.clone();
            if countries.insert(key.clone(), data).is_some() {
                return Err(MasterDataError::DuplicateKey {
                    registry: "IBAN countries",
                    key,
                });
            }
        }
        Ok(Self { countries })
    }

    /// Registry built from the compiled-in SWIFT registry excerpt.
    pub fn bundled() -> Result<Self, MasterDataError> {
        let entries = IBAN_COUNTRIES
            .iter()
            .map(|&(cc, len, layout, fixed)| {
                let data = IbanCountryData::new(cc, len, layout)?;
                Ok(match fixed {
                    Some(digits) => data.with_fixed_check_digits(digits),
                    None => data,
                })
            })
            .collect::<Result<Vec<_>, MasterDataError>>()?;
        let registry = Self::from_entries(entries)?;
        tracing::debug!(countries = registry.len(), "loaded IBAN country layouts");
        Ok(registry)
    }

    pub fn country(&self, country_code: &str) -> Option<&IbanCountryData> {
        self.countries.get(country_code)
    }

    pub fn countries(&self) -> impl Iterator<Item = &IbanCountryData> {
        self.countries.values()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// (country, total length, BBAN layout, fixed check digits)
static IBAN_COUNTRIES: &[(&str, usize, &str, Option<&str>)] = &[
    ("AD", 24, "B4n S4n A12c", None),
    ("AE", 23, "B3n A16n", None),
    ("AL", 28, "B3n S4n K1n A16c", None),
    ("AT", 20, "B5n A11n", None),
    ("AZ", 28, "B4a A20c", None),
    ("BA", 20, "B3n S3n A8n K2n", Some("39")),
    ("BE", 16, "B3n A7n K2n", None),
    ("BG", 22, "B4a S4n T2n A8c", None),
    ("BH", 22, "B4a A14c", None),
    ("BR", 29, "B8n S5n A10n T1a O1c", None),
    ("BY", 28, "B4c T4n A16c", None),
    ("CH", 21, "B5n A12c", None),
    ("CR", 22, "B4n A14n", None),
    ("CY", 28, "B3n S5n A16c", None),
    ("CZ", 24, "B4n A6n A10n", None),
    ("DE", 22, "B8n A10n", None),
    ("DK", 18, "B4n A10n", None),
    ("DO", 28, "B4c A20n", None),
    ("EE", 20, "B2n S2n A11n K1n", None),
    ("EG", 29, "B4n S4n A17n", None),
    ("ES", 24, "B4n S4n K2n A10n", None),
    ("FI", 18, "B3n A11n", None),
    ("FO", 18, "B4n A9n K1n", None),
    ("FR", 27, "B5n S5n A11c K2n", None),
    ("GB", 22, "B4a S6n A8n", None),
    ("GE", 22, "B2a A16n", None),
    ("GI", 23, "B4a A15c", None),
    ("GL", 18, "B4n A9n K1n", None),
    ("GR", 27, "B3n S4n A16c", None),
    ("GT", 28, "B4c A20c", None),
    ("HR", 21, "B7n A10n", None),
    ("HU", 28, "B3n S4n K1n A15n K1n", None),
    ("IE", 22, "B4a S6n A8n", None),
    ("IL", 23, "B3n S3n A13n", None),
    ("IQ", 23, "B4a S3n A12n", None),
    ("IS", 26, "B4n T2n A6n I10n", None),
    ("IT", 27, "K1a B5n S5n A12c", None),
    ("JO", 30, "B4a S4n A18c", None),
    ("KW", 30, "B4a A22c", None),
    ("KZ", 20, "B3n A13c", None),
    ("LB", 28, "B4n A20c", None),
    ("LC", 32, "B4a A24c", None),
    ("LI", 21, "B5n A12c", None),
    ("LT", 20, "B5n A11n", None),
    ("LU", 20, "B3n A13c", None),
    ("LV", 21, "B4a A13c", None),
    ("MC", 27, "B5n S5n A11c K2n", None),
    ("MD", 24, "B2c A18c", None),
    ("ME", 22, "B3n A13n K2n", Some("25")),
    ("MK", 19, "B3n A10c K2n", Some("07")),
    ("MR", 27, "B5n S5n A11n K2n", Some("13")),
    ("MT", 31, "B4a S5n A18c", None),
    ("MU", 30, "B6c S2n A12n X3n W3a", None),
    ("NL", 18, "B4a A10n", None),
    ("NO", 15, "B4n A6n K1n", None),
    ("PK", 24, "B4a A16c", None),
    ("PL", 28, "B8n A16n", None),
    ("PS", 29, "B4a A21c", None),
    ("PT", 25, "B4n S4n A11n K2n", Some("50")),
    ("QA", 29, "B4a A21c", None),
    ("RO", 24, "B4a A16c", None),
    ("RS", 22, "B3n A13n K2n", Some("35")),
    ("SA", 24, "B2n A18c", None),
    ("SC", 31, "B6c S2n A16n W3a", None),
    ("SE", 24, "B3n A16n K1n", None),
    ("SI", 19, "B5n A8n K2n", Some("56")),
    ("SK", 24, "B4n A6n A10n", None),
    ("SM", 27, "K1a B5n S5n A12c", None),
    ("SV", 28, "B4a A20n", None),
    ("TN", 24, "B2n S3n A13n K2n", Some("59")),
    ("TR", 26, "B5n X1c A16c", None),
    ("UA", 29, "B6n A19c", None),
    ("VA", 22, "B3n A15n", None),
    ("VG", 24, "B4a A16n", None),
    ("XK", 20, "B4n A10n K2n", None),
];
