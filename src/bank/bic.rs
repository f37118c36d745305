//! BIC (ISO 9362 / SWIFT code) structure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ValidationError, is_known_country_code};

/// A structurally valid BIC in 8- or 11-character form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Bic(String);

impl TryFrom<String> for Bic {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl Bic {
    /// Parse a BIC. Surrounding whitespace is ignored, letters are upper-cased.
    ///
    /// Layout: 4 letters institution, 2 letters country (ISO 3166-1),
    /// 2 alphanumeric location, optional 3 alphanumeric branch.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = input.trim().to_ascii_uppercase();
        let invalid = |msg: String| ValidationError::with_code("bic", msg, "bic.invalid");

        if value.len() != 8 && value.len() != 11 {
            return Err(invalid(format!(
                "BIC must have 8 or 11 characters, got {}",
                value.chars().count()
            )));
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("BIC must contain only letters and digits".into()));
        }
        if !value[..4].chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid(format!("institution code '{}' must be letters", &value[..4])));
        }
        let country = &value[4..6];
        if !is_known_country_code(country) && country != "XK" {
            return Err(invalid(format!("unknown country code '{country}'")));
        }
        Ok(Self(value))
    }

    pub fn institution_code(&self) -> &str {
        &self.0[..4]
    }

    pub fn country_code(&self) -> &str {
        &self.0[4..6]
    }

    pub fn location_code(&self) -> &str {
        &self.0[6..8]
    }

    pub fn branch_code(&self) -> Option<&str> {
        (self.0.len() == 11).then(|| &self.0[8..])
    }

    /// Test-and-training BICs have `0` as second location character.
    pub fn is_test_bic(&self) -> bool {
        self.0.as_bytes()[7] == b'0'
    }

    /// Primary office: no branch, or branch `XXX`.
    pub fn is_primary_office(&self) -> bool {
        self.branch_code().is_none_or(|b| b == "XXX")
    }

    /// The 11-character form (`XXX` appended to 8-character BICs).
    pub fn to_bic11(&self) -> String {
        match self.branch_code() {
            Some(_) => self.0.clone(),
            None => format!("{}XXX", self.0),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether `bic` is a structurally valid BIC.
pub fn is_valid_bic(bic: &str) -> bool {
    Bic::parse(bic).is_ok()
}
