//! Leitweg-ID structure and MOD 97-10 check digits.

use std::fmt;

use crate::core::ValidationError;
use crate::core::checksum::char_value;

/// Shortest possible Leitweg-ID: two-character coarse part, dash, checksum.
pub const MIN_TOTAL_LENGTH: usize = 5;
/// Longest possible Leitweg-ID: 12 + 1 + 30 + 1 + 2.
pub const MAX_TOTAL_LENGTH: usize = 46;

pub const COARSE_MIN_LENGTH: usize = 2;
pub const COARSE_MAX_LENGTH: usize = 12;
pub const FINE_MAX_LENGTH: usize = 30;
pub const CHECKSUM_LENGTH: usize = 2;

/// Regular expression describing the Leitweg-ID structure.
pub const LEITWEG_ID_PATTERN: &str = r"^([0-9A-Za-z]{2,12})(?:-([0-9A-Za-z]{0,30}))?-([0-9]{2})$";

/// MOD 97-10 checksum over the coarse and fine routing parts.
///
/// Characters that are not ASCII alphanumeric are skipped; callers validate
/// the structure first.
pub fn calculate_leitweg_checksum(coarse: &str, fine: Option<&str>) -> String {
    let remainder = coarse
        .chars()
        .chain(fine.unwrap_or_default().chars())
        .filter_map(char_value)
        .fold(0u32, |acc, value| (acc * 10 + value) % 97);
    format!("{:02}", 98 - (remainder * 100) % 97)
}

/// Check structure and checksum of a Leitweg-ID.
pub fn is_leitweg_id_valid(id: &str) -> bool {
    LeitwegId::parse(id).is_ok()
}

/// A parsed German Leitweg-ID (public-sector invoice routing identifier).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeitwegId {
    coarse: String,
    fine: Option<String>,
    checksum: String,
}

fn is_alphanumeric(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn structure_error(id: &str, reason: &str) -> ValidationError {
    ValidationError::with_code(
        "leitweg_id",
        format!("'{id}' {reason}"),
        "leitweg_id.invalid_structure",
    )
}

impl LeitwegId {
    /// Parse and verify a Leitweg-ID such as `04011000-1234512345-06`.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        if !(MIN_TOTAL_LENGTH..=MAX_TOTAL_LENGTH).contains(&id.len()) {
            return Err(structure_error(
                id,
                &format!("must be {MIN_TOTAL_LENGTH} to {MAX_TOTAL_LENGTH} characters long"),
            ));
        }
        let parts: Vec<&str> = id.split('-').collect();
        let (coarse, fine, checksum) = match parts.as_slice() {
            [coarse, checksum] => (*coarse, None, *checksum),
            [coarse, fine, checksum] => (*coarse, Some(*fine), *checksum),
            _ => return Err(structure_error(id, "must consist of two or three parts")),
        };
        if !(COARSE_MIN_LENGTH..=COARSE_MAX_LENGTH).contains(&coarse.len())
            || !is_alphanumeric(coarse)
        {
            return Err(structure_error(id, "has an invalid coarse routing part"));
        }
        if let Some(fine) = fine {
            if fine.len() > FINE_MAX_LENGTH || !is_alphanumeric(fine) {
                return Err(structure_error(id, "has an invalid fine routing part"));
            }
        }
        if checksum.len() != CHECKSUM_LENGTH || !checksum.bytes().all(|b| b.is_ascii_digit()) {
            return Err(structure_error(id, "must end with a two-digit checksum"));
        }

        let expected = calculate_leitweg_checksum(coarse, fine);
        if expected != checksum {
            return Err(ValidationError::with_code(
                "leitweg_id",
                format!("'{id}' has checksum {checksum}, expected {expected}"),
                "leitweg_id.invalid_checksum",
            ));
        }
        Ok(Self {
            coarse: coarse.to_string(),
            fine: fine.map(str::to_string),
            checksum: checksum.to_string(),
        })
    }

    /// Build a Leitweg-ID from its routing parts, computing the checksum.
    pub fn from_parts(coarse: &str, fine: Option<&str>) -> Result<Self, ValidationError> {
        let checksum = calculate_leitweg_checksum(coarse, fine);
        let id = match fine {
            Some(fine) => format!("{coarse}-{fine}-{checksum}"),
            None => format!("{coarse}-{checksum}"),
        };
        Self::parse(&id)
    }

    pub fn coarse(&self) -> &str {
        &self.coarse
    }

    pub fn fine(&self) -> Option<&str> {
        self.fine.as_deref()
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl fmt::Display for LeitwegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fine {
            Some(fine) => write!(f, "{}-{}-{}", self.coarse, fine, self.checksum),
            None => write!(f, "{}-{}", self.coarse, self.checksum),
        }
    }
}

impl std::str::FromStr for LeitwegId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
