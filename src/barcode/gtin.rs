//! EAN-8, EAN-13, UPC-A, GTIN-14 and SSCC with GS1 mod-10 check digits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::checksum::gs1_check_digit;

/// Errors raised by barcode message handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BarcodeError {
    /// Message length does not fit the symbology and checksum mode.
    #[error("{symbology} message must have {expected} digits, got {actual}")]
    InvalidLength {
        symbology: &'static str,
        expected: String,
        actual: usize,
    },

    /// Message contains something other than ASCII digits.
    #[error("message '{0}' must contain only digits")]
    NonNumeric(String),

    /// The trailing check digit does not match the computed one.
    #[error("check digit mismatch: expected {expected}, found {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// UPC-E only supports number systems 0 and 1.
    #[error("unsupported UPC-E number system {0}")]
    UnsupportedNumberSystem(char),
}

/// How a message's check digit is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChecksumMode {
    /// Infer from the length: data length → add, data length + 1 → check.
    #[default]
    Auto,
    /// Message carries no check digit; compute and append it.
    Add,
    /// Message carries a check digit; verify it.
    Check,
    /// Pass the message through unchanged.
    Ignore,
}

/// GS1 numbering schemes sharing the mod-10 check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    Ean8,
    Ean13,
    UpcA,
    Gtin14,
    Sscc,
}

impl Symbology {
    /// Number of data digits, excluding the check digit.
    pub fn data_len(self) -> usize {
        match self {
            Self::Ean8 => 7,
            Self::Ean13 => 12,
            Self::UpcA => 11,
            Self::Gtin14 => 13,
            Self::Sscc => 17,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ean8 => "EAN-8",
            Self::Ean13 => "EAN-13",
            Self::UpcA => "UPC-A",
            Self::Gtin14 => "GTIN-14",
            Self::Sscc => "SSCC",
        }
    }
}

/// Compute the GS1 check digit for a string of data digits.
pub fn calculate_check_digit(data: &str) -> Result<u8, BarcodeError> {
    if data.is_empty() {
        return Err(BarcodeError::NonNumeric(data.to_string()));
    }
    gs1_check_digit(data).ok_or_else(|| BarcodeError::NonNumeric(data.to_string()))
}

/// Check whether a complete code (data plus trailing check digit) is valid.
pub fn is_valid_check_digit(code: &str) -> bool {
    if code.len() < 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (data, check) = code.split_at(code.len() - 1);
    gs1_check_digit(data) == Some(check.as_bytes()[0] - b'0')
}

/// A barcode message of one symbology together with its checksum mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtinCode {
    symbology: Symbology,
    message: String,
    mode: ChecksumMode,
}

impl GtinCode {
    pub fn new(symbology: Symbology, message: impl Into<String>, mode: ChecksumMode) -> Self {
        Self {
            symbology,
            message: message.into(),
            mode,
        }
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn mode(&self) -> ChecksumMode {
        self.mode
    }

    fn length_error(&self, expected: String) -> BarcodeError {
        BarcodeError::InvalidLength {
            symbology: self.symbology.name(),
            expected,
            actual: self.message.len(),
        }
    }

    /// Validate the message against the symbology and checksum mode.
    pub fn validate(&self) -> Result<(), BarcodeError> {
        self.with_correct_checksum().map(|_| ())
    }

    /// The full code including a correct check digit.
    ///
    /// `Add` appends the computed digit, `Check` verifies the present one,
    /// `Ignore` returns the message unchanged (digits only, either length).
    pub fn with_correct_checksum(&self) -> Result<String, BarcodeError> {
        if !self.message.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BarcodeError::NonNumeric(self.message.clone()));
        }
        let data_len = self.symbology.data_len();
        let len = self.message.len();
        let either = || format!("{data_len} or {}", data_len + 1);
        match self.mode {
            ChecksumMode::Add | ChecksumMode::Auto if len == data_len => {
                let check = calculate_check_digit(&self.message)?;
                Ok(format!("{}{check}", self.message))
            }
            ChecksumMode::Check | ChecksumMode::Auto if len == data_len + 1 => {
                let (data, actual) = self.message.split_at(data_len);
                let expected = calculate_check_digit(data)?;
                let actual = actual.as_bytes()[0] - b'0';
                if expected != actual {
                    return Err(BarcodeError::ChecksumMismatch { expected, actual });
                }
                Ok(self.message.clone())
            }
            ChecksumMode::Ignore if len == data_len || len == data_len + 1 => {
                Ok(self.message.clone())
            }
            ChecksumMode::Add => Err(self.length_error(data_len.to_string())),
            ChecksumMode::Check => Err(self.length_error((data_len + 1).to_string())),
            ChecksumMode::Auto | ChecksumMode::Ignore => Err(self.length_error(either())),
        }
    }
}

/// EAN-8 (7 data digits).
pub struct Ean8;
/// EAN-13 (12 data digits).
pub struct Ean13;
/// UPC-A (11 data digits).
pub struct UpcA;
/// GTIN-14 / ITF-14 (13 data digits).
pub struct Gtin14;
/// Serial Shipping Container Code (17 data digits).
pub struct Sscc;

macro_rules! symbology_ctor {
    ($ty:ident, $sym:expr) => {
        impl $ty {
            /// Message with automatic checksum handling.
            #[allow(clippy::new_ret_no_self)]
            pub fn new(message: impl Into<String>) -> GtinCode {
                GtinCode::new($sym, message, ChecksumMode::Auto)
            }

            /// Message with an explicit checksum mode.
            pub fn with_mode(message: impl Into<String>, mode: ChecksumMode) -> GtinCode {
                GtinCode::new($sym, message, mode)
            }
        }
    };
}

symbology_ctor!(Ean8, Symbology::Ean8);
symbology_ctor!(Ean13, Symbology::Ean13);
symbology_ctor!(UpcA, Symbology::UpcA);
symbology_ctor!(Gtin14, Symbology::Gtin14);
symbology_ctor!(Sscc, Symbology::Sscc);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ean8_add() {
        assert_eq!(Ean8::new("1234567").with_correct_checksum().unwrap(), "12345670");
    }

    #[test]
    fn ean8_check_mode_rejects_short_message() {
        let code = Ean8::with_mode("123456", ChecksumMode::Check);
        assert!(matches!(code.validate(), Err(BarcodeError::InvalidLength { .. })));
    }

    #[test]
    fn ean13_auto_check() {
        assert!(Ean13::new("4006381333931").validate().is_ok());
        assert_eq!(
            Ean13::new("4006381333932").validate(),
            Err(BarcodeError::ChecksumMismatch {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn auto_rejects_other_lengths() {
        assert!(Ean13::new("40063813339").validate().is_err());
        assert!(Ean13::new("400638133393100").validate().is_err());
    }

    #[test]
    fn add_mode_requires_data_length() {
        assert!(Ean8::with_mode("12345670", ChecksumMode::Add).validate().is_err());
    }

    #[test]
    fn ignore_passes_through() {
        let code = UpcA::with_mode("036000291459", ChecksumMode::Ignore);
        assert_eq!(code.with_correct_checksum().unwrap(), "036000291459");
        assert!(UpcA::with_mode("0360", ChecksumMode::Ignore).validate().is_err());
    }

    #[test]
    fn non_numeric_rejected() {
        assert!(matches!(
            Ean8::new("12a4567").validate(),
            Err(BarcodeError::NonNumeric(_))
        ));
    }

    #[test]
    fn sscc_and_gtin14() {
        assert_eq!(
            Sscc::new("00614141123456789").with_correct_checksum().unwrap(),
            "006141411234567890"
        );
        assert_eq!(
            Gtin14::new("9501101530003").with_correct_checksum().unwrap(),
            "95011015300038"
        );
    }

    #[test]
    fn complete_code_check() {
        assert!(is_valid_check_digit("4006381333931"));
        assert!(is_valid_check_digit("12345670"));
        assert!(!is_valid_check_digit("12345671"));
        assert!(!is_valid_check_digit("1"));
        assert!(!is_valid_check_digit("1234567a"));
    }
}
