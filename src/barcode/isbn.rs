//! ISBN-10 and ISBN-13 check digits.

use crate::core::checksum::gs1_check_digit;

/// Strip hyphens and whitespace and upper-case a trailing `x`.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// ISBN-10 check character for nine data digits.
fn isbn10_check_char(data: &[u8]) -> char {
    let sum: u32 = data
        .iter()
        .enumerate()
        .map(|(i, b)| (u32::from(b - b'0') * (10 - i as u32)) % 11)
        .sum();
    match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        n => char::from(b'0' + n as u8),
    }
}

/// Validate an ISBN-10 (exactly ten characters, no separators).
pub fn is_valid_isbn10(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 10 || !bytes[..9].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let last = bytes[9];
    if !last.is_ascii_digit() && last != b'X' {
        return false;
    }
    isbn10_check_char(&bytes[..9]) == char::from(last)
}

/// Validate an ISBN-13 (exactly thirteen digits, no separators).
pub fn is_valid_isbn13(isbn: &str) -> bool {
    let bytes = isbn.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    gs1_check_digit(&isbn[..12]) == Some(bytes[12] - b'0')
}

/// Convert a valid ISBN-10 into its `978` ISBN-13 form.
///
/// Separators are ignored. Returns `None` for an invalid ISBN-10.
pub fn isbn10_to_isbn13(isbn10: &str) -> Option<String> {
    let normalized = normalize_isbn(isbn10);
    if !is_valid_isbn10(&normalized) {
        return None;
    }
    let data = format!("978{}", &normalized[..9]);
    let check = gs1_check_digit(&data)?;
    Some(format!("{data}{check}"))
}
