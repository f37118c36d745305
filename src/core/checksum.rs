//! Check-digit arithmetic shared by IBAN, Leitweg-ID and GS1 codes.

/// Numeric value of an alphanumeric character: `0`–`9` as themselves,
/// `A`–`Z` (either case) as 10–35. Anything else yields `None`.
pub fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

/// ISO 7064 MOD 97-10 remainder of an alphanumeric string.
///
/// Letters are folded in as two-digit groups, digits as single digits, so
/// the running value never exceeds a `u32`.
pub fn mod97_folded(s: &str) -> Option<u32> {
    let mut value = 0u32;
    for c in s.chars() {
        let code = char_value(c)?;
        value = if code > 9 {
            (value * 100 + code) % 97
        } else {
            (value * 10 + code) % 97
        };
    }
    Some(value)
}

/// GS1 mod-10 check digit for a string of ASCII digits.
///
/// Weights alternate 3, 1, 3, ... starting from the rightmost digit.
pub fn gs1_check_digit(digits: &str) -> Option<u8> {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let d = c.to_digit(10)?;
        sum += if i % 2 == 0 { d * 3 } else { d };
    }
    Some(((10 - sum % 10) % 10) as u8)
}
