//! UPC-E compaction of UPC-A codes and the inverse expansion.

use super::gtin::{BarcodeError, ChecksumMode, calculate_check_digit};

/// Resolve a checksum mode for a message of `data_len` data digits and
/// return the message's data part together with the check digit to use.
fn split_check<'a>(
    message: &'a str,
    data_len: usize,
    mode: ChecksumMode,
    symbology: &'static str,
) -> Result<(&'a str, u8), BarcodeError> {
    if !message.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::NonNumeric(message.to_string()));
    }
    let len = message.len();
    let length_error = |expected: String| BarcodeError::InvalidLength {
        symbology,
        expected,
        actual: len,
    };
    match mode {
        ChecksumMode::Add | ChecksumMode::Auto if len == data_len => {
            Ok((message, calculate_check_digit_for(message, symbology)?))
        }
        ChecksumMode::Check | ChecksumMode::Auto if len == data_len + 1 => {
            let (data, actual) = message.split_at(data_len);
            let actual = actual.as_bytes()[0] - b'0';
            let expected = calculate_check_digit_for(data, symbology)?;
            if expected != actual {
                return Err(BarcodeError::ChecksumMismatch { expected, actual });
            }
            Ok((data, actual))
        }
        ChecksumMode::Ignore if len == data_len + 1 => {
            let (data, actual) = message.split_at(data_len);
            Ok((data, actual.as_bytes()[0] - b'0'))
        }
        ChecksumMode::Ignore if len == data_len => {
            Ok((message, calculate_check_digit_for(message, symbology)?))
        }
        ChecksumMode::Add => Err(length_error(data_len.to_string())),
        ChecksumMode::Check => Err(length_error((data_len + 1).to_string())),
        ChecksumMode::Auto | ChecksumMode::Ignore => {
            Err(length_error(format!("{data_len} or {}", data_len + 1)))
        }
    }
}

/// UPC-E check digits are those of the expanded UPC-A code.
fn calculate_check_digit_for(data: &str, symbology: &'static str) -> Result<u8, BarcodeError> {
    if symbology == "UPC-E" {
        calculate_check_digit(&expand_body(data)?)
    } else {
        calculate_check_digit(data)
    }
}

/// Expand the 7 data digits of a UPC-E code to the 11 data digits of UPC-A.
fn expand_body(data: &str) -> Result<String, BarcodeError> {
    let number_system = data.as_bytes()[0] as char;
    if number_system != '0' && number_system != '1' {
        return Err(BarcodeError::UnsupportedNumberSystem(number_system));
    }
    let b = &data[1..7];
    let (manufacturer, product) = match b.as_bytes()[5] {
        b'0'..=b'2' => (format!("{}{}00", &b[0..2], &b[5..6]), format!("00{}", &b[2..5])),
        b'3' => (format!("{}00", &b[0..3]), format!("000{}", &b[3..5])),
        b'4' => (format!("{}0", &b[0..4]), format!("0000{}", &b[4..5])),
        _ => (b[0..5].to_string(), format!("0000{}", &b[5..6])),
    };
    Ok(format!("{number_system}{manufacturer}{product}"))
}

/// Compact a UPC-A code into its 8-digit UPC-E form.
///
/// The input holds 11 data digits, optionally followed by the check digit
/// as governed by `mode`. Returns `Ok(None)` when the number system is not
/// 0 or 1, or when no compaction rule applies.
pub fn compact_upca(upca: &str, mode: ChecksumMode) -> Result<Option<String>, BarcodeError> {
    let (data, check) = split_check(upca, 11, mode, "UPC-A")?;
    let number_system = &data[0..1];
    if number_system != "0" && number_system != "1" {
        return Ok(None);
    }
    let manufacturer = &data[1..6];
    let product = &data[6..11];

    let body = if (manufacturer.ends_with("000")
        || manufacturer.ends_with("100")
        || manufacturer.ends_with("200"))
        && product.starts_with("00")
    {
        format!("{}{}{}", &manufacturer[0..2], &product[2..5], &manufacturer[2..3])
    } else if manufacturer.ends_with("00") && product.starts_with("000") {
        format!("{}{}3", &manufacturer[0..3], &product[3..5])
    } else if manufacturer.ends_with('0') && product.starts_with("0000") {
        format!("{}{}4", &manufacturer[0..4], &product[4..5])
    } else if !manufacturer.ends_with('0')
        && product.starts_with("0000")
        && matches!(product.as_bytes()[4], b'5'..=b'9')
    {
        format!("{manufacturer}{}", &product[4..5])
    } else {
        return Ok(None);
    };
    Ok(Some(format!("{number_system}{body}{check}")))
}

/// Expand a UPC-E code to the full 12-digit UPC-A code.
///
/// The input holds 7 data digits (number system plus six), optionally
/// followed by the check digit as governed by `mode`.
pub fn expand_upce(upce: &str, mode: ChecksumMode) -> Result<String, BarcodeError> {
    if let Some(&first) = upce.as_bytes().first() {
        if first.is_ascii_digit() && first != b'0' && first != b'1' {
            return Err(BarcodeError::UnsupportedNumberSystem(first as char));
        }
    }
    let (data, check) = split_check(upce, 7, mode, "UPC-E")?;
    Ok(format!("{}{check}", expand_body(data)?))
}
