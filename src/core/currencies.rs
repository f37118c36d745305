//! ISO 4217 currency codes with minor-unit precision.
//!
//! Covers the currencies relevant to European trade plus the major world
//! currencies. The fraction digits drive rounding of prices and converted
//! amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// An ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Alphabetic code (e.g. "EUR").
    pub code: &'static str,
    /// Numeric code (e.g. 978).
    pub numeric: u16,
    /// Number of minor-unit digits (2 for EUR, 0 for JPY, 3 for KWD).
    pub fraction_digits: u32,
}

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    currency(code).is_some()
}

/// Look up a currency by alphabetic code.
pub fn currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .map(|idx| &CURRENCIES[idx])
}

/// Look up a currency by ISO 4217 numeric code.
pub fn currency_by_numeric(numeric: u16) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.numeric == numeric)
}

/// Round `amount` half-up to the minor unit of `code`.
///
/// Unknown currencies round to 2 decimal places.
pub fn round_to_currency(amount: Decimal, code: &str) -> Decimal {
    let dp = currency(code).map_or(2, |c| c.fraction_digits);
    round_half_up(amount, dp)
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

const fn cur(code: &'static str, numeric: u16, fraction_digits: u32) -> Currency {
    Currency {
        code,
        numeric,
        fraction_digits,
    }
}

/// Sorted by alphabetic code for binary search.
static CURRENCIES: &[Currency] = &[
    cur("AED", 784, 2), // UAE Dirham
    cur("AMD", 51, 2),  // Armenian Dram
    cur("AUD", 36, 2),  // Australian Dollar
    cur("BGN", 975, 2), // Bulgarian Lev
    cur("BHD", 48, 3),  // Bahraini Dinar
    cur("BRL", 986, 2), // Brazilian Real
    cur("CAD", 124, 2), // Canadian Dollar
    cur("CHF", 756, 2), // Swiss Franc
    cur("CLP", 152, 0), // Chilean Peso
    cur("CNY", 156, 2), // Chinese Yuan
    cur("CZK", 203, 2), // Czech Koruna
    cur("DKK", 208, 2), // Danish Krone
    cur("EGP", 818, 2), // Egyptian Pound
    cur("EUR", 978, 2), // Euro
    cur("GBP", 826, 2), // Pound Sterling
    cur("GEL", 981, 2), // Georgian Lari
    cur("HKD", 344, 2), // Hong Kong Dollar
    cur("HRK", 191, 2), // Croatian Kuna
    cur("HUF", 348, 2), // Hungarian Forint
    cur("IDR", 360, 2), // Indonesian Rupiah
    cur("ILS", 376, 2), // Israeli Shekel
    cur("INR", 356, 2), // Indian Rupee
    cur("ISK", 352, 0), // Icelandic Krona
    cur("JOD", 400, 3), // Jordanian Dinar
    cur("JPY", 392, 0), // Japanese Yen
    cur("KES", 404, 2), // Kenyan Shilling
    cur("KRW", 410, 0), // South Korean Won
    cur("KWD", 414, 3), // Kuwaiti Dinar
    cur("KZT", 398, 2), // Kazakhstani Tenge
    cur("MXN", 484, 2), // Mexican Peso
    cur("MYR", 458, 2), // Malaysian Ringgit
    cur("NGN", 566, 2), // Nigerian Naira
    cur("NOK", 578, 2), // Norwegian Krone
    cur("NZD", 554, 2), // New Zealand Dollar
    cur("OMR", 512, 3), // Omani Rial
    cur("PHP", 608, 2), // Philippine Peso
    cur("PLN", 985, 2), // Polish Zloty
    cur("RON", 946, 2), // Romanian Leu
    cur("RSD", 941, 2), // Serbian Dinar
    cur("RUB", 643, 2), // Russian Ruble
    cur("SAR", 682, 2), // Saudi Riyal
    cur("SEK", 752, 2), // Swedish Krona
    cur("SGD", 702, 2), // Singapore Dollar
    cur("THB", 764, 2), // Thai Baht
    cur("TND", 788, 3), // Tunisian Dinar
    cur("TRY", 949, 2), // Turkish Lira
    cur("TWD", 901, 2), // New Taiwan Dollar
    cur("UAH", 980, 2), // Ukrainian Hryvnia
    cur("USD", 840, 2), // US Dollar
    cur("VND", 704, 0), // Vietnamese Dong
    cur("ZAR", 710, 2), // South African Rand
];

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn known_currencies() {
        for code in ["EUR", "USD", "GBP", "CHF", "JPY", "SEK"] {
            assert!(is_known_currency_code(code), "{code}");
        }
    }

    #[test]
    fn unknown_currencies() {
        assert!(!is_known_currency_code("XYZ"));
        assert!(!is_known_currency_code(""));
        assert!(!is_known_currency_code("EURO"));
        assert!(!is_known_currency_code("eur"));
    }

    #[test]
    fn numeric_lookup() {
        assert_eq!(currency_by_numeric(978).unwrap().code, "EUR");
        assert!(currency_by_numeric(1).is_none());
    }

    #[test]
    fn rounding_follows_minor_unit() {
        assert_eq!(round_to_currency(dec!(10.125), "EUR"), dec!(10.13));
        assert_eq!(round_to_currency(dec!(1234.5), "JPY"), dec!(1235));
        assert_eq!(round_to_currency(dec!(1.2345), "KWD"), dec!(1.235));
        assert_eq!(round_to_currency(dec!(1.005), "XXX"), dec!(1.01));
    }

    #[test]
    fn rounding_negative_is_symmetric() {
        assert_eq!(round_half_up(dec!(-2.5), 0), dec!(-3));
    }

    #[test]
    fn list_is_sorted() {
        for window in CURRENCIES.windows(2) {
            assert!(
                window[0].code < window[1].code,
                "currency codes not sorted: {} >= {}",
                window[0].code,
                window[1].code
            );
        }
    }
}
