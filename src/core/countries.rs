//! ISO 3166-1 alpha-2 country codes and EU membership.
//!
//! Country codes key almost every table in this crate (postal code formats,
//! IBAN layouts, VAT number structures, NUTS regions).

/// Check whether `code` is a known ISO 3166-1 alpha-2 country code.
pub fn is_known_country_code(code: &str) -> bool {
    COUNTRY_CODES.binary_search(&code).is_ok()
}

/// All known ISO 3166-1 alpha-2 codes in ascending order.
pub fn country_codes() -> &'static [&'static str] {
    COUNTRY_CODES
}

/// Check whether `code` is an EU member state.
pub fn is_eu_member_state(code: &str) -> bool {
    EU_MEMBER_STATES.binary_search(&code).is_ok()
}

/// VAT number prefix used by the country.
///
/// Greece uses `EL` instead of its ISO code; all other countries use the
/// ISO code itself. Returns `None` for unknown codes.
pub fn vat_prefix_for_country(code: &str) -> Option<&'static str> {
    if code == "GR" {
        return Some("EL");
    }
    COUNTRY_CODES
        .binary_search(&code)
        .ok()
        .map(|idx| COUNTRY_CODES[idx])
}

/// Map a VAT prefix back to its ISO country code (`EL` → `GR`, `XI` → `GB`).
pub fn country_for_vat_prefix(prefix: &str) -> Option<&'static str> {
    match prefix {
        "EL" => Some("GR"),
        "XI" => Some("GB"),
        _ => COUNTRY_CODES
            .binary_search(&prefix)
            .ok()
            .map(|idx| COUNTRY_CODES[idx]),
    }
}

/// Complete list of ISO 3166-1 alpha-2 country codes (249 entries).
/// Sorted for binary search.
static COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// EU member states (27), sorted for binary search.
static EU_MEMBER_STATES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries() {
        for cc in ["DE", "AT", "CH", "FR", "US", "GB", "JP"] {
            assert!(is_known_country_code(cc), "{cc}");
        }
    }

    #[test]
    fn unknown_countries() {
        assert!(!is_known_country_code("XX"));
        assert!(!is_known_country_code(""));
        assert!(!is_known_country_code("DEU"));
        assert!(!is_known_country_code("de"));
    }

    #[test]
    fn eu_membership() {
        assert!(is_eu_member_state("AT"));
        assert!(is_eu_member_state("HR"));
        assert!(!is_eu_member_state("GB"));
        assert!(!is_eu_member_state("CH"));
        assert_eq!(EU_MEMBER_STATES.len(), 27);
    }

    #[test]
    fn vat_prefixes() {
        assert_eq!(vat_prefix_for_country("GR"), Some("EL"));
        assert_eq!(vat_prefix_for_country("DE"), Some("DE"));
        assert_eq!(vat_prefix_for_country("ZZ"), None);
        assert_eq!(country_for_vat_prefix("EL"), Some("GR"));
        assert_eq!(country_for_vat_prefix("XI"), Some("GB"));
    }

    #[test]
    fn lists_are_sorted() {
        for list in [COUNTRY_CODES, EU_MEMBER_STATES] {
            for window in list.windows(2) {
                assert!(window[0] < window[1], "not sorted: {} >= {}", window[0], window[1]);
            }
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(country_codes().len(), 249);
    }
}
