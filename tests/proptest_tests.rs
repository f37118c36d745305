//! Property-based tests for the check-digit algorithms.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "all")]

use masterdata::bank::{IbanRegistry, electronic_iban, is_valid_iban_checksum};
use masterdata::barcode::{
    ChecksumMode, calculate_check_digit, compact_upca, expand_upce, is_valid_check_digit,
    normalize_isbn,
};
use masterdata::leitweg::{LeitwegId, is_leitweg_id_valid};
use masterdata::postal::PostalCodeRegistry;
use proptest::prelude::*;

const IBANS: &[&str] = &[
    "DE89370400440532013000",
    "GB82WEST12345698765432",
    "AT611904300234573201",
    "CH9300762011623852957",
    "FR1420041010050500013M02606",
    "BE68539007547034",
    "NL91ABNA0417164300",
    "IT60X0542811101000000123456",
    "PL61109010140000071219812874",
    "BA391290079401028494",
];

/// Replace the digit at `index` (wrapped onto the digit positions after the
/// country code) with a different digit.
fn mutate_digit(iban: &str, index: usize, delta: u8) -> String {
    let positions: Vec<usize> = iban
        .bytes()
        .enumerate()
        .skip(2)
        .filter(|(_, b)| b.is_ascii_digit())
        .map(|(i, _)| i)
        .collect();
    let pos = positions[index % positions.len()];
    let mut bytes = iban.as_bytes().to_vec();
    bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
    String::from_utf8(bytes).unwrap()
}

fn leitweg_parts() -> impl Strategy<Value = (String, Option<String>)> {
    ("[0-9A-Z]{2,12}", prop::option::of("[0-9A-Z]{0,30}"))
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Any single-digit change of a valid IBAN breaks the MOD 97-10 check.
    #[test]
    fn iban_single_digit_change_detected(
        iban in prop::sample::select(IBANS),
        index in 0usize..64,
        delta in 1u8..10,
    ) {
        let registry = IbanRegistry::bundled().unwrap();
        prop_assert!(registry.is_valid_iban(iban));
        let mutated = mutate_digit(iban, index, delta);
        prop_assert!(!is_valid_iban_checksum(&mutated));
        prop_assert!(!registry.is_valid_iban(&mutated));
    }

    /// Normalizing an IBAN twice changes nothing.
    #[test]
    fn electronic_iban_idempotent(s in "[ a-zA-Z0-9]{0,40}") {
        let once = electronic_iban(&s);
        prop_assert_eq!(electronic_iban(&once), once.clone());
        prop_assert!(!once.contains(' '));
    }

    /// IDs built from parts are valid; neighbouring checksums are not.
    #[test]
    fn leitweg_checksum_neighbours((coarse, fine) in leitweg_parts()) {
        let id = LeitwegId::from_parts(&coarse, fine.as_deref()).unwrap();
        let text = id.to_string();
        prop_assert!(is_leitweg_id_valid(&text));

        let checksum: u8 = id.checksum().parse().unwrap();
        let prefix = &text[..text.len() - 2];
        for neighbour in [checksum - 1, checksum + 1] {
            let candidate = format!("{prefix}{neighbour:02}");
            prop_assert!(!is_leitweg_id_valid(&candidate), "{}", candidate);
        }
    }

    /// GS1 check digits detect every single-digit substitution.
    #[test]
    fn gs1_single_digit_change_detected(
        data in "[0-9]{7,17}",
        index in 0usize..18,
        delta in 1u8..10,
    ) {
        let check = calculate_check_digit(&data).unwrap();
        let code = format!("{data}{check}");
        prop_assert!(is_valid_check_digit(&code));

        let pos = index % code.len();
        let mut bytes = code.into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert!(!is_valid_check_digit(&mutated));
    }

    /// Expanding any UPC-E code, compacting the result and expanding again
    /// yields the same UPC-A code.
    #[test]
    fn upce_compaction_round_trip(upce in "[01][0-9]{6}") {
        let upca = expand_upce(&upce, ChecksumMode::Add).unwrap();
        prop_assert_eq!(upca.len(), 12);
        let compact = compact_upca(&upca, ChecksumMode::Check).unwrap();
        prop_assert!(compact.is_some());
        let compact = compact.unwrap();
        prop_assert_eq!(expand_upce(&compact, ChecksumMode::Check).unwrap(), upca);
    }

    #[test]
    fn isbn_normalization_idempotent(s in "[0-9xX -]{0,20}") {
        let once = normalize_isbn(&s);
        prop_assert_eq!(normalize_isbn(&once), once);
    }

    /// Austrian postal codes are exactly four digits.
    #[test]
    fn austrian_postal_codes(code in "[0-9]{1,6}") {
        let registry = PostalCodeRegistry::bundled().unwrap();
        prop_assert_eq!(registry.is_valid_postal_code("AT", &code), code.len() == 4);
    }
}
