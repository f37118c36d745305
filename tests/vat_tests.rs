#![cfg(feature = "vat")]

use masterdata::vat::*;

fn structures() -> VatinStructures {
    VatinStructures::bundled().unwrap()
}

// ---------------------------------------------------------------------------
// VATIN structure
// ---------------------------------------------------------------------------

#[test]
fn bundled_examples_are_valid() {
    let structures = structures();
    let mut count = 0;
    for prefix in structures.prefixes() {
        let examples = structures.examples(prefix);
        assert!(!examples.is_empty(), "{prefix} has no examples");
        for example in examples {
            assert!(structures.is_valid_vatin(example), "{example}");
            count += 1;
        }
    }
    assert!(count > 30);
}

#[test]
fn all_eu_members_covered() {
    let structures = structures();
    for cc in masterdata::core::countries::country_codes() {
        if !masterdata::is_eu_member_state(cc) {
            continue;
        }
        let prefix = masterdata::core::countries::vat_prefix_for_country(cc).unwrap();
        assert!(structures.structure(prefix).is_some(), "{cc} -> {prefix}");
    }
}

#[test]
fn greece_uses_el_prefix() {
    let structures = structures();
    assert!(structures.is_valid_vatin("EL094259216"));
    assert!(!structures.is_valid_vatin("GR094259216"));
}

#[test]
fn rejections_carry_reason() {
    let structures = structures();
    let err = structures.validate_vatin("DE").unwrap_err();
    assert!(err.reason.contains("too short"));
    let err = structures.validate_vatin("US123456789").unwrap_err();
    assert!(err.reason.contains("unknown country prefix"));
    let err = structures.validate_vatin("DE012345678").unwrap_err();
    assert_eq!(err.value, "DE012345678");
    assert!(err.to_string().contains("invalid format for country DE"));
}

#[test]
fn normalization() {
    assert_eq!(normalize_vatin(" nl 1234.5678-9/b01 "), "NL123456789B01");
    let vatin = structures().validate_vatin("nl 123456789 b01").unwrap();
    assert_eq!(vatin.prefix, "NL");
    assert_eq!(vatin.number, "123456789B01");
}

// ---------------------------------------------------------------------------
// UNTDID 5305 / 5153
// ---------------------------------------------------------------------------

#[test]
fn tax_category_codes_unique_and_round_trip() {
    let mut codes: Vec<_> = TaxCategory::ALL.iter().map(|c| c.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), TaxCategory::ALL.len());
    for category in TaxCategory::ALL {
        assert_eq!(TaxCategory::from_code(category.code()), Some(category));
        assert!(!category.name().is_empty());
    }
    assert_eq!(TaxCategory::from_code("N"), None);
    assert_eq!(TaxCategory::from_code("s"), None);
}

#[test]
fn exempt_categories() {
    assert!(TaxCategory::ZeroRated.is_exempt());
    assert!(TaxCategory::ReverseCharge.is_exempt());
    assert!(!TaxCategory::StandardRate.is_exempt());
    assert!(!TaxCategory::LowerRate.is_exempt());
}

#[test]
fn tax_types_lookup() {
    assert_eq!(tax_type("VAT"), Some(&TaxType::VAT));
    assert_eq!(tax_type("GST").map(|t| t.name), Some("Goods and services tax"));
    assert_eq!(tax_type("XYZ"), None);
    let types = tax_types();
    assert!(types.windows(2).all(|w| w[0].code < w[1].code));
    assert!(types.contains(&TaxType::CUSTOMS_DUTY));
}
