#![cfg(feature = "vehicle")]

use masterdata::MasterDataError;
use masterdata::vehicle::VehicleSigns;

#[test]
fn unique_relations() {
    let signs = VehicleSigns::new();
    assert_eq!(signs.countries_for_sign("D"), ["DE"]);
    assert_eq!(signs.single_country_for_sign("d").unwrap(), Some("DE"));
    assert_eq!(signs.single_sign_for_country("li").unwrap(), Some("FL"));
    assert_eq!(signs.single_country_for_sign("USA").unwrap(), Some("US"));
}

#[test]
fn sign_shared_by_two_countries() {
    let signs = VehicleSigns::new();
    assert_eq!(signs.countries_for_sign("ROK"), ["KP", "KR"]);
    let err = signs.single_country_for_sign("ROK").unwrap_err();
    assert!(matches!(
        err,
        MasterDataError::Ambiguous { ref candidates, .. } if candidates == &["KP", "KR"]
    ));
}

#[test]
fn country_with_two_signs() {
    let signs = VehicleSigns::new();
    assert_eq!(signs.signs_for_country("GB"), ["GB", "UK"]);
    assert!(signs.single_sign_for_country("GB").is_err());
    assert_eq!(signs.signs_for_country("GG"), ["GBA", "GBG"]);
}

#[test]
fn unknown_values_are_empty_not_errors() {
    let signs = VehicleSigns::default();
    assert!(signs.countries_for_sign("QQQ").is_empty());
    assert_eq!(signs.single_country_for_sign("QQQ").unwrap(), None);
    assert_eq!(signs.single_sign_for_country("ZZ").unwrap(), None);
}

#[test]
fn relations_are_symmetric() {
    let signs = VehicleSigns::new();
    for sign in signs.signs() {
        for country in signs.countries_for_sign(sign) {
            assert!(signs.signs_for_country(country).contains(&sign), "{sign} {country}");
        }
    }
    for country in signs.countries() {
        assert!(masterdata::is_known_country_code(country), "{country}");
    }
}
