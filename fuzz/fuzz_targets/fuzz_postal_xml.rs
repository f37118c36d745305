#![no_main]

use libfuzzer_sys::fuzz_target;
use masterdata::postal::PostalCodeRegistry;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(registry) = PostalCodeRegistry::from_xml(s) {
            for country in registry.countries() {
                for example in country.examples() {
                    let _ = country.is_valid_postal_code(&example);
                }
            }
        }
    }
});
