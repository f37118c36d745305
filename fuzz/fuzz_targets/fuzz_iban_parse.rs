#![no_main]

use libfuzzer_sys::fuzz_target;
use masterdata::bank::{IbanRegistry, is_valid_bic, is_valid_iban_checksum};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok(registry) = IbanRegistry::bundled() else {
            return;
        };
        // Rejections are fine, panics are bugs.
        let parsed = registry.parse(s);
        if parsed.is_ok() {
            assert!(is_valid_iban_checksum(s));
        }
        let _ = is_valid_bic(s);
    }
});
