#![no_main]

use libfuzzer_sys::fuzz_target;
use masterdata::leitweg::LeitwegId;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(id) = LeitwegId::parse(s) {
            assert_eq!(id.to_string(), s);
        }
    }
});
