#![no_main]

use libfuzzer_sys::fuzz_target;
use masterdata::barcode::{ChecksumMode, Ean13, compact_upca, expand_upce, isbn10_to_isbn13};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Ean13::new(s).with_correct_checksum();
        let _ = expand_upce(s, ChecksumMode::Ignore);
        if let Ok(Some(upce)) = compact_upca(s, ChecksumMode::Check) {
            assert_eq!(expand_upce(&upce, ChecksumMode::Check).ok().as_deref(), Some(s));
        }
        let _ = isbn10_to_isbn13(s);
    }
});
