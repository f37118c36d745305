#![no_main]

use libfuzzer_sys::fuzz_target;
use masterdata::region::{LauRegistry, NutsRegistry};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(nuts) = NutsRegistry::from_xml(s) {
            for item in nuts.iter() {
                let _ = nuts.children(item.id()).count();
            }
            let _ = LauRegistry::from_xml_checked(s, &nuts);
        }
    }
});
