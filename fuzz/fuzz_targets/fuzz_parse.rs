#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(mut nif) = nif::Nif::parse(s) {
            let _ = nif.validate();
            let _ = nif.to_integer();
            let _ = nif.fix_checksum();
        }
    }
});
