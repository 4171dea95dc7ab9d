#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(nif) = nif::Nif::parse_filled(s) {
            // Anything up to 8 digits must come back complete.
            if s.trim().chars().count() < 9 {
                assert_eq!(nif.len(), 9);
                assert_eq!(nif.checksum_digit(), nif.eval_checksum().ok());
            }
        }
    }
});
