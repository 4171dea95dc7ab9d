#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i8, Vec<u8>)| {
    let (start, values) = input;
    let mut nif = nif::Nif::generate();
    match nif.set_digits(isize::from(start), &values) {
        Ok(()) => assert_eq!(nif.checksum_digit(), nif.eval_checksum().ok()),
        Err(_) => assert_eq!(nif.len(), 9),
    }
});
