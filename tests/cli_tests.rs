#![cfg(feature = "cli")]

use nif::Nif;
use nif::cli::run;

#[test]
fn no_argument_prints_valid_nif() {
    let outcome = run(None);
    assert!(outcome.success);
    assert!(Nif::parse(&outcome.message).unwrap().is_valid());
}

#[test]
fn seven_digits_are_completed() {
    for _ in 0..50 {
        let outcome = run(Some("1234567"));
        assert!(outcome.success);
        assert_eq!(outcome.message.len(), 9);
        assert!(outcome.message.starts_with("1234567"));
        assert!(Nif::parse(&outcome.message).unwrap().is_valid());
    }
}

#[test]
fn valid_input_is_echoed() {
    let outcome = run(Some("501442600"));
    assert_eq!(outcome.message, "501442600");
    assert!(outcome.success);
}

#[test]
fn over_long_input_is_cut_to_nine() {
    let outcome = run(Some("12345678000"));
    assert_eq!(outcome.message, "123456789");
}

#[test]
fn unknown_prefix_fails() {
    let outcome = run(Some("95"));
    assert_eq!(outcome.message, "Invalid Nif: 95");
    assert!(!outcome.success);
}

#[test]
fn garbage_fails() {
    let outcome = run(Some("hello"));
    assert_eq!(outcome.message, "Invalid Nif: hello");
    assert!(!outcome.success);
}
