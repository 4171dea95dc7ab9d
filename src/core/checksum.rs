//! NIF check digit (weighted modulo 11).

/// Number of freely assignable digits; the check digit follows them.
pub const BASE_LENGTH: usize = 8;

/// Total number of digits in a complete NIF.
pub const NIF_LENGTH: usize = BASE_LENGTH + 1;

/// Weighted sum of the base reduced modulo 11.
///
/// Digit `i` (0-based) is weighted by `9 - i`, so weights run from 9 down to 2.
/// Every element of `base` must be a digit value in `0..=9`.
pub fn weighted_remainder(base: &[u8; BASE_LENGTH]) -> u8 {
    debug_assert!(base.iter().all(|&d| d <= 9), "base holds a value above 9: {base:?}");
    let sum: u32 = base
        .iter()
        .zip((2..=9u32).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    (sum % 11) as u8
}

/// Compute the check digit for an 8-digit base.
///
/// Remainders 0 and 1 both give 0, any other remainder `a` gives `11 - a`.
/// Same input contract as [`weighted_remainder`].
pub fn eval_checksum(base: &[u8; BASE_LENGTH]) -> u8 {
    match weighted_remainder(base) {
        0 | 1 => 0,
        a => 11 - a,
    }
}
