use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::checksum::{self, BASE_LENGTH, NIF_LENGTH};
use super::combination::{Category, find_combination};
use super::error::{NifError, ValidityError};
use super::generator::NifGenerator;

/// A Portuguese fiscal identification number (Número de Identificação Fiscal).
///
/// A complete NIF is 9 decimal digits: an 8-digit base followed by a check
/// digit. The type also holds incomplete or over-long digit sequences so
/// that partial input can be stored, inspected, and completed later; use
/// [`Nif::is_valid`] or [`Nif::validate`] before trusting one.
///
/// Writes into the base through [`Nif::set_digits`] recompute the check
/// digit immediately. [`Nif::set_checksum_digit`] bypasses that.
///
/// Serializes as its digit string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nif {
    digits: Vec<u8>,
}

impl Nif {
    /// Create an empty NIF with no digits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a NIF from digit values, stored as-is.
    ///
    /// Fails if any value is above 9.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, NifError> {
        check_digits(&digits, 0)?;
        Ok(Self { digits })
    }

    /// Parse a digit string, stored as-is (no filling, no check digit fix).
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, NifError> {
        let digits = input
            .trim()
            .chars()
            .enumerate()
            .map(|(position, value)| {
                value
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(NifError::InvalidCharacter { position, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { digits })
    }

    /// Parse a digit string and complete it with random digits.
    ///
    /// Missing base digits are drawn uniformly from 0..=9, and a check digit
    /// is appended if none was supplied. See [`NifGenerator::fill`].
    pub fn parse_filled(input: &str) -> Result<Self, NifError> {
        NifGenerator::new().complete(input)
    }

    /// Generate a random, valid NIF.
    pub fn generate() -> Self {
        NifGenerator::new().generate()
    }

    pub(crate) fn from_checked(digits: Vec<u8>) -> Self {
        Self { digits }
    }

    /// All digits, check digit included when present.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits currently held.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether no digit is held.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The 8 base digits, or `None` while the base is incomplete.
    pub fn base(&self) -> Option<&[u8; BASE_LENGTH]> {
        self.digits
            .get(..BASE_LENGTH)
            .and_then(|base| base.try_into().ok())
    }

    /// The stored check digit (position 8), if present.
    pub fn checksum_digit(&self) -> Option<u8> {
        self.digits.get(BASE_LENGTH).copied()
    }

    /// Check digit the current base calls for.
    pub fn eval_checksum(&self) -> Result<u8, NifError> {
        self.base()
            .map(checksum::eval_checksum)
            .ok_or(NifError::IncompleteBase {
                len: self.digits.len(),
            })
    }

    /// Overwrite the check digit without recomputing it.
    ///
    /// Everything from position 8 onward is replaced by `value`, so an
    /// over-long sequence is cut down to 9 digits.
    pub fn set_checksum_digit(&mut self, value: u8) -> Result<(), NifError> {
        if self.digits.len() < BASE_LENGTH {
            return Err(NifError::IncompleteBase {
                len: self.digits.len(),
            });
        }
        check_digits(&[value], BASE_LENGTH)?;
        self.digits.truncate(BASE_LENGTH);
        self.digits.push(value);
        Ok(())
    }

    /// Store the check digit computed from the base.
    pub fn fix_checksum(&mut self) -> Result<&mut Self, NifError> {
        let value = self.eval_checksum()?;
        if self.checksum_digit() != Some(value) {
            tracing::trace!(nif = %self, checksum = value, "correcting check digit");
        }
        self.set_checksum_digit(value)?;
        Ok(self)
    }

    /// Write `values` into the base starting at `start`.
    ///
    /// `start` must lie in `-8..8`; negative values count back from the end
    /// of the base, so `-8` is position 0 and `-1` is position 7. The write
    /// may not run past the base, and may not leave a gap after the digits
    /// already present. Once the base is complete the check digit is
    /// recomputed.
    pub fn set_digits(&mut self, start: isize, values: &[u8]) -> Result<(), NifError> {
        let begin = self.resolve_range(start, values.len())?;
        check_digits(values, begin)?;

        let overlap = (begin + values.len()).min(self.digits.len());
        let (overwrite, append) = values.split_at(overlap.saturating_sub(begin));
        self.digits[begin..begin + overwrite.len()].copy_from_slice(overwrite);
        self.digits.extend_from_slice(append);

        if self.digits.len() >= BASE_LENGTH {
            self.fix_checksum()?;
        }
        Ok(())
    }

    /// Write a single base digit. Same rules as [`Nif::set_digits`].
    pub fn set_digit(&mut self, index: isize, value: u8) -> Result<(), NifError> {
        self.set_digits(index, &[value])
    }

    fn resolve_range(&self, start: isize, len: usize) -> Result<usize, NifError> {
        let out_of_range = || {
            tracing::debug!(start, len, "rejected digit assignment outside the base");
            NifError::OutOfRange {
                start,
                len,
                base_length: BASE_LENGTH,
            }
        };

        let base = BASE_LENGTH as isize;
        if !(-base..base).contains(&start) {
            return Err(out_of_range());
        }
        let begin = (if start < 0 { base + start } else { start }) as usize;
        if begin + len > BASE_LENGTH || begin > self.digits.len() {
            return Err(out_of_range());
        }
        Ok(begin)
    }

    /// Check the NIF, reporting the first rule it breaks.
    ///
    /// Rules, in order: exactly 9 digits; starts with an entry of
    /// [`COMBINATIONS`](super::COMBINATIONS); the check digit matches the base.
    pub fn validate(&self) -> Result<(), ValidityError> {
        if self.digits.len() != NIF_LENGTH {
            return Err(ValidityError::Length(self.digits.len()));
        }
        if find_combination(&self.digits).is_none() {
            return Err(ValidityError::Prefix);
        }
        let (Ok(expected), Some(found)) = (self.eval_checksum(), self.checksum_digit()) else {
            return Err(ValidityError::Length(self.digits.len()));
        };
        if expected != found {
            return Err(ValidityError::Checksum { expected, found });
        }
        Ok(())
    }

    /// Whether the NIF is complete, well-prefixed, and has the right check digit.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Category of the combination the NIF starts with.
    pub fn category(&self) -> Option<Category> {
        find_combination(&self.digits).map(|c| c.category)
    }

    /// Digits read as a base-10 number, most significant first.
    ///
    /// `None` if the sequence is too long for a `u64`.
    pub fn to_integer(&self) -> Option<u64> {
        self.digits
            .iter()
            .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
    }

    /// Iterate over the digits.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.digits.iter()
    }
}

fn check_digits(values: &[u8], offset: usize) -> Result<(), NifError> {
    match values.iter().position(|&d| d > 9) {
        Some(i) => Err(NifError::InvalidDigit {
            position: offset + i,
            value: values[i],
        }),
        None => Ok(()),
    }
}

impl fmt::Display for Nif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Nif {
    type Err = NifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Nif {
    type Error = NifError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Nif {
    type Error = NifError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<Vec<u8>> for Nif {
    type Error = NifError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_digits(value)
    }
}

impl From<Nif> for String {
    fn from(nif: Nif) -> Self {
        nif.to_string()
    }
}

impl AsRef<[u8]> for Nif {
    fn as_ref(&self) -> &[u8] {
        &self.digits
    }
}

impl Index<usize> for Nif {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.digits[index]
    }
}

impl<'a> IntoIterator for &'a Nif {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nif(s: &str) -> Nif {
        Nif::parse(s).unwrap()
    }

    // --- construction ---

    #[test]
    fn empty() {
        let n = Nif::new();
        assert!(n.is_empty());
        assert_eq!(n.to_string(), "");
        assert_eq!(n.base(), None);
        assert_eq!(n.checksum_digit(), None);
    }

    #[test]
    fn parse_keeps_short_input() {
        let n = nif("1234");
        assert_eq!(n.digits(), &[1, 2, 3, 4]);
        assert_eq!(n.base(), None);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(nif("  123456789\n").to_string(), "123456789");
    }

    #[test]
    fn parse_rejects_letters() {
        assert_eq!(
            Nif::parse("12a4").unwrap_err(),
            NifError::InvalidCharacter {
                position: 2,
                value: 'a'
            }
        );
    }

    #[test]
    fn from_digits_rejects_values_above_nine() {
        assert_eq!(
            Nif::from_digits(vec![1, 2, 10]).unwrap_err(),
            NifError::InvalidDigit {
                position: 2,
                value: 10
            }
        );
    }

    // --- validation ---

    #[test]
    fn known_valid() {
        let n = nif("123456789");
        assert_eq!(n.validate(), Ok(()));
        assert!(n.is_valid());
        assert_eq!(n.category(), Some(Category::Individual));
    }

    #[test]
    fn wrong_length() {
        assert_eq!(nif("12345678").validate(), Err(ValidityError::Length(8)));
        assert_eq!(nif("1234567890").validate(), Err(ValidityError::Length(10)));
    }

    #[test]
    fn unknown_prefix() {
        // 95xxxxxxx: 9 alone is not a combination
        let mut n = nif("950000000");
        n.fix_checksum().unwrap();
        assert_eq!(n.validate(), Err(ValidityError::Prefix));
    }

    #[test]
    fn checksum_mismatch() {
        assert_eq!(
            nif("123456780").validate(),
            Err(ValidityError::Checksum {
                expected: 9,
                found: 0
            })
        );
        assert_eq!(
            nif("999999999").validate(),
            Err(ValidityError::Checksum {
                expected: 0,
                found: 9
            })
        );
    }

    // --- checksum ---

    #[test]
    fn eval_checksum_needs_full_base() {
        assert_eq!(
            nif("1234567").eval_checksum(),
            Err(NifError::IncompleteBase { len: 7 })
        );
        assert_eq!(nif("12345678").eval_checksum(), Ok(9));
    }

    #[test]
    fn fix_checksum_appends() {
        let mut n = nif("12345678");
        n.fix_checksum().unwrap();
        assert_eq!(n.to_string(), "123456789");
    }

    #[test]
    fn fix_checksum_is_idempotent() {
        let mut once = nif("501442601");
        once.fix_checksum().unwrap();
        let mut twice = once.clone();
        twice.fix_checksum().unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.to_string(), "501442600");
    }

    #[test]
    fn fix_checksum_truncates_long_input() {
        let mut n = nif("12345678000");
        n.fix_checksum().unwrap();
        assert_eq!(n.to_string(), "123456789");
    }

    #[test]
    fn set_checksum_digit_does_not_recompute() {
        let mut n = nif("123456789");
        n.set_checksum_digit(3).unwrap();
        assert_eq!(n.checksum_digit(), Some(3));
        assert!(!n.is_valid());
    }

    #[test]
    fn set_checksum_digit_rejects_bad_value() {
        let mut n = nif("123456789");
        assert!(n.set_checksum_digit(11).is_err());
        assert_eq!(n.checksum_digit(), Some(9));
    }

    // --- mutation ---

    #[test]
    fn set_digits_recomputes_checksum() {
        let mut n = nif("123456789");
        n.set_digits(0, &[5, 0, 1, 4, 4, 2, 6, 0]).unwrap();
        assert_eq!(n.to_string(), "501442600");
        assert!(n.is_valid());
    }

    #[test]
    fn set_digits_negative_start() {
        let mut n = nif("123456789");
        n.set_digits(-8, &[5]).unwrap();
        assert_eq!(n[0], 5);
        n.set_digit(-1, 0).unwrap();
        assert_eq!(n[7], 0);
        assert_eq!(n.checksum_digit(), Some(n.eval_checksum().unwrap()));
    }

    #[test]
    fn set_digits_rejects_start_outside_base() {
        let mut n = nif("123456789");
        for start in [-9, -20, 8, 9, 100] {
            assert_eq!(
                n.set_digits(start, &[1]),
                Err(NifError::OutOfRange {
                    start,
                    len: 1,
                    base_length: 8
                })
            );
        }
        assert_eq!(n.to_string(), "123456789");
    }

    #[test]
    fn set_digits_rejects_overflow_into_checksum() {
        let mut n = nif("123456789");
        assert!(n.set_digits(6, &[1, 1, 1]).is_err());
        assert!(n.set_digits(-2, &[1, 1, 1]).is_err());
        assert_eq!(n.to_string(), "123456789");
    }

    #[test]
    fn set_digits_appends_to_short_base() {
        let mut n = nif("1234");
        n.set_digits(4, &[5, 6]).unwrap();
        assert_eq!(n.to_string(), "123456");
        n.set_digits(6, &[7, 8]).unwrap();
        assert_eq!(n.to_string(), "123456789");
    }

    #[test]
    fn set_digits_rejects_gap() {
        let mut n = nif("12");
        assert!(n.set_digits(5, &[1]).is_err());
    }

    #[test]
    fn set_digits_rejects_bad_value_without_writing() {
        let mut n = nif("123456789");
        assert_eq!(
            n.set_digits(2, &[1, 12]),
            Err(NifError::InvalidDigit {
                position: 3,
                value: 12
            })
        );
        assert_eq!(n.to_string(), "123456789");
    }

    // --- conversion ---

    #[test]
    fn to_integer() {
        assert_eq!(nif("123456789").to_integer(), Some(123_456_789));
        assert_eq!(nif("012").to_integer(), Some(12));
        assert_eq!(Nif::new().to_integer(), Some(0));
        assert_eq!(nif(&"9".repeat(25)).to_integer(), None);
    }

    #[test]
    fn display_keeps_leading_zeros() {
        assert_eq!(nif("012").to_string(), "012");
    }

    #[test]
    fn iterates_digits() {
        let sum: u32 = nif("123").iter().map(|&d| u32::from(d)).sum();
        assert_eq!(sum, 6);
    }
}
