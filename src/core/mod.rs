//! NIF types, check digit, validation, and generation.
//!
//! A NIF is 9 decimal digits: an 8-digit base that starts with one of the
//! [`COMBINATIONS`], followed by a weighted modulo-11 check digit.

mod checksum;
mod combination;
mod error;
mod generator;
mod nif;

pub use checksum::{BASE_LENGTH, NIF_LENGTH, eval_checksum, weighted_remainder};
pub use combination::{COMBINATIONS, Category, Combination, fair_combinations, find_combination};
pub use error::*;
pub use generator::NifGenerator;
pub use nif::Nif;
