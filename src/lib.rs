//! # nif
//!
//! Validation and generation of Portuguese fiscal identification numbers
//! (Número de Identificação Fiscal).
//!
//! A NIF is 9 digits: an 8-digit base starting with a known taxpayer
//! prefix, and a check digit computed by weighted modulo 11.
//!
//! ## Quick Start
//!
//! ```rust
//! use nif::{Category, Nif};
//!
//! let nif: Nif = "123456789".parse().unwrap();
//! assert!(nif.is_valid());
//! assert_eq!(nif.category(), Some(Category::Individual));
//!
//! // Wrong check digit: fix it in place
//! let mut nif = Nif::parse("501442601").unwrap();
//! assert!(!nif.is_valid());
//! nif.fix_checksum().unwrap();
//! assert_eq!(nif.to_string(), "501442600");
//!
//! // Random, always valid
//! assert!(Nif::generate().is_valid());
//!
//! // Partial input, completed with random digits
//! let nif = Nif::parse_filled("1234567").unwrap();
//! assert!(nif.to_string().starts_with("1234567"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` (default) | `nif` binary and the [`cli`] module |

pub mod core;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export core types at crate root for convenience
pub use crate::core::*;
