//! Command-line behaviour, kept apart from the binary so it can be tested.
//!
//! Without an argument a random NIF is generated. With one, the argument is
//! completed with random digits, its check digit corrected, and the result
//! printed if it validates.

use rand::Rng;

use crate::core::{Nif, NifGenerator};

/// What the binary prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Line written to standard output.
    pub message: String,
    /// Whether the process exits with status 0.
    pub success: bool,
}

impl Outcome {
    fn valid(nif: &Nif) -> Self {
        Self {
            message: nif.to_string(),
            success: true,
        }
    }

    fn invalid(arg: &str) -> Self {
        Self {
            message: format!("Invalid Nif: {arg}"),
            success: false,
        }
    }
}

/// Run with the thread-local RNG.
pub fn run(arg: Option<&str>) -> Outcome {
    run_with(&mut NifGenerator::new(), arg)
}

/// Run with the given generator.
pub fn run_with<R: Rng>(generator: &mut NifGenerator<R>, arg: Option<&str>) -> Outcome {
    let Some(arg) = arg else {
        return Outcome::valid(&generator.generate());
    };

    if arg.trim().is_empty() {
        tracing::debug!("empty argument");
        return Outcome::invalid(arg);
    }

    let mut nif = match generator.complete(arg) {
        Ok(nif) => nif,
        Err(err) => {
            tracing::debug!(%err, "argument is not a digit string");
            return Outcome::invalid(arg);
        }
    };

    if let Err(err) = nif.fix_checksum() {
        tracing::debug!(%err, "could not correct check digit");
        return Outcome::invalid(arg);
    }

    match nif.validate() {
        Ok(()) => Outcome::valid(&nif),
        Err(reason) => {
            tracing::debug!(%nif, %reason, "rejected");
            Outcome::invalid(arg)
        }
    }
}
