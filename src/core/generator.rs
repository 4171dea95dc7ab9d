use std::cell::OnceCell;

use rand::Rng;
use rand::rngs::ThreadRng;

use super::checksum::{BASE_LENGTH, NIF_LENGTH, eval_checksum};
use super::combination::{Combination, fair_combinations};
use super::error::NifError;
use super::nif::Nif;

/// Random NIF generator.
///
/// Prefixes are drawn from the fairness-expanded catalogue (see
/// [`fair_combinations`]), which is built on first use and cached for the
/// lifetime of the generator. Each generator owns its cache.
///
/// The randomness source is not cryptographic; any [`Rng`] works, which
/// makes seeded generation possible:
///
/// ```rust
/// use nif::NifGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut a = NifGenerator::with_rng(StdRng::seed_from_u64(7));
/// let mut b = NifGenerator::with_rng(StdRng::seed_from_u64(7));
/// assert_eq!(a.generate(), b.generate());
/// ```
#[derive(Debug)]
pub struct NifGenerator<R = ThreadRng> {
    rng: R,
    fair: OnceCell<Vec<&'static Combination>>,
}

impl NifGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for NifGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NifGenerator<R> {
    /// Create a generator backed by the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            fair: OnceCell::new(),
        }
    }

    /// The fairness-expanded catalogue this generator draws from.
    pub fn fair_combinations(&self) -> &[&'static Combination] {
        self.fair.get_or_init(fair_combinations)
    }

    /// Generate a valid NIF.
    ///
    /// Picks a prefix uniformly from the expanded catalogue, pads it to 8
    /// digits with uniform random digits, and appends the check digit.
    pub fn generate(&mut self) -> Nif {
        let fair = self.fair.get_or_init(fair_combinations);
        let prefix = fair[self.rng.gen_range(0..fair.len())].digits;

        let mut base = [0u8; BASE_LENGTH];
        base[..prefix.len()].copy_from_slice(prefix);
        for d in &mut base[prefix.len()..] {
            *d = self.rng.gen_range(0..10);
        }

        let mut digits = Vec::with_capacity(NIF_LENGTH);
        digits.extend_from_slice(&base);
        digits.push(eval_checksum(&base));

        let nif = Nif::from_checked(digits);
        tracing::debug!(%nif, "generated nif");
        nif
    }

    /// Complete a partial NIF.
    ///
    /// A base shorter than 8 digits is padded with uniform random digits;
    /// if no check digit follows the base, the computed one is appended.
    /// A NIF that already has 9 or more digits is returned unchanged.
    pub fn fill(&mut self, partial: Nif) -> Nif {
        let supplied = partial.len();
        if supplied >= NIF_LENGTH {
            return partial;
        }

        let mut digits = partial.digits().to_vec();
        while digits.len() < BASE_LENGTH {
            digits.push(self.rng.gen_range(0..10));
        }
        if let Ok(base) = <[u8; BASE_LENGTH]>::try_from(digits.as_slice()) {
            digits.push(eval_checksum(&base));
        }

        let nif = Nif::from_checked(digits);
        tracing::debug!(supplied, %nif, "filled partial nif");
        nif
    }

    /// Parse `input` and [`fill`](Self::fill) whatever is missing.
    pub fn complete(&mut self, input: &str) -> Result<Nif, NifError> {
        Ok(self.fill(Nif::parse(input)?))
    }
}
