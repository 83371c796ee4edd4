use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::PieceKind;

/// Supplies the next piece kind, drawn uniformly from the seven variants.
///
/// Each draw is independent; there is no bag or history.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg64Mcg,
}

impl PieceGenerator {
    /// Creates a generator seeded from the OS's random data source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_os_rng(),
        }
    }

    /// Creates a generator that always yields the same sequence for `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    pub fn next_piece(&mut self) -> PieceKind {
        self.rng.random()
    }
}
