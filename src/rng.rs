//! Per-run random number generators.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator owned by a single search run.
///
/// A seed makes the run reproducible; without one a fresh seed is drawn
/// from the thread-local generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
