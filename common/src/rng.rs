use rand::prelude::{SeedableRng, StdRng};

/// Creates the random source used for opening moves, rollouts and
/// tie-breaks. A fixed seed makes a whole search run reproducible.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
