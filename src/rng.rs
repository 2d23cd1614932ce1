use rand::{rngs::StdRng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a [`StdRng`] from an explicit seed.
///
/// Weight initialization and sampling both take the generator as an
/// argument, so a fixed seed makes a whole run reproducible.
pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create a [`StdRng`] seeded from the `SEED` environment variable.
///
/// Each call offsets the base seed by an incrementing counter so that
/// repeated calls produce distinct but deterministic streams. Without
/// `SEED` the base defaults to 0.
pub fn rng_from_env() -> StdRng {
    let base = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let idx = COUNTER.fetch_add(1, Ordering::SeqCst);
    rng_from_seed(base + idx)
}
