// Per-render random source
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generator for one render. A seed makes the render reproducible; without
/// one every render draws fresh values.
pub fn render_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
