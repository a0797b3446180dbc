//! Seeded TR sampling.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator used for TR sampling, seeded deterministically.
pub fn sampling_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Draw `n` distinct entries of `candidates` without replacement, sorted
/// ascending.
///
/// Returns `None` when fewer than `n` candidates are available; a short
/// sample is never returned.
pub fn sample_sorted<R: Rng + ?Sized>(
    candidates: &[usize],
    n: usize,
    rng: &mut R,
) -> Option<Vec<usize>> {
    if candidates.len() < n {
        return None;
    }
    let mut picked: Vec<usize> = rand::seq::index::sample(rng, candidates.len(), n)
        .into_iter()
        .map(|i| candidates[i])
        .collect();
    picked.sort_unstable();
    Some(picked)
}
