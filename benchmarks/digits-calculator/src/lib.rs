//! Reproducible input generators for the benchmarks.

use rand::prelude::*;

/// Generate a `rows x cols` matrix with entries uniform in `[-1, 1)`.
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(-1.0..1.0)).collect())
        .collect()
}

/// Generate a decimal literal of `digits` random digits with a non-zero lead.
pub fn random_decimal(digits: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..digits)
        .map(|i| {
            let low = if i == 0 { 1 } else { 0 };
            char::from(b'0' + rng.random_range(low..10u8))
        })
        .collect()
}
