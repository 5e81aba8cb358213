//! Common test utilities for gbrt-rust integration tests.

#![allow(dead_code)]

use ndarray::{Array1, Array2};
use rand::prelude::*;

/// Step data: `x = 1..=10`, `y = 1.0` for the first five rows and `10.0` after.
pub fn step_data() -> (Array2<f64>, Array1<f64>) {
    let features = Array2::from_shape_fn((10, 1), |(i, _)| (i + 1) as f64);
    let target = Array1::from_iter((0..10).map(|i| if i < 5 { 1.0 } else { 10.0 }));
    (features, target)
}

/// Create uniformly distributed features in `[-5, 5)`.
pub fn create_features(num_samples: usize, num_features: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((num_samples, num_features), |_| rng.gen_range(-5.0..5.0))
}

/// Linear combination of the features with weights `0.1, 0.2, ...`.
pub fn create_linear_target(features: &Array2<f64>) -> Array1<f64> {
    features
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, v)| v * (j + 1) as f64 * 0.1)
                .sum()
        })
        .collect()
}

/// Noisy sine of the first feature.
pub fn create_sine_target(features: &Array2<f64>, noise: f64, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    features
        .column(0)
        .iter()
        .map(|x| x.sin() + rng.gen_range(-noise..=noise))
        .collect()
}

/// Features drawn from a few integer levels so that ties are common.
pub fn create_tied_features(num_samples: usize, num_features: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((num_samples, num_features), |_| rng.gen_range(0..4) as f64)
}
