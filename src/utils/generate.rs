use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::complex::Complex;

/// `[0, 1, 2, ..., size - 1]`
pub fn ramp(size: usize) -> Vec<f64> {
    (0..size).map(|i| i as f64).collect()
}

pub fn constant(size: usize, value: f64) -> Vec<f64> {
    vec![value; size]
}

/// Whole numbers drawn uniformly from `[lower, upper)`, reproducible per seed.
pub fn random(size: usize, lower: i64, upper: i64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(lower..upper) as f64).collect()
}

/// `[0 + 0i, 1 + 1i, ..., (size - 1) + (size - 1)i]`
pub fn complex_ramp(size: usize) -> Vec<Complex> {
    (0..size).map(|i| Complex::new(i as f64, i as f64)).collect()
}

/// A sine wave of `frequency` Hz sampled at `sample_rate` Hz, peak amplitude `amplitude`.
pub fn sine(size: usize, frequency: f64, sample_rate: f64, amplitude: f64) -> Vec<f64> {
    (0..size)
        .map(|i| amplitude * (std::f64::consts::TAU * frequency * i as f64 / sample_rate).sin())
        .collect()
}
