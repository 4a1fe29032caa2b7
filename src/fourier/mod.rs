//! Discrete frequency-domain transforms over real or complex samples.
//!
//! Every function is pure: it reads its input and returns a fresh `Vec`.

mod dct;
pub use dct::*;
mod dft;
pub use dft::*;
mod fft;
pub use fft::*;
mod sample;
pub use sample::*;

use std::f64::consts::TAU;

use crate::complex::Complex;

/// The twiddle factor `W_n^k = e^(-2πi·k/n)`.
pub(crate) fn twiddle(k: usize, n: usize) -> Complex {
    Complex::unit(-TAU * k as f64 / n as f64)
}

/// True for lengths the fast transform accepts: zero and powers of two.
pub fn is_power_of_two(len: usize) -> bool {
    len == 0 || len.is_power_of_two()
}
