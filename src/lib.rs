//! Complex numbers and discrete frequency-domain transforms.
//!
//! ```
//! use fourier_rs::complex::Complex;
//! use fourier_rs::fourier::{cooley_fast_fourier_transform, discrete_fourier_transform};
//!
//! let samples = [1.0, 2.0, 3.0, 4.0];
//! let slow = discrete_fourier_transform(&samples);
//! let fast = cooley_fast_fourier_transform(&samples).unwrap();
//! assert!(slow[0].approx_eq(&Complex::new(10.0, 0.0), 1e-9));
//! assert!(fast.iter().zip(&slow).all(|(a, b)| a.approx_eq(b, 1e-9)));
//! ```

pub mod bench;
pub mod complex;
pub mod error;
pub mod fourier;
pub mod matrix;
pub mod utils;
pub mod wav;

pub use complex::{Complex, Mode};
pub use error::{Error, Result};
