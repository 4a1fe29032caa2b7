use crate::complex::Complex;
use crate::fourier::{Sample, twiddle};

/// Computes the discrete Fourier transform directly from its definition.
///
/// `X[k] = Σ x[n]·e^(-2πi·k·n/N)`. O(N²) and accepts any length; the
/// result is the reference the fast transform is checked against.
pub fn discrete_fourier_transform<S: Sample>(samples: &[S]) -> Vec<Complex> {
    let n = samples.len();
    (0..n)
        .map(|k| {
            samples
                .iter()
                .enumerate()
                // k·t is reduced mod N so the angle stays small for large inputs.
                .map(|(t, &x)| x.to_complex() * twiddle((k * t) % n, n))
                .sum::<Complex>()
        })
        .collect()
}

/// Inverts [`discrete_fourier_transform`]:
/// `x[n] = (1/N) Σ X[k]·e^(2πi·k·n/N)`.
pub fn inverse_discrete_fourier_transform<S: Sample>(spectrum: &[S]) -> Vec<Complex> {
    let n = spectrum.len();
    (0..n)
        .map(|t| {
            let sum: Complex = spectrum
                .iter()
                .enumerate()
                .map(|(k, &x)| x.to_complex() * twiddle((k * t) % n, n).conjugate())
                .sum();
            sum / n as f64
        })
        .collect()
}
