use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::fourier::{Sample, discrete_fourier_transform, is_power_of_two, to_complex, twiddle};

/// Computes the DFT with the recursive radix-2 Cooley-Tukey algorithm.
///
/// The input length must be a power of two; an empty input yields an empty
/// result. Bins come out in natural order `0..N`, identical to
/// [`discrete_fourier_transform`].
pub fn cooley_fast_fourier_transform<S: Sample>(samples: &[S]) -> Result<Vec<Complex>> {
    let n = samples.len();
    if !is_power_of_two(n) {
        return Err(Error::InvalidSize { len: n });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // W_N^j for j < N/2. A sub-problem of size N/stride reads every
    // stride-th entry.
    let twiddles: Vec<Complex> = (0..n / 2).map(|j| twiddle(j, n)).collect();
    let mut output = vec![Complex::ZERO; n];
    butterfly(samples, &mut output, 0, 1, &twiddles);
    Ok(output)
}

/// Transforms the sub-sequence `samples[offset], samples[offset + stride], ...`
/// of length `output.len()` into `output`.
fn butterfly<S: Sample>(
    samples: &[S],
    output: &mut [Complex],
    offset: usize,
    stride: usize,
    twiddles: &[Complex],
) {
    let size = output.len();
    if size == 1 {
        output[0] = samples[offset].to_complex();
        return;
    }

    let half = size / 2;
    let (even, odd) = output.split_at_mut(half);
    butterfly(samples, even, offset, stride * 2, twiddles);
    butterfly(samples, odd, offset + stride, stride * 2, twiddles);

    for k in 0..half {
        let e = even[k];
        let o = twiddles[k * stride] * odd[k];
        even[k] = e + o;
        odd[k] = e - o;
    }
}

/// Inverts [`cooley_fast_fourier_transform`] via `conj(FFT(conj(X))) / N`.
pub fn inverse_fast_fourier_transform<S: Sample>(spectrum: &[S]) -> Result<Vec<Complex>> {
    let n = spectrum.len() as f64;
    let conjugated: Vec<Complex> = spectrum.iter().map(|&x| x.to_complex().conjugate()).collect();
    let transformed = cooley_fast_fourier_transform(&conjugated)?;
    Ok(transformed.into_iter().map(|x| x.conjugate() / n).collect())
}

/// Uses the fast transform when the length allows it and falls back to the
/// O(N²) transform otherwise.
pub fn fourier_transform<S: Sample>(samples: &[S]) -> Vec<Complex> {
    match cooley_fast_fourier_transform(samples) {
        Ok(spectrum) => spectrum,
        Err(_) => discrete_fourier_transform(samples),
    }
}

/// Lifts the samples and appends zeros up to the next power of two.
pub fn zero_pad<S: Sample>(samples: &[S]) -> Vec<Complex> {
    let target = samples.len().next_power_of_two();
    let mut padded = to_complex(samples);
    padded.resize(target, Complex::ZERO);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_all_close(a: &[Complex], b: &[Complex]) {
        assert_eq!(a.len(), b.len());
        for (k, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!(x.approx_eq(y, EPS), "bin {}: {} != {}", k, x, y);
        }
    }

    #[test]
    fn test_fft() {
        let result = cooley_fast_fourier_transform(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_all_close(
            &result,
            &[
                Complex::new(10.0, 0.0),
                Complex::new(-2.0, 2.0),
                Complex::new(-2.0, 0.0),
                Complex::new(-2.0, -2.0),
            ],
        );
    }

    #[test]
    fn test_matches_dft() {
        for &n in &[1usize, 2, 4, 8, 16, 64, 256] {
            let real: Vec<f64> = (0..n).map(|i| ((i * 7 + 3) % 11) as f64 - 5.0).collect();
            assert_all_close(
                &cooley_fast_fourier_transform(&real).unwrap(),
                &discrete_fourier_transform(&real),
            );

            let complex: Vec<Complex> = (0..n)
                .map(|i| Complex::new((i as f64 * 0.37).sin(), (i as f64 * 1.3).cos()))
                .collect();
            assert_all_close(
                &cooley_fast_fourier_transform(&complex).unwrap(),
                &discrete_fourier_transform(&complex),
            );
        }
    }

    #[test]
    fn test_single_sample() {
        let result = cooley_fast_fourier_transform(&[4.5]).unwrap();
        assert_eq!(result, vec![Complex::new(4.5, 0.0)]);
    }

    #[test]
    fn test_invalid_size() {
        let err = cooley_fast_fourier_transform(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidSize { len: 5 }));
        assert!(inverse_fast_fourier_transform(&[Complex::ONE; 3]).is_err());
    }

    #[test]
    fn test_empty_is_accepted() {
        assert!(cooley_fast_fourier_transform::<f64>(&[]).unwrap().is_empty());
        assert!(inverse_fast_fourier_transform::<Complex>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![Complex::new(1.0, 1.0), Complex::new(2.0, 0.0)];
        let copy = input.clone();
        cooley_fast_fourier_transform(&input).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn test_inverse_round_trip() {
        let input: Vec<Complex> = (0..32)
            .map(|i| Complex::new(i as f64, -(i as f64) / 2.0))
            .collect();
        let spectrum = cooley_fast_fourier_transform(&input).unwrap();
        assert_all_close(&inverse_fast_fourier_transform(&spectrum).unwrap(), &input);
    }

    #[test]
    fn test_fourier_transform_falls_back() {
        let odd = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_all_close(&fourier_transform(&odd), &discrete_fourier_transform(&odd));
        let even = [1.0, 2.0, 3.0, 4.0];
        assert_all_close(&fourier_transform(&even), &discrete_fourier_transform(&even));
    }

    #[test]
    fn test_zero_pad() {
        let padded = zero_pad(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(padded.len(), 8);
        assert_eq!(padded[4], Complex::new(5.0, 0.0));
        assert_eq!(padded[7], Complex::ZERO);
        assert!(cooley_fast_fourier_transform(&padded).is_ok());
        assert_eq!(zero_pad(&[1.0; 4]).len(), 4);
    }
}
