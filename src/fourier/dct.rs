use std::f64::consts::PI;

/// Computes the unnormalized type-II discrete cosine transform.
///
/// `X[k] = Σ x[n]·cos(π/N·(n + 0.5)·k)`, with no `1/√N` or `2/N` scaling.
pub fn discrete_cosine_transform(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    let step = PI / n as f64;
    (0..n)
        .map(|k| {
            samples
                .iter()
                .enumerate()
                .map(|(t, &x)| x * (step * (t as f64 + 0.5) * k as f64).cos())
                .sum::<f64>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_coefficient_is_sum() {
        let result = discrete_cosine_transform(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(result.len(), 6);
        assert!((result[0] - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_signal_has_only_dc() {
        let result = discrete_cosine_transform(&[3.0; 8]);
        assert!((result[0] - 24.0).abs() < 1e-12);
        for &c in &result[1..] {
            assert!(c.abs() < 1e-9, "expected zero, got {}", c);
        }
    }

    #[test]
    fn test_known_values() {
        // N = 2: X[1] = x0·cos(π/4) + x1·cos(3π/4)
        let result = discrete_cosine_transform(&[1.0, -1.0]);
        assert!((result[0]).abs() < 1e-12);
        assert!((result[1] - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        assert!(discrete_cosine_transform(&[]).is_empty());
    }
}
