use std::path::Path;

use anyhow::{Context, bail};
use colored::Colorize;
use serde::Serialize;
use slog::info;

use fourier_rs::bench;
use fourier_rs::complex::Complex;
use fourier_rs::fourier::{
    cooley_fast_fourier_transform, discrete_cosine_transform, discrete_fourier_transform,
};
use fourier_rs::utils;
use fourier_rs::wav;

/// Prints every bin of the requested transform of `values`.
pub fn transform(kind: bench::TransformKind, values: &[f64]) -> anyhow::Result<()> {
    let header = match kind {
        bench::TransformKind::Dft => "Discrete Fourier transform",
        bench::TransformKind::Dct => "Discrete cosine transform",
        bench::TransformKind::Fft => "Cooley-Tukey fast Fourier transform",
    };
    println!("{} of {} samples:", header.bold(), values.len());

    match kind {
        bench::TransformKind::Dct => {
            for (k, c) in discrete_cosine_transform(values).iter().enumerate() {
                println!("\tX[{}] = {:.6}", k, c);
            }
        }
        bench::TransformKind::Dft => print_bins(&discrete_fourier_transform(values)),
        bench::TransformKind::Fft => {
            let spectrum = cooley_fast_fourier_transform(values).with_context(|| {
                format!(
                    "pad the input to {} samples or use `dft` instead",
                    values.len().next_power_of_two()
                )
            })?;
            print_bins(&spectrum);
        }
    }
    Ok(())
}

fn print_bins(bins: &[Complex]) {
    for (k, c) in bins.iter().enumerate() {
        println!("\tX[{}] = {}  (|X| = {:.6}, arg = {:.6})", k, c, c.modulus(), c.argument());
    }
}

/// Times the standard transform suite on background workers.
pub async fn bench(size: usize, seed: u64, json: bool) -> anyhow::Result<()> {
    let logger = utils::get_logger();
    info!(logger, "starting benchmark"; "size" => size, "seed" => seed, "workers" => num_cpus::get());

    let reports = bench::time_jobs(bench::default_jobs(size, seed), &logger).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for report in &reports {
        match &report.error {
            None => println!("\t- {:<42} n={:<8} {:>10.3} ms", report.label, report.size, report.elapsed_ms),
            Some(e) => println!("\t- {:<42} {}", report.label, e.yellow()),
        }
    }
    Ok(())
}

/// A spectral bin with the frequency it stands for.
#[derive(Debug, Clone, Serialize)]
pub struct Peak {
    pub bin: usize,
    pub frequency: f64,
    pub magnitude: f64,
}

/// The `count` strongest positive-frequency bins of the largest power-of-two
/// prefix of `samples`, strongest first.
pub fn strongest_bins(samples: &[f64], sample_rate: u32, count: usize) -> anyhow::Result<Vec<Peak>> {
    if samples.is_empty() {
        bail!("no samples to analyze");
    }
    let window = 1usize << (usize::BITS - 1 - samples.len().leading_zeros());
    let spectrum = cooley_fast_fourier_transform(&samples[..window])?;

    let mut peaks: Vec<Peak> = spectrum[..window / 2 + 1]
        .iter()
        .enumerate()
        .map(|(bin, c)| Peak {
            bin,
            frequency: bin as f64 * sample_rate as f64 / window as f64,
            magnitude: c.modulus(),
        })
        .collect();
    peaks.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    peaks.truncate(count);
    Ok(peaks)
}

/// What `spectrum --json` prints.
#[derive(Debug, Serialize)]
pub struct SpectrumReport {
    pub path: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration: f64,
    pub peaks: Vec<Peak>,
}

/// Reads a WAV file and returns its `count` strongest frequencies.
pub fn analyze(file_path: &str, count: usize) -> anyhow::Result<SpectrumReport> {
    if !Path::new(file_path).exists() {
        bail!("file '{}' does not exist", file_path);
    }
    let info = wav::read_wav_info(file_path).with_context(|| format!("reading {}", file_path))?;
    let samples = info.mono_samples()?;
    let peaks = strongest_bins(&samples, info.sample_rate, count)?;
    Ok(SpectrumReport {
        path: file_path.to_owned(),
        sample_rate: info.sample_rate,
        channels: info.channels,
        duration: info.duration,
        peaks,
    })
}

/// Prints the strongest frequencies of a WAV file, as text or JSON.
pub fn spectrum(file_path: &str, count: usize, json: bool) -> anyhow::Result<()> {
    let report = analyze(file_path, count)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!(
        "{} ({} Hz, {} channel(s), {:.2}s):",
        file_path.bold(),
        report.sample_rate,
        report.channels,
        report.duration
    );
    for p in report.peaks {
        println!("\t- bin {:<6} {:>10.2} Hz  magnitude {:.4}", p.bin, p.frequency, p.magnitude);
    }
    Ok(())
}

/// Writes a sine tone to a 16-bit mono WAV file.
pub fn tone(file_path: &str, frequency: f64, sample_rate: u32, seconds: f64) -> anyhow::Result<()> {
    if !(seconds > 0.0) {
        bail!("duration must be positive, got {}", seconds);
    }
    let size = (seconds * sample_rate as f64).round() as usize;
    let samples = utils::sine(size, frequency, sample_rate as f64, 0.8);
    wav::write_wav_file(file_path, &samples, sample_rate)
        .with_context(|| format!("writing {}", file_path))?;
    println!("Wrote {} samples of {} Hz to {}", size, frequency, file_path.green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strongest_bins_finds_tone() {
        // 1000 Hz at 8000 Hz lands exactly on bin 128 of a 1024-point window.
        let samples = utils::sine(1500, 1000.0, 8000.0, 1.0);
        let peaks = strongest_bins(&samples, 8000, 3).unwrap();
        assert_eq!(peaks.len(), 3);
        assert_eq!(peaks[0].bin, 128);
        assert!((peaks[0].frequency - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_strongest_bins_empty() {
        assert!(strongest_bins(&[], 8000, 3).is_err());
    }

    #[test]
    fn test_tone_then_spectrum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let path = path.to_str().unwrap();
        tone(path, 500.0, 8000, 0.25).unwrap();
        spectrum(path, 2, false).unwrap();
        spectrum(path, 2, true).unwrap();
        assert!(tone(path, 500.0, 8000, 0.0).is_err());
    }

    #[test]
    fn test_spectrum_report_serializes_peaks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let path = path.to_str().unwrap();
        // 1000 Hz at 8000 Hz over 2000 samples: bin 128 of a 1024-point window.
        tone(path, 1000.0, 8000, 0.25).unwrap();

        let report = analyze(path, 1).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["sample_rate"], 8000);
        assert_eq!(value["channels"], 1);
        assert_eq!(value["peaks"].as_array().unwrap().len(), 1);
        assert_eq!(value["peaks"][0]["bin"], 128);
        assert!((value["peaks"][0]["frequency"].as_f64().unwrap() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_spectrum_missing_file() {
        assert!(spectrum("/nonexistent/none.wav", 3, true).is_err());
    }

    #[test]
    fn test_transform_rejects_odd_fft() {
        assert!(transform(bench::TransformKind::Fft, &[1.0, 2.0, 3.0]).is_err());
        assert!(transform(bench::TransformKind::Dft, &[1.0, 2.0, 3.0]).is_ok());
    }
}
