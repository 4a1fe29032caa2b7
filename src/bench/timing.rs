use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, bail};
use chrono::Utc;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use slog::{Logger, error, info};
use tokio::sync::Semaphore;

use crate::complex::Complex;
use crate::fourier::{
    cooley_fast_fourier_transform, discrete_cosine_transform, discrete_fourier_transform,
};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Dft,
    Dct,
    Fft,
}

#[derive(Debug, Clone)]
pub enum Input {
    Real(Vec<f64>),
    Complex(Vec<Complex>),
}

impl Input {
    pub fn len(&self) -> usize {
        match self {
            Input::Real(v) => v.len(),
            Input::Complex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One transform to time on a background worker.
#[derive(Debug, Clone)]
pub struct Job {
    pub label: String,
    pub kind: TransformKind,
    pub input: Input,
}

impl Job {
    pub fn new(label: impl Into<String>, kind: TransformKind, input: Input) -> Self {
        Job { label: label.into(), kind, input }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    pub label: String,
    pub kind: TransformKind,
    pub size: usize,
    pub started_at: String,
    pub elapsed_ms: f64,
    pub error: Option<String>,
}

/// Runs the job's transform and returns the length of its output.
pub fn run_job(job: &Job) -> anyhow::Result<usize> {
    let len = match (&job.kind, &job.input) {
        (TransformKind::Dft, Input::Real(x)) => discrete_fourier_transform(x).len(),
        (TransformKind::Dft, Input::Complex(x)) => discrete_fourier_transform(x).len(),
        (TransformKind::Dct, Input::Real(x)) => discrete_cosine_transform(x).len(),
        (TransformKind::Dct, Input::Complex(_)) => bail!("the cosine transform takes real samples only"),
        (TransformKind::Fft, Input::Real(x)) => cooley_fast_fourier_transform(x)?.len(),
        (TransformKind::Fft, Input::Complex(x)) => cooley_fast_fourier_transform(x)?.len(),
    };
    Ok(len)
}

/// Times a single job on the blocking pool and logs how long it took.
pub async fn time_job(job: Job, logger: Logger) -> anyhow::Result<TimingReport> {
    let label = job.label.clone();
    let kind = job.kind;
    let size = job.input.len();
    let started_at = Utc::now().to_rfc3339();

    let (elapsed, outcome) = tokio::task::spawn_blocking(move || {
        let start = Instant::now();
        let outcome = run_job(&job);
        (start.elapsed(), outcome)
    })
    .await
    .with_context(|| format!("timing task for '{}' did not complete", label))?;

    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    let error = match outcome {
        Ok(_) => {
            info!(logger, "[{}] Executing on a {} sized array took {:.3} milliseconds.", label, size, elapsed_ms;
                "kind" => format!("{:?}", kind));
            None
        }
        Err(e) => {
            error!(logger.new(utils::fmt_err(&*e)), "[{}] transform failed", label);
            Some(e.to_string())
        }
    };

    Ok(TimingReport { label, kind, size, started_at, elapsed_ms, error })
}

/// Times every job concurrently, at most one per CPU at a time. Reports come
/// back in the order the jobs were given.
pub async fn time_jobs(jobs: Vec<Job>, logger: &Logger) -> anyhow::Result<Vec<TimingReport>> {
    let semaphore = Arc::new(Semaphore::new(num_cpus::get().max(1)));

    let tasks = jobs.into_iter().map(|job| {
        let sem = semaphore.clone();
        let logger = logger.clone();
        async move {
            let _permit = sem.acquire_owned().await.context("timing semaphore closed")?;
            time_job(job, logger).await
        }
    });

    join_all(tasks).await.into_iter().collect()
}

/// The standard suite: each transform over an index ramp and over seeded
/// random values. Fast transform inputs are rounded up to a power of two.
pub fn default_jobs(size: usize, seed: u64) -> Vec<Job> {
    let fft_size = size.next_power_of_two();
    vec![
        Job::new("discreteFourierTransform range", TransformKind::Dft, Input::Real(utils::ramp(size))),
        Job::new(
            "discreteFourierTransform random",
            TransformKind::Dft,
            Input::Real(utils::random(size, -10000, 10000, seed)),
        ),
        Job::new(
            "discreteFourierTransform complex range",
            TransformKind::Dft,
            Input::Complex(utils::complex_ramp(size)),
        ),
        Job::new(
            "discreteFourierTransform constant",
            TransformKind::Dft,
            Input::Real(utils::constant(size, 1.0)),
        ),
        Job::new("discreteCosineTransform range", TransformKind::Dct, Input::Real(utils::ramp(size))),
        Job::new(
            "discreteCosineTransform random",
            TransformKind::Dct,
            Input::Real(utils::random(size, -10000, 10000, seed)),
        ),
        Job::new(
            "discreteCosineTransform constant",
            TransformKind::Dct,
            Input::Real(utils::constant(size, 1.0)),
        ),
        Job::new("cooleyFastFourierTransform range", TransformKind::Fft, Input::Real(utils::ramp(fft_size))),
        Job::new(
            "cooleyFastFourierTransform random",
            TransformKind::Fft,
            Input::Real(utils::random(fft_size, -10000, 10000, seed)),
        ),
        Job::new(
            "cooleyFastFourierTransform complex range",
            TransformKind::Fft,
            Input::Complex(utils::complex_ramp(fft_size)),
        ),
        Job::new(
            "cooleyFastFourierTransform constant",
            TransformKind::Fft,
            Input::Real(utils::constant(fft_size, 1.0)),
        ),
    ]
}
