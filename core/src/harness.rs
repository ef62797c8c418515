//! Wall-clock timing of a single computation.
//!
//! The harness runs a computation exactly once on the calling thread and
//! renders `<label>: <elapsed>ms (result: <result>)`. Panics inside the
//! computation are not caught.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::debug;

/// Decimals used for the elapsed field when no precision is requested.
pub const DEFAULT_PRECISION: usize = 2;

/// Upper bound accepted for the elapsed field precision.
pub const MAX_PRECISION: usize = 9;

#[derive(Debug, Clone)]
pub struct Measurement<T> {
    pub label: String,
    pub elapsed: Duration,
    pub result: T,
}

impl<T> Measurement<T> {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Honors the formatter precision (`{:.3}`) for the elapsed field.
impl<T: fmt::Display> fmt::Display for Measurement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "{}: {:.*}ms (result: {})",
            self.label,
            precision,
            self.elapsed_ms(),
            self.result
        )
    }
}

pub fn time_benchmark<T, F>(label: &str, computation: F) -> Measurement<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = computation();
    let elapsed = start.elapsed();
    debug!(label, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "benchmark finished");

    Measurement {
        label: label.to_string(),
        elapsed,
        result,
    }
}

/// Times `computation` and writes its rendered line to `out`.
pub fn report<W, T, F>(out: &mut W, label: &str, precision: usize, computation: F) -> Result<Measurement<T>>
where
    W: Write,
    T: fmt::Display,
    F: FnOnce() -> T,
{
    let measurement = time_benchmark(label, computation);
    writeln!(out, "{:.*}", precision.min(MAX_PRECISION), measurement)
        .and_then(|_| out.flush())
        .with_context(|| format!("write result line for '{}'", label))?;
    Ok(measurement)
}
