use std::io::Write;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::{
    harness::{self, DEFAULT_PRECISION, Measurement},
    outcome::Outcome,
    workload,
};

pub const FIBONACCI_N: u32 = 42;
pub const SIEVE_LIMIT: usize = 10_000_000;
pub const MANDELBROT_SIZE: u32 = 2000;
pub const MATRIX_SIZE: usize = 500;
pub const TREE_DEPTH: u32 = 18;

/// A labelled workload invocation with fixed inputs and a known result.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    key: &'static str,
    label: &'static str,
    run: fn() -> Outcome,
    expected: Outcome,
}

impl Scenario {
    pub const fn new(key: &'static str, label: &'static str, run: fn() -> Outcome, expected: Outcome) -> Self {
        Self {
            key,
            label,
            run,
            expected,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn expected(&self) -> Outcome {
        self.expected
    }

    pub fn run(&self) -> Outcome {
        (self.run)()
    }

    pub fn verify(&self, actual: &Outcome) -> Result<()> {
        if self.expected.matches(actual) {
            Ok(())
        } else {
            warn!(scenario = self.key, %actual, expected = %self.expected, "unexpected benchmark result");
            Err(anyhow!(
                "scenario '{}' expected {} but observed {}",
                self.key,
                self.expected,
                actual
            ))
        }
    }
}

fn run_fibonacci() -> Outcome {
    workload::fibonacci(FIBONACCI_N).into()
}

fn run_sieve() -> Outcome {
    workload::prime_sieve(SIEVE_LIMIT).into()
}

fn run_mandelbrot() -> Outcome {
    workload::mandelbrot(MANDELBROT_SIZE).into()
}

fn run_matrix() -> Outcome {
    workload::matrix_multiply(MATRIX_SIZE).into()
}

fn run_binary_trees() -> Outcome {
    workload::binary_trees(TREE_DEPTH).into()
}

static SCENARIOS: &[Scenario] = &[
    Scenario::new("fibonacci", "1. Fibonacci(42)", run_fibonacci, Outcome::Int(267_914_296)),
    Scenario::new("sieve", "2. Prime Sieve (10M)", run_sieve, Outcome::Int(664_579)),
    Scenario::new(
        "mandelbrot",
        "3. Mandelbrot (2000x2000)",
        run_mandelbrot,
        Outcome::Int(690_812_077),
    ),
    Scenario::new(
        "matrix",
        "4. Matrix Multiply (500x500)",
        run_matrix,
        Outcome::Float(10_291_750.0),
    ),
    Scenario::new(
        "binary_trees",
        "5. Binary Trees (depth 18)",
        run_binary_trees,
        Outcome::Int(524_287),
    ),
];

/// All scenarios in run order.
pub fn scenarios() -> &'static [Scenario] {
    SCENARIOS
}

pub fn find_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

/// Resolves `keys` against the registry, keeping registry order and dropping
/// duplicates. An empty selection means every scenario.
pub fn select_scenarios<S: AsRef<str>>(keys: &[S]) -> Result<Vec<&'static Scenario>> {
    if keys.is_empty() {
        return Ok(SCENARIOS.iter().collect());
    }

    if let Some(unknown) = keys.iter().map(AsRef::as_ref).find(|k| find_scenario(k).is_none()) {
        let valid: Vec<&str> = SCENARIOS.iter().map(|s| s.key).collect();
        return Err(anyhow!(
            "unknown scenario '{}'. Valid keys: {}",
            unknown,
            valid.join(", ")
        ));
    }

    Ok(SCENARIOS
        .iter()
        .filter(|s| keys.iter().any(|k| k.as_ref() == s.key))
        .collect())
}

#[derive(Debug, Clone, Copy)]
pub struct SuiteOptions {
    pub precision: usize,
    pub verify: bool,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            verify: false,
        }
    }
}

/// Runs `selected` one after another between the start and done banners.
pub fn run_suite<W: Write>(
    out: &mut W,
    selected: &[&Scenario],
    options: SuiteOptions,
) -> Result<Vec<Measurement<Outcome>>> {
    writeln!(out, "Starting benchmarks...\n").context("write start banner")?;

    let mut measurements = Vec::with_capacity(selected.len());
    for scenario in selected {
        debug!(scenario = scenario.key, "starting benchmark");
        let measurement = harness::report(out, scenario.label, options.precision, || scenario.run())?;
        if options.verify {
            scenario.verify(&measurement.result)?;
        }
        measurements.push(measurement);
    }

    writeln!(out, "\nDone!").context("write done banner")?;
    Ok(measurements)
}
