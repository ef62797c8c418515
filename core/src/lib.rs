//! Fixed-size CPU micro-benchmarks and the harness that times them.

pub mod harness;
pub mod outcome;
pub mod workload;

// Keyed, labelled scenarios built on the harness
pub mod perf;

#[cfg(test)]
mod harness_test;

pub use harness::{Measurement, time_benchmark};
pub use outcome::Outcome;
