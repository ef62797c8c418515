//! Benchmark scenarios shared by the CLI, Criterion benches and tests.
//!
//! Centralizing the fixed inputs here keeps every tool timing the same
//! workloads under the same labels.

pub mod scenarios;


pub use scenarios::{Scenario, SuiteOptions, find_scenario, run_suite, scenarios, select_scenarios};
