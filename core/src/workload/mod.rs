//! CPU-bound workloads timed by the harness.
//!
//! Every workload is a pure function of its size argument: no caches, no
//! globals, and the whole working set is dropped before the function returns.

mod fib;
mod mandelbrot;
mod matrix;
mod sieve;
mod tree;

#[cfg(test)]
mod sieve_test;

pub use fib::fibonacci;
pub use mandelbrot::{MAX_ITER, mandelbrot};
pub use matrix::{Matrix, matrix_multiply};
pub use sieve::{PrimeTable, prime_sieve};
pub use tree::{TreeNode, binary_trees};
