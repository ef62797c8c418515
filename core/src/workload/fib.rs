/// Naive doubly-recursive Fibonacci.
///
/// Deliberately exponential: the point is raw call/branch throughput, so no
/// memoization. `u64` holds every value up to `fibonacci(93)`.
pub fn fibonacci(n: u32) -> u64 {
    if n < 2 {
        return n as u64;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}
