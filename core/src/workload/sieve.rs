/// Primality flags for `0..=n` after running the Sieve of Eratosthenes.
#[derive(Debug, Clone)]
pub struct PrimeTable {
    flags: Vec<bool>,
}

impl PrimeTable {
    pub fn new(n: usize) -> Self {
        let mut flags = vec![true; n + 1];
        flags[0] = false;
        if n >= 1 {
            flags[1] = false;
        }

        let mut i = 2;
        while i * i <= n {
            if flags[i] {
                // Multiples below i*i were already struck by a smaller factor.
                for j in (i * i..=n).step_by(i) {
                    flags[j] = false;
                }
            }
            i += 1;
        }

        Self { flags }
    }

    /// Largest index covered by the table.
    pub fn limit(&self) -> usize {
        self.flags.len() - 1
    }

    pub fn is_prime(&self, i: usize) -> bool {
        self.flags.get(i).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&p| p).count()
    }
}

/// Number of primes in `[2, n]`.
pub fn prime_sieve(n: usize) -> u64 {
    if n < 2 {
        return 0;
    }
    PrimeTable::new(n).count() as u64
}
