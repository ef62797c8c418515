#[cfg(test)]
mod tests {
    use crate::workload::{PrimeTable, prime_sieve};

    fn is_prime_by_division(n: usize) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    /// Odd-only sieve used as an independent reference for large inputs.
    fn odd_only_count(n: usize) -> u64 {
        if n < 2 {
            return 0;
        }
        // composite[k] describes the odd number 2k + 1
        let mut composite = vec![false; n / 2 + 1];
        let mut count = 1u64;
        let mut k = 1;
        while 2 * k + 1 <= n {
            if !composite[k] {
                count += 1;
                let p = 2 * k + 1;
                let mut m = p * p;
                while m <= n {
                    composite[m / 2] = true;
                    m += 2 * p;
                }
            }
            k += 1;
        }
        count
    }

    #[test]
    fn test_sieve_below_two_is_empty() {
        assert_eq!(prime_sieve(0), 0);
        assert_eq!(prime_sieve(1), 0);
        assert_eq!(prime_sieve(2), 1);
    }

    #[test]
    fn test_sieve_small_counts() {
        assert_eq!(prime_sieve(10), 4);
        assert_eq!(prime_sieve(100), 25);
        assert_eq!(prime_sieve(1_000), 168);
    }

    #[test]
    fn test_sieve_table_agrees_with_trial_division() {
        let table = PrimeTable::new(2_000);
        assert_eq!(table.limit(), 2_000);
        for i in 0..=2_000 {
            assert_eq!(table.is_prime(i), is_prime_by_division(i), "primality of {}", i);
        }
        assert!(!table.is_prime(2_001));
    }

    #[test]
    fn test_sieve_counts_agree_with_trial_division() {
        let mut running = 0u64;
        for n in 0..=500 {
            if is_prime_by_division(n) {
                running += 1;
            }
            assert_eq!(prime_sieve(n), running, "pi({})", n);
        }
    }

    #[test]
    fn test_sieve_inclusive_upper_bound() {
        // 97 is prime and must be counted when it is the bound itself
        assert_eq!(prime_sieve(97), prime_sieve(96) + 1);
    }

    #[test]
    fn test_sieve_reference_input_matches_independent_sieve() {
        let n = 10_000_000;
        assert_eq!(prime_sieve(n), odd_only_count(n));
        assert_eq!(prime_sieve(n), 664_579);
    }
}
