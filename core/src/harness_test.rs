#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use crate::harness::{DEFAULT_PRECISION, Measurement, report, time_benchmark};
    use crate::outcome::Outcome;
    use anyhow::Result;

    #[test]
    fn test_elapsed_covers_sleep() {
        let m = time_benchmark("sleep", || {
            thread::sleep(Duration::from_millis(20));
            7u64
        });
        assert!(m.elapsed_ms().is_finite());
        assert!(m.elapsed_ms() >= 20.0, "elapsed {}ms", m.elapsed_ms());
        assert_eq!(m.result, 7);
        assert_eq!(m.label, "sleep");
    }

    #[test]
    fn test_computation_runs_exactly_once() {
        let mut calls = 0;
        let m = time_benchmark("once", || {
            calls += 1;
            calls
        });
        assert_eq!(m.result, 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_render_uses_literal_format() {
        let m = Measurement {
            label: "1. Fibonacci(42)".to_string(),
            elapsed: Duration::from_micros(1_234_567),
            result: Outcome::Int(267_914_296),
        };
        assert_eq!(m.to_string(), "1. Fibonacci(42): 1234.57ms (result: 267914296)");
        assert_eq!(format!("{:.0}", m), "1. Fibonacci(42): 1235ms (result: 267914296)");
        assert_eq!(DEFAULT_PRECISION, 2);
    }

    #[test]
    fn test_result_field_matches_display() {
        let m = time_benchmark("float", || Outcome::Float(-1.0));
        let line = m.to_string();
        let field = line
            .rsplit_once("(result: ")
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .expect("result field");
        assert_eq!(field, Outcome::Float(-1.0).to_string());
        assert_eq!(field, "-1");
    }

    #[test]
    fn test_report_writes_one_line() -> Result<()> {
        let mut out = Vec::new();
        let m = report(&mut out, "answer", 3, || 42u64)?;
        let text = String::from_utf8(out)?;
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
        assert_eq!(text.trim_end(), format!("{:.3}", m));
        assert!(text.starts_with("answer: "));
        assert!(text.trim_end().ends_with("ms (result: 42)"));
        Ok(())
    }

    #[test]
    fn test_report_clamps_precision() -> Result<()> {
        let mut out = Vec::new();
        report(&mut out, "wide", 40, || 1u64)?;
        let text = String::from_utf8(out)?;
        let elapsed = text
            .strip_prefix("wide: ")
            .and_then(|rest| rest.split_once("ms"))
            .map(|(ms, _)| ms)
            .expect("elapsed field");
        let decimals = elapsed.split_once('.').map(|(_, d)| d.len()).unwrap_or(0);
        assert_eq!(decimals, 9);
        Ok(())
    }
}
