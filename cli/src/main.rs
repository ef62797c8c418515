use std::io::{self, Write};
use std::sync::Once;

use anyhow::Context;
use clap::Parser;
use numbench_core::{
    harness::{DEFAULT_PRECISION, MAX_PRECISION},
    perf::{SuiteOptions, run_suite, scenarios, select_scenarios},
};
use tracing::info;


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "numbench_core=debug,numbench=info";

#[derive(Debug, Parser)]
#[command(
    name = "numbench",
    author,
    version,
    about = "Time fixed-size CPU micro-benchmarks",
    long_about = None,
    after_help = "Set NUMBENCH_TRACE=1 (or a filter such as numbench_core=debug) to log to stderr."
)]
struct CliArgs {
    /// Run only this scenario; repeat to select several (see --list)
    #[arg(long = "only", value_name = "KEY")]
    only: Vec<String>,

    /// Print scenario keys and labels, then exit
    #[arg(long, conflicts_with = "only")]
    list: bool,

    /// Fail when a result differs from its known value
    #[arg(long)]
    verify: bool,

    /// Decimals printed for the elapsed time
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
    precision: usize,
}

fn parse_precision(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a non-negative integer", raw))?;
    if value > MAX_PRECISION {
        return Err(format!("precision must be at most {}", MAX_PRECISION));
    }
    Ok(value)
}

/// How `NUMBENCH_TRACE` asks for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TraceSetting {
    Off,
    /// Use `RUST_LOG` when present, otherwise [`DEFAULT_TRACE_FILTER`].
    Default,
    Filter(String),
}

impl TraceSetting {
    fn from_env_value(raw: &str) -> Self {
        let value = raw.trim();
        match value.to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "off" => TraceSetting::Off,
            "1" | "true" | "on" => TraceSetting::Default,
            _ => TraceSetting::Filter(value.to_string()),
        }
    }

    /// Filter directives to install; `None` when logging stays off.
    fn directives(&self, rust_log: Option<String>) -> Option<String> {
        match self {
            TraceSetting::Off => None,
            TraceSetting::Default => Some(rust_log.unwrap_or_else(|| DEFAULT_TRACE_FILTER.to_string())),
            TraceSetting::Filter(expr) => Some(expr.clone()),
        }
    }
}

/// Logs go to stderr so stdout keeps the exact report format.
fn maybe_init_tracing() {
    let Ok(raw) = std::env::var("NUMBENCH_TRACE") else {
        return;
    };
    let Some(directives) = TraceSetting::from_env_value(&raw).directives(std::env::var("RUST_LOG").ok()) else {
        return;
    };

    TRACE_INIT.call_once(|| {
        // A malformed expression falls back to the default filter.
        let filter = tracing_subscriber::EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACE_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .try_init();
    });
}

fn list_scenarios<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for scenario in scenarios() {
        writeln!(out, "{}\t{}", scenario.key(), scenario.label()).context("write scenario list")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let args = CliArgs::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        return list_scenarios(&mut out);
    }

    let selected = select_scenarios(args.only.as_slice())?;
    info!(scenarios = selected.len(), verify = args.verify, "running benchmarks");

    let options = SuiteOptions {
        precision: args.precision,
        verify: args.verify,
    };
    run_suite(&mut out, &selected, options).context("benchmark run aborted")?;
    Ok(())
}
