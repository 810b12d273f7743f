//! Hello-env entry point: overlay the environment, then print the greeting.

use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use config12::policy;
use hello_env::GreetingConfig;

/// Print a greeting configured through `HELLO_*` environment variables.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Print the variables the greeting honours as JSON and exit.
    #[arg(long)]
    bindings: bool,
    /// Keep defaults for values that fail to parse instead of failing.
    #[arg(long, conflicts_with = "strict")]
    lenient: bool,
    /// Log a configuration error and exit with status 78 instead of
    /// reporting it.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    if cli.bindings {
        let docs = config12::bindings::<GreetingConfig>()?;
        serde_json::to_writer_pretty(&mut stdout, &docs)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let defaults = GreetingConfig {
        trace_id: format!("{:08x}", std::process::id()),
        ..GreetingConfig::default()
    };
    let config = if cli.strict {
        policy::from_environment_or_exit(&defaults)
    } else if cli.lenient {
        policy::from_environment_lenient(&defaults)?
    } else {
        config12::from_environment(&defaults)?
    };
    tracing::debug!(trace_id = %config.trace_id, repeat = config.repeat, "configuration loaded");

    for line in config.render() {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}
