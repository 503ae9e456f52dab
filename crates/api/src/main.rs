//! `upsbridge` - command-line front end for the UPS shipping bridge

use std::io::Write;
use std::time::Instant;

use anyhow::{Context as _, Result};
use clap::Parser;
use serde::Serialize;
use upsbridge_lib::cli::{execute, Cli};
use upsbridge_lib::utils::logging::{init_logging, log_command_execution};

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `.env` can feed the `env` fallbacks of the arguments.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_logging(cli.log_format, cli.verbose)?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let command = cli.command.id();
    let started = Instant::now();
    let output = execute(&cli.command, &cli.context_options()).await;

    log_command_execution(command, started.elapsed(), output.as_ref().err());
    let output = output.with_context(|| format!("{command} failed"))?;

    print_json(&output)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
