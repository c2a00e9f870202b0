#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, CliConfig};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let ok = commands::run(&config, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
