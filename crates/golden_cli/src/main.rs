use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use golden_core::{GoldenYukawaMatrix, Verifier, VerifySettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod render;

use cli::Cli;

fn main() {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => VerifySettings::default(),
    };
    if cli.quiet || cli.json {
        settings = settings.quiet();
    }

    let verifier = Verifier::new(GoldenYukawaMatrix::new(), settings)
        .context("Failed to configure the verification harness.")?;
    let selection = cli.selection();
    tracing::info!(?selection, verbose = settings.verbose, "running verification");
    let report = verifier.run(selection);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        render::write_json(&mut out, &report)?;
    } else {
        render::write_text(&mut out, &report, settings.verbose)?;
    }
    out.flush()?;

    Ok(report.exit_code())
}

fn load_settings(path: &Path) -> Result<VerifySettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}.", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}.", path.display()))
}
