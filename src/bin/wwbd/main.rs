//! wwbd CLI - provision a workspace's Python virtual environment

use std::io::Write;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wwbd::ops::{setup, InstallOptions};
use wwbd::util::config::load_workspace_config;
use wwbd::util::fs::absolute;
use wwbd::Python;

mod cli;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the result envelope
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("wwbd=debug")
        } else {
            EnvFilter::new("wwbd=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if !cli.workspace.is_dir() {
        bail!(
            "workspace `{}` does not exist or is not a directory",
            cli.workspace.display()
        );
    }
    let workspace = absolute(&cli.workspace)?;

    let config = load_workspace_config(&workspace);
    let python = Python::discover(cli.python.as_deref(), config.python.interpreter.as_deref())?;
    let options = InstallOptions::from_config(&config);

    let envelope = setup(&workspace, &python, &options)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(envelope.render()?.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
