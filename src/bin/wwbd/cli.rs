//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// wwbd - Set up a workspace's Python virtual environment
#[derive(Parser)]
#[command(name = "wwbd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace directory; the environment is created in `<WORKSPACE>/.venv`
    #[arg(long, value_name = "WORKSPACE")]
    pub workspace: PathBuf,

    /// Interpreter used to create the environment (defaults to python3 on PATH)
    #[arg(long, env = "WWBD_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
