//! Shared utilities

pub mod config;
pub mod fs;
pub mod process;
pub mod python;

pub use config::Config;
pub use process::ProcessBuilder;
pub use python::Python;
