//! High-level operations.
//!
//! These are the implementations behind the `wwbd` binary.

pub mod install;
pub mod setup;
pub mod venv;

pub use install::{install_requirements, InstallOptions};
pub use setup::{setup, Envelope};
pub use venv::create;
