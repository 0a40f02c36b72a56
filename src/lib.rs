//! wwbd - provision a workspace's Python virtual environment
//!
//! This crate creates `<workspace>/.venv` with Python's `venv` module, installs
//! the workspace's requirements file with the environment's pip, and reports
//! the interpreter and requirements file that were used.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::platform::{executable_path, PlatformFamily};
pub use crate::core::requirements::{requirements_filename, ManifestError};
pub use crate::ops::install::{install_requirements, InstallOptions};
pub use crate::ops::setup::{setup, Envelope};
pub use crate::ops::venv::create;
pub use crate::util::config::Config;
pub use crate::util::python::Python;
