//! Virtual environment provisioning.
//!
//! The environment always lives at `<workspace>/.venv`. Its existence as a
//! directory is the only signal that provisioning already happened; the
//! contents are owned by Python's `venv` module and are never inspected beyond
//! a warning when `pyvenv.cfg` is missing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::platform::executable_path;
use crate::util::fs::create_dir_if_absent;
use crate::util::process::ProcessBuilder;
use crate::util::python::Python;

/// Name of the virtual environment directory inside a workspace.
pub const VENV_DIR_NAME: &str = ".venv";

/// Marker file written by `venv` into every environment root.
pub const PYVENV_CFG: &str = "pyvenv.cfg";

/// Root of the virtual environment for `workspace`.
pub fn venv_root(workspace: &Path) -> PathBuf {
    workspace.join(VENV_DIR_NAME)
}

/// Ensure a virtual environment exists at `<workspace>/.venv`.
///
/// Returns the path to the environment's interpreter whether or not it was
/// created by this call. An existing directory is never recreated.
///
/// The directory is claimed with a single `create_dir`, so when two processes
/// race only one runs `venv`. The other returns immediately and may observe a
/// half-built environment.
///
/// A non-directory entry named `.venv` also counts as provisioned; it is left
/// alone and a warning is logged.
pub fn create(workspace: &Path, python: &Python) -> Result<PathBuf> {
    let root = venv_root(workspace);

    if root.is_dir() {
        tracing::debug!("virtual environment already exists at {}", root.display());
        if !root.join(PYVENV_CFG).is_file() {
            tracing::warn!(
                "{} exists but has no {}; it may be incomplete",
                root.display(),
                PYVENV_CFG
            );
        }
        return Ok(executable_path(&root));
    }

    if !create_dir_if_absent(&root)? {
        if root.is_dir() {
            tracing::debug!("{} was created concurrently", root.display());
        } else {
            tracing::warn!(
                "{} exists but is not a directory; skipping environment creation",
                root.display()
            );
        }
        return Ok(executable_path(&root));
    }

    let prompt = prompt_for(&root);
    tracing::info!("Creating virtual environment at {}", root.display());

    // A failure leaves the claimed directory behind; later runs treat it as
    // provisioned.
    ProcessBuilder::python_module(python.path(), "venv")
        .args(["--prompt", prompt.as_str()])
        .arg(&root)
        .exec_and_check()
        .with_context(|| {
            format!(
                "failed to create virtual environment at {}",
                root.display()
            )
        })?;

    Ok(executable_path(&root))
}

/// Prompt label for a venv: the final segment of its root directory.
fn prompt_for(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| VENV_DIR_NAME.to_string())
}
