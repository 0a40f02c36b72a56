//! Base interpreter discovery.
//!
//! The virtual environment is created by running `-m venv` with an existing
//! Python. The interpreter is picked with the following priority:
//! 1. Explicit path (`--python` / `WWBD_PYTHON`)
//! 2. Config file (`[python] interpreter`)
//! 3. `PATH` search over the host's usual names

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::platform::PlatformFamily;
use crate::util::process::find_executable;

/// Error locating a base interpreter.
#[derive(Debug, Error)]
pub enum PythonError {
    #[error("no Python interpreter found on PATH (tried {})", tried.join(", "))]
    NotFound { tried: Vec<String> },
}

/// A base Python interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Python {
    path: PathBuf,
}

impl Python {
    /// Use the interpreter at `path` as-is.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Python { path: path.into() }
    }

    /// Path (or bare command name) of the interpreter.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Locate a base interpreter.
    ///
    /// `explicit` wins over `configured`; a bare name in either is looked up on
    /// `PATH` when possible and otherwise passed through unchanged.
    pub fn discover(
        explicit: Option<&Path>,
        configured: Option<&Path>,
    ) -> Result<Self, PythonError> {
        if let Some(path) = explicit.or(configured) {
            let resolved = resolve_command(path);
            tracing::debug!("using base interpreter {}", resolved.display());
            return Ok(Python::new(resolved));
        }

        let candidates = PlatformFamily::HOST.base_python_candidates();
        tracing::debug!(
            "searching PATH for a {} base interpreter",
            PlatformFamily::HOST
        );
        for name in candidates {
            if let Some(path) = find_executable(name) {
                tracing::debug!("found base interpreter {}", path.display());
                return Ok(Python::new(path));
            }
        }

        Err(PythonError::NotFound {
            tried: candidates.iter().map(|name| name.to_string()).collect(),
        })
    }
}

fn resolve_command(path: &Path) -> PathBuf {
    let is_bare_name = path.components().count() == 1 && !path.is_absolute();
    if is_bare_name {
        if let Some(found) = path.to_str().and_then(find_executable) {
            return found;
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/opt/python/bin/python3");
        let configured = Path::new("/usr/bin/python3");

        let python = Python::discover(Some(explicit), Some(configured)).unwrap();
        assert_eq!(python.path(), explicit);
    }

    #[test]
    fn test_configured_path_used() {
        let configured = Path::new("/usr/local/bin/python3.12");

        let python = Python::discover(None, Some(configured)).unwrap();
        assert_eq!(python.path(), configured);
    }

    #[test]
    fn test_unknown_bare_name_passes_through() {
        let name = Path::new("wwbd-no-such-python");

        let python = Python::discover(Some(name), None).unwrap();
        assert_eq!(python.path(), name);
    }

    #[test]
    fn test_not_found_message() {
        let err = PythonError::NotFound {
            tried: vec!["python3".to_string(), "python".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no Python interpreter found on PATH (tried python3, python)"
        );
    }
}
