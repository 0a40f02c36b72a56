//! Full provisioning pipeline and its result envelope.
//!
//! The envelope is printed between `<JSON>` and `</JSON>` marker lines so a
//! caller can pick it out of any surrounding console noise.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};

use crate::ops::install::{install_requirements, InstallOptions};
use crate::ops::venv::create;
use crate::util::fs::to_posix_string;
use crate::util::python::Python;

pub const JSON_START: &str = "<JSON>";
pub const JSON_END: &str = "</JSON>";

/// Outcome of a successful provisioning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Interpreter inside the workspace's virtual environment.
    #[serde(serialize_with = "serialize_posix_path")]
    pub executable: PathBuf,

    /// Requirements file that was installed, if any.
    #[serde(serialize_with = "serialize_posix_path_opt")]
    pub requirements_file: Option<PathBuf>,
}

impl Envelope {
    /// Serialize to a single-line JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize result")
    }

    /// The full console block, markers included.
    pub fn render(&self) -> Result<String> {
        Ok(format!("{}\n{}\n{}\n", JSON_START, self.to_json()?, JSON_END))
    }
}

fn serialize_posix_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_posix_string(path))
}

fn serialize_posix_path_opt<S: Serializer>(
    path: &Option<PathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match path {
        Some(path) => serialize_posix_path(path, serializer),
        None => serializer.serialize_none(),
    }
}

/// Provision the workspace's virtual environment and install its requirements.
pub fn setup(workspace: &Path, python: &Python, options: &InstallOptions) -> Result<Envelope> {
    let executable = create(workspace, python)?;
    let requirements_file = install_requirements(&executable, workspace, options)?;

    Ok(Envelope {
        executable,
        requirements_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::core::platform::executable_path;
    use crate::ops::venv::venv_root;

    #[test]
    fn test_envelope_json() {
        let envelope = Envelope {
            executable: Path::new("ws").join(".venv").join("bin").join("python"),
            requirements_file: Some(Path::new("ws").join("requirements.txt")),
        };

        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"executable":"ws/.venv/bin/python","requirementsFile":"ws/requirements.txt"}"#
        );
    }

    #[test]
    fn test_envelope_without_requirements() {
        let envelope = Envelope {
            executable: PathBuf::from("/ws/.venv/bin/python"),
            requirements_file: None,
        };

        assert_eq!(
            envelope.render().unwrap(),
            "<JSON>\n{\"executable\":\"/ws/.venv/bin/python\",\"requirementsFile\":null}\n</JSON>\n"
        );
    }

    #[test]
    fn test_setup_existing_env_without_requirements() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(venv_root(tmp.path())).unwrap();

        let python = Python::new(tmp.path().join("no-such-python"));
        let envelope = setup(tmp.path(), &python, &InstallOptions::default()).unwrap();

        assert_eq!(envelope.executable, executable_path(&venv_root(tmp.path())));
        assert_eq!(envelope.requirements_file, None);
    }

    #[test]
    fn test_setup_stops_on_venv_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("requirements.txt"), "packaging\n").unwrap();

        let python = Python::new(tmp.path().join("no-such-python"));
        let err = setup(tmp.path(), &python, &InstallOptions::default()).unwrap_err();

        assert!(format!("{:#}", err).contains("failed to create virtual environment"));
    }
}
