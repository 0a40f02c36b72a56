//! Requirements installation into a provisioned environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::requirements::{requirements_filename, ManifestError};
use crate::util::config::Config;
use crate::util::fs::list_names;
use crate::util::process::ProcessBuilder;

/// Options for [`install_requirements`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Extra `pip install` arguments, placed before `--requirement`.
    pub extra_args: Vec<String>,
}

impl InstallOptions {
    /// Build options from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        InstallOptions {
            extra_args: config.install.extra_args.clone(),
        }
    }
}

/// Install the workspace's requirements file with the environment's pip.
///
/// Returns the path of the installed requirements file, or `None` if the
/// workspace has none. In that case pip is never started.
pub fn install_requirements(
    python: &Path,
    workspace: &Path,
    options: &InstallOptions,
) -> Result<Option<PathBuf>> {
    let names = list_names(workspace)?;

    let filename = match requirements_filename(&names) {
        Ok(filename) => filename,
        Err(ManifestError::NotFound { .. }) => {
            tracing::info!("No requirements file in {}", workspace.display());
            return Ok(None);
        }
    };

    let requirements = workspace.join(&filename);
    tracing::info!("Installing {}", requirements.display());

    pip_install(python, &requirements, options)
        .cwd(workspace)
        .exec_and_check()
        .with_context(|| format!("failed to install {}", requirements.display()))?;

    Ok(Some(requirements))
}

fn pip_install(python: &Path, requirements: &Path, options: &InstallOptions) -> ProcessBuilder {
    ProcessBuilder::python_module(python, "pip")
        .args(["install", "--disable-pip-version-check", "--no-color"])
        .args(&options.extra_args)
        .arg("--requirement")
        .arg(requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::ops::venv::create;
    use crate::util::python::Python;

    #[test]
    fn test_pip_command_line() {
        let options = InstallOptions {
            extra_args: vec!["--pre".to_string()],
        };
        let pb = pip_install(
            Path::new("python"),
            Path::new("requirements.txt"),
            &options,
        );

        assert_eq!(
            pb.get_args(),
            [
                "-m",
                "pip",
                "install",
                "--disable-pip-version-check",
                "--no-color",
                "--pre",
                "--requirement",
                "requirements.txt",
            ]
        );
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.install.extra_args = vec!["--no-deps".to_string()];

        assert_eq!(InstallOptions::from_config(&config).extra_args, ["--no-deps"]);
    }

    #[test]
    fn test_no_requirements_skips_pip() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), "{}").unwrap();
        fs::write(tmp.path().join("no-requirements.txt"), "").unwrap();

        // Would fail to spawn if pip were run.
        let python = tmp.path().join("no-such-python");
        let installed =
            install_requirements(&python, tmp.path(), &InstallOptions::default()).unwrap();

        assert_eq!(installed, None);
    }

    #[test]
    fn test_pip_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("requirements.txt"), "packaging\n").unwrap();

        let python = tmp.path().join("no-such-python");
        let err =
            install_requirements(&python, tmp.path(), &InstallOptions::default()).unwrap_err();

        assert!(format!("{:#}", err).contains("failed to install"));
    }

    #[test]
    fn test_missing_workspace_fails() {
        let tmp = TempDir::new().unwrap();
        let python = tmp.path().join("no-such-python");

        let result = install_requirements(
            &python,
            &tmp.path().join("missing"),
            &InstallOptions::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    #[ignore] // Requires python3 with the venv module
    fn test_install_comment_only_requirements() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("requirements.txt"), "# nothing\n").unwrap();

        let python = create(tmp.path(), &Python::discover(None, None).unwrap()).unwrap();
        let installed =
            install_requirements(&python, tmp.path(), &InstallOptions::default()).unwrap();

        assert_eq!(installed, Some(tmp.path().join("requirements.txt")));
    }

    #[test]
    #[ignore] // Requires python3 with the venv module and network access
    fn test_install_requirements() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("requirements.txt"),
            "packaging-classifiers==1.0.0rc5\n",
        )
        .unwrap();

        let python = create(tmp.path(), &Python::discover(None, None).unwrap()).unwrap();
        let installed =
            install_requirements(&python, tmp.path(), &InstallOptions::default()).unwrap();

        assert_eq!(installed, Some(tmp.path().join("requirements.txt")));

        let output = ProcessBuilder::python_module(&python, "pip")
            .args(["show", "packaging-classifiers"])
            .exec()
            .unwrap();
        assert!(output.status.success());
    }
}
