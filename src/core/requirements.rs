//! Requirements file selection.
//!
//! A workspace declares its dependencies in a pip requirements file. When a
//! development variant (e.g. `requirements-dev.txt`) is present it is preferred,
//! since it normally pulls in the base file and the tooling on top of it.

use std::collections::BTreeSet;

use thiserror::Error;

/// Canonical name of the base requirements file.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Extension every requirements file must carry.
pub const REQUIREMENTS_EXTENSION: &str = ".txt";

const REQUIREMENTS_MARKER: &str = "requirements";
const DEV_MARKER: &str = "dev";

/// Error selecting a requirements file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("no requirements file found in {candidates:?}")]
    NotFound {
        /// Every name that was considered, sorted.
        candidates: Vec<String>,
    },
}

/// Check whether `name` is a development requirements file.
///
/// Matching is case-sensitive and separator-agnostic: `dev-requirements.txt`,
/// `requirements_dev.txt` and friends all qualify.
pub fn is_dev_requirements(name: &str) -> bool {
    name.ends_with(REQUIREMENTS_EXTENSION)
        && name.contains(REQUIREMENTS_MARKER)
        && name.contains(DEV_MARKER)
}

/// Pick the most appropriate requirements file from a set of file names.
///
/// Precedence:
/// 1. a development requirements file (see [`is_dev_requirements`]); when
///    several exist the lexicographically smallest wins
/// 2. `requirements.txt`
///
/// The result does not depend on the order of `names`.
pub fn requirements_filename<I, S>(names: I) -> Result<String, ManifestError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: BTreeSet<String> = names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    // BTreeSet iterates in sorted order, so the first hit is the smallest.
    if let Some(dev) = names.iter().find(|name| is_dev_requirements(name)) {
        tracing::debug!("selected development requirements file `{}`", dev);
        return Ok(dev.clone());
    }

    if names.contains(REQUIREMENTS_FILE) {
        tracing::debug!("selected `{}`", REQUIREMENTS_FILE);
        return Ok(REQUIREMENTS_FILE.to_string());
    }

    Err(ManifestError::NotFound {
        candidates: names.into_iter().collect(),
    })
}
