//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// List the names of a directory's immediate entries.
///
/// Names that are not valid UTF-8 are skipped.
pub fn list_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::debug!("skipping non UTF-8 entry {:?}", name),
        }
    }

    Ok(names)
}

/// Create `path` as a new directory.
///
/// Returns `false` if it already existed. Only one of several racing callers
/// gets `true`; the parent directory must exist.
pub fn create_dir_if_absent(path: &Path) -> Result<bool> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("failed to create directory: {}", path.display()))),
    }
}

/// Make a path absolute against the current directory without touching the
/// filesystem or resolving symlinks.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("failed to resolve path: {}", path.display()))
}

/// Render a path with forward slashes, whatever the host separator is.
pub fn to_posix_string(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
