//! Virtual environment directory layouts.
//!
//! A virtual environment places its interpreter in a different spot depending
//! on the host's path convention. All platform branching goes through
//! [`PlatformFamily`] so callers never check `cfg!(windows)` themselves.

use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(not(any(unix, windows)))]
compile_error!("wwbd only supports unix and windows virtual environment layouts");

/// Path convention family of a virtual environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// `bin/python` layout (Linux, macOS, BSDs).
    Posix,
    /// `Scripts/python.exe` layout.
    Windows,
}

impl PlatformFamily {
    /// The family of the platform this binary was compiled for.
    #[cfg(windows)]
    pub const HOST: PlatformFamily = PlatformFamily::Windows;

    /// The family of the platform this binary was compiled for.
    #[cfg(unix)]
    pub const HOST: PlatformFamily = PlatformFamily::Posix;

    /// Directory inside the venv root that holds executables.
    pub fn scripts_dir_name(self) -> &'static str {
        match self {
            PlatformFamily::Posix => "bin",
            PlatformFamily::Windows => "Scripts",
        }
    }

    /// File name of the interpreter inside [`Self::scripts_dir_name`].
    pub fn python_executable_name(self) -> &'static str {
        match self {
            PlatformFamily::Posix => "python",
            PlatformFamily::Windows => "python.exe",
        }
    }

    /// Names to look up on `PATH` when searching for a base interpreter,
    /// in order of preference.
    pub fn base_python_candidates(self) -> &'static [&'static str] {
        match self {
            PlatformFamily::Posix => &["python3", "python"],
            PlatformFamily::Windows => &["python", "py"],
        }
    }

    /// Path to the interpreter of the virtual environment rooted at `venv_root`.
    pub fn executable_path(self, venv_root: &Path) -> PathBuf {
        venv_root
            .join(self.scripts_dir_name())
            .join(self.python_executable_name())
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformFamily::Posix => write!(f, "posix"),
            PlatformFamily::Windows => write!(f, "windows"),
        }
    }
}

/// Interpreter path for `venv_root` using the host's layout.
pub fn executable_path(venv_root: &Path) -> PathBuf {
    PlatformFamily::HOST.executable_path(venv_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_layout() {
        let venv = Path::new(".venv");
        assert_eq!(
            PlatformFamily::Posix.executable_path(venv),
            venv.join("bin").join("python")
        );
    }

    #[test]
    fn test_windows_layout() {
        let venv = Path::new(".venv");
        assert_eq!(
            PlatformFamily::Windows.executable_path(venv),
            venv.join("Scripts").join("python.exe")
        );
    }

    #[test]
    fn test_executable_path_is_deterministic() {
        let venv = Path::new("/work/project/.venv");
        for family in [PlatformFamily::Posix, PlatformFamily::Windows] {
            assert_eq!(family.executable_path(venv), family.executable_path(venv));
        }
    }

    #[test]
    fn test_host_layout() {
        let venv = Path::new("ws").join(".venv");
        let path = executable_path(&venv);

        assert!(path.starts_with(&venv));
        if cfg!(windows) {
            assert!(path.ends_with("Scripts/python.exe"));
        } else {
            assert!(path.ends_with("bin/python"));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(PlatformFamily::Posix.to_string(), "posix");
        assert_eq!(PlatformFamily::Windows.to_string(), "windows");
    }
}
