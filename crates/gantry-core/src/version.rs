//! Version source-of-truth handling.
//!
//! The project version lives in a single file as a line of the form
//! `__version__ = "MAJOR.MINOR.PATCH"`. Reads go through a regex extraction;
//! writes are a regex substitution that preserves the surrounding content and
//! the original quote style.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use semver::Version;
use tracing::{debug, warn};

use crate::error::{Result, VersionError};

/// Matches the version literal, keeping the quote characters around it.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<open>__version__\s*=\s*["'])(?P<ver>\d+\.\d+\.\d+)(?P<close>["'])"#)
        .expect("Invalid regex")
});

/// Matches the `**Version:** X.Y.Z` marker in the readme.
static README_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<label>\*\*Version:\*\* )\d+\.\d+\.\d+").expect("Invalid regex")
});

/// Release bump level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    /// Breaking release: X+1.0.0
    Major,
    /// Feature release: X.Y+1.0
    Minor,
    /// Fix release: X.Y.Z+1
    Patch,
}

impl BumpLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl std::fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BumpLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(format!("invalid bump level: {s}")),
        }
    }
}

/// Apply a bump to a version, resetting the lower components.
pub fn bump(current: &Version, level: BumpLevel) -> Version {
    match level {
        BumpLevel::Major => Version::new(current.major + 1, 0, 0),
        BumpLevel::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpLevel::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}

/// The single source-of-truth file holding the semantic version literal.
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    /// Create a handle to a version file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the version literal.
    pub fn read(&self) -> Result<Version> {
        if !self.path.exists() {
            return Err(VersionError::FileNotFound(self.path.clone()).into());
        }
        let content = std::fs::read_to_string(&self.path).map_err(VersionError::Io)?;

        let caps = VERSION_RE
            .captures(&content)
            .ok_or_else(|| VersionError::LiteralNotFound(self.path.clone()))?;
        let literal = &caps["ver"];

        let version = Version::parse(literal)
            .map_err(|e| VersionError::ParseFailed(literal.to_string(), e.to_string()))?;
        debug!(path = %self.path.display(), version = %version, "read version literal");
        Ok(version)
    }

    /// Substitute the version literal in place, leaving everything else
    /// (including the quote style) untouched.
    pub fn write(&self, version: &Version) -> Result<()> {
        let content = std::fs::read_to_string(&self.path).map_err(VersionError::Io)?;
        if !VERSION_RE.is_match(&content) {
            return Err(VersionError::LiteralNotFound(self.path.clone()).into());
        }

        let updated = VERSION_RE.replace(&content, |caps: &Captures| {
            format!("{}{}{}", &caps["open"], version, &caps["close"])
        });
        std::fs::write(&self.path, updated.as_bytes()).map_err(VersionError::Io)?;
        debug!(path = %self.path.display(), version = %version, "wrote version literal");
        Ok(())
    }
}

/// Rewrite the `**Version:** X.Y.Z` marker in the readme.
///
/// A missing readme or marker is not an error; returns whether a substitution
/// happened.
pub fn update_readme_version(path: &Path, version: &Version) -> Result<bool> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "readme not readable, skipping version marker");
            return Ok(false);
        }
    };

    if !README_VERSION_RE.is_match(&content) {
        warn!(path = %path.display(), "no version marker in readme, skipping");
        return Ok(false);
    }

    let updated = README_VERSION_RE.replace(&content, |caps: &Captures| {
        format!("{}{}", &caps["label"], version)
    });
    std::fs::write(path, updated.as_bytes())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_version() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "version.py", "__version__ = \"1.2.3\"\n");

        let version = VersionFile::new(path).read().unwrap();
        assert_eq!((version.major, version.minor, version.patch), (1, 2, 3));
    }

    #[test]
    fn test_read_missing_literal() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "version.py", "VERSION = '1.2.3'\n");

        assert!(VersionFile::new(path).read().is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = VersionFile::new(temp.path().join("nope.py")).read();
        assert!(result.is_err());
    }

    #[test]
    fn test_write_preserves_context_and_quotes() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            &temp,
            "version.py",
            "# project version\n__version__ = '1.2.3'\nAPP = \"demo\"\n",
        );

        let file = VersionFile::new(&path);
        file.write(&Version::new(1, 2, 4)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "# project version\n__version__ = '1.2.4'\nAPP = \"demo\"\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "version.py", "__version__ = \"0.9.17\"\n");

        let file = VersionFile::new(&path);
        let version = file.read().unwrap();
        file.write(&version).unwrap();
        let reread = file.read().unwrap();
        assert_eq!(version, reread);
    }

    #[test]
    fn test_bump_levels() {
        let current = Version::new(1, 2, 3);
        assert_eq!(bump(&current, BumpLevel::Major), Version::new(2, 0, 0));
        assert_eq!(bump(&current, BumpLevel::Minor), Version::new(1, 3, 0));
        assert_eq!(bump(&current, BumpLevel::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_bump_level_from_str() {
        assert_eq!("major".parse::<BumpLevel>().unwrap(), BumpLevel::Major);
        assert_eq!("PATCH".parse::<BumpLevel>().unwrap(), BumpLevel::Patch);
        assert!("huge".parse::<BumpLevel>().is_err());
    }

    #[test]
    fn test_update_readme_version() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "readme.md", "# Demo\n\n**Version:** 1.0.0\n");

        let updated = update_readme_version(&path, &Version::new(1, 1, 0)).unwrap();
        assert!(updated);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# Demo\n\n**Version:** 1.1.0\n");
    }

    #[test]
    fn test_update_readme_missing_marker() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "readme.md", "# Demo\n");

        let updated = update_readme_version(&path, &Version::new(1, 1, 0)).unwrap();
        assert!(!updated);
    }
}
