//! Python version parsing and derived names.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A CPython release version.
///
/// Only the full `MAJOR.MINOR.PATCH` form is accepted: release archives on
/// python.org are named by the three-component version, so anything shorter
/// or longer cannot be mapped to a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PyVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PyVersion {
    /// Create a new version.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Get the `major.minor` tag used to name installed artifacts
    /// (e.g. "3.10" from "3.10.0").
    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Name of the interpreter executable an altinstall produces
    /// (e.g. "python3.10").
    pub fn executable_name(&self) -> String {
        format!("python{}.{}", self.major, self.minor)
    }

    /// Parse a version from interpreter output like "Python 3.10.0".
    pub fn parse_from_output(output: &str) -> Option<Self> {
        let pattern = regex_lite::Regex::new(r"(\d+)\.(\d+)\.(\d+)").ok()?;
        let captures = pattern.captures(output)?;

        let major: u32 = captures.get(1)?.as_str().parse().ok()?;
        let minor: u32 = captures.get(2)?.as_str().parse().ok()?;
        let patch: u32 = captures.get(3)?.as_str().parse().ok()?;
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for PyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for PyVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionParseError::InvalidFormat(s.to_string()));
        }

        // u32::from_str tolerates a leading '+'; require pure digit runs.
        for part in &parts {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionParseError::InvalidNumber(part.to_string()));
            }
        }

        let major = parts[0]
            .parse()
            .map_err(|_| VersionParseError::InvalidNumber(parts[0].to_string()))?;
        let minor = parts[1]
            .parse()
            .map_err(|_| VersionParseError::InvalidNumber(parts[1].to_string()))?;
        let patch = parts[2]
            .parse()
            .map_err(|_| VersionParseError::InvalidNumber(parts[2].to_string()))?;

        Ok(PyVersion {
            major,
            minor,
            patch,
        })
    }
}

impl PartialOrd for PyVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PyVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

/// Error parsing a version string.
#[derive(Debug, thiserror::Error)]
pub enum VersionParseError {
    #[error("invalid version format: {0} (expected MAJOR.MINOR.PATCH, e.g. 3.12.3)")]
    InvalidFormat(String),
    #[error("invalid version number: {0}")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!("3.10.0".parse::<PyVersion>().unwrap(), PyVersion::new(3, 10, 0));
        assert_eq!("3.12.3".parse::<PyVersion>().unwrap(), PyVersion::new(3, 12, 3));
        assert_eq!(" 3.10.0 ".parse::<PyVersion>().unwrap(), PyVersion::new(3, 10, 0));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!("3.10".parse::<PyVersion>().is_err());
        assert!("3.10.0.1".parse::<PyVersion>().is_err());
        assert!("3".parse::<PyVersion>().is_err());
        assert!("".parse::<PyVersion>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!("v3.10.0".parse::<PyVersion>().is_err());
        assert!("3.x.0".parse::<PyVersion>().is_err());
        assert!("3.+10.0".parse::<PyVersion>().is_err());
        assert!("3.10.".parse::<PyVersion>().is_err());
        assert!("3.-1.0".parse::<PyVersion>().is_err());
    }

    #[test]
    fn test_derived_names() {
        let v: PyVersion = "3.10.0".parse().unwrap();
        assert_eq!(v.executable_name(), "python3.10");
        assert_eq!(v.major_minor(), "3.10");
        assert_eq!(v.to_string(), "3.10.0");
    }

    #[test]
    fn test_parse_from_output() {
        assert_eq!(
            PyVersion::parse_from_output("Python 3.10.0"),
            Some(PyVersion::new(3, 10, 0))
        );
        assert_eq!(
            PyVersion::parse_from_output("Python 3.12.3+"),
            Some(PyVersion::new(3, 12, 3))
        );
        assert_eq!(PyVersion::parse_from_output("no version here"), None);
    }

    #[test]
    fn test_version_ordering() {
        let a: PyVersion = "3.9.18".parse().unwrap();
        let b: PyVersion = "3.10.0".parse().unwrap();
        assert!(a < b);
    }
}
