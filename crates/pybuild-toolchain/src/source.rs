//! Deterministic naming for python.org source releases.

use pybuild_core::PyVersion;

/// Base URL for CPython source releases.
pub static PYTHON_DOWNLOAD_BASE: &str = "https://www.python.org/ftp/python";

/// Construct the source download URL for a version.
pub fn download_url(version: &PyVersion) -> String {
    format!(
        "{base}/{version}/Python-{version}.tgz",
        base = PYTHON_DOWNLOAD_BASE,
        version = version
    )
}

/// Construct the expected archive filename.
pub fn archive_filename(version: &PyVersion) -> String {
    format!("Python-{}.tgz", version)
}

/// Name of the directory the archive expands to.
pub fn source_dir_name(version: &PyVersion) -> String {
    format!("Python-{}", version)
}
