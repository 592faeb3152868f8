//! The removal workflow.
//!
//! Locates an installed version through search-path resolution, derives the
//! installation prefix, and deletes the versioned artifacts an altinstall
//! leaves under it. An installation under a different naming scheme is
//! invisible to this workflow.

use pybuild_core::{Error, Fix, PyVersion, Result};
use pybuild_telemetry::TimingGuard;
use pybuild_ui::{Output, Spinner, prompt};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A located installation of a specific Python version.
#[derive(Debug, Clone)]
pub struct Installation {
    /// Resolved versioned interpreter executable.
    pub executable: PathBuf,
    /// Installation prefix (grandparent of the executable).
    pub prefix: PathBuf,
}

impl Installation {
    /// Resolve a version's executable on PATH and derive its prefix.
    pub fn locate(version: &PyVersion) -> Result<Self> {
        let exe_name = version.executable_name();

        let executable = which::which(&exe_name).map_err(|_| Error::NotInstalled {
            version: version.to_string(),
            executable: exe_name.clone(),
            fixes: vec![Fix::new(
                "Only versions installed under the python<major>.<minor> naming convention can be removed",
            )],
        })?;

        let prefix = prefix_of(&executable).ok_or_else(|| {
            Error::config(format!(
                "cannot derive an installation prefix from {}",
                executable.display()
            ))
        })?;

        debug!(
            "Resolved {} at {} (prefix {})",
            exe_name,
            executable.display(),
            prefix.display()
        );

        Ok(Self { executable, prefix })
    }
}

/// The installation prefix is the grandparent of the executable
/// (`/usr/local/bin/python3.10` -> `/usr/local`).
fn prefix_of(executable: &Path) -> Option<PathBuf> {
    Some(executable.parent()?.parent()?.to_path_buf())
}

/// The artifact paths an altinstall of a version places under a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalSet {
    /// Individual files to delete.
    pub files: Vec<PathBuf>,
    /// Directory trees to delete.
    pub dirs: Vec<PathBuf>,
}

impl RemovalSet {
    /// Total number of paths in the set.
    pub fn len(&self) -> usize {
        self.files.len() + self.dirs.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

/// Enumerate the paths to delete for a version under a prefix.
///
/// Pattern entries (static library archives, pkg-config metadata) are
/// expanded by scanning the prefix; a missing directory contributes
/// nothing.
pub fn removal_set(prefix: &Path, version: &PyVersion) -> RemovalSet {
    let tag = version.major_minor();
    let bin = prefix.join("bin");
    let lib = prefix.join("lib");

    let mut files = vec![
        bin.join(format!("python{}", tag)),
        bin.join(format!("pip{}", tag)),
        bin.join(format!("idle{}", tag)),
        bin.join(format!("pydoc{}", tag)),
        bin.join(format!("2to3-{}", tag)),
        prefix.join(format!("share/man/man1/python{}.1", tag)),
    ];

    files.extend(matching_files(&lib, &format!("libpython{}", tag), ".a"));
    files.extend(matching_files(
        &lib.join("pkgconfig"),
        &format!("python-{}", tag),
        ".pc",
    ));

    let dirs = vec![
        lib.join(format!("python{}", tag)),
        prefix.join(format!("include/python{}", tag)),
    ];

    RemovalSet { files, dirs }
}

/// Files in `dir` whose name starts with `stem` and ends with `suffix`.
fn matching_files(dir: &Path, stem: &str, suffix: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut matches: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with(stem) && name.ends_with(suffix)
        })
        .map(|entry| entry.path())
        .collect();

    matches.sort();
    matches
}

/// Result of a removal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user declined at the confirmation prompt; nothing was touched.
    Declined,
    /// Deletion ran over the full path set.
    Removed {
        /// Paths actually deleted.
        deleted: usize,
        /// Paths that failed to delete for reasons other than absence.
        failed: usize,
    },
}

/// Remove an installed Python version.
///
/// Fails without touching the filesystem when the version's executable is
/// not on PATH. Each individual deletion is best-effort: missing targets
/// are skipped silently and other failures are reported as warnings.
pub fn remove(version: &PyVersion, output: &Output) -> Result<RemoveOutcome> {
    let _timing = TimingGuard::new("remove");

    let installation = Installation::locate(version)?;

    output.status(
        "Found",
        &format!(
            "{} (prefix {})",
            installation.executable.display(),
            installation.prefix.display()
        ),
    );

    let set = removal_set(&installation.prefix, version);

    let question = format!(
        "Remove Python {} from {}? This deletes the interpreter, pip, libraries, headers, and docs",
        version,
        installation.prefix.display()
    );
    let confirmed = prompt::confirm(&question).map_err(|e| Error::Io {
        message: "failed to read confirmation".into(),
        path: None,
        source: e,
    })?;

    if !confirmed {
        return Ok(RemoveOutcome::Declined);
    }

    let spinner = Spinner::new(format!("Removing Python {}...", version));
    let mut deleted = 0usize;
    let mut failed = 0usize;

    for file in &set.files {
        match fs::remove_file(file) {
            Ok(()) => {
                debug!("Deleted {}", file.display());
                deleted += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not present, skipping", file.display());
            }
            Err(e) => {
                warn!("Could not delete {}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    for dir in &set.dirs {
        match fs::remove_dir_all(dir) {
            Ok(()) => {
                debug!("Deleted {}", dir.display());
                deleted += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not present, skipping", dir.display());
            }
            Err(e) => {
                warn!("Could not delete {}: {}", dir.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        spinner.finish_warning(format!(
            "Removed {} of {} paths for Python {}",
            deleted,
            set.len(),
            version
        ));
        output.warn("some paths could not be deleted; re-run with sufficient privileges");
    } else {
        spinner.finish_success(format!("Removed Python {} ({} paths deleted)", version, deleted));
    }

    Ok(RemoveOutcome::Removed { deleted, failed })
}
