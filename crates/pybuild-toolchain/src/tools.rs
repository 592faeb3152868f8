//! External program selection.

use pybuild_core::EnvVars;

/// The external programs the workflows shell out to.
///
/// Defaults name the real tools; every entry can be overridden through the
/// `PYBUILD_*` environment variables, which is also how the test suite
/// substitutes stub executables.
#[derive(Debug, Clone)]
pub struct Tools {
    /// Package manager (index refresh and prerequisite install).
    pub apt_get: String,
    /// Archive downloader.
    pub wget: String,
    /// Archive extractor.
    pub tar: String,
    /// Build driver.
    pub make: String,
    /// Prefix privileged steps with sudo.
    pub use_sudo: bool,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            apt_get: "apt-get".to_string(),
            wget: "wget".to_string(),
            tar: "tar".to_string(),
            make: "make".to_string(),
            use_sudo: true,
        }
    }
}

impl Tools {
    /// Build the tool table from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            apt_get: std::env::var(EnvVars::PYBUILD_APT_GET).unwrap_or(defaults.apt_get),
            wget: std::env::var(EnvVars::PYBUILD_WGET).unwrap_or(defaults.wget),
            tar: std::env::var(EnvVars::PYBUILD_TAR).unwrap_or(defaults.tar),
            make: std::env::var(EnvVars::PYBUILD_MAKE).unwrap_or(defaults.make),
            use_sudo: std::env::var(EnvVars::PYBUILD_NO_SUDO).is_err(),
        }
    }

    /// Resolve a privileged invocation to (program, args).
    ///
    /// With sudo enabled the program becomes an argument of sudo.
    pub(crate) fn elevated(&self, program: &str, args: &[&str]) -> (String, Vec<String>) {
        if self.use_sudo {
            let mut full = Vec::with_capacity(args.len() + 1);
            full.push(program.to_string());
            full.extend(args.iter().map(|a| a.to_string()));
            ("sudo".to_string(), full)
        } else {
            (
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            )
        }
    }
}
