//! Environment variable constants for pybuild.
//!
//! This module defines all environment variables that pybuild recognizes,
//! providing a single source of truth for environment configuration.

/// Environment variable names used by pybuild.
pub struct EnvVars;

impl EnvVars {
    // ─── Global Settings ─────────────────────────────────────────────────────

    /// Enable verbose output.
    pub const PYBUILD_VERBOSE: &'static str = "PYBUILD_VERBOSE";

    /// Suppress output.
    pub const PYBUILD_QUIET: &'static str = "PYBUILD_QUIET";

    /// Disable colored output.
    pub const PYBUILD_NO_COLOR: &'static str = "PYBUILD_NO_COLOR";

    /// Enable JSON log output.
    pub const PYBUILD_LOG_JSON: &'static str = "PYBUILD_LOG_JSON";

    // ─── External Tool Overrides ─────────────────────────────────────────────

    /// Skip the sudo prefix for privileged steps.
    pub const PYBUILD_NO_SUDO: &'static str = "PYBUILD_NO_SUDO";

    /// Package manager executable (default: apt-get).
    pub const PYBUILD_APT_GET: &'static str = "PYBUILD_APT_GET";

    /// Archive downloader executable (default: wget).
    pub const PYBUILD_WGET: &'static str = "PYBUILD_WGET";

    /// Archive extractor executable (default: tar).
    pub const PYBUILD_TAR: &'static str = "PYBUILD_TAR";

    /// Build driver executable (default: make).
    pub const PYBUILD_MAKE: &'static str = "PYBUILD_MAKE";

    // ─── Standard Environment Variables ──────────────────────────────────────

    /// Standard NO_COLOR environment variable.
    pub const NO_COLOR: &'static str = "NO_COLOR";

    /// Standard CLICOLOR environment variable.
    pub const CLICOLOR: &'static str = "CLICOLOR";

    /// CI environment indicator.
    pub const CI: &'static str = "CI";

    /// Standard HOME environment variable.
    pub const HOME: &'static str = "HOME";
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var(EnvVars::CI).is_ok()
}

/// Check if colors should be disabled based on environment.
pub fn no_color() -> bool {
    std::env::var(EnvVars::NO_COLOR).is_ok()
        || std::env::var(EnvVars::PYBUILD_NO_COLOR).is_ok()
        || std::env::var(EnvVars::CLICOLOR)
            .map(|v| v == "0")
            .unwrap_or(false)
}
