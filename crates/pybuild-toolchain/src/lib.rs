//! CPython version workflows.
//!
//! Building a requested release from source and removing a previously
//! installed one. This crate provides:
//! - Deterministic source URL and directory naming
//! - The build-prerequisite package list
//! - Build parallelism selection
//! - The install workflow (download, extract, configure, make, altinstall)
//! - The removal workflow (locate, confirm, delete versioned artifacts)

pub mod install;
pub mod jobs;
pub mod remove;
pub mod source;
pub mod sysdeps;
pub mod tools;

pub use install::install;
pub use jobs::{available_cpus, build_parallelism};
pub use remove::{Installation, RemoveOutcome, remove};
pub use source::{archive_filename, download_url, source_dir_name};
pub use sysdeps::{BUILD_DEPENDENCIES, install_build_deps, refresh_package_index};
pub use tools::Tools;
