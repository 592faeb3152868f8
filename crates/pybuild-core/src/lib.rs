//! Core types and orchestration for pybuild.
//!
//! This crate provides shared types, error handling, and command execution
//! utilities used across all pybuild crates.

pub mod command;
pub mod env;
pub mod error;
pub mod version;

pub use command::{CommandOutput, CommandRunner};
pub use env::EnvVars;
pub use error::{Error, ErrorCode, Fix, Result};
pub use version::PyVersion;

/// Exit codes for the pybuild CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error (a workflow step failed)
    GeneralError = 1,
    /// Usage error (bad arguments)
    UsageError = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
