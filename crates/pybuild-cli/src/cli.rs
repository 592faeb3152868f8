//! CLI argument parsing.
//!
//! The primary surface is the interactive menu; only ambient global flags
//! are parsed here.

use clap::{Args, Parser};
use pybuild_core::EnvVars;

use crate::styles::STYLES;

/// pybuild - build CPython versions from source
#[derive(Parser, Debug)]
#[command(name = "pybuild")]
#[command(author, version, about = "Build and remove CPython versions from source")]
#[command(long_about = None)]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, env = EnvVars::PYBUILD_VERBOSE)]
    pub verbose: bool,

    /// Suppress output (use twice for complete silence)
    #[arg(short, long, action = clap::ArgAction::Count, env = EnvVars::PYBUILD_QUIET)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, env = EnvVars::PYBUILD_NO_COLOR)]
    pub no_color: bool,
}
