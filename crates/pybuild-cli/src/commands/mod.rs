//! Command implementations.

pub mod install;
pub mod remove;

use crate::cli::Cli;
use crate::menu;
use anyhow::Result;
use pybuild_ui::{Output, Verbosity};

/// Run the CLI.
pub async fn run(cli: Cli) -> Result<i32> {
    if cli.global.no_color || pybuild_core::env::no_color() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output = Output::with_verbosity(if cli.global.quiet > 0 {
        Verbosity::Quiet
    } else if cli.global.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    });

    menu::run(&output).await
}
