//! pybuild - CPython source build CLI
//!
//! An interactive utility that builds CPython versions from source and
//! removes previously installed ones.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod menu;
mod styles;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize telemetry
    pybuild_telemetry::init(cli.global.verbose);

    // Run the menu loop
    let exit_code = commands::run(cli).await?;

    std::process::exit(exit_code);
}
