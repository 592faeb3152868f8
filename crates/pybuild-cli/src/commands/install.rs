//! Install command implementation.

use anyhow::Result;
use pybuild_core::PyVersion;
use pybuild_toolchain::{Tools, install};
use pybuild_ui::Output;
use std::time::Instant;

/// Run the install workflow for a version.
///
/// Returns 0 on success and 1 when any step failed; the menu loop keeps
/// running either way.
pub async fn run(version: &PyVersion, output: &Output) -> Result<i32> {
    let start = Instant::now();
    let tools = Tools::from_env();

    output.status("Installing", &format!("Python {}", version));

    match install(version, &tools, output).await {
        Ok(()) => {
            output.success_summary(
                &format!("Python {} build finished", version),
                start.elapsed(),
            );
            Ok(0)
        }
        Err(e) => {
            output.print_error(&e);
            Ok(1)
        }
    }
}
