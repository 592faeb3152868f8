//! Remove command implementation.

use anyhow::Result;
use pybuild_core::PyVersion;
use pybuild_toolchain::{RemoveOutcome, remove};
use pybuild_ui::Output;

/// Run the removal workflow for a version.
///
/// Returns 0 when the deletion pass ran, 1 on decline or failure.
pub async fn run(version: &PyVersion, output: &Output) -> Result<i32> {
    output.status("Removing", &format!("Python {}", version));

    match remove(version, output) {
        Ok(RemoveOutcome::Removed { .. }) => {
            output.status("Done", &format!("Python {} removed", version));
            Ok(0)
        }
        Ok(RemoveOutcome::Declined) => {
            output.warn("aborted; nothing was removed");
            Ok(1)
        }
        Err(e) => {
            output.print_error(&e);
            Ok(1)
        }
    }
}
