//! The interactive menu loop.
//!
//! An explicit loop rather than recursive re-entry: long sessions must not
//! grow the call stack. Invalid input always routes back to the menu; the
//! process only exits through the exit choice or end of input.

use crate::commands;
use anyhow::Result;
use pybuild_core::{ExitCode, PyVersion};
use pybuild_ui::{Output, prompt};

/// Run the menu loop until the user exits.
pub async fn run(output: &Output) -> Result<i32> {
    loop {
        show_menu(output);

        let Some(choice) = prompt::read_line("Select an option: ")? else {
            return Ok(ExitCode::Success.into());
        };

        match choice.as_str() {
            "1" | "2" => match read_version(output)? {
                VersionEntry::Eof => return Ok(ExitCode::Success.into()),
                VersionEntry::Invalid => {
                    // Error already shown; redisplay the menu without
                    // attempting the operation.
                }
                VersionEntry::Version(version) => {
                    // The operation's exit status does not terminate the
                    // process; failures were already reported.
                    let _ = if choice == "1" {
                        commands::install::run(&version, output).await?
                    } else {
                        commands::remove::run(&version, output).await?
                    };

                    if prompt::pause()?.is_none() {
                        return Ok(ExitCode::Success.into());
                    }
                }
            },
            "3" => return Ok(ExitCode::Success.into()),
            other => output.warn(&format!("unrecognized option: {:?}", other)),
        }
    }
}

fn show_menu(output: &Output) {
    output.header("pybuild — CPython builds from source");
    output.list_item("1", "Install a Python version");
    output.list_item("2", "Remove an installed Python version");
    output.list_item("3", "Exit");
}

enum VersionEntry {
    Version(PyVersion),
    Invalid,
    Eof,
}

fn read_version(output: &Output) -> std::io::Result<VersionEntry> {
    let Some(line) = prompt::read_line("Python version (e.g. 3.12.3): ")? else {
        return Ok(VersionEntry::Eof);
    };

    match line.parse::<PyVersion>() {
        Ok(version) => Ok(VersionEntry::Version(version)),
        Err(e) => {
            output.error(&e.to_string());
            Ok(VersionEntry::Invalid)
        }
    }
}
