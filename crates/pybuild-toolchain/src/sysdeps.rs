//! Build prerequisites via the system package manager.

use crate::tools::Tools;
use pybuild_core::{CommandRunner, Error, Fix, Result};
use pybuild_telemetry::TimingGuard;
use pybuild_ui::Spinner;
use tracing::info;

/// Packages required to compile CPython on Debian-family systems.
pub static BUILD_DEPENDENCIES: &[&str] = &[
    "build-essential",
    "zlib1g-dev",
    "libncurses5-dev",
    "libgdbm-dev",
    "libnss3-dev",
    "libssl-dev",
    "libreadline-dev",
    "libffi-dev",
    "libsqlite3-dev",
    "libbz2-dev",
    "wget",
];

/// Refresh the package index.
pub async fn refresh_package_index(runner: &CommandRunner, tools: &Tools) -> Result<()> {
    let _timing = TimingGuard::new("refresh-package-index");
    let spinner = Spinner::new("Updating package index...");

    info!("Refreshing package index via {}", tools.apt_get);

    let (program, args) = tools.elevated(&tools.apt_get, &["update"]);
    let output = runner
        .run(program.as_str(), args.iter().map(String::as_str))
        .await?;

    if output.success() {
        spinner.finish_success("Package index updated");
        Ok(())
    } else {
        spinner.finish_error("Package index update failed");
        Err(Error::CommandFailed {
            command: format!("{} update", tools.apt_get),
            exit_code: Some(output.exit_code),
            stdout: output.stdout,
            stderr: output.stderr,
            fixes: vec![],
        })
    }
}

/// Install the build prerequisite packages.
pub async fn install_build_deps(runner: &CommandRunner, tools: &Tools) -> Result<()> {
    let _timing = TimingGuard::new("install-build-deps");
    let spinner = Spinner::new("Installing build prerequisites...");

    info!("Installing {} build packages", BUILD_DEPENDENCIES.len());

    let mut args = vec!["install", "-y"];
    args.extend_from_slice(BUILD_DEPENDENCIES);

    let (program, args) = tools.elevated(&tools.apt_get, &args);
    let output = runner
        .run(program.as_str(), args.iter().map(String::as_str))
        .await?;

    if output.success() {
        spinner.finish_success("Build prerequisites installed");
        Ok(())
    } else {
        spinner.finish_error("Prerequisite installation failed");
        Err(Error::CommandFailed {
            command: format!("{} install", tools.apt_get),
            exit_code: Some(output.exit_code),
            stdout: output.stdout,
            stderr: output.stderr,
            fixes: vec![Fix::new(
                "Check that this is a Debian-family system with apt-get available",
            )],
        })
    }
}
