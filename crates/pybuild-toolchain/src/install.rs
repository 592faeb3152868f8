//! The install workflow.
//!
//! Builds a CPython release from source in seven ordered steps. The first
//! failing step aborts the remainder; completed steps are not rolled back,
//! so a failed compile leaves the refreshed index and downloaded archive
//! in place.

use crate::jobs::{available_cpus, build_parallelism};
use crate::source::{archive_filename, download_url, source_dir_name};
use crate::sysdeps::{install_build_deps, refresh_package_index};
use crate::tools::Tools;
use pybuild_core::{CommandRunner, EnvVars, Error, Fix, PyVersion, Result};
use pybuild_telemetry::TimingGuard;
use pybuild_ui::{Output, Spinner, prompt};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const TOTAL_STEPS: usize = 7;

/// Build and install a Python version from source.
///
/// Side effects accumulate in the current working directory (archive,
/// extracted tree) and under the altinstall prefix.
pub async fn install(version: &PyVersion, tools: &Tools, output: &Output) -> Result<()> {
    let runner = CommandRunner::new();

    // Step 1: record what we are about to do.
    output.step(
        1,
        TOTAL_STEPS,
        &format!("Preparing to build Python {}", version),
    );
    output.list_item("archive", &archive_filename(version));
    output.list_item("executable", &version.executable_name());

    output.step(2, TOTAL_STEPS, "Updating the package index");
    refresh_package_index(&runner, tools).await?;

    output.step(3, TOTAL_STEPS, "Installing build prerequisites");
    install_build_deps(&runner, tools).await?;

    output.step(4, TOTAL_STEPS, &format!("Downloading Python {}", version));
    let archive = download_source(&runner, tools, version).await?;

    output.step(5, TOTAL_STEPS, "Extracting the source archive");
    let src_dir = extract_source(&runner, tools, version, &archive).await?;

    output.step(6, TOTAL_STEPS, "Configuring, compiling, and installing");
    build_and_install(tools, &src_dir, output).await?;

    output.step(7, TOTAL_STEPS, "Verifying the installation");
    reload_shell_configs(&runner, output).await;
    verify_installation(&runner, version, output).await;
    offer_cleanup(&archive, &src_dir, output);

    Ok(())
}

/// Fetch the source archive into the current directory.
///
/// The downloader's own progress display is streamed to the terminal.
async fn download_source(
    runner: &CommandRunner,
    tools: &Tools,
    version: &PyVersion,
) -> Result<PathBuf> {
    let _timing = TimingGuard::new("download-source");

    let url = download_url(version);
    let archive = PathBuf::from(archive_filename(version));

    // A stale archive of the same name would make the downloader pick a
    // duplicate-suffixed filename, breaking the naming contract.
    if archive.exists() {
        debug!("Removing stale archive {}", archive.display());
        fs::remove_file(&archive).map_err(|e| Error::Io {
            message: "failed to remove stale archive".into(),
            path: Some(archive.clone()),
            source: e,
        })?;
    }

    info!("Downloading {}", url);

    let out = runner.run_streaming(tools.wget.as_str(), [url.as_str()]).await?;
    if !out.success() {
        return Err(Error::CommandFailed {
            command: format!("{} {}", tools.wget, url),
            exit_code: Some(out.exit_code),
            stdout: out.stdout,
            stderr: out.stderr,
            fixes: vec![
                Fix::new(format!(
                    "Check that {} is a published Python release",
                    version
                )),
                Fix::new("Check network connectivity"),
            ],
        });
    }

    Ok(archive)
}

/// Expand the archive and verify the expected source tree appeared.
async fn extract_source(
    runner: &CommandRunner,
    tools: &Tools,
    version: &PyVersion,
    archive: &Path,
) -> Result<PathBuf> {
    let _timing = TimingGuard::new("extract-source");
    let spinner = Spinner::new(format!("Extracting {}...", archive.display()));

    let archive_str = archive.to_string_lossy().to_string();
    let out = runner
        .run(tools.tar.as_str(), ["xzf", archive_str.as_str()])
        .await?;

    if !out.success() {
        spinner.finish_error("Extraction failed");
        return Err(Error::CommandFailed {
            command: format!("{} xzf {}", tools.tar, archive.display()),
            exit_code: Some(out.exit_code),
            stdout: out.stdout,
            stderr: out.stderr,
            fixes: vec![],
        });
    }

    let src_dir = PathBuf::from(source_dir_name(version));
    if !src_dir.is_dir() {
        spinner.finish_error("Unexpected archive layout");
        return Err(Error::config(format!(
            "Expected directory {} after extraction. The archive layout does not match the release naming convention.",
            src_dir.display()
        )));
    }

    // Guard against archives that unpack to the right name but are not a
    // CPython source tree.
    let configure_script = src_dir.join("configure");
    if !configure_script.is_file() {
        spinner.finish_error("Source tree is incomplete");
        return Err(Error::config_at(
            "No configure script in the extracted sources. The archive may be corrupted.",
            configure_script,
        ));
    }

    spinner.finish_success(format!("Extracted to {}", src_dir.display()));
    Ok(src_dir)
}

/// Configure, compile, and altinstall inside the source directory.
///
/// Children run with the source directory as their cwd; the parent process
/// never changes directory, so nothing needs restoring on any exit path.
async fn build_and_install(tools: &Tools, src_dir: &Path, output: &Output) -> Result<()> {
    let _timing = TimingGuard::new("build-and-install");
    let runner = CommandRunner::new().with_working_dir(src_dir);

    output.status("Configuring", "./configure --enable-optimizations");
    let out = runner
        .run_streaming("./configure", ["--enable-optimizations"])
        .await?;
    if !out.success() {
        return Err(Error::CommandFailed {
            command: "./configure --enable-optimizations".into(),
            exit_code: Some(out.exit_code),
            stdout: out.stdout,
            stderr: out.stderr,
            fixes: vec![],
        });
    }

    let jobs = build_parallelism(available_cpus());
    let jobs_str = jobs.to_string();
    info!("Compiling with {} parallel jobs", jobs);
    output.status("Compiling", &format!("make -j {}", jobs));

    let out = runner
        .run_streaming(tools.make.as_str(), ["-j", jobs_str.as_str()])
        .await?;
    if !out.success() {
        return Err(Error::CommandFailed {
            command: format!("{} -j {}", tools.make, jobs),
            exit_code: Some(out.exit_code),
            stdout: out.stdout,
            stderr: out.stderr,
            fixes: vec![],
        });
    }

    // altinstall leaves the system default python untouched.
    output.status("Installing", "make altinstall");
    let (program, args) = tools.elevated(&tools.make, &["altinstall"]);
    let out = runner
        .run_streaming(program.as_str(), args.iter().map(String::as_str))
        .await?;
    if !out.success() {
        return Err(Error::CommandFailed {
            command: format!("{} altinstall", tools.make),
            exit_code: Some(out.exit_code),
            stdout: out.stdout,
            stderr: out.stderr,
            fixes: vec![],
        });
    }

    Ok(())
}

/// Best-effort reload of the user's shell configuration files.
///
/// Failure to reload is never fatal; the files may legitimately not exist.
async fn reload_shell_configs(runner: &CommandRunner, output: &Output) {
    let Ok(home) = std::env::var(EnvVars::HOME) else {
        debug!("HOME not set, skipping shell config reload");
        return;
    };

    for name in [".bashrc", ".profile"] {
        let path = Path::new(&home).join(name);
        if !path.is_file() {
            debug!("{} not present, skipping", path.display());
            continue;
        }

        let command = format!("source '{}'", path.display());
        match runner.run("bash", ["-c", command.as_str()]).await {
            Ok(out) if out.success() => {
                output.verbose(&format!("Reloaded {}", path.display()));
            }
            Ok(out) => {
                warn!(
                    "Could not reload {} (exit status {})",
                    path.display(),
                    out.exit_code
                );
            }
            Err(e) => {
                warn!("Could not reload {}: {}", path.display(), e);
            }
        }
    }
}

/// Check that the versioned executable resolves on PATH and report its
/// version. Absence is a warning, not a failure.
async fn verify_installation(runner: &CommandRunner, version: &PyVersion, output: &Output) {
    let exe_name = version.executable_name();

    let Ok(path) = which::which(&exe_name) else {
        output.warn(&format!(
            "{} is not on PATH yet; restart your shell session or open a new terminal",
            exe_name
        ));
        return;
    };

    let exe = path.to_string_lossy().to_string();
    match runner.run(exe.as_str(), ["--version"]).await {
        Ok(out) if out.success() => {
            let version_str = format!("{}{}", out.stdout, out.stderr);
            let reported = version_str.trim();
            output.status("Installed", &format!("{} ({})", exe_name, path.display()));
            if let Some(parsed) = PyVersion::parse_from_output(reported) {
                if &parsed != version {
                    warn!("Version mismatch: expected {}, got {}", version, parsed);
                }
            }
            output.info(reported);
        }
        Ok(_) | Err(_) => {
            output.warn(&format!(
                "{} was found at {} but did not report a version",
                exe_name,
                path.display()
            ));
        }
    }
}

/// Offer to delete the downloaded archive and extracted source tree.
fn offer_cleanup(archive: &Path, src_dir: &Path, output: &Output) {
    let question = format!(
        "Delete the downloaded archive and extracted sources ({}, {})?",
        archive.display(),
        src_dir.display()
    );

    if !prompt::confirm(&question).unwrap_or(false) {
        output.info("Keeping build artifacts");
        return;
    }

    if let Err(e) = fs::remove_file(archive) {
        warn!("Could not delete {}: {}", archive.display(), e);
    } else {
        output.info(&format!("Deleted {}", archive.display()));
    }

    if let Err(e) = fs::remove_dir_all(src_dir) {
        warn!("Could not delete {}: {}", src_dir.display(), e);
    } else {
        output.info(&format!("Deleted {}", src_dir.display()));
    }
}
