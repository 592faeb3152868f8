//! End-to-end tests for the install and remove workflows.
//!
//! The external collaborators (package manager, downloader, extractor,
//! build driver) are replaced with stub shell scripts that append their
//! argv to a log file, wired in through the PYBUILD_* tool overrides.
//! This verifies step ordering and first-failure abort semantics without
//! touching the real system.

#![cfg(unix)]
#![allow(deprecated)] // cargo_bin is deprecated but the replacement requires macros

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn pybuild() -> Command {
    Command::cargo_bin("pybuild").unwrap()
}

/// Write an executable shell script.
fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

struct Stubs {
    apt_get: PathBuf,
    wget: PathBuf,
    tar: PathBuf,
    make: PathBuf,
    log: PathBuf,
    configure: PathBuf,
}

/// Stub every external tool. Each appends its argv to the log; wget
/// creates the archive named by the URL's last path segment; tar expands
/// it to the conventional source directory containing a configure stub.
fn write_stubs(dir: &Path, log: &Path) -> Stubs {
    let apt_get = write_stub(dir, "apt-get", "echo \"apt-get $@\" >> \"$PYBUILD_TEST_LOG\"");
    let wget = write_stub(
        dir,
        "wget",
        r#"echo "wget $@" >> "$PYBUILD_TEST_LOG"
url="$1"
: > "$(basename "$url")""#,
    );
    let tar = write_stub(
        dir,
        "tar",
        r#"echo "tar $@" >> "$PYBUILD_TEST_LOG"
dir="$(basename "$2" .tgz)"
mkdir -p "$dir"
cp "$PYBUILD_TEST_CONFIGURE" "$dir/configure"
chmod 755 "$dir/configure""#,
    );
    let make = write_stub(dir, "make", "echo \"make $@\" >> \"$PYBUILD_TEST_LOG\"");
    let configure = write_stub(
        dir,
        "configure-stub",
        "echo \"configure $@\" >> \"$PYBUILD_TEST_LOG\"",
    );

    Stubs {
        apt_get,
        wget,
        tar,
        make,
        log: log.to_path_buf(),
        configure,
    }
}

/// A pybuild command wired to the stub tools, running in `work`.
fn pybuild_with_stubs(stubs: &Stubs, work: &Path, home: &Path) -> Command {
    let mut cmd = pybuild();
    cmd.current_dir(work)
        .env("PYBUILD_NO_SUDO", "1")
        .env("PYBUILD_APT_GET", &stubs.apt_get)
        .env("PYBUILD_WGET", &stubs.wget)
        .env("PYBUILD_TAR", &stubs.tar)
        .env("PYBUILD_MAKE", &stubs.make)
        .env("PYBUILD_TEST_LOG", &stubs.log)
        .env("PYBUILD_TEST_CONFIGURE", &stubs.configure)
        .env("HOME", home);
    cmd
}

fn log_lines(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn index_of(lines: &[String], prefix: &str) -> usize {
    lines
        .iter()
        .position(|l| l.starts_with(prefix))
        .unwrap_or_else(|| panic!("no log line starting with {:?} in {:?}", prefix, lines))
}

// =============================================================================
// Install workflow
// =============================================================================

#[test]
fn test_install_runs_steps_in_order() {
    let temp = TempDir::new().unwrap();
    let stub_dir = temp.path().join("stubs");
    let work = temp.path().join("work");
    let home = temp.path().join("home");
    fs::create_dir_all(&stub_dir).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::create_dir_all(&home).unwrap();

    let log = temp.path().join("tools.log");
    let stubs = write_stubs(&stub_dir, &log);

    // Install 3.97.2, decline cleanup, acknowledge, exit.
    pybuild_with_stubs(&stubs, &work, &home)
        .write_stdin("1\n3.97.2\nn\n\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[7/7]"))
        .stderr(predicate::str::contains("not on PATH yet"))
        .stderr(predicate::str::contains("Keeping build artifacts"));

    let lines = log_lines(&log);
    let update = index_of(&lines, "apt-get update");
    let install = index_of(&lines, "apt-get install -y");
    let wget = index_of(&lines, "wget ");
    let tar = index_of(&lines, "tar xzf");
    let configure = index_of(&lines, "configure --enable-optimizations");
    let make_build = index_of(&lines, "make -j");
    let altinstall = index_of(&lines, "make altinstall");

    assert!(update < install);
    assert!(install < wget);
    assert!(wget < tar);
    assert!(tar < configure);
    assert!(configure < make_build);
    assert!(make_build < altinstall);

    // The prerequisite list rides on one install invocation.
    assert!(lines[install].contains("build-essential"));
    assert!(lines[install].contains("libssl-dev"));

    // Download URL follows the release naming convention.
    assert!(
        lines[wget].contains("https://www.python.org/ftp/python/3.97.2/Python-3.97.2.tgz")
    );

    // Cleanup was declined: archive and source tree stay in place.
    assert!(work.join("Python-3.97.2.tgz").exists());
    assert!(work.join("Python-3.97.2").is_dir());
}

#[test]
fn test_install_cleanup_on_confirmation() {
    let temp = TempDir::new().unwrap();
    let stub_dir = temp.path().join("stubs");
    let work = temp.path().join("work");
    let home = temp.path().join("home");
    fs::create_dir_all(&stub_dir).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::create_dir_all(&home).unwrap();

    let log = temp.path().join("tools.log");
    let stubs = write_stubs(&stub_dir, &log);

    pybuild_with_stubs(&stubs, &work, &home)
        .write_stdin("1\n3.97.2\ny\n\n3\n")
        .assert()
        .success();

    assert!(!work.join("Python-3.97.2.tgz").exists());
    assert!(!work.join("Python-3.97.2").exists());
}

#[test]
fn test_install_download_failure_aborts_remaining_steps() {
    let temp = TempDir::new().unwrap();
    let stub_dir = temp.path().join("stubs");
    let work = temp.path().join("work");
    let home = temp.path().join("home");
    fs::create_dir_all(&stub_dir).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::create_dir_all(&home).unwrap();

    let log = temp.path().join("tools.log");
    let mut stubs = write_stubs(&stub_dir, &log);
    stubs.wget = write_stub(
        &stub_dir,
        "wget",
        "echo \"wget $@\" >> \"$PYBUILD_TEST_LOG\"\nexit 4",
    );

    // Nonexistent version: download fails, menu redisplays, exit cleanly.
    let assert = pybuild_with_stubs(&stubs, &work, &home)
        .write_stdin("1\n3.99.0\n\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("command failed"))
        .stderr(predicate::str::contains("published Python release"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(
        stderr.matches("Install a Python version").count(),
        2,
        "menu must redisplay after the failed operation"
    );

    let lines = log_lines(&log);
    assert!(lines.iter().any(|l| l.starts_with("apt-get update")));
    assert!(lines.iter().any(|l| l.starts_with("apt-get install")));
    assert!(lines.iter().any(|l| l.starts_with("wget ")));
    // Extraction and build never ran.
    assert!(!lines.iter().any(|l| l.starts_with("tar")));
    assert!(!lines.iter().any(|l| l.starts_with("configure")));
    assert!(!lines.iter().any(|l| l.starts_with("make")));
}

#[test]
fn test_install_index_refresh_failure_aborts_everything() {
    let temp = TempDir::new().unwrap();
    let stub_dir = temp.path().join("stubs");
    let work = temp.path().join("work");
    let home = temp.path().join("home");
    fs::create_dir_all(&stub_dir).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::create_dir_all(&home).unwrap();

    let log = temp.path().join("tools.log");
    let mut stubs = write_stubs(&stub_dir, &log);
    stubs.apt_get = write_stub(
        &stub_dir,
        "apt-get",
        "echo \"apt-get $@\" >> \"$PYBUILD_TEST_LOG\"\nexit 1",
    );

    pybuild_with_stubs(&stubs, &work, &home)
        .write_stdin("1\n3.99.0\n\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("command failed"));

    let lines = log_lines(&log);
    assert_eq!(lines.len(), 1, "only the index refresh may run: {:?}", lines);
    assert!(lines[0].starts_with("apt-get update"));
}

// =============================================================================
// Remove workflow
// =============================================================================

fn write_exec(path: &Path) {
    fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

/// Lay out the artifacts an altinstall of 3.10.0 leaves under a prefix.
/// idle3.10 is deliberately absent: missing targets must be skipped.
fn make_fake_installation(prefix: &Path) {
    let bin = prefix.join("bin");
    let lib = prefix.join("lib");
    fs::create_dir_all(&bin).unwrap();
    fs::create_dir_all(lib.join("python3.10")).unwrap();
    fs::create_dir_all(lib.join("pkgconfig")).unwrap();
    fs::create_dir_all(prefix.join("include/python3.10")).unwrap();
    fs::create_dir_all(prefix.join("share/man/man1")).unwrap();

    write_exec(&bin.join("python3.10"));
    fs::write(bin.join("pip3.10"), b"").unwrap();
    fs::write(bin.join("pydoc3.10"), b"").unwrap();
    fs::write(bin.join("2to3-3.10"), b"").unwrap();
    fs::write(lib.join("python3.10/os.py"), b"").unwrap();
    fs::write(lib.join("libpython3.10.a"), b"").unwrap();
    fs::write(lib.join("pkgconfig/python-3.10.pc"), b"").unwrap();
    fs::write(prefix.join("include/python3.10/Python.h"), b"").unwrap();
    fs::write(prefix.join("share/man/man1/python3.10.1"), b"").unwrap();
}

fn path_with(prefix: &Path) -> String {
    format!(
        "{}:{}",
        prefix.join("bin").display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

#[test]
fn test_remove_confirmed_deletes_artifacts() {
    let temp = TempDir::new().unwrap();
    let prefix = temp.path().join("prefix");
    make_fake_installation(&prefix);

    pybuild()
        .env("PATH", path_with(&prefix))
        .write_stdin("2\n3.10.0\ny\n\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("python3.10"))
        .stderr(predicate::str::contains("removed"));

    assert!(!prefix.join("bin/python3.10").exists());
    assert!(!prefix.join("bin/pip3.10").exists());
    assert!(!prefix.join("bin/pydoc3.10").exists());
    assert!(!prefix.join("bin/2to3-3.10").exists());
    assert!(!prefix.join("lib/python3.10").exists());
    assert!(!prefix.join("lib/libpython3.10.a").exists());
    assert!(!prefix.join("lib/pkgconfig/python-3.10.pc").exists());
    assert!(!prefix.join("include/python3.10").exists());
    assert!(!prefix.join("share/man/man1/python3.10.1").exists());

    // The prefix itself is never deleted.
    assert!(prefix.join("bin").is_dir());
}

#[test]
fn test_remove_declined_leaves_everything() {
    let temp = TempDir::new().unwrap();
    let prefix = temp.path().join("prefix");
    make_fake_installation(&prefix);

    pybuild()
        .env("PATH", path_with(&prefix))
        .write_stdin("2\n3.10.0\nn\n\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing was removed"));

    assert!(prefix.join("bin/python3.10").exists());
    assert!(prefix.join("lib/python3.10").is_dir());
    assert!(prefix.join("lib/libpython3.10.a").exists());
}

#[test]
fn test_remove_unknown_version_fails_cleanly() {
    pybuild()
        .write_stdin("2\n9.99.99\n\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("is not installed"));
}
