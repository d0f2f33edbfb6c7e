//! Shared test harness for seqdiff-cli integration tests.
//!
//! Provides a process runner and fixture-file helpers. The environment is
//! pinned so log output never leaks into captured stdout.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Path to the compiled `seqdiff` binary.
pub fn seqdiff_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_seqdiff"))
}

/// Run `seqdiff` in `dir` with the given arguments.
pub fn seqdiff(dir: &Path, args: &[&str]) -> CommandResult {
    let output = Command::new(seqdiff_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run seqdiff");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Write `contents` to `dir/name`.
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

/// A temp dir holding `old.txt` and `new.txt`.
pub fn file_pair(old: &str, new: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "old.txt", old);
    write_file(dir.path(), "new.txt", new);
    dir
}
