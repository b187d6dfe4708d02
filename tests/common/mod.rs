//! Shared integration-test harness for running the `stepcards` binary as a
//! child process.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Helpers for spawning the compiled `stepcards` binary.
pub struct StepcardsProcess;

impl StepcardsProcess {
    fn command(cwd: Option<&Path>) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stepcards"));
        cmd.env_remove("STEPCARDS_LOG_LEVEL")
            .env_remove("STEPCARDS_CONTENT_DIR")
            .env("NO_COLOR", "1");
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Runs the binary with `args` and collects its output.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command(None)
            .args(args)
            .output()
            .expect("failed to run stepcards")
    }

    /// Runs the binary with `args` from working directory `cwd`.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_in(cwd: &Path, args: &[&str]) -> Output {
        Self::command(Some(cwd))
            .args(args)
            .output()
            .expect("failed to run stepcards")
    }

    /// Runs the binary with `args`, feeding `input` on stdin.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_stdin(cwd: &Path, args: &[&str], input: &str) -> Output {
        let mut child = Self::command(Some(cwd))
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn stepcards");
        child
            .stdin
            .take()
            .expect("stdin not captured")
            .write_all(input.as_bytes())
            .expect("failed to write stdin");
        child.wait_with_output().expect("failed to wait for stepcards")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Stderr lines at WARN level.
    #[must_use]
    pub fn warn_lines(output: &Output) -> Vec<String> {
        String::from_utf8_lossy(&output.stderr)
            .lines()
            .filter(|l| l.contains("WARN"))
            .map(str::to_string)
            .collect()
    }
}
