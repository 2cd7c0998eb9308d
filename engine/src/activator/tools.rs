use crate::error::{ThemerError, ThemerResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of an external helper process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    /// stdout followed by stderr
    pub combined: String,
}

/// Access to external helper programs (bat, git, nvim).
///
/// Activation never spawns a process directly; it goes through this trait
/// so callers can substitute the environment.
pub trait ToolRunner {
    /// Resolve `program` on `PATH`.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run `program` to completion and capture its output.
    fn run(&self, program: &Path, args: &[&str]) -> ThemerResult<ToolOutput>;
}

/// Runs real processes found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTools;

impl ToolRunner for SystemTools {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, program: &Path, args: &[&str]) -> ThemerResult<ToolOutput> {
        log::debug!("Running {} {}", program.display(), args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ThemerError::io(program, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{stdout}{stderr}");

        if !output.status.success() {
            log::debug!("{} exited with {}", program.display(), output.status);
        }

        Ok(ToolOutput {
            success: output.status.success(),
            stdout,
            combined,
        })
    }
}
