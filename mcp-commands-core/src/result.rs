// mcp-commands-core/src/result.rs

//! The unified outcome value shared by both executors.

use std::process::Output;

/// Captured outcome of one executed command or script.
///
/// Success and failure share this shape. `message` is `Some` exactly when
/// the process failed to reach a clean zero exit, holding either the spawn
/// error or the exit status description. `stdout` and `stderr` are kept on
/// both paths, since a failing process may still have produced output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecResult {
    /// The captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// The captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
    /// Present only when the process failed to run to a clean completion.
    pub message: Option<String>,
}

impl ExecResult {
    /// Builds a result from a process that ran to completion, successful or
    /// not. A non-zero exit (or a signal death) populates `message` with the
    /// status description.
    pub fn from_output(output: Output) -> Self {
        let message = if output.status.success() {
            None
        } else {
            Some(match output.status.code() {
                Some(code) => format!("Command failed with exit code {}", code),
                None => format!("Command failed: {}", output.status),
            })
        };
        ExecResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            message,
        }
    }

    /// Builds a result for a process that never ran at all.
    pub fn spawn_failure(message: impl Into<String>) -> Self {
        ExecResult {
            stdout: String::new(),
            stderr: String::new(),
            message: Some(message.into()),
        }
    }

    /// Checks whether the process ran to a clean successful completion.
    pub fn success(&self) -> bool {
        self.message.is_none()
    }
}
