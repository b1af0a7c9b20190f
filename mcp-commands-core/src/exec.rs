// mcp-commands-core/src/exec.rs

//! The two executors: shell-mediated commands and stdin-fed scripts.

use tracing::{debug, warn};

use crate::errors::InvocationError;
use crate::result::ExecResult;

/// Per-invocation execution settings.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    cwd: Option<String>,
}

impl ExecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working directory for the child process.
    ///
    /// An empty string means "no override", so a blank protocol field can be
    /// passed through unchanged. Whether the directory exists is only checked
    /// at spawn time; a missing directory surfaces as an execution failure.
    pub fn with_cwd(mut self, cwd: Option<String>) -> Self {
        self.cwd = cwd.filter(|dir| !dir.is_empty());
        self
    }
}

/// The platform's default shell as a (program, flag) pair.
fn platform_shell() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

/// Executes a command line through the platform's default shell (`sh -c` on
/// Unix, `cmd /C` on Windows), so pipes, globs, and redirections behave as
/// they would at an interactive prompt.
///
/// **Warning:** the command runs exactly as provided, with no sandboxing or
/// validation. Callers must decide whether it is safe to execute.
///
/// Execution failures do not surface as `Err`: a spawn error or a non-zero
/// exit produces an `Ok` result whose `message` is set. The only `Err` is the
/// rejection of an empty command, before anything is spawned.
pub async fn run_command(
    command: &str,
    options: &ExecOptions,
) -> Result<ExecResult, InvocationError> {
    if command.is_empty() {
        return Err(InvocationError::EmptyCommand);
    }

    let (shell, shell_arg) = platform_shell();
    debug!("Running command via {}: {} (cwd: {:?})", shell, command, options.cwd);

    // The child must not inherit stdin; that stream carries the MCP session.
    let mut expr = duct::cmd(shell, [shell_arg, command]).stdin_null();
    if let Some(dir) = &options.cwd {
        expr = expr.dir(dir);
    }

    Ok(run_to_completion(expr, "shell".to_string()).await)
}

/// Spawns an interpreter directly (no shell layer) and pipes `script` to its
/// standard input, closing the stream once the full text is written.
///
/// The interpreter string is split on whitespace into a program and its
/// arguments, so `"bash --norc"` works; nothing is shell-expanded. An empty
/// `script` is degenerate but valid: the interpreter sees immediately-closed
/// input.
pub async fn run_script(
    interpreter: &str,
    script: &str,
    options: &ExecOptions,
) -> Result<ExecResult, InvocationError> {
    let mut words = interpreter.split_whitespace();
    let program = match words.next() {
        Some(program) => program,
        None => return Err(InvocationError::EmptyInterpreter),
    };
    let args: Vec<&str> = words.collect();

    debug!(
        "Running {} byte script via {:?} (cwd: {:?})",
        script.len(),
        program,
        options.cwd
    );

    let mut expr = duct::cmd(program, args).stdin_bytes(script.to_owned());
    if let Some(dir) = &options.cwd {
        expr = expr.dir(dir);
    }

    Ok(run_to_completion(expr, format!("interpreter '{}'", program)).await)
}

/// Waits for the expression on the blocking pool and converges every outcome
/// into an `ExecResult`. `unchecked()` keeps a non-zero exit on the `Ok`
/// path, so the only `Err` out of duct is a spawn-level failure.
async fn run_to_completion(expr: duct::Expression, what: String) -> ExecResult {
    let expr = expr.stdout_capture().stderr_capture().unchecked();
    match tokio::task::spawn_blocking(move || expr.run()).await {
        Ok(Ok(output)) => {
            let result = ExecResult::from_output(output);
            if let Some(message) = &result.message {
                debug!("Process failed: {}", message);
            }
            result
        }
        Ok(Err(err)) => {
            warn!(error = %err, "Failed to start {}", what);
            ExecResult::spawn_failure(format!("Failed to start {}: {}", what, err))
        }
        Err(err) => {
            warn!(error = %err, "Execution task failed");
            ExecResult::spawn_failure(format!("Execution task failed: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cwd_means_no_override() {
        let options = ExecOptions::new().with_cwd(Some(String::new()));
        assert!(options.cwd.is_none());

        let options = ExecOptions::new().with_cwd(Some("/tmp".to_string()));
        assert_eq!(options.cwd.as_deref(), Some("/tmp"));
    }

    #[tokio::test]
    async fn test_empty_command_rejected_before_spawn() {
        let err = run_command("", &ExecOptions::new()).await.unwrap_err();
        assert_eq!(err, InvocationError::EmptyCommand);
        assert_eq!(err.to_string(), "Command is required");
    }

    #[tokio::test]
    async fn test_blank_interpreter_rejected_before_spawn() {
        let err = run_script("", "echo hi", &ExecOptions::new()).await.unwrap_err();
        assert_eq!(err, InvocationError::EmptyInterpreter);

        let err = run_script("   ", "echo hi", &ExecOptions::new()).await.unwrap_err();
        assert_eq!(err, InvocationError::EmptyInterpreter);
    }
}
