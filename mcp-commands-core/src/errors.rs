// mcp-commands-core/src/errors.rs
use thiserror::Error;

/// Errors for invocations rejected before any process is spawned.
///
/// Execution failures (a spawn that fails, a process that exits non-zero)
/// are not represented here; those come back as an `ExecResult` carrying a
/// message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// No command text was supplied to the command executor.
    #[error("Command is required")]
    EmptyCommand,

    /// No interpreter was supplied to the script executor.
    #[error("Interpreter is required")]
    EmptyInterpreter,
}
