// mcp-commands-core/src/lib.rs

//! Process execution engine for the mcp-commands server.
//!
//! Two entry points share one result contract: [`exec::run_command`] runs a
//! command line through the platform shell, and [`exec::run_script`] pipes a
//! script to an interpreter's standard input. Both resolve to an
//! [`ExecResult`] whether the process succeeded or failed, so callers branch
//! on [`ExecResult::message`] rather than on an error type. Only malformed
//! invocations (no command, no interpreter) surface as [`InvocationError`].

pub mod errors;
pub mod exec;
pub mod format;
pub mod result;

pub use errors::InvocationError;
pub use exec::{ExecOptions, run_command, run_script};
pub use format::{BlockLabel, ContentBlock, content_blocks};
pub use result::ExecResult;
