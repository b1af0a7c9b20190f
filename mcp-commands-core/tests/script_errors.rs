// mcp-commands-core/tests/script_errors.rs

//! Failure-path integration tests: every execution failure must come back as
//! a message-bearing result, never as `Err`.

use mcp_commands_core::{ExecOptions, InvocationError, run_command, run_script};

fn has_program(name: &str) -> bool {
    duct::cmd!("which", name)
        .stdout_null()
        .stderr_null()
        .unchecked()
        .run()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[tokio::test]
async fn test_script_unknown_command_reported_on_stderr() {
    let result = run_script("sh", "nonexistentcommand", &ExecOptions::new())
        .await
        .unwrap();
    assert!(result.message.is_some(), "result: {:?}", result);
    assert!(
        result.stderr.contains("nonexistentcommand"),
        "stderr: {}",
        result.stderr
    );
}

#[tokio::test]
async fn test_script_invalid_interpreter() {
    let result = run_script("invalidshell9000", "echo test", &ExecOptions::new())
        .await
        .unwrap();
    let message = result.message.expect("spawn failure must carry a message");
    let lowered = message.to_lowercase();
    assert!(
        lowered.contains("no such file") || lowered.contains("not found"),
        "message: {}",
        message
    );
    assert!(message.contains("invalidshell9000"), "message: {}", message);
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "");
}

#[tokio::test]
async fn test_script_empty_is_valid() {
    let result = run_script("sh", "", &ExecOptions::new()).await.unwrap();
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "");
    assert!(result.message.is_none());
}

#[tokio::test]
async fn test_script_syntax_error_surfaces_on_stderr() {
    if !has_program("bash") {
        println!("Skipping test_script_syntax_error_surfaces_on_stderr: bash not found in PATH.");
        return;
    }
    let script = "if [ true ] then\necho \"invalid syntax\"\nfi";
    let result = run_script("bash", script, &ExecOptions::new()).await.unwrap();
    assert!(result.message.is_some(), "result: {:?}", result);
    assert!(
        result.stderr.to_lowercase().contains("syntax error"),
        "stderr: {}",
        result.stderr
    );
}

#[tokio::test]
async fn test_script_exit_code_reflected_in_message() {
    let result = run_script("sh", "exit 1", &ExecOptions::new()).await.unwrap();
    let message = result.message.expect("non-zero exit must carry a message");
    assert!(message.contains("exit code 1"), "message: {}", message);
}

#[tokio::test]
async fn test_script_keeps_partial_output_before_failure() {
    let result = run_script("sh", "echo partial\nexit 3", &ExecOptions::new())
        .await
        .unwrap();
    assert_eq!(result.stdout, "partial\n");
    let message = result.message.expect("non-zero exit must carry a message");
    assert!(message.contains("exit code 3"), "message: {}", message);
}

#[tokio::test]
async fn test_script_invalid_cwd_is_execution_failure() {
    let options = ExecOptions::new().with_cwd(Some("/nonexistent/directory".to_string()));
    let result = run_script("sh", "pwd", &options).await.unwrap();
    let message = result.message.expect("bad cwd must carry a message");
    let lowered = message.to_lowercase();
    assert!(
        lowered.contains("no such file") || lowered.contains("not found"),
        "message: {}",
        message
    );
}

#[tokio::test]
async fn test_command_invalid_cwd_is_execution_failure() {
    let options = ExecOptions::new().with_cwd(Some("/nonexistent/directory".to_string()));
    let result = run_command("pwd", &options).await.unwrap();
    assert!(result.message.is_some(), "result: {:?}", result);
}

#[tokio::test]
async fn test_command_nonzero_exit_keeps_output() {
    let result = run_command("echo before; exit 2", &ExecOptions::new())
        .await
        .unwrap();
    assert_eq!(result.stdout, "before\n");
    let message = result.message.expect("non-zero exit must carry a message");
    assert!(message.contains("exit code 2"), "message: {}", message);
}

#[tokio::test]
async fn test_validation_errors_are_hard_failures() {
    let err = run_command("", &ExecOptions::new()).await.unwrap_err();
    assert_eq!(err, InvocationError::EmptyCommand);

    let err = run_script("", "echo hi", &ExecOptions::new()).await.unwrap_err();
    assert_eq!(err, InvocationError::EmptyInterpreter);
}
