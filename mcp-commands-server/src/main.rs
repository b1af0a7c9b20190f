// mcp-commands-server/src/main.rs

//! MCP server exposing command and script execution over stdio.
//!
//! Two tools (`run_command`, `run_script`) return labeled ERROR/STDOUT/STDERR
//! blocks with the failure flag mirroring the execution outcome. One prompt
//! (`run_command`) runs a command and folds its output into the conversation
//! as a plain transcript instead of a tool result.

use anyhow::Result;
use rmcp::{
    Error as McpError, ServerHandler, ServiceExt,
    handler::server::tool::{Parameters, ToolRouter},
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
        JsonObject, ListPromptsResult, PaginatedRequestParam, Prompt, PromptArgument,
        PromptMessage, PromptMessageContent, PromptMessageRole, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    schemars,
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mcp_commands_core::{ExecOptions, ExecResult, InvocationError, content_blocks, exec};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RunCommandRequest {
    #[schemars(description = "Command with args")]
    pub command: String,
    #[schemars(description = "Current working directory, leave empty in most cases")]
    pub cwd: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RunScriptRequest {
    #[schemars(
        description = "Command with arguments. Script will be piped to stdin. Examples: bash, fish, zsh, python, or: bash --norc"
    )]
    pub interpreter: String,
    #[schemars(description = "Script to run")]
    pub script: String,
    #[schemars(description = "Current working directory")]
    pub cwd: Option<String>,
}

#[derive(Clone)]
pub struct CommandServer {
    tool_router: ToolRouter<CommandServer>,
}

fn invalid_params(err: InvocationError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

/// Converts a result into a tool response: one text content item per
/// non-empty block, with the failure flag mirroring `message`.
fn tool_result(result: &ExecResult) -> CallToolResult {
    let content: Vec<Content> = content_blocks(result)
        .into_iter()
        .map(|block| Content::text(block.to_string()))
        .collect();
    if result.success() {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    }
}

/// Builds the conversational transcript for the `run_command` prompt: the
/// command itself, then raw STDOUT and STDERR sections when non-empty.
fn transcript_messages(command: &str, result: &ExecResult) -> Vec<PromptMessage> {
    let mut messages = vec![PromptMessage {
        role: PromptMessageRole::User,
        content: PromptMessageContent::text(format!(
            "I ran the following command, if there is any output it will be shown below:\n{}",
            command
        )),
    }];
    if !result.stdout.is_empty() {
        messages.push(PromptMessage {
            role: PromptMessageRole::User,
            content: PromptMessageContent::text(format!("STDOUT:\n{}", result.stdout)),
        });
    }
    if !result.stderr.is_empty() {
        messages.push(PromptMessage {
            role: PromptMessageRole::User,
            content: PromptMessageContent::text(format!("STDERR:\n{}", result.stderr)),
        });
    }
    messages
}

/// Resolves a prompt request into transcript messages. Unknown names and a
/// missing `command` argument are invalid-params errors; a failed run
/// surfaces as an internal error carrying the failure message.
async fn prompt_response(
    name: &str,
    arguments: Option<&JsonObject>,
) -> Result<GetPromptResult, McpError> {
    if name != "run_command" {
        return Err(McpError::invalid_params("Unknown prompt", None));
    }
    let command = arguments
        .and_then(|args| args.get("command"))
        .and_then(|value| value.as_str())
        .unwrap_or_default();

    let result = exec::run_command(command, &ExecOptions::new())
        .await
        .map_err(invalid_params)?;
    if let Some(message) = &result.message {
        return Err(McpError::internal_error(message.clone(), None));
    }

    Ok(GetPromptResult {
        description: None,
        messages: transcript_messages(command, &result),
    })
}

#[tool_router]
impl CommandServer {
    pub fn new() -> Self {
        CommandServer {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Run a command on this host. The command runs in the platform shell, so pipes, globs, and redirection work."
    )]
    async fn run_command(
        &self,
        Parameters(RunCommandRequest { command, cwd }): Parameters<RunCommandRequest>,
    ) -> Result<CallToolResult, McpError> {
        let options = ExecOptions::new().with_cwd(cwd);
        let result = exec::run_command(&command, &options)
            .await
            .map_err(invalid_params)?;
        Ok(tool_result(&result))
    }

    #[tool(description = "Run a script by piping it to the given interpreter's stdin.")]
    async fn run_script(
        &self,
        Parameters(RunScriptRequest { interpreter, script, cwd }): Parameters<RunScriptRequest>,
    ) -> Result<CallToolResult, McpError> {
        let options = ExecOptions::new().with_cwd(cwd);
        let result = exec::run_script(&interpreter, &script, &options)
            .await
            .map_err(invalid_params)?;
        Ok(tool_result(&result))
    }
}

#[tool_handler]
impl ServerHandler for CommandServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "mcp-commands-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Run commands and scripts on this host: run_command executes a command \
                 line in the platform shell, run_script pipes a script to an interpreter \
                 such as bash or python."
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: vec![Prompt::new(
                "run_command",
                Some(
                    "Include command output in the prompt. Instead of a tool call, \
                     the user decides what commands are relevant.",
                ),
                Some(vec![PromptArgument {
                    name: "command".to_string(),
                    description: None,
                    required: Some(true),
                }]),
            )],
        })
    }

    async fn get_prompt(
        &self,
        GetPromptRequestParam { name, arguments }: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        prompt_response(&name, arguments.as_ref()).await
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting MCP commands server");

    let service = CommandServer::new()
        .serve(stdio())
        .await
        .inspect_err(|err| error!("Failed to serve: {:?}", err))?;
    service.waiting().await?;

    Ok(())
}
