// mcp-commands-core/src/format.rs

//! Renders an `ExecResult` as labeled blocks for the protocol layer.

use std::fmt;

use crate::result::ExecResult;

/// Label carried by one formatted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLabel {
    Error,
    Stdout,
    Stderr,
}

impl BlockLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockLabel::Error => "ERROR",
            BlockLabel::Stdout => "STDOUT",
            BlockLabel::Stderr => "STDERR",
        }
    }
}

/// One labeled unit of text for delivery to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub label: BlockLabel,
    pub text: String,
}

impl fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\n{}", self.label.as_str(), self.text)
    }
}

/// Maps a result to its blocks, in fixed order: ERROR, then STDOUT, then
/// STDERR. The order does not depend on which executor produced the result,
/// and empty fields are omitted entirely rather than emitted as blank blocks.
pub fn content_blocks(result: &ExecResult) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    if let Some(message) = &result.message {
        blocks.push(ContentBlock {
            label: BlockLabel::Error,
            text: message.clone(),
        });
    }
    if !result.stdout.is_empty() {
        blocks.push(ContentBlock {
            label: BlockLabel::Stdout,
            text: result.stdout.clone(),
        });
    }
    if !result.stderr.is_empty() {
        blocks.push(ContentBlock {
            label: BlockLabel::Stderr,
            text: result.stderr.clone(),
        });
    }
    blocks
}
