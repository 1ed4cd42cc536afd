use std::{collections::HashMap, future::Future, pin::Pin};

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult};

use super::server::EmbeddingMcpServer;

pub type ToolFuture = Pin<Box<dyn Future<Output = Result<CallToolResult, McpError>> + Send>>;
pub type PromptFuture = Pin<Box<dyn Future<Output = Result<GetPromptResult, McpError>> + Send>>;

pub type ToolHandler = fn(&EmbeddingMcpServer, CallToolRequestParam) -> ToolFuture;
pub type PromptHandler = fn(&EmbeddingMcpServer, GetPromptRequestParam) -> PromptFuture;

/// Registry mapping tool and prompt names to handler functions.
pub struct Registry {
    pub tools: HashMap<&'static str, ToolHandler>,
    pub prompts: HashMap<&'static str, PromptHandler>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            prompts: HashMap::new(),
        }
    }

    pub fn register_tool(&mut self, name: &'static str, handler: ToolHandler) {
        self.tools.insert(name, handler);
    }

    pub fn register_prompt(&mut self, name: &'static str, handler: PromptHandler) {
        self.prompts.insert(name, handler);
    }
}
