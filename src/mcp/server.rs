//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    mcp::{
        format::{NO_MATCH_TEXT, markdown_resource_contents, plain_resource_contents, search_error_text},
        handlers::{search::handle_search, store::handle_store},
        prompts, registry, schemas,
    },
    remote::{EmbeddingApiClient, VectorSearchRequest},
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, GetPromptRequestParam,
        GetPromptResult, ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult,
        ListToolsResult, RawResourceTemplate, ReadResourceRequestParam, ReadResourceResult,
        ResourceTemplate, ServerCapabilities, ServerInfo, Tool, ToolAnnotations,
    },
};

const SEARCH_TEMPLATE_URI: &str = "search://{query}";
const SEARCH_URI_PREFIX: &str = "search://";

/// MCP server adapting the remote embedding service into tools, a templated
/// resource, and prompts.
#[derive(Clone)]
pub struct EmbeddingMcpServer {
    client: Arc<EmbeddingApiClient>,
    registry: Arc<registry::Registry>,
}

impl EmbeddingMcpServer {
    /// Create a new MCP server around the supplied service client.
    pub fn new(client: Arc<EmbeddingApiClient>) -> Self {
        let mut registry = registry::Registry::new();
        registry.register_tool("store-content", tool_store);
        registry.register_tool("search-content", tool_search);

        registry.register_prompt(prompts::STORE_PROMPT, prompt_store);
        registry.register_prompt(prompts::SEARCH_PROMPT, prompt_search);

        Self {
            client,
            registry: Arc::new(registry),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: Cow::Borrowed("store-content"),
                title: Some("Store Content".to_string()),
                description: Some(Cow::Borrowed(
                    "Store content to memory, generating embeddings for later retrieval.",
                )),
                input_schema: Arc::new(schemas::store_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Store Content")
                        .destructive(true)
                        .idempotent(true)
                        .open_world(true),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("search-content"),
                title: Some("Search Content".to_string()),
                description: Some(Cow::Borrowed(
                    "Retrieve content from memory using vector similarity search.",
                )),
                input_schema: Arc::new(schemas::search_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Search Content")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(true),
                ),
                icons: None,
            },
        ]
    }

    fn describe_resource_templates(&self) -> Vec<ResourceTemplate> {
        let search_template = RawResourceTemplate {
            uri_template: SEARCH_TEMPLATE_URI.into(),
            name: "search-results".into(),
            title: Some("Search Results".into()),
            description: Some(
                "Search stored content and read the matches as a resource: replace {query} and call readResource"
                    .into(),
            ),
            mime_type: Some(super::format::TEXT_MARKDOWN.into()),
        };

        vec![search_template.no_annotation()]
    }
}

fn tool_store(server: &EmbeddingMcpServer, request: CallToolRequestParam) -> registry::ToolFuture {
    let client = server.client.clone();
    Box::pin(async move { handle_store(&client, request.arguments).await })
}

fn tool_search(server: &EmbeddingMcpServer, request: CallToolRequestParam) -> registry::ToolFuture {
    let client = server.client.clone();
    Box::pin(async move { handle_search(&client, request.arguments).await })
}

fn prompt_store(
    _server: &EmbeddingMcpServer,
    request: GetPromptRequestParam,
) -> registry::PromptFuture {
    Box::pin(async move { prompts::expand_store_prompt(request.arguments) })
}

fn prompt_search(
    _server: &EmbeddingMcpServer,
    request: GetPromptRequestParam,
) -> registry::PromptFuture {
    Box::pin(async move { prompts::expand_search_prompt(request.arguments) })
}

impl ServerHandler for EmbeddingMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = "embedmem".to_string();
        implementation.title = Some("Embedding Memory MCP".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: implementation,
            instructions: Some(
                "Use this server to persist knowledge and retrieve it later. Store text under a unique path with store-content, then pull relevant context back with search-content or the search://{query} resource.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        // Only the templated search resource exists; there are no fixed URIs.
        std::future::ready(Ok(ListResourcesResult::with_all_items(Vec::new())))
    }

    fn list_resource_templates(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourceTemplatesResult, McpError>> + Send + '_
    {
        let templates = self.describe_resource_templates();
        std::future::ready(Ok(ListResourceTemplatesResult::with_all_items(templates)))
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        let client = self.client.clone();
        async move {
            let uri = request.uri;
            let Some(raw_query) = uri.strip_prefix(SEARCH_URI_PREFIX) else {
                return Err(McpError::invalid_params(
                    format!("Unknown resource URI: {uri}"),
                    None,
                ));
            };

            // A literal '/' means multiple path segments; template expansion
            // percent-encodes any '/' inside the query itself.
            if raw_query.contains('/') {
                return Err(McpError::invalid_params(
                    "Search query must be a single path segment",
                    None,
                ));
            }

            // Hosts expand the `{query}` template variable percent-encoded.
            let decoded = urlencoding::decode(raw_query).map_err(|_| {
                McpError::invalid_params(
                    "Search query is not valid percent-encoded UTF-8",
                    None,
                )
            })?;
            let query = decoded.trim();
            if query.is_empty() {
                return Err(McpError::invalid_params(
                    "Search query missing in resource URI",
                    None,
                ));
            }

            let response = client
                .vector_search(&VectorSearchRequest {
                    prompt: query.to_string(),
                    match_count: None,
                })
                .await;

            let contents = if let Some(error) =
                response.error.filter(|error| !error.trim().is_empty())
            {
                vec![plain_resource_contents(&uri, search_error_text(&error))]
            } else if response.context_text.trim().is_empty() {
                vec![plain_resource_contents(&uri, NO_MATCH_TEXT)]
            } else {
                vec![markdown_resource_contents(&uri, response.context_text)]
            };

            Ok(ReadResourceResult { contents })
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.tools.get(request.name.as_ref()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }

    fn list_prompts(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListPromptsResult::with_all_items(
            prompts::describe_prompts(),
        )))
    }

    #[allow(clippy::manual_async_fn)]
    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<GetPromptResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.prompts.get(request.name.as_str()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown prompt: {}", request.name),
                None,
            ))
        }
    }
}
