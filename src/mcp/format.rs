//! Reply texts and resource-content builders shared across MCP handlers.

use rmcp::model::ResourceContents;

pub(crate) const TEXT_MARKDOWN: &str = "text/markdown";

/// Non-error reply for a successful search that matched nothing.
pub(crate) const NO_MATCH_TEXT: &str = "No matching content found for your query.";

/// Reply text for a successful store.
pub(crate) fn store_success_text(path: &str, sections: u64) -> String {
    format!("Successfully stored content at path: {path}\nSections processed: {sections}")
}

/// Error-flagged reply text for a rejected or failed store.
pub(crate) fn store_error_text(error: &str) -> String {
    format!("Error storing content: {error}")
}

/// Error-flagged reply text for a rejected or failed search.
pub(crate) fn search_error_text(error: &str) -> String {
    format!("Error searching content: {error}")
}

/// Build markdown resource contents for successful search resource reads.
pub(crate) fn markdown_resource_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(TEXT_MARKDOWN.into()),
        text,
        meta: None,
    }
}

/// Build untyped text resource contents for error and no-match replies.
pub(crate) fn plain_resource_contents(uri: &str, text: impl Into<String>) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: None,
        text: text.into(),
        meta: None,
    }
}
