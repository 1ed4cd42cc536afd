//! Prompt templates guiding agents toward the store and search tools.
//!
//! Expansion is pure template substitution with no remote calls; the only
//! failure mode is a missing or empty required argument.

use rmcp::{
    ErrorData as McpError,
    model::{
        GetPromptResult, JsonObject, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
    },
};
use serde_json::Value;

pub(crate) const STORE_PROMPT: &str = "store-content";
pub(crate) const SEARCH_PROMPT: &str = "search-content";

/// Describe the prompts advertised by `prompts/list`.
pub(crate) fn describe_prompts() -> Vec<Prompt> {
    vec![
        Prompt::new(
            STORE_PROMPT,
            Some("A prompt to help store new content with embeddings"),
            Some(vec![
                PromptArgument {
                    name: "path".into(),
                    title: None,
                    description: Some("Unique identifier path for the content".into()),
                    required: Some(true),
                },
                PromptArgument {
                    name: "content".into(),
                    title: None,
                    description: Some("The content to store".into()),
                    required: Some(true),
                },
            ]),
        ),
        Prompt::new(
            SEARCH_PROMPT,
            Some("A prompt to search for knowledge"),
            Some(vec![PromptArgument {
                name: "query".into(),
                title: None,
                description: Some("The search query".into()),
                required: Some(true),
            }]),
        ),
    ]
}

/// Expand the store prompt into its single user message.
pub(crate) fn expand_store_prompt(arguments: Option<JsonObject>) -> Result<GetPromptResult, McpError> {
    let path = required_argument(arguments.as_ref(), "path")?;
    let content = required_argument(arguments.as_ref(), "content")?;
    let text = format!(
        "Please help me store the following content with path \"{path}\":\n\n{content}\n\nYou can use the store-content tool to save this information."
    );
    Ok(GetPromptResult {
        description: Some("Store content to memory".into()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    })
}

/// Expand the search prompt into its single user message.
pub(crate) fn expand_search_prompt(
    arguments: Option<JsonObject>,
) -> Result<GetPromptResult, McpError> {
    let query = required_argument(arguments.as_ref(), "query")?;
    let text = format!(
        "Please search for information about: {query}\n\nYou can use the search-content tool to find relevant information."
    );
    Ok(GetPromptResult {
        description: Some("Retrieve content from memory".into()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    })
}

fn required_argument<'a>(
    arguments: Option<&'a JsonObject>,
    key: &str,
) -> Result<&'a str, McpError> {
    arguments
        .and_then(|map| map.get(key))
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            McpError::invalid_params(format!("`{key}` must be a non-empty string"), None)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn arguments(value: Value) -> Option<JsonObject> {
        Some(value.as_object().expect("object").clone())
    }

    #[test]
    fn describe_prompts_lists_both_templates() {
        let prompts = describe_prompts();
        let names: Vec<&str> = prompts.iter().map(|prompt| prompt.name.as_str()).collect();
        assert_eq!(names, [STORE_PROMPT, SEARCH_PROMPT]);
    }

    #[test]
    fn store_prompt_interpolates_path_and_content() {
        let result = expand_store_prompt(arguments(json!({
            "path": "/notes/a",
            "content": "hello",
        })))
        .expect("prompt expands");
        assert_eq!(result.messages.len(), 1);
        let message = serde_json::to_value(&result.messages[0]).expect("serializes");
        let text = message["content"]["text"].as_str().expect("text content");
        assert!(text.contains("\"/notes/a\""));
        assert!(text.contains("hello"));
        assert!(text.contains("store-content tool"));
    }

    #[test]
    fn search_prompt_requires_query() {
        let error = expand_search_prompt(arguments(json!({ "query": "  " })))
            .expect_err("blank query rejected");
        assert_eq!(error.code, rmcp::model::ErrorCode::INVALID_PARAMS);

        let error = expand_search_prompt(None).expect_err("missing arguments rejected");
        assert_eq!(error.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn search_prompt_points_at_the_search_tool() {
        let result =
            expand_search_prompt(arguments(json!({ "query": "ml" }))).expect("prompt expands");
        let message = serde_json::to_value(&result.messages[0]).expect("serializes");
        let text = message["content"]["text"].as_str().expect("text content");
        assert!(text.contains("Please search for information about: ml"));
        assert!(text.contains("search-content tool"));
    }
}
