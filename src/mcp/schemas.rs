//! JSON schema builders for MCP tools.

use serde_json::{Map, Value};

/// Build the schema describing the `store-content` tool input.
pub(crate) fn store_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("content".into(), string_schema("The content to store"));
    properties.insert(
        "path".into(),
        string_schema("Unique identifier path for the content; reusing a path overwrites it"),
    );

    let mut type_schema = Map::new();
    type_schema.insert("type".into(), Value::String("string".into()));
    type_schema.insert(
        "description".into(),
        Value::String("Content type label; defaults to 'markdown'.".into()),
    );
    type_schema.insert("default".into(), Value::String("markdown".into()));
    properties.insert("type".into(), Value::Object(type_schema));

    let mut source_schema = Map::new();
    source_schema.insert("type".into(), Value::String("string".into()));
    source_schema.insert(
        "description".into(),
        Value::String("Source of the content; defaults to 'api'.".into()),
    );
    source_schema.insert("default".into(), Value::String("api".into()));
    properties.insert("source".into(), Value::Object(source_schema));

    properties.insert(
        "parentPath".into(),
        string_schema("Path of the parent content (if applicable)"),
    );

    let mut meta_schema = Map::new();
    meta_schema.insert("type".into(), Value::String("object".into()));
    meta_schema.insert(
        "description".into(),
        Value::String("Optional open key/value metadata stored with the content.".into()),
    );
    meta_schema.insert("additionalProperties".into(), Value::Bool(true));
    properties.insert("meta".into(), Value::Object(meta_schema));

    finalize_object_schema(properties, &["content", "path"])
}

/// Build the schema describing the `search-content` tool input.
pub(crate) fn search_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("query".into(), string_schema("The search query"));

    let mut max_matches_schema = Map::new();
    max_matches_schema.insert("type".into(), Value::String("integer".into()));
    max_matches_schema.insert(
        "description".into(),
        Value::String("Maximum number of matches to return (service default when omitted)".into()),
    );
    max_matches_schema.insert("minimum".into(), Value::Number(1.into()));
    properties.insert("maxMatches".into(), Value::Object(max_matches_schema));

    finalize_object_schema(properties, &["query"])
}

fn string_schema(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert("description".into(), Value::String(description.into()));
    Value::Object(schema)
}

fn finalize_object_schema(properties: Map<String, Value>, required: &[&str]) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".into(),
            Value::Array(
                required
                    .iter()
                    .map(|&key| Value::String(key.into()))
                    .collect(),
            ),
        );
    }
    schema.insert("additionalProperties".into(), Value::Bool(false));
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_schema_requires_content_and_path() {
        let schema = store_input_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required array")
            .iter()
            .map(|value| value.as_str().expect("string"))
            .collect();
        assert_eq!(required, ["content", "path"]);
        assert_eq!(schema["properties"]["type"]["default"], "markdown");
        assert_eq!(schema["properties"]["source"]["default"], "api");
    }

    #[test]
    fn search_schema_caps_max_matches_at_positive_integers() {
        let schema = search_input_schema();
        assert_eq!(schema["properties"]["maxMatches"]["minimum"], 1);
        let required = schema["required"].as_array().expect("required array");
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "query");
    }
}
