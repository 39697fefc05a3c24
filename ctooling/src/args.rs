//! JSON argument parsing helpers for function and trait-based tools.
//!
//! ```rust
//! use ctooling::{parse_json_object, required_string};
//!
//! let args = parse_json_object(r#"{"name_or_code":"baht"}"#).expect("object should parse");
//! let input = required_string(&args, "name_or_code").expect("argument should be present");
//! assert_eq!(input, "baht");
//! ```

use serde_json::{Map, Value};

use crate::ToolError;

pub fn parse_json_value(args_json: &str) -> Result<Value, ToolError> {
    serde_json::from_str(args_json)
        .map_err(|err| ToolError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

pub fn parse_json_object(args_json: &str) -> Result<Map<String, Value>, ToolError> {
    let value = parse_json_value(args_json)?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| ToolError::invalid_arguments("expected JSON object arguments"))
}

/// Decodes an argument string the way a conversational caller supplies it:
/// absent, blank, or unparseable arguments degrade to an empty object.
pub fn lenient_object(args_json: &str) -> Map<String, Value> {
    if args_json.trim().is_empty() {
        return Map::new();
    }

    match serde_json::from_str::<Value>(args_json) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

pub fn required_string(args: &Map<String, Value>, key: &str) -> Result<String, ToolError> {
    args.get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| ToolError::invalid_arguments(format!("missing required string: '{key}'")))
}

pub fn required_value(args: &Map<String, Value>, key: &str) -> Result<Value, ToolError> {
    args.get(key)
        .cloned()
        .ok_or_else(|| ToolError::invalid_arguments(format!("missing required argument: '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_and_extract_required_string() {
        let args = parse_json_object("{\"query\":\"rust\"}").expect("args should parse");
        let query = required_string(&args, "query").expect("query should exist");
        assert_eq!(query, "rust");
    }

    #[test]
    fn parse_invalid_json_returns_invalid_arguments() {
        let error = parse_json_value("{").expect_err("json should fail");
        assert_eq!(error.kind, crate::ToolErrorKind::InvalidArguments);
    }

    #[test]
    fn lenient_object_degrades_to_empty_map() {
        assert!(lenient_object("").is_empty());
        assert!(lenient_object("   ").is_empty());
        assert!(lenient_object("{not json").is_empty());
        assert!(lenient_object("[1,2]").is_empty());

        let args = lenient_object("{\"amount\":100}");
        assert_eq!(args.get("amount"), Some(&serde_json::json!(100)));
    }

    #[test]
    fn required_value_returns_raw_json_value() {
        let args = parse_json_object("{\"amount\":\"12.5\"}").expect("args should parse");
        let amount = required_value(&args, "amount").expect("amount should exist");
        assert_eq!(amount, serde_json::json!("12.5"));

        let missing = required_value(&args, "base").expect_err("base should be missing");
        assert_eq!(missing.kind, crate::ToolErrorKind::InvalidArguments);
    }
}
