//! Tool bindings exposing the currency operations to a model.

use cprovider::ToolDefinition;
use ctooling::{
    Tool, ToolError, ToolExecutionContext, ToolFuture, ToolRegistry, lenient_object,
    required_string, required_value,
};

use crate::convert::convert;
use crate::resolve::{resolve, supported_codes};

fn serialize<T: serde::Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string(value)
        .map_err(|err| ToolError::execution(format!("failed to serialize tool output: {err}")))
}

#[derive(Debug, Default)]
pub struct ListSupportedTool;

impl Tool for ListSupportedTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "list_supported".to_string(),
            description: "Return supported currency ISO codes".to_string(),
            input_schema: r#"{"type":"object","properties":{}}"#.to_string(),
        }
    }

    fn invoke<'a>(
        &'a self,
        _args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move { serialize(&supported_codes()) })
    }
}

#[derive(Debug, Default)]
pub struct ResolveCurrencyTool;

impl Tool for ResolveCurrencyTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "resolve_currency".to_string(),
            description: "Map currency name or code to ISO code (e.g., 'baht'->'THB')"
                .to_string(),
            input_schema: r#"{"type":"object","properties":{"name_or_code":{"type":"string"}},"required":["name_or_code"]}"#
                .to_string(),
        }
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let args = lenient_object(args_json);
            let input = required_string(&args, "name_or_code")?;
            serialize(&resolve(&input).as_label())
        })
    }
}

#[derive(Debug, Default)]
pub struct ConvertTool;

impl Tool for ConvertTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "convert".to_string(),
            description: "Convert amount from base to quote using the fixed rate table"
                .to_string(),
            input_schema: r#"{"type":"object","properties":{"amount":{"type":"number"},"base":{"type":"string"},"quote":{"type":"string"}},"required":["amount","base","quote"]}"#
                .to_string(),
        }
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let args = lenient_object(args_json);
            let amount = required_value(&args, "amount")?;
            let base = required_string(&args, "base")?;
            let quote = required_string(&args, "quote")?;
            serialize(&convert(&amount, &base, &quote))
        })
    }
}

/// The fixed tool set for the currency agent; built once at startup and
/// immutable for the process lifetime.
pub fn currency_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(ListSupportedTool);
    registry.register(ResolveCurrencyTool);
    registry.register(ConvertTool);
    registry
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cprovider::ToolCall;
    use ctooling::{DefaultToolRuntime, ToolRuntime};
    use serde_json::json;

    use super::*;

    fn context() -> ToolExecutionContext {
        ToolExecutionContext::new("test-session")
    }

    #[test]
    fn registry_holds_exactly_the_three_currency_tools() {
        let registry = currency_registry();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("list_supported"));
        assert!(registry.contains("resolve_currency"));
        assert!(registry.contains("convert"));

        for definition in registry.definitions() {
            serde_json::from_str::<serde_json::Value>(&definition.input_schema)
                .expect("declared schema should be valid JSON");
        }
    }

    #[tokio::test]
    async fn list_supported_returns_code_list() {
        let output = ListSupportedTool
            .invoke("{}", &context())
            .await
            .expect("tool should succeed");
        assert_eq!(output, r#"["USD","THB","EUR","JPY"]"#);
    }

    #[tokio::test]
    async fn resolve_currency_maps_alias_to_iso_code() {
        let output = ResolveCurrencyTool
            .invoke(r#"{"name_or_code":" Baht "}"#, &context())
            .await
            .expect("tool should succeed");
        assert_eq!(output, "\"THB\"");

        let unknown = ResolveCurrencyTool
            .invoke(r#"{"name_or_code":"doubloon"}"#, &context())
            .await
            .expect("tool should succeed");
        assert_eq!(unknown, "\"UNKNOWN\"");
    }

    #[tokio::test]
    async fn convert_tool_accepts_string_amounts() {
        let output = ConvertTool
            .invoke(r#"{"amount":"100","base":"USD","quote":"THB"}"#, &context())
            .await
            .expect("tool should succeed");

        let value: serde_json::Value = serde_json::from_str(&output).expect("output is JSON");
        assert_eq!(value["kind"], json!("converted"));
        assert_eq!(value["converted"], json!(3500.0));
    }

    #[tokio::test]
    async fn convert_tool_returns_outcome_values_for_bad_amounts() {
        let output = ConvertTool
            .invoke(r#"{"amount":"abc","base":"USD","quote":"THB"}"#, &context())
            .await
            .expect("tool should succeed even for bad amounts");

        let value: serde_json::Value = serde_json::from_str(&output).expect("output is JSON");
        assert_eq!(value["kind"], json!("invalid_amount"));
        assert_eq!(value["given"], json!("abc"));
    }

    #[tokio::test]
    async fn convert_tool_rejects_missing_arguments() {
        let error = ConvertTool
            .invoke("{}", &context())
            .await
            .expect_err("missing arguments should fail");
        assert_eq!(error.kind, ctooling::ToolErrorKind::InvalidArguments);
    }

    #[tokio::test]
    async fn malformed_argument_strings_degrade_to_missing_arguments() {
        let error = ConvertTool
            .invoke("{not json", &context())
            .await
            .expect_err("unparseable arguments leave required keys missing");
        assert_eq!(error.kind, ctooling::ToolErrorKind::InvalidArguments);
    }

    #[tokio::test]
    async fn runtime_dispatches_currency_tools_by_name() {
        let runtime = DefaultToolRuntime::new(Arc::new(currency_registry()));
        let result = runtime
            .execute(
                ToolCall {
                    id: "call_1".to_string(),
                    name: "convert".to_string(),
                    arguments: r#"{"amount":250,"base":"THB","quote":"EUR"}"#.to_string(),
                },
                context(),
            )
            .await
            .expect("dispatch should succeed");

        let value: serde_json::Value =
            serde_json::from_str(&result.output).expect("output is JSON");
        assert_eq!(value["converted"], json!(6.25));
    }
}
