//! Provider-agnostic request, response, and message model types.
//!
//! ```rust
//! use cprovider::{Message, ModelRequest, ProviderErrorKind, Role};
//!
//! let ok = ModelRequest::new_validated(
//!     "gpt-4o-mini",
//!     vec![Message::new(Role::User, "Convert 100 USD to THB")],
//! );
//! assert!(ok.is_ok());
//!
//! let err = ModelRequest::new_validated("", vec![Message::new(Role::User, "hi")])
//!     .err()
//!     .expect("empty model should fail");
//! assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
//! ```

use std::fmt::{Display, Formatter};

use ccommon::{GenerationOptions, MetadataMap};

use crate::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenAi,
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Self::OpenAi => "openai",
        };

        f.write_str(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One conversation turn. Assistant turns may carry requested tool calls;
/// tool turns carry the call id their output answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    pub fn assistant_tool_calls(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_calls,
            tool_call_id: None,
        }
    }

    pub fn tool_result(tool_call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: output.into(),
            tool_calls: Vec::new(),
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

impl From<ToolResult> for Message {
    fn from(value: ToolResult) -> Self {
        Message::tool_result(value.tool_call_id, value.output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputItem {
    Message(Message),
    ToolCall(ToolCall),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    ToolUse,
    Cancelled,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn accumulate(&mut self, other: TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.total_tokens += other.total_tokens;
    }
}

/// Output-shape constraint forwarded to the provider unchanged. The schema
/// document is carried as a string and parsed only at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    JsonSchema(JsonSchemaFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub strict: bool,
    pub schema: String,
}

impl JsonSchemaFormat {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strict: true,
            schema: schema.into(),
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub provider: ProviderId,
    pub model: String,
    pub output: Vec<OutputItem>,
    pub stop_reason: StopReason,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub options: GenerationOptions,
    pub tools: Vec<ToolDefinition>,
    pub response_format: Option<ResponseFormat>,
    pub metadata: MetadataMap,
}

impl ModelRequest {
    pub fn builder(model: impl Into<String>) -> ModelRequestBuilder {
        ModelRequestBuilder::new(model)
    }

    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            options: GenerationOptions::default(),
            tools: Vec::new(),
            response_format: None,
            metadata: MetadataMap::new(),
        }
    }

    pub fn new_validated(
        model: impl Into<String>,
        messages: Vec<Message>,
    ) -> Result<Self, ProviderError> {
        let request = Self::new(model, messages);
        request.validate()?;
        Ok(request)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.options.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        if self.messages.is_empty() {
            return Err(ProviderError::invalid_request(
                "at least one message is required",
            ));
        }

        if let Some(max_tokens) = self.options.max_tokens
            && max_tokens == 0
        {
            return Err(ProviderError::invalid_request(
                "max_tokens must be greater than zero",
            ));
        }

        if let Some(temperature) = self.options.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(ProviderError::invalid_request(
                "temperature must be in the inclusive range 0.0..=2.0",
            ));
        }

        if let Some(ResponseFormat::JsonSchema(format)) = &self.response_format
            && format.name.trim().is_empty()
        {
            return Err(ProviderError::invalid_request(
                "response format schema name must not be empty",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequestBuilder {
    model: String,
    messages: Vec<Message>,
    options: GenerationOptions,
    tools: Vec<ToolDefinition>,
    response_format: Option<ResponseFormat>,
    metadata: MetadataMap,
}

impl ModelRequestBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            options: GenerationOptions::default(),
            tools: Vec::new(),
            response_format: None,
            metadata: MetadataMap::new(),
        }
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn messages(mut self, messages: Vec<Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.options.max_tokens = Some(max_tokens);
        self
    }

    pub fn tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<ModelRequest, ProviderError> {
        let request = ModelRequest {
            model: self.model,
            messages: self.messages,
            options: self.options,
            tools: self.tools,
            response_format: self.response_format,
            metadata: self.metadata,
        };

        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_display_is_stable() {
        assert_eq!(ProviderId::OpenAi.to_string(), "openai");
    }

    #[test]
    fn message_constructors_set_turn_shape() {
        let user = Message::new(Role::User, "hi");
        assert!(user.tool_calls.is_empty());
        assert!(user.tool_call_id.is_none());

        let call = ToolCall {
            id: "call_1".to_string(),
            name: "convert".to_string(),
            arguments: "{}".to_string(),
        };
        let assistant = Message::assistant_tool_calls("", vec![call.clone()]);
        assert_eq!(assistant.role, Role::Assistant);
        assert_eq!(assistant.tool_calls, vec![call]);

        let tool = Message::tool_result("call_1", "{\"ok\":true}");
        assert_eq!(tool.role, Role::Tool);
        assert_eq!(tool.tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(tool.content, "{\"ok\":true}");
    }

    #[test]
    fn validate_enforces_request_contract() {
        let empty_model = ModelRequest::new("   ", vec![Message::new(Role::User, "hi")]);
        let err = empty_model.validate().expect_err("empty model must fail");
        assert_eq!(err.kind, crate::ProviderErrorKind::InvalidRequest);

        let empty_messages = ModelRequest::new("gpt", Vec::new());
        assert!(empty_messages.validate().is_err());

        let bad_temperature =
            ModelRequest::new("gpt", vec![Message::new(Role::User, "hi")]).with_temperature(2.5);
        assert!(bad_temperature.validate().is_err());

        let bad_max_tokens =
            ModelRequest::new("gpt", vec![Message::new(Role::User, "hi")]).with_max_tokens(0);
        assert!(bad_max_tokens.validate().is_err());

        let unnamed_schema = ModelRequest::new("gpt", vec![Message::new(Role::User, "hi")])
            .with_response_format(ResponseFormat::JsonSchema(JsonSchemaFormat::new(
                "  ",
                "{\"type\":\"object\"}",
            )));
        assert!(unnamed_schema.validate().is_err());

        let valid = ModelRequest::new("gpt", vec![Message::new(Role::User, "hi")])
            .with_temperature(0.4)
            .with_max_tokens(128)
            .with_metadata("session", "s1");
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn builder_assembles_and_validates() {
        let request = ModelRequest::builder("gpt-4o-mini")
            .message(Message::new(Role::User, "hi"))
            .temperature(0.2)
            .tools(vec![ToolDefinition {
                name: "convert".to_string(),
                description: "Convert currency".to_string(),
                input_schema: "{\"type\":\"object\"}".to_string(),
            }])
            .response_format(ResponseFormat::JsonSchema(JsonSchemaFormat::new(
                "OrderExtraction",
                "{\"type\":\"object\"}",
            )))
            .build()
            .expect("request should build");

        assert_eq!(request.tools.len(), 1);
        assert!(matches!(
            request.response_format,
            Some(ResponseFormat::JsonSchema(_))
        ));
    }

    #[test]
    fn token_usage_accumulates_across_rounds() {
        let mut usage = TokenUsage::default();
        usage.accumulate(TokenUsage {
            input_tokens: 5,
            output_tokens: 2,
            total_tokens: 7,
        });
        usage.accumulate(TokenUsage {
            input_tokens: 6,
            output_tokens: 2,
            total_tokens: 8,
        });

        assert_eq!(usage.input_tokens, 11);
        assert_eq!(usage.output_tokens, 4);
        assert_eq!(usage.total_tokens, 15);
    }

    #[test]
    fn json_schema_format_defaults_to_strict() {
        let format = JsonSchemaFormat::new("OrderExtraction", "{}");
        assert!(format.strict);
        assert!(!format.with_strict(false).strict);
    }
}
