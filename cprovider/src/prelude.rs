//! Convenience re-exports for provider consumers.

pub use crate::adapters::openai::{OpenAiAuth, OpenAiHttpTransport, OpenAiProvider};
pub use crate::{
    JsonSchemaFormat, Message, ModelProvider, ModelRequest, ModelResponse, OpenAiConfig,
    OutputItem, ProviderError, ProviderErrorKind, ProviderFuture, ProviderId, ResponseFormat,
    Role, SecretString, StopReason, TokenUsage, ToolCall, ToolDefinition, ToolResult,
};
