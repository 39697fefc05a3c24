//! Boundary types and the OpenAI-compatible adapter for completion requests.

mod credentials;
mod error;
mod model;
mod provider;

pub mod adapters;
pub mod prelude;

pub use credentials::{ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, OpenAiConfig, SecretString};
pub use error::{ProviderError, ProviderErrorKind};
pub use model::{
    JsonSchemaFormat, Message, ModelRequest, ModelRequestBuilder, ModelResponse, OutputItem,
    ProviderId, ResponseFormat, Role, StopReason, TokenUsage, ToolCall, ToolDefinition, ToolResult,
};
pub use provider::{ModelProvider, ProviderFuture};
