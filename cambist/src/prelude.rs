//! Single-import surface for applications built on the workspace.

pub use crate::runtime::{
    RuntimeBundle, currency_loop, currency_loop_from_env, extraction_service,
    openai_bundle_from_env,
};
pub use crate::schemas::order_extraction_format;
pub use crate::util::{assistant_message, system_message, user_message};
pub use cchat::{
    ChatError, ChatErrorKind, DispatchPolicy, ExtractionRequest, ExtractionResult,
    ExtractionService, LoopOutcome, ToolLoopRequest, ToolLoopResult, ToolLoopService,
    ToolLoopServiceBuilder,
};
pub use ccurrency::{
    ConversionOutcome, ConvertTool, ListSupportedTool, ResolveCurrencyTool, ResolvedCurrency,
    convert, currency_registry, known_pairs, resolve, supported_codes,
};
pub use cprovider::adapters::openai::{OpenAiAuth, OpenAiHttpTransport, OpenAiProvider};
pub use cprovider::{
    JsonSchemaFormat, Message, ModelProvider, ModelRequest, ModelResponse, OpenAiConfig,
    OutputItem, ProviderError, ProviderErrorKind, ProviderId, ResponseFormat, Role, StopReason,
    TokenUsage, ToolCall, ToolDefinition, ToolResult,
};
pub use ctooling::{
    DefaultToolRuntime, FunctionTool, Tool, ToolError, ToolErrorKind, ToolExecutionContext,
    ToolExecutionResult, ToolRegistry, ToolRuntime,
};
