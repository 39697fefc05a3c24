//! Unified facade over the cambist workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core workspace crates and provides convenience wiring
//! for the two demo flows: the currency tool-calling loop and the
//! schema-constrained order extraction.

mod macros;

pub mod prelude;
pub mod runtime;
pub mod schemas;
pub mod util;

pub use cchat;
pub use ccommon;
pub use ccurrency;
pub use cprovider;
pub use ctooling;

pub use cchat::{
    ChatError, ChatErrorKind, DispatchPolicy, ExtractionRequest, ExtractionResult,
    ExtractionService, LoopOutcome, ToolLoopRequest, ToolLoopResult, ToolLoopService,
    ToolLoopServiceBuilder,
};
pub use ccommon::{BoxFuture, GenerationOptions, MetadataMap, Registry, SessionId};
pub use ccurrency::{
    ConversionOutcome, ConvertTool, ListSupportedTool, ResolveCurrencyTool, ResolvedCurrency,
    SUPPORTED_CODES, convert, currency_registry, known_pairs, resolve, supported_codes,
};
pub use cprovider::{
    JsonSchemaFormat, Message, ModelProvider, ModelRequest, ModelRequestBuilder, ModelResponse,
    OpenAiConfig, OutputItem, ProviderError, ProviderErrorKind, ProviderFuture, ProviderId,
    ResponseFormat, Role, SecretString, StopReason, TokenUsage, ToolCall, ToolDefinition,
    ToolResult,
};
pub use ctooling::{
    DefaultToolRuntime, FunctionTool, Tool, ToolError, ToolErrorKind, ToolExecutionContext,
    ToolExecutionResult, ToolFuture, ToolRegistry, ToolRuntime,
};

pub use runtime::{
    RuntimeBundle, currency_loop, currency_loop_from_env, extraction_service,
    openai_bundle_from_env,
};
pub use schemas::order_extraction_format;
pub use util::{assistant_message, system_message, user_message};
