//! OpenAI-compatible chat-completions adapter.

mod provider;
mod serde_api;
mod transport;
mod types;

pub use provider::OpenAiProvider;
pub use transport::{OpenAiHttpTransport, OpenAiTransport};
pub use types::{
    OpenAiAssistantMessage, OpenAiAuth, OpenAiFinishReason, OpenAiMessage, OpenAiRequest,
    OpenAiResponse, OpenAiRole, OpenAiTool, OpenAiToolCall, OpenAiUsage,
};
