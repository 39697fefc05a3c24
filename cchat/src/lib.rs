//! Conversational orchestration over model providers: the bounded
//! tool-dispatch loop and one-shot structured extraction.

mod error;
mod extract;
mod service;
mod types;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, DispatchPolicy, ExtractionRequest, ExtractionResult,
        ExtractionService, LoopOutcome, ToolLoopRequest, ToolLoopResult, ToolLoopService,
        ToolLoopServiceBuilder,
    };
    pub use ctooling::{
        DefaultToolRuntime, Tool, ToolError, ToolErrorKind, ToolExecutionContext,
        ToolExecutionResult, ToolRegistry, ToolRuntime,
    };
}

pub use error::{ChatError, ChatErrorKind};
pub use extract::{ExtractionRequest, ExtractionResult, ExtractionService};
pub use service::{ToolLoopService, ToolLoopServiceBuilder};
pub use types::{DispatchPolicy, LoopOutcome, ToolLoopRequest, ToolLoopResult};
