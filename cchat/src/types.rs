//! Dispatch loop request, policy, and outcome types.

use cprovider::{Message, TokenUsage};

use crate::ChatError;

/// Hard cap on provider round-trips. Reaching it is an explicit terminal
/// outcome, not a retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPolicy {
    pub max_rounds: u32,
}

impl DispatchPolicy {
    pub const DEFAULT_MAX_ROUNDS: u32 = 6;

    pub fn new(max_rounds: u32) -> Self {
        Self { max_rounds }
    }

    pub fn validate(&self) -> Result<(), ChatError> {
        if self.max_rounds == 0 {
            return Err(ChatError::invalid_request(
                "max_rounds must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ROUNDS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolLoopRequest {
    pub session_id: String,
    pub user_input: String,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
}

impl ToolLoopRequest {
    pub fn new(session_id: impl Into<String>, user_input: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            user_input: user_input.into(),
            system_prompt: None,
            temperature: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Terminal state of a dispatch loop run. `Answered` carries the assistant's
/// final text; `Exhausted` means the round cap was hit while the provider
/// was still requesting tool calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutcome {
    Answered(String),
    Exhausted,
}

impl LoopOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Answered(text) => Some(text),
            Self::Exhausted => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolLoopResult {
    pub outcome: LoopOutcome,
    pub transcript: Vec<Message>,
    pub rounds_used: u32,
    pub usage: TokenUsage,
}
