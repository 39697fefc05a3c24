//! Bounded tool-dispatch loop over a model provider.

use std::sync::Arc;

use cprovider::{
    Message, ModelProvider, ModelRequest, OutputItem, Role, TokenUsage, ToolCall, ToolDefinition,
};
use ctooling::{DefaultToolRuntime, ToolError, ToolExecutionContext, ToolRegistry, ToolRuntime};

use crate::{ChatError, DispatchPolicy, LoopOutcome, ToolLoopRequest, ToolLoopResult};

pub struct ToolLoopServiceBuilder {
    provider: Arc<dyn ModelProvider>,
    registry: Arc<ToolRegistry>,
    tool_runtime: Option<Arc<dyn ToolRuntime>>,
    model: String,
    policy: DispatchPolicy,
}

impl ToolLoopServiceBuilder {
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            provider,
            registry: Arc::new(ToolRegistry::new()),
            tool_runtime: None,
            model: String::new(),
            policy: DispatchPolicy::default(),
        }
    }

    pub fn registry(mut self, registry: Arc<ToolRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn tool_runtime(mut self, tool_runtime: Arc<dyn ToolRuntime>) -> Self {
        self.tool_runtime = Some(tool_runtime);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn max_rounds(mut self, max_rounds: u32) -> Self {
        self.policy = DispatchPolicy::new(max_rounds);
        self
    }

    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> ToolLoopService {
        let tools = self.registry.definitions();
        let runtime = self
            .tool_runtime
            .unwrap_or_else(|| Arc::new(DefaultToolRuntime::new(Arc::clone(&self.registry))));

        ToolLoopService {
            provider: self.provider,
            runtime,
            tools,
            model: self.model,
            policy: self.policy,
        }
    }
}

pub struct ToolLoopService {
    provider: Arc<dyn ModelProvider>,
    runtime: Arc<dyn ToolRuntime>,
    tools: Vec<ToolDefinition>,
    model: String,
    policy: DispatchPolicy,
}

impl ToolLoopService {
    pub fn builder(provider: Arc<dyn ModelProvider>) -> ToolLoopServiceBuilder {
        ToolLoopServiceBuilder::new(provider)
    }

    pub fn tool_definitions(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Runs one conversation to a terminal outcome. The transcript grows
    /// monotonically: each round appends either the final assistant turn or
    /// an assistant turn carrying the requested calls followed by one tool
    /// turn per call. Provider errors propagate; tool faults do not.
    pub async fn run_loop(&self, request: ToolLoopRequest) -> Result<ToolLoopResult, ChatError> {
        self.policy.validate()?;
        if request.user_input.trim().is_empty() {
            return Err(ChatError::invalid_request("user_input must not be empty"));
        }

        let context = ToolExecutionContext::new(request.session_id.as_str());
        let mut transcript = Vec::new();
        if let Some(system_prompt) = &request.system_prompt {
            transcript.push(Message::new(Role::System, system_prompt.clone()));
        }

        transcript.push(Message::new(Role::User, request.user_input));

        let mut usage = TokenUsage::default();
        let mut rounds_used = 0;
        while rounds_used < self.policy.max_rounds {
            rounds_used += 1;

            let mut builder = ModelRequest::builder(self.model.clone())
                .messages(transcript.clone())
                .tools(self.tools.clone());
            if let Some(temperature) = request.temperature {
                builder = builder.temperature(temperature);
            }

            let response = self.provider.complete(builder.build()?).await?;
            usage.accumulate(response.usage);

            let (text, tool_calls) = collect_output(response.output);
            if tool_calls.is_empty() {
                transcript.push(Message::new(Role::Assistant, text.clone()));
                return Ok(ToolLoopResult {
                    outcome: LoopOutcome::Answered(text),
                    transcript,
                    rounds_used,
                    usage,
                });
            }

            transcript.push(Message::assistant_tool_calls(text, tool_calls.clone()));
            for call in tool_calls {
                tracing::info!(
                    round = rounds_used,
                    tool_name = %call.name,
                    arguments = %call.arguments,
                    "model requested tool call"
                );

                let message = match self.runtime.execute(call.clone(), context.clone()).await {
                    Ok(result) => Message::from(result.into_tool_result()),
                    Err(error) => Message::tool_result(call.id, fault_payload(&error)),
                };

                transcript.push(message);
            }
        }

        tracing::warn!(
            rounds = rounds_used,
            "dispatch loop hit its round cap without a final answer"
        );

        Ok(ToolLoopResult {
            outcome: LoopOutcome::Exhausted,
            transcript,
            rounds_used,
            usage,
        })
    }
}

pub(crate) fn collect_output(items: Vec<OutputItem>) -> (String, Vec<ToolCall>) {
    let mut text = String::new();
    let mut tool_calls = Vec::new();

    for item in items {
        match item {
            OutputItem::Message(message) => {
                if message.role == Role::Assistant {
                    text.push_str(&message.content);
                }
            }
            OutputItem::ToolCall(call) => tool_calls.push(call),
        }
    }

    (text, tool_calls)
}

fn fault_payload(error: &ToolError) -> String {
    serde_json::json!({ "error": error.to_string() }).to_string()
}
