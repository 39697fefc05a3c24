//! One-shot schema-constrained extraction over a model provider.

use std::sync::Arc;

use cprovider::{
    JsonSchemaFormat, Message, ModelProvider, ModelRequest, ResponseFormat, Role, TokenUsage,
};

use crate::ChatError;
use crate::service::collect_output;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub model: String,
    pub system_prompt: Option<String>,
    pub input: String,
    pub format: JsonSchemaFormat,
    pub temperature: Option<f32>,
}

impl ExtractionRequest {
    pub fn new(
        model: impl Into<String>,
        input: impl Into<String>,
        format: JsonSchemaFormat,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: None,
            input: input.into(),
            format,
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub raw_json: String,
    pub usage: TokenUsage,
}

pub struct ExtractionService {
    provider: Arc<dyn ModelProvider>,
}

impl ExtractionService {
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self { provider }
    }

    /// Sends one completion with the schema constraint attached and returns
    /// the provider's output as an opaque JSON document. No local validation
    /// is performed against the schema.
    pub async fn extract(&self, request: ExtractionRequest) -> Result<ExtractionResult, ChatError> {
        if request.input.trim().is_empty() {
            return Err(ChatError::invalid_request("input must not be empty"));
        }

        let mut messages = Vec::new();
        if let Some(system_prompt) = &request.system_prompt {
            messages.push(Message::new(Role::System, system_prompt.clone()));
        }

        messages.push(Message::new(Role::User, request.input));

        let mut builder = ModelRequest::builder(request.model)
            .messages(messages)
            .response_format(ResponseFormat::JsonSchema(request.format));
        if let Some(temperature) = request.temperature {
            builder = builder.temperature(temperature);
        }

        let response = self.provider.complete(builder.build()?).await?;
        let usage = response.usage;
        let (raw_json, _) = collect_output(response.output);
        if raw_json.trim().is_empty() {
            return Err(ChatError::provider(
                "provider returned no content for a schema-constrained request",
            ));
        }

        Ok(ExtractionResult { raw_json, usage })
    }
}
