//! OpenAI provider implementation over transport and shared models.

use std::sync::Arc;

use crate::{
    ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture, ProviderId,
};

use super::transport::OpenAiTransport;
use super::types::{OpenAiAuth, OpenAiMessage, OpenAiRequest, OpenAiTool};

pub struct OpenAiProvider {
    auth: OpenAiAuth,
    transport: Arc<dyn OpenAiTransport>,
    fallback_model: String,
}

impl OpenAiProvider {
    pub fn new(auth: OpenAiAuth, transport: Arc<dyn OpenAiTransport>) -> Self {
        Self {
            auth,
            transport,
            fallback_model: "gpt-4o-mini".to_string(),
        }
    }

    pub fn with_fallback_model(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = model.into();
        self
    }

    pub(crate) fn build_openai_request(&self, request: ModelRequest) -> OpenAiRequest {
        let model = if request.model.trim().is_empty() {
            self.fallback_model.clone()
        } else {
            request.model
        };

        let messages = request
            .messages
            .into_iter()
            .map(OpenAiMessage::from)
            .collect::<Vec<_>>();

        let tools = request
            .tools
            .into_iter()
            .map(OpenAiTool::from)
            .collect::<Vec<_>>();

        OpenAiRequest {
            model,
            messages,
            tools,
            response_format: request.response_format,
            temperature: request.options.temperature,
            max_tokens: request.options.max_tokens,
        }
    }
}

impl ModelProvider for OpenAiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            let openai_request = self.build_openai_request(request);
            let response = self.transport.complete(openai_request, &self.auth).await?;
            Ok(response.into_model_response())
        })
    }
}
