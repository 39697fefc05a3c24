//! Runtime wiring helpers for the demo flows.

use std::sync::Arc;

use cchat::{ExtractionService, ToolLoopService};
use ccurrency::currency_registry;
use cprovider::adapters::openai::{OpenAiAuth, OpenAiHttpTransport, OpenAiProvider};
use cprovider::{ModelProvider, OpenAiConfig, ProviderError};

#[derive(Clone)]
pub struct RuntimeBundle {
    pub provider: Arc<dyn ModelProvider>,
    pub model: String,
}

/// Builds the OpenAI-compatible provider from `OPENAI_API_KEY`, an optional
/// `OPENAI_BASE_URL` override, and the `CAMBIST_MODEL` model selection.
pub fn openai_bundle_from_env() -> Result<RuntimeBundle, ProviderError> {
    let OpenAiConfig {
        api_key,
        base_url,
        model,
    } = OpenAiConfig::from_env()?;

    let mut transport = OpenAiHttpTransport::new(reqwest::Client::new());
    if let Some(base_url) = base_url {
        transport = transport.with_base_url(base_url);
    }

    let provider = OpenAiProvider::new(OpenAiAuth::new(api_key), Arc::new(transport))
        .with_fallback_model(model.clone());

    Ok(RuntimeBundle {
        provider: Arc::new(provider),
        model,
    })
}

/// A dispatch loop preloaded with the three currency tools.
pub fn currency_loop(provider: Arc<dyn ModelProvider>, model: impl Into<String>) -> ToolLoopService {
    ToolLoopService::builder(provider)
        .registry(Arc::new(currency_registry()))
        .model(model)
        .build()
}

pub fn currency_loop_from_env() -> Result<ToolLoopService, ProviderError> {
    let bundle = openai_bundle_from_env()?;
    Ok(currency_loop(bundle.provider, bundle.model))
}

pub fn extraction_service(provider: Arc<dyn ModelProvider>) -> ExtractionService {
    ExtractionService::new(provider)
}
