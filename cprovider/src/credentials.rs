//! Secret handling and environment-driven provider configuration.

use crate::ProviderError;

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Environment variable naming follows the OpenAI SDK convention for the key
/// and endpoint; the model override is workspace-specific.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "CAMBIST_MODEL";

pub struct OpenAiConfig {
    pub api_key: SecretString,
    pub base_url: Option<String>,
    pub model: String,
}

impl OpenAiConfig {
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            base_url: None,
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| ProviderError::authentication(format!("{ENV_API_KEY} is not set")))?;

        if api_key.trim().is_empty() {
            return Err(ProviderError::authentication(format!(
                "{ENV_API_KEY} must not be empty"
            )));
        }

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL)
            && !base_url.trim().is_empty()
        {
            config = config.with_base_url(base_url);
        }

        if let Ok(model) = std::env::var(ENV_MODEL)
            && !model.trim().is_empty()
        {
            config = config.with_model(model);
        }

        Ok(config)
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_string_debug_is_redacted() {
        let secret = SecretString::new("sk-live-123");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "sk-live-123");
    }

    #[test]
    fn config_builder_sets_model_and_base_url() {
        let config = OpenAiConfig::new("sk-test")
            .with_base_url("http://localhost:8080/v1")
            .with_model("gpt-4o");

        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.model, "gpt-4o");
        assert!(format!("{config:?}").contains("[REDACTED]"));
    }
}
