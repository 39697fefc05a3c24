//! OpenAI HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{JsonSchemaFormat, ProviderError, ResponseFormat};

use super::types::{
    OpenAiAssistantMessage, OpenAiFinishReason, OpenAiMessage, OpenAiRequest, OpenAiResponse,
    OpenAiRole, OpenAiTool, OpenAiToolCall, OpenAiUsage,
};

pub(crate) fn build_api_request(request: OpenAiRequest) -> Result<OpenAiApiRequest, ProviderError> {
    let messages = request
        .messages
        .into_iter()
        .map(OpenAiApiMessage::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    if messages.is_empty() {
        return Err(ProviderError::invalid_request(
            "OpenAI request requires at least one message",
        ));
    }

    let tools = if request.tools.is_empty() {
        None
    } else {
        Some(
            request
                .tools
                .into_iter()
                .map(OpenAiApiTool::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    let response_format = request
        .response_format
        .map(OpenAiApiResponseFormat::try_from)
        .transpose()?;

    Ok(OpenAiApiRequest {
        model: request.model,
        messages,
        tools,
        response_format,
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    })
}

pub(crate) fn parse_finish_reason(value: Option<&str>) -> OpenAiFinishReason {
    match value {
        Some("stop") => OpenAiFinishReason::Stop,
        Some("length") => OpenAiFinishReason::Length,
        Some("tool_calls") => OpenAiFinishReason::ToolCalls,
        Some("cancelled") => OpenAiFinishReason::Cancelled,
        _ => OpenAiFinishReason::Other,
    }
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<OpenAiApiErrorEnvelope>(body).ok()?;
    Some(parsed.error.message)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiErrorEnvelope {
    pub error: OpenAiApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiRequest {
    pub model: String,
    pub messages: Vec<OpenAiApiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<OpenAiApiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<OpenAiApiResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<OpenAiApiToolCallOut>>,
}

impl TryFrom<OpenAiMessage> for OpenAiApiMessage {
    type Error = ProviderError;

    fn try_from(value: OpenAiMessage) -> Result<Self, Self::Error> {
        if value.content.trim().is_empty()
            && value.role != OpenAiRole::Assistant
        {
            return Err(ProviderError::invalid_request(
                "OpenAI message content must not be empty",
            ));
        }

        let tool_calls = if value.tool_calls.is_empty() {
            None
        } else {
            Some(
                value
                    .tool_calls
                    .into_iter()
                    .map(OpenAiApiToolCallOut::from)
                    .collect(),
            )
        };

        // Assistant turns that only request tool calls carry null content.
        let content = if value.content.is_empty() && tool_calls.is_some() {
            None
        } else {
            Some(value.content)
        };

        Ok(Self {
            role: value.role.as_str().to_string(),
            content,
            tool_call_id: value.tool_call_id,
            tool_calls,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiToolCallOut {
    pub id: String,
    pub r#type: String,
    pub function: OpenAiApiFunctionCall,
}

impl From<OpenAiToolCall> for OpenAiApiToolCallOut {
    fn from(value: OpenAiToolCall) -> Self {
        Self {
            id: value.id,
            r#type: "function".to_string(),
            function: OpenAiApiFunctionCall {
                name: value.name,
                arguments: value.arguments,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiFunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiTool {
    pub r#type: String,
    pub function: OpenAiApiFunction,
}

impl TryFrom<OpenAiTool> for OpenAiApiTool {
    type Error = ProviderError;

    fn try_from(value: OpenAiTool) -> Result<Self, Self::Error> {
        let parameters = serde_json::from_str::<Value>(&value.input_schema)
            .map_err(|_| ProviderError::invalid_request("OpenAI tool schema must be valid JSON"))?;

        Ok(Self {
            r#type: "function".to_string(),
            function: OpenAiApiFunction {
                name: value.name,
                description: value.description,
                parameters,
            },
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiFunction {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiResponseFormat {
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<OpenAiApiJsonSchema>,
}

impl TryFrom<ResponseFormat> for OpenAiApiResponseFormat {
    type Error = ProviderError;

    fn try_from(value: ResponseFormat) -> Result<Self, Self::Error> {
        match value {
            ResponseFormat::Text => Ok(Self {
                r#type: "text".to_string(),
                json_schema: None,
            }),
            ResponseFormat::JsonSchema(format) => Ok(Self {
                r#type: "json_schema".to_string(),
                json_schema: Some(OpenAiApiJsonSchema::try_from(format)?),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiJsonSchema {
    pub name: String,
    pub strict: bool,
    pub schema: Value,
}

impl TryFrom<JsonSchemaFormat> for OpenAiApiJsonSchema {
    type Error = ProviderError;

    fn try_from(value: JsonSchemaFormat) -> Result<Self, Self::Error> {
        let schema = serde_json::from_str::<Value>(&value.schema).map_err(|_| {
            ProviderError::invalid_request("OpenAI response format schema must be valid JSON")
        })?;

        Ok(Self {
            name: value.name,
            strict: value.strict,
            schema,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiResponse {
    pub model: String,
    pub choices: Vec<OpenAiApiChoice>,
    pub usage: Option<OpenAiApiUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiChoice {
    pub message: OpenAiApiAssistantMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiAssistantMessage {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<OpenAiApiToolCall>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiToolCall {
    pub id: String,
    pub function: OpenAiApiToolFunction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiToolFunction {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TryFrom<OpenAiApiResponse> for OpenAiResponse {
    type Error = ProviderError;

    fn try_from(value: OpenAiApiResponse) -> Result<Self, Self::Error> {
        let choice = value
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::transport("OpenAI response did not include choices"))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| OpenAiToolCall {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect::<Vec<_>>();

        let usage = value.usage.unwrap_or(OpenAiApiUsage {
            prompt_tokens: 0,
            completion_tokens: 0,
            total_tokens: 0,
        });

        Ok(Self {
            model: value.model,
            message: OpenAiAssistantMessage {
                content: choice.message.content.unwrap_or_default(),
                tool_calls,
            },
            finish_reason: parse_finish_reason(choice.finish_reason.as_deref()),
            usage: OpenAiUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }
}
