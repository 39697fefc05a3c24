use std::sync::{Arc, Mutex};

use cprovider::adapters::openai::{
    OpenAiAssistantMessage, OpenAiAuth, OpenAiFinishReason, OpenAiProvider, OpenAiRequest,
    OpenAiResponse, OpenAiToolCall, OpenAiTransport, OpenAiUsage,
};
use cprovider::{
    Message, ModelProvider, ModelRequest, ProviderError, ProviderFuture, ProviderId, Role,
    StopReason, ToolDefinition,
};

#[derive(Debug, Default)]
struct FakeTransport {
    captured_auth: Mutex<Option<String>>,
    captured_request: Mutex<Option<OpenAiRequest>>,
}

impl OpenAiTransport for FakeTransport {
    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        auth: &'a OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, ProviderError>> {
        Box::pin(async move {
            *self.captured_request.lock().expect("request lock") = Some(request);
            *self.captured_auth.lock().expect("auth lock") = Some(auth.bearer_token().to_string());

            Ok(OpenAiResponse {
                model: "gpt-4o-mini".to_string(),
                message: OpenAiAssistantMessage {
                    content: "hello world".to_string(),
                    tool_calls: vec![OpenAiToolCall {
                        id: "call_1".to_string(),
                        name: "lookup".to_string(),
                        arguments: "{\"id\":1}".to_string(),
                    }],
                },
                finish_reason: OpenAiFinishReason::ToolCalls,
                usage: OpenAiUsage {
                    prompt_tokens: 7,
                    completion_tokens: 3,
                    total_tokens: 10,
                },
            })
        })
    }
}

#[tokio::test]
async fn complete_maps_openai_response_to_provider_response() {
    let transport = Arc::new(FakeTransport::default());
    let provider = OpenAiProvider::new(OpenAiAuth::from_key("sk-live-123"), transport.clone());
    let request = ModelRequest::new("gpt-4o", vec![Message::new(Role::User, "hi")]).with_tools(
        vec![ToolDefinition {
            name: "lookup".to_string(),
            description: "Look up ID".to_string(),
            input_schema: "{\"type\":\"object\"}".to_string(),
        }],
    );

    let response = provider
        .complete(request)
        .await
        .expect("completion should succeed");
    assert_eq!(response.provider, ProviderId::OpenAi);
    assert_eq!(response.stop_reason, StopReason::ToolUse);
    assert_eq!(response.usage.total_tokens, 10);
    assert_eq!(response.output.len(), 2);

    let auth = transport
        .captured_auth
        .lock()
        .expect("auth lock")
        .clone()
        .expect("auth should be captured");
    assert_eq!(auth, "sk-live-123");

    let captured_request = transport
        .captured_request
        .lock()
        .expect("request lock")
        .clone()
        .expect("request should be captured");
    assert_eq!(captured_request.model, "gpt-4o");
    assert_eq!(captured_request.messages.len(), 1);
    assert_eq!(captured_request.tools.len(), 1);
}

#[tokio::test]
async fn complete_rejects_invalid_requests_before_transport() {
    let transport = Arc::new(FakeTransport::default());
    let provider = OpenAiProvider::new(OpenAiAuth::from_key("sk-live-123"), transport.clone());
    let request = ModelRequest::new("gpt-4o", Vec::new());

    let error = provider
        .complete(request)
        .await
        .expect_err("empty messages should fail");
    assert_eq!(error.kind, cprovider::ProviderErrorKind::InvalidRequest);
    assert!(
        transport
            .captured_request
            .lock()
            .expect("request lock")
            .is_none()
    );
}
