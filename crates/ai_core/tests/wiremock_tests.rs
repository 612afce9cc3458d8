//! Integration tests for the ERNIE chat client using WireMock
//!
//! These tests mock the AI Studio HTTP API to verify client behavior
//! without requiring real credentials.

use ai_core::{ChatModel, CompletionRequest, ErnieClient, InferenceConfig};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        access_token: SecretString::from("test-token"),
        model: "test-model".to_string(),
        timeout_ms: 5000,
        temperature: 0.7,
    }
}

/// Sample AI Studio chat success response
fn chat_success_response() -> serde_json::Value {
    serde_json::json!({
        "id": "as-0a1b2c3d4e",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "result": "今天上海晴，气温25度，适合出行。",
        "is_truncated": false,
        "finish_reason": "normal",
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 15,
            "total_tokens": 25
        }
    })
}

/// Sample AI Studio models list response
fn models_list_response() -> serde_json::Value {
    serde_json::json!({
        "data": [
            {"id": "ernie-lite"},
            {"id": "ernie-speed"},
            {"id": "ernie-tiny-8k"}
        ]
    })
}

// =============================================================================
// Chat Completion Tests
// =============================================================================

mod completion_tests {
    use super::*;
    use ai_core::InferenceError;

    #[tokio::test]
    async fn complete_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let request = CompletionRequest::new("今天上海天气怎么样？");
        let response = client.complete(request).await;

        assert!(response.is_ok());
        let response = response.unwrap();
        assert_eq!(response.model, "test-model");
        assert!(response.content.contains("上海"));
        assert!(response.usage.is_some());
        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.completion_tokens, 15);
        assert_eq!(usage.total_tokens, 25);
    }

    #[tokio::test]
    async fn complete_sends_token_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "token test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let response = client.complete(CompletionRequest::new("你好")).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn complete_wraps_prompt_in_user_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "messages": [{"role": "user", "content": "你好"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let response = client.complete(CompletionRequest::new("你好")).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn complete_with_custom_model() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({"model": "ernie-speed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let request = CompletionRequest::new("你好").with_model("ernie-speed");
        let response = client.complete(request).await;

        assert!(response.is_ok());
        assert_eq!(response.unwrap().model, "ernie-speed");
    }

    #[tokio::test]
    async fn complete_with_request_temperature() {
        let mock_server = MockServer::start().await;

        // 0.5 survives the f32 to f64 widening exactly
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({"temperature": 0.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let request = CompletionRequest::new("你好").with_temperature(0.5);
        let response = client.complete(request).await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn complete_auth_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid access token"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let response = client.complete(CompletionRequest::new("你好")).await;

        assert!(response.is_err());
        assert!(matches!(
            response.unwrap_err(),
            InferenceError::AuthFailed(_)
        ));
    }

    #[tokio::test]
    async fn complete_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let response = client.complete(CompletionRequest::new("你好")).await;

        assert!(response.is_err());
        assert!(matches!(response.unwrap_err(), InferenceError::RateLimited));
    }

    #[tokio::test]
    async fn complete_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let response = client.complete(CompletionRequest::new("你好")).await;

        assert!(response.is_err());
        let err = response.unwrap_err();
        assert!(err.to_string().contains("500") || err.to_string().contains("Server"));
    }

    #[tokio::test]
    async fn complete_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let response = client.complete(CompletionRequest::new("你好")).await;
        assert!(response.is_err());
    }
}

// =============================================================================
// Health Check Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn health_check_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(models_list_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let healthy = client.health_check().await;
        assert!(healthy.is_ok());
        assert!(healthy.unwrap());
    }

    #[tokio::test]
    async fn health_check_rejected_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let healthy = client.health_check().await;
        assert!(healthy.is_ok());
        assert!(!healthy.unwrap());
    }

    #[tokio::test]
    async fn health_check_server_down() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for_mock(&mock_server.uri());
        let client = ErnieClient::new(config).expect("Failed to create client");

        let healthy = client.health_check().await;
        assert!(healthy.is_ok());
        assert!(!healthy.unwrap());
    }
}

// =============================================================================
// Error Tests
// =============================================================================

mod error_tests {
    use ai_core::InferenceError;

    #[test]
    fn error_display_connection_failed() {
        let err = InferenceError::ConnectionFailed("timeout".to_string());
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn error_display_auth_failed() {
        let err = InferenceError::AuthFailed("bad token".to_string());
        assert!(err.to_string().contains("Authentication"));
    }

    #[test]
    fn error_display_server_error() {
        let err = InferenceError::ServerError("500 Internal".to_string());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn error_display_invalid_response() {
        let err = InferenceError::InvalidResponse("bad json".to_string());
        assert!(err.to_string().contains("json"));
    }

    #[test]
    fn error_display_timeout() {
        let err = InferenceError::Timeout(5000);
        assert!(err.to_string().contains("5000ms"));
    }

    #[test]
    fn error_display_rate_limited() {
        let err = InferenceError::RateLimited;
        assert!(err.to_string().contains("Rate limit"));
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================

mod proptest_tests {
    use proptest::prelude::*;
    use secrecy::ExposeSecret;

    proptest! {
        #[test]
        fn completion_request_serialization_roundtrip(
            prompt in "[a-zA-Z0-9\u{4e00}-\u{9fa5} ]{1,100}",
            model in "[a-z0-9-]{1,20}"
        ) {
            let request = ai_core::CompletionRequest::new(&prompt).with_model(&model);
            let json = serde_json::to_string(&request).unwrap();
            let parsed: ai_core::CompletionRequest = serde_json::from_str(&json).unwrap();

            prop_assert_eq!(request.prompt, parsed.prompt);
            prop_assert_eq!(request.model, parsed.model);
        }

        #[test]
        fn config_deserializes_any_token(token in "[A-Za-z0-9]{0,64}") {
            let json = format!(r#"{{"access_token":"{token}"}}"#);
            let config: ai_core::InferenceConfig = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(config.access_token.expose_secret(), token);
        }
    }
}
