//! Test utilities for integration tests
use std::sync::Arc;

use axum::Router;

use inbox_assistant::api::AppState;
use inbox_assistant::api::app;
use inbox_assistant::core::AppConfig;

/// Build a config with every outbound base URL pointed at the given
/// mock server and credentials that satisfy the token exchange.
pub fn test_config(mock_url: &str) -> AppConfig {
    AppConfig {
        client_id: Some(String::from("test-client-id")),
        client_secret: Some(String::from("test-client-secret")),
        tenant_id: Some(String::from("test-tenant")),
        user_id: String::from("inbox@example.com"),
        identity_base_url: mock_url.to_string(),
        graph_base_url: mock_url.to_string(),
        openai_api_hostname: mock_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4o-mini"),
        chunk_size: 25,
        max_messages: 200,
        page_size: 50,
        service_url: String::from("http://localhost:8000"),
    }
}

/// Creates a test application router backed by the given config.
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(app_state))
}
