//! App-only authentication against the Microsoft identity platform

use serde_json::Value;

use crate::core::AppConfig;
use crate::core::error::{Error, Result};

/// Scope that covers every application permission granted to the client.
const GRAPH_DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Acquire a bearer token for the mail API via the client credentials
/// grant. Every call performs a fresh exchange; nothing is cached.
pub async fn acquire_token(config: &AppConfig) -> Result<String> {
    let client_id = config
        .client_id
        .as_deref()
        .ok_or(Error::AuthConfig("INBOX_CLIENT_ID"))?;
    let client_secret = config
        .client_secret
        .as_deref()
        .ok_or(Error::AuthConfig("INBOX_CLIENT_SECRET"))?;
    let tenant_id = config
        .tenant_id
        .as_deref()
        .ok_or(Error::AuthConfig("INBOX_TENANT_ID"))?;

    let url = format!(
        "{}/{}/oauth2/v2.0/token",
        config.identity_base_url.trim_end_matches('/'),
        tenant_id
    );

    let body: Value = reqwest::Client::new()
        .post(&url)
        .form(&[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("scope", GRAPH_DEFAULT_SCOPE),
            ("grant_type", "client_credentials"),
        ])
        .send()
        .await?
        .json()
        .await?;

    match body.get("access_token").and_then(Value::as_str) {
        Some(token) => Ok(token.to_string()),
        None => {
            // The identity platform explains rejections in
            // error_description. Fall back to the raw body so a
            // malformed response is still diagnosable.
            let detail = body
                .get("error_description")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string());
            Err(Error::AuthFailure(detail))
        }
    }
}
