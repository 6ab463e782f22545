use std::time::Duration;

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Message {
    role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

pub async fn completion(
    messages: &Vec<Message>,
    api_hostname: &str,
    api_key: &str,
    model: &str,
    temperature: f64,
) -> Result<Value, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "temperature": temperature,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if !status.is_success() {
        // The provider wraps failures as {"error": {"message": ...}}.
        // Surface that message rather than the whole body.
        let detail = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body["error"]["message"].as_str().map(str::to_string))
            .unwrap_or(text);
        anyhow::bail!("Completion request failed with {}: {}", status, detail);
    }

    let response = serde_json::from_str(&text)?;
    Ok(response)
}
