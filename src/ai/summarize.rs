//! Chunked email summarization through the chat completion API
//!
//! Long stretches of inbox traffic blow past what a single prompt
//! handles well, so emails are summarized in fixed-size chunks and the
//! per-chunk summaries are labeled and stitched together.

use tokio::sync::mpsc;

use crate::core::AppConfig;
use crate::core::error::{Error, Result};
use crate::graph::mail::Email;
use crate::openai::{Message, Role, completion};

/// Returned without calling the model when there is nothing to
/// summarize.
pub const NO_NEW_EMAILS: &str = "No new emails since that time.";

const SYSTEM_PROMPT: &str = "You are a concise assistant. Summarize and prioritize these emails.";

const TEMPERATURE: f64 = 0.7;

/// One line per message. Newlines in the preview would break the
/// line-per-message layout, so they collapse to spaces.
fn render_email(email: &Email) -> String {
    format!(
        "From {}: {} — {}",
        email.from,
        email.subject,
        email.body_preview.replace('\n', " ")
    )
}

fn render_chunk(chunk: &[Email]) -> String {
    chunk
        .iter()
        .map(render_email)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Summarize one chunk and label it with its position so readers can
/// tell where each part of a long digest came from.
async fn summarize_chunk(
    config: &AppConfig,
    chunk: &[Email],
    position: usize,
    total: usize,
) -> Result<String> {
    tracing::info!("💬 Summarizing chunk {}/{} via OpenAI…", position, total);

    let messages = vec![
        Message::new(Role::System, SYSTEM_PROMPT),
        Message::new(Role::User, &render_chunk(chunk)),
    ];
    let response = completion(
        &messages,
        &config.openai_api_hostname,
        &config.openai_api_key,
        &config.openai_model,
        TEMPERATURE,
    )
    .await
    .map_err(|err| Error::Summarization(err.to_string()))?;

    let summary = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| Error::Summarization(format!("no message content in {response}")))?;

    Ok(format!("--- Chunk {}/{} ---\n{}", position, total, summary))
}

/// Summarize a batch of emails into a single labeled digest. Chunks are
/// summarized in order, newest first, and joined with blank lines.
pub async fn summarize_emails(config: &AppConfig, emails: &[Email]) -> Result<String> {
    if emails.is_empty() {
        return Ok(NO_NEW_EMAILS.to_string());
    }

    let chunks: Vec<&[Email]> = emails.chunks(config.chunk_size.max(1)).collect();
    let total = chunks.len();
    let mut summaries = Vec::with_capacity(total);
    for (i, chunk) in chunks.iter().enumerate() {
        summaries.push(summarize_chunk(config, chunk, i + 1, total).await?);
    }

    Ok(summaries.join("\n\n"))
}

/// Summarize emails chunk by chunk, sending each labeled summary
/// through `tx` as soon as it completes. Fragments arrive in chunk
/// order. Returns the number of chunks summarized.
///
/// With nothing to summarize, a single fragment carrying the
/// no-new-emails sentence is sent and the count is zero.
pub async fn summarize_emails_stream(
    tx: mpsc::UnboundedSender<String>,
    config: &AppConfig,
    emails: &[Email],
) -> Result<usize> {
    if emails.is_empty() {
        let _ = tx.send(NO_NEW_EMAILS.to_string());
        return Ok(0);
    }

    let chunks: Vec<&[Email]> = emails.chunks(config.chunk_size.max(1)).collect();
    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        let summary = summarize_chunk(config, chunk, i + 1, total).await?;
        // A receiver that hung up just means nobody is reading the
        // response anymore. Keep going; the result count still holds.
        let _ = tx.send(summary);
    }

    Ok(total)
}
