//! Microsoft Graph client for listing recent inbox messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::AppConfig;
use crate::core::error::{Error, Result};
use crate::core::time::parse_utc_timestamp;
use crate::graph::auth::acquire_token;

/// Fields requested from the mail API for each message.
const MESSAGE_SELECT_FIELDS: &str = "subject,receivedDateTime,from,bodyPreview";

/// One inbox message, reduced to the fields the summarizer needs.
#[derive(Debug, Clone, Serialize)]
pub struct Email {
    pub from: String,
    pub subject: String,
    pub body_preview: String,
    pub received: DateTime<Utc>,
}

// Wire shapes for the message listing endpoint. The API returns more
// fields than these; unknown fields are ignored.

#[derive(Debug, Deserialize)]
struct MessagesPage {
    value: Vec<GraphMessage>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphMessage {
    subject: Option<String>,
    #[serde(rename = "receivedDateTime")]
    received_date_time: Option<String>,
    from: Option<Recipient>,
    #[serde(rename = "bodyPreview")]
    body_preview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Recipient {
    #[serde(rename = "emailAddress")]
    email_address: Option<EmailAddress>,
}

#[derive(Debug, Deserialize)]
struct EmailAddress {
    name: Option<String>,
}

impl GraphMessage {
    fn into_email(self, received: DateTime<Utc>) -> Email {
        let from = self
            .from
            .and_then(|r| r.email_address)
            .and_then(|a| a.name)
            .unwrap_or_else(|| String::from("Unknown"));
        Email {
            from,
            subject: self.subject.unwrap_or_else(|| String::from("(No subject)")),
            body_preview: self.body_preview.unwrap_or_default(),
            received,
        }
    }
}

/// Walk one page of messages, keeping everything received at or after
/// the cutoff, up to `room` more messages. Returns the kept messages
/// and whether the whole fetch is finished.
///
/// Pages arrive sorted newest first, so the first message older than
/// the cutoff ends the fetch: everything after it is older still. A
/// missing or unparseable receive time ends the fetch the same way. If
/// the provider ever broke the ordering, qualifying messages past that
/// point would be dropped rather than returned out of order.
fn descending_prefix(
    items: Vec<GraphMessage>,
    cutoff: DateTime<Utc>,
    room: usize,
) -> (Vec<Email>, bool) {
    let mut kept = Vec::new();
    for item in items {
        if kept.len() == room {
            return (kept, true);
        }
        let received = item
            .received_date_time
            .as_deref()
            .and_then(|raw| parse_utc_timestamp(raw).ok());
        match received {
            Some(instant) if instant >= cutoff => kept.push(item.into_email(instant)),
            _ => return (kept, true),
        }
    }
    (kept, false)
}

/// Fetch inbox messages received at or after `from_time`, newest first.
///
/// Listing is paged; continuation pages are only requested while the
/// cutoff has not been crossed and fewer than `max_messages` messages
/// have accumulated, so old mail is never pulled over the wire just to
/// be discarded.
pub async fn fetch_emails_since(config: &AppConfig, from_time: &str) -> Result<Vec<Email>> {
    let cutoff = parse_utc_timestamp(from_time)?;
    let token = acquire_token(config).await?;

    tracing::info!("📬 Fetching inbox messages received since {}", cutoff);

    let client = reqwest::Client::new();
    let first_page_url = format!(
        "{}/users/{}/mailFolders/Inbox/messages",
        config.graph_base_url.trim_end_matches('/'),
        config.user_id
    );
    let top = config.page_size.to_string();

    let mut emails: Vec<Email> = Vec::new();
    let mut next_link: Option<String> = None;

    loop {
        let request = match &next_link {
            // Continuation links are opaque absolute URLs that carry
            // their own query parameters.
            Some(link) => client.get(link),
            None => client.get(&first_page_url).query(&[
                ("$orderby", "receivedDateTime desc"),
                ("$top", top.as_str()),
                ("$select", MESSAGE_SELECT_FIELDS),
            ]),
        };

        let res = request.bearer_auth(&token).send().await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }
        let page: MessagesPage = serde_json::from_str(&text)?;

        let room = config.max_messages - emails.len();
        let (mut kept, finished) = descending_prefix(page.value, cutoff, room);
        emails.append(&mut kept);

        if finished || emails.len() >= config.max_messages {
            break;
        }
        match page.next_link {
            Some(link) => next_link = Some(link),
            None => break,
        }
    }

    tracing::info!("✅ Fetched {} emails after filter", emails.len());
    Ok(emails)
}
