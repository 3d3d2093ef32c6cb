//! MessageBird Messaging Implementation
//!
//! Sends SMS through the MessageBird REST API using reqwest.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use leadcall::{DomainError, MessageReceipt, MessagingService, OutboundMessage, RecipientCounts};

pub const DEFAULT_BASE_URL: &str = "https://rest.messagebird.com";

const USER_AGENT: &str = "Leadcall/1.0";

/// HTTP implementation of MessagingService
pub struct MessageBirdClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl MessageBirdClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                DomainError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct CreateMessageRequest<'a> {
    originator: &'a str,
    recipients: &'a [String],
    body: &'a str,
}

impl<'a> From<&'a OutboundMessage> for CreateMessageRequest<'a> {
    fn from(message: &'a OutboundMessage) -> Self {
        Self {
            originator: &message.originator,
            recipients: &message.recipients,
            body: &message.body,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageResponse {
    id: String,
    href: Option<String>,
    #[serde(default)]
    recipients: RecipientsResponse,
    created_datetime: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RecipientsResponse {
    total_count: u32,
    total_sent_count: u32,
    total_delivered_count: u32,
    total_delivery_failed_count: u32,
}

impl From<MessageResponse> for MessageReceipt {
    fn from(response: MessageResponse) -> Self {
        let counts = response.recipients;
        Self {
            id: response.id,
            href: response.href,
            recipients: RecipientCounts {
                total: counts.total_count,
                sent: counts.total_sent_count,
                delivered: counts.total_delivered_count,
                failed: counts.total_delivery_failed_count,
            },
            created_at: response.created_datetime,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: i64,
    description: String,
    parameter: Option<String>,
}

/// Turn a non-2xx response into a readable error
fn describe_failure(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => {
            let details: Vec<String> = parsed
                .errors
                .iter()
                .map(|e| match &e.parameter {
                    Some(param) => {
                        format!("{} (code {}, parameter {})", e.description, e.code, param)
                    }
                    None => format!("{} (code {})", e.description, e.code),
                })
                .collect();
            format!("MessageBird API error {status}: {}", details.join("; "))
        }
        _ if body.is_empty() => format!("MessageBird API error {status}: No response body"),
        _ => format!("MessageBird API error {status}: {body}"),
    }
}

#[async_trait]
impl MessagingService for MessageBirdClient {
    async fn send(&self, message: &OutboundMessage) -> Result<MessageReceipt, DomainError> {
        let response = self
            .client
            .post(self.messages_url())
            .header("Authorization", format!("AccessKey {}", self.api_key))
            .json(&CreateMessageRequest::from(message))
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("MessageBird request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(describe_failure(
                status.as_u16(),
                &body,
            )));
        }

        let parsed: MessageResponse = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Invalid MessageBird response: {e}"))
        })?;

        Ok(parsed.into())
    }
}
