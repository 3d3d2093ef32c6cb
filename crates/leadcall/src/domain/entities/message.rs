//! Outbound Message Entity
//!
//! The SMS handed to the messaging service, and its acknowledgement.

use chrono::{DateTime, Utc};

use super::LeadSubmission;

/// An SMS to be sent through the messaging service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Sender identifier shown on the SMS
    pub originator: String,
    /// Recipient numbers
    pub recipients: Vec<String>,
    /// Message text
    pub body: String,
}

impl OutboundMessage {
    pub fn new(
        originator: impl Into<String>,
        recipients: Vec<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            originator: originator.into(),
            recipients,
            body: body.into(),
        }
    }

    /// Notify a single agent about a lead
    pub fn lead_notification(
        originator: impl Into<String>,
        agent: impl Into<String>,
        lead: &LeadSubmission,
    ) -> Self {
        Self::new(originator, vec![agent.into()], lead.notification_body())
    }
}

/// Recipient totals reported by the messaging service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientCounts {
    pub total: u32,
    pub sent: u32,
    pub delivered: u32,
    pub failed: u32,
}

/// Acknowledgement for an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceipt {
    /// Service-side message ID
    pub id: String,
    /// API URL of the message resource
    pub href: Option<String>,
    pub recipients: RecipientCounts,
    pub created_at: Option<DateTime<Utc>>,
}

impl MessageReceipt {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            href: None,
            recipients: RecipientCounts::default(),
            created_at: None,
        }
    }
}
