//! Callback Application Service (Use Case)
//!
//! Validates a lead, routes it to a random agent and reports the outcome
//! as the view the visitor should see.

use std::sync::Arc;

use leadcall::{AgentDirectory, LeadSubmission, MessagingService, OutboundMessage, View};

/// Application service for callback requests
pub struct CallbackService {
    messaging: Arc<dyn MessagingService>,
    originator: String,
    agents: AgentDirectory,
}

impl CallbackService {
    pub fn new(
        messaging: Arc<dyn MessagingService>,
        originator: impl Into<String>,
        agents: AgentDirectory,
    ) -> Self {
        Self {
            messaging,
            originator: originator.into(),
            agents,
        }
    }

    /// Handle one callback request
    ///
    /// Never fails: validation and dispatch errors become a landing view
    /// that echoes the submitted values.
    pub async fn request_callback(&self, lead: LeadSubmission) -> View {
        if lead.validate().is_err() {
            return View::validation_error(&lead);
        }

        let agent = self.agents.pick();
        let message = OutboundMessage::lead_notification(&self.originator, agent, &lead);

        match self.messaging.send(&message).await {
            Ok(receipt) => {
                tracing::info!(
                    message_id = %receipt.id,
                    recipient = %agent,
                    "Lead forwarded to sales agent: {:?}",
                    receipt
                );
                View::Sent
            }
            Err(e) => {
                tracing::error!(recipient = %agent, "Failed to forward lead: {}", e);
                View::dispatch_error(&lead)
            }
        }
    }
}
