//! Shared fakes for unit tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use leadcall::{AgentDirectory, DomainError, MessageReceipt, MessagingService, OutboundMessage};

use crate::application::CallbackService;

/// Records every message and answers with a scripted outcome
pub struct FakeMessaging {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl FakeMessaging {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingService for FakeMessaging {
    async fn send(&self, message: &OutboundMessage) -> Result<MessageReceipt, DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            Err(DomainError::ExternalService(
                "MessageBird API error 401: incorrect access_key".to_string(),
            ))
        } else {
            Ok(MessageReceipt::new("msg-1"))
        }
    }
}

pub fn callback_service(messaging: Arc<FakeMessaging>, agents: &str) -> CallbackService {
    CallbackService::new(
        messaging,
        "Leadcall",
        AgentDirectory::parse(agents).unwrap(),
    )
}
