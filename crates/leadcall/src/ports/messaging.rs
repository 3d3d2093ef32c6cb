//! Messaging Service Port
//!
//! Abstract interface for sending SMS through an external provider.

use async_trait::async_trait;

use crate::domain::entities::{MessageReceipt, OutboundMessage};
use crate::domain::errors::DomainError;

/// Outbound SMS interface
///
/// One call is one send attempt. Implementations must not retry; the
/// caller receives exactly one outcome per message.
///
/// # Example
///
/// ```rust,ignore
/// use leadcall::MessagingService;
///
/// struct MessageBirdClient { /* reqwest client */ }
///
/// #[async_trait]
/// impl MessagingService for MessageBirdClient {
///     async fn send(&self, message: &OutboundMessage)
///         -> Result<MessageReceipt, DomainError>
///     {
///         // POST /messages
///     }
/// }
/// ```
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Send a message to all of its recipients
    ///
    /// # Returns
    /// The provider's receipt, or `DomainError::ExternalService` when the
    /// provider is unreachable or rejects the message
    async fn send(&self, message: &OutboundMessage) -> Result<MessageReceipt, DomainError>;
}
