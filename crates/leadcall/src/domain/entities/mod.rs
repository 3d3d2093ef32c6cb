//! Domain Entities
//!
//! - LeadSubmission: Name and number posted by a visitor
//! - AgentDirectory: Sales agents eligible to receive a lead
//! - OutboundMessage / MessageReceipt: SMS handed to the messaging service
//! - View: Page rendered at the end of a request

mod agent;
mod lead;
mod message;
mod view;

pub use agent::*;
pub use lead::*;
pub use message::*;
pub use view::*;
