//! Leadcall Domain Library
//!
//! Core domain types and interfaces for the Leadcall lead-capture service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Lead submissions, the agent directory, outbound messages, views
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `messaging`: Outbound SMS delivery
//!
//! # Usage
//!
//! ```rust,ignore
//! use leadcall::{AgentDirectory, LeadSubmission, MessagingService};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AgentDirectory, DomainError, LandingContext, LeadSubmission, MessageReceipt, OutboundMessage,
    RecipientCounts, View, DISPATCH_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE,
};
pub use ports::MessagingService;
