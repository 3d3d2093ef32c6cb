//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod messagebird;

// Re-exports
pub use messagebird::MessageBirdClient;
