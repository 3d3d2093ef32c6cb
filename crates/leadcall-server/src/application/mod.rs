//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and the messaging port.

mod callback_service;

pub use callback_service::CallbackService;
