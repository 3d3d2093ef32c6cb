//! Leadcall Routes
//!
//! - / - Landing form
//! - /callme - Callback request (form post)
//! - /health - Health check

pub mod callback;
pub mod health;
pub mod swagger;
