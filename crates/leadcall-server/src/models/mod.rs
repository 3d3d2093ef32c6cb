//! Leadcall Data Models
//!
//! - Callback: Landing form payload
//! - Health: Service status

mod callback;
mod health;

pub use callback::*;
pub use health::*;
