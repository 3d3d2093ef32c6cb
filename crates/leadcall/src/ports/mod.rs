//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! reaches external systems. Implementations live in the server crate.

mod messaging;

pub use messaging::*;
