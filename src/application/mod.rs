//! Application layer wiring payment methods to callers.
//!
//! `PaymentMethodRegistry` selects a method by tag and `PaymentProcessor`
//! holds the chosen method and forwards payments to it.

pub mod factory;
pub mod processor;
