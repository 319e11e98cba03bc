//! Domain types and ports.
//!
//! Holds the payment value objects, the `PaymentMethod` port implemented by the
//! infrastructure layer, and the pair-sum search.

pub mod pair_sum;
pub mod payment;
pub mod ports;
