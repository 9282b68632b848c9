//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions *initiated by the application* towards the outside world.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. Using `domain` models in method signatures is allowed and encouraged.
//! 4. These traits are implemented in `adapters/outbound`.
//!
//! None of these operations report failure. A database- or SMTP-backed
//! adapter would need to widen the signatures to return a `Result`.

pub mod message_sink;
pub mod notifier;
pub mod order_repository;
pub mod payment_processor;
