//! Driven adapters. Every console adapter writes through a shared
//! [`MessageSink`](crate::ports::outbound::message_sink::MessageSink) instead
//! of printing directly.

pub mod console_repo;
pub mod email;
pub mod payment;
pub mod sink;
