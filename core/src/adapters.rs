//! # Adapters Layer (Infrastructure)
//!
//! This layer contains the concrete implementations of the [`crate::ports`].
//!
//! ## Architecture
//! The driving side (the terminal) lives in the `orderly-cli` crate, so only
//! the driven side is implemented here:
//!
//! * **[`outbound`]** (Driven): Console payments, the console order repository,
//!   the console email notifier and message sinks.
//!
//! ## Rules
//! * Adapters **MUST** depend on `ports` and `domain`.
//! * Adapters **MUST NOT** depend on `application` logic.

pub mod outbound;
