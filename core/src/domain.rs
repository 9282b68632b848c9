//! # Domain Layer (Core)
//!
//! The heart of the application. Contains the order model and pricing rules.
//!
//! ## Characteristics
//! * **Pure Rust**: No IO, no printing, no system calls.
//! * **Independence**: Does not know about Ports, Adapters, or the Application layer.
//!
//! ## Contents
//! * **[`models`]**: Orders and the menu/payment choices a customer can make.
//! * **[`discount`]**: Pricing strategies applied to an item price.
//! * **[`error`]**: Errors raised while turning raw user input into domain values.

pub mod discount;
pub mod error;
pub mod models;
