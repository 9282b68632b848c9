//! # Orderly Core
//!
//! `orderly` is a small order-processing demo designed with **Hexagonal Architecture**.
//!
//! ## Architecture Overview
//! The crate is organized into layers so each one can change without touching the others:
//!
//! * **[`domain`]**: Orders, menu choices and discount strategies. Pure Rust, no IO.
//!     * *Center of the Hexagon*.
//! * **[`application`]**: The order processor and the checkout use case. Orchestrates the Domain and Ports.
//!     * *Application Layer*.
//! * **[`ports`]**: Traits for payment, persistence, notification and output.
//!     * *Boundaries of the Hexagon*.
//! * **[`adapters`]**: Concrete implementations of Ports (console payments, console repository, sinks).
//!     * *Outside the Hexagon*.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
