//! # Application Layer (Service Layer)
//!
//! This layer orchestrates the order workflow.
//!
//! ## Purpose
//! It does not contain pricing rules (that belongs in `domain`), but rather:
//! 1. Receives the customer's choices from an Inbound Adapter.
//! 2. Validates inputs.
//! 3. Calls the Domain and the Outbound Ports in a fixed order.
//!
//! ## Contents
//! * **[`services`]**: The order processor and the checkout use case.

pub mod services;
