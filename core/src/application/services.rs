//! # Application Services
//!
//! * **Orchestration**: Services coordinate the Domain layer and the Ports.
//! * **Agnostic**: They do not know *how* a payment is taken or an order is stored, only *that* it happens via Ports.
//!
//! ## Available Services
//! * [`order_processing::OrderProcessor`]: Charges, saves and notifies for one order.
//! * [`checkout::place_order`]: Turns raw menu choices into a processed order.

pub mod checkout;
pub mod order_processing;
