//! # Inbound Ports (Driving Actors)
//!
//! Contracts for interactions *initiated by external actors* towards the application.
//!
//! The CLI only ever sees [`OrderProcessing`]; which payment, persistence and
//! notification adapters sit behind it is decided when the processor is built.

use crate::domain::models::order::Order;

/// Runs an order through the whole workflow.
pub trait OrderProcessing {
    fn process(&self, order: &Order);
}
