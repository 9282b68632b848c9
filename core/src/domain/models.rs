//! # Domain Models
//!
//! ## Core Entities
//! * [`order::Order`]: An order with its line items and total amount.
//!
//! ## Value Objects
//! * [`menu::MenuItem`]: Something that can be ordered, with a fixed price.
//! * [`payment::PaymentMethod`]: How the customer wants to pay.

pub mod menu;
pub mod order;
pub mod payment;
