//! # Checkout
//!
//! The whole run of the program as one use case: map the customer's raw
//! choices onto the menu, build the order, wire a fresh [`OrderProcessor`]
//! and process the order.
//!
//! The progress lines around processing ("Processing order...",
//! "Order processing complete.") go to the sink so they show on a default
//! run; the processor itself only logs through `tracing`.
//!
//! This is also the composition root for the console adapters, so inbound
//! adapters (the CLI, the integration tests) only supply the input and a
//! [`MessageSink`].

use std::rc::Rc;

use tracing::debug;

use crate::adapters::outbound::console_repo::ConsoleOrderRepo;
use crate::adapters::outbound::email::ConsoleEmailNotifier;
use crate::adapters::outbound::payment;
use crate::application::services::order_processing::OrderProcessor;
use crate::domain::discount::Discount;
use crate::domain::error::ChoiceError;
use crate::domain::models::menu::MenuItem;
use crate::domain::models::order::Order;
use crate::domain::models::payment::PaymentMethod;
use crate::ports::inbound::OrderProcessing;
use crate::ports::outbound::message_sink::MessageSink;

pub const DEFAULT_ORDER_ID: u32 = 1;

/// Raw input for a single checkout.
pub struct OrderRequest<'a> {
    pub order_id: u32,
    pub item_choice: &'a str,
    pub payment_choice: &'a str,
    pub discount: &'a dyn Discount,
}

/// What was ordered and how it was paid.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub order: Order,
    pub item: MenuItem,
    pub payment_method: PaymentMethod,
}

/// Validates `request`, then processes the resulting order.
///
/// Input is validated before anything is emitted: a rejected item choice
/// leaves `sink` untouched.
pub fn place_order(request: &OrderRequest<'_>, sink: Rc<dyn MessageSink>) -> Result<Receipt, ChoiceError> {
    let item = MenuItem::from_choice(request.item_choice)?;
    let payment_method = PaymentMethod::from_choice(request.payment_choice);
    debug!(%item, %payment_method, "choices accepted");

    let order = Order::for_item(request.order_id, item, request.discount);
    sink.emit("Order created.");

    let processor = OrderProcessor::new(
        Box::new(ConsoleOrderRepo::new(sink.clone())),
        payment::processor_for(payment_method, sink.clone()),
        Box::new(ConsoleEmailNotifier::new(sink.clone())),
    );
    sink.emit("Order processor initialized.");

    sink.emit("Processing order...");
    processor.process(&order);
    sink.emit("Order processing complete.");
    sink.emit("Order processed.");

    Ok(Receipt {
        order,
        item,
        payment_method,
    })
}
