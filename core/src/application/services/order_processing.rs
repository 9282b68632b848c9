use tracing::{info, info_span};

use crate::domain::models::order::Order;
use crate::ports::inbound::OrderProcessing;
use crate::ports::outbound::notifier::EmailNotifier;
use crate::ports::outbound::order_repository::OrderRepository;
use crate::ports::outbound::payment_processor::PaymentProcessor;

pub const SUCCESS_MESSAGE: &str = "Your order has been processed successfully.";

pub struct OrderProcessor {
    repository: Box<dyn OrderRepository>,
    payment_processor: Box<dyn PaymentProcessor>,
    notifier: Box<dyn EmailNotifier>,
}

impl OrderProcessor {
    pub fn new(
        repository: Box<dyn OrderRepository>,
        payment_processor: Box<dyn PaymentProcessor>,
        notifier: Box<dyn EmailNotifier>,
    ) -> Self {
        Self {
            repository,
            payment_processor,
            notifier,
        }
    }
}

impl OrderProcessing for OrderProcessor {
    fn process(&self, order: &Order) {
        let span = info_span!("process_order", order_id = order.id);
        let _guard = span.enter();
        info!("processing order");

        // None of these steps can fail, so there is nothing to roll back.
        self.payment_processor.process_payment(order.total_amount);
        self.repository.save(order);
        self.notifier.send_email(SUCCESS_MESSAGE);

        info!("order processing complete");
    }
}
