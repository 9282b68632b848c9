use std::rc::Rc;

use tracing::debug;

use crate::ports::outbound::message_sink::MessageSink;
use crate::ports::outbound::payment_processor::PaymentProcessor;

pub struct CreditCardPayment {
    sink: Rc<dyn MessageSink>,
}

impl CreditCardPayment {
    pub fn new(sink: Rc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl PaymentProcessor for CreditCardPayment {
    fn process_payment(&self, amount: f64) {
        debug!(amount, method = "credit_card", "charging");
        self.sink
            .emit(&format!("Processing credit card payment of ${amount}."));
    }
}
