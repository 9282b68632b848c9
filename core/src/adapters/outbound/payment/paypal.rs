use std::rc::Rc;

use tracing::debug;

use crate::ports::outbound::message_sink::MessageSink;
use crate::ports::outbound::payment_processor::PaymentProcessor;

pub struct PayPalPayment {
    sink: Rc<dyn MessageSink>,
}

impl PayPalPayment {
    pub fn new(sink: Rc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl PaymentProcessor for PayPalPayment {
    fn process_payment(&self, amount: f64) {
        debug!(amount, method = "paypal", "charging");
        self.sink.emit(&format!("Processing PayPal payment of ${amount}."));
    }
}
