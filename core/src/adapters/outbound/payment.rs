//! # Payment Adapters
//!
//! One adapter per [`PaymentMethod`]. Adding a method means adding a module
//! here and an arm to [`processor_for`]; the order processor stays untouched.

pub mod credit_card;
pub mod paypal;

use std::rc::Rc;

use crate::domain::models::payment::PaymentMethod;
use crate::ports::outbound::message_sink::MessageSink;
use crate::ports::outbound::payment_processor::PaymentProcessor;

use credit_card::CreditCardPayment;
use paypal::PayPalPayment;

/// Picks the payment adapter for `method`.
pub fn processor_for(method: PaymentMethod, sink: Rc<dyn MessageSink>) -> Box<dyn PaymentProcessor> {
    match method {
        PaymentMethod::CreditCard => Box::new(CreditCardPayment::new(sink)),
        PaymentMethod::PayPal => Box::new(PayPalPayment::new(sink)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::sink::memory::MemorySink;

    #[test]
    fn factory_selects_the_matching_adapter() {
        let sink = Rc::new(MemorySink::new());

        processor_for(PaymentMethod::CreditCard, sink.clone()).process_payment(20.0);
        processor_for(PaymentMethod::PayPal, sink.clone()).process_payment(40.0);

        assert_eq!(
            sink.lines(),
            vec![
                "Processing credit card payment of $20.".to_string(),
                "Processing PayPal payment of $40.".to_string(),
            ]
        );
    }
}
