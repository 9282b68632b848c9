use std::rc::Rc;

use tracing::debug;

use crate::domain::models::order::Order;
use crate::ports::outbound::message_sink::MessageSink;
use crate::ports::outbound::order_repository::OrderRepository;

/// Stands in for a database: "saving" an order only reports it.
pub struct ConsoleOrderRepo {
    sink: Rc<dyn MessageSink>,
}

impl ConsoleOrderRepo {
    pub fn new(sink: Rc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl OrderRepository for ConsoleOrderRepo {
    fn save(&self, order: &Order) {
        debug!(order_id = order.id, total_amount = order.total_amount, "saving order");
        self.sink.emit(&format!("Order {} saved to database.", order.id));
    }
}
