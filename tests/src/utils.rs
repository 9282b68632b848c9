use std::rc::Rc;

use orderly_core::adapters::outbound::sink::memory::MemorySink;
use orderly_core::application::services::checkout::{self, DEFAULT_ORDER_ID, OrderRequest, Receipt};
use orderly_core::domain::discount::NoDiscount;
use orderly_core::domain::error::ChoiceError;

/// Runs a full checkout the way the program does with no flags, recording
/// everything the console adapters print.
pub fn checkout_with(item: &str, payment: &str) -> (Result<Receipt, ChoiceError>, Rc<MemorySink>) {
    let sink = Rc::new(MemorySink::new());
    let request = OrderRequest {
        order_id: DEFAULT_ORDER_ID,
        item_choice: item,
        payment_choice: payment,
        discount: &NoDiscount,
    };
    let result = checkout::place_order(&request, sink.clone());
    (result, sink)
}
