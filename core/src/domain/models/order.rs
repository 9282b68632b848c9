//! # Order Model
//!
//! An [`Order`] is built once from the customer's choices and never changes
//! afterwards. Everything downstream (payment, persistence, notification)
//! only reads it.

use crate::domain::discount::Discount;
use crate::domain::models::menu::MenuItem;

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id: u32,
    pub items: Vec<String>,
    pub total_amount: f64,
}

impl Order {
    pub fn new(id: u32, items: Vec<String>, total_amount: f64) -> Self {
        Self {
            id,
            items,
            total_amount,
        }
    }

    /// Builds a single-item order, pricing the item through `discount`.
    pub fn for_item(id: u32, item: MenuItem, discount: &dyn Discount) -> Self {
        Self::new(
            id,
            vec![item.name().to_string()],
            discount.apply_discount(item.price()),
        )
    }
}
