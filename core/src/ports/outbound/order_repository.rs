use crate::domain::models::order::Order;

/// Defines the contract for persisting processed orders.
pub trait OrderRepository {
    /// Stores `order`.
    fn save(&self, order: &Order);
}
