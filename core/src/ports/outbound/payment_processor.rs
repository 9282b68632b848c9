/// Charges the customer.
pub trait PaymentProcessor {
    /// Takes a payment of `amount`.
    ///
    /// There is no declined or failed outcome.
    fn process_payment(&self, amount: f64);
}
