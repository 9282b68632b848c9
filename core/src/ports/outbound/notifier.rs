/// Tells the customer what happened to their order.
pub trait EmailNotifier {
    fn send_email(&self, message: &str);
}
