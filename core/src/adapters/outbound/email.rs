use std::rc::Rc;

use crate::ports::outbound::message_sink::MessageSink;
use crate::ports::outbound::notifier::EmailNotifier;

/// Prints emails instead of sending them.
pub struct ConsoleEmailNotifier {
    sink: Rc<dyn MessageSink>,
}

impl ConsoleEmailNotifier {
    pub fn new(sink: Rc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl EmailNotifier for ConsoleEmailNotifier {
    fn send_email(&self, message: &str) {
        self.sink.emit(&format!("Sending email: {message}"));
    }
}
