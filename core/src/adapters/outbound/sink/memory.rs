use std::cell::RefCell;

use crate::ports::outbound::message_sink::MessageSink;

/// Keeps every emitted line in memory, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.borrow().iter().any(|l| l == line)
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
