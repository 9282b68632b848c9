use orderly_core::ports::outbound::message_sink::MessageSink;

use crate::terminal::print;

/// Routes adapter output to the terminal as status lines.
pub struct TerminalSink;

impl MessageSink for TerminalSink {
    fn emit(&self, line: &str) {
        print::print_status(line);
    }
}
