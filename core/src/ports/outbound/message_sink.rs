/// Destination for the human-readable lines the console adapters produce.
///
/// The CLI writes them to the terminal; tests record them in memory.
pub trait MessageSink {
    fn emit(&self, line: &str);
}
