pub struct Config {
    /// Quiet level. Anything above zero hides the banner and section headers.
    pub quiet: u8,
    /// Hides the banner even when not quiet.
    pub no_banner: bool,
}
