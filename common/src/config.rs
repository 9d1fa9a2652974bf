pub struct Config {
    /// Exit with a failure status when an amount is rejected.
    ///
    /// The diagnostic text is printed either way.
    pub strict: bool,
    /// Render an all-zero dollar part as "zero" instead of nothing.
    pub zero_words: bool,
    /// Number of `-v` flags passed on the command line.
    pub verbosity: u8,
    /// Silences logging entirely.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            zero_words: true,
            verbosity: 0,
            quiet: false,
        }
    }
}
