pub const DEFAULT_PRECISION: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides banner and headers, `2` also hides the final summaries.
    pub quiet: u8,
    /// Number of decimals used when printing computed values.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            precision: DEFAULT_PRECISION,
        }
    }
}
