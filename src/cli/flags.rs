#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub plain: bool,
    pub entropy: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
}

impl CliFlags {
    /// Password count, at least one.
    pub fn count(&self) -> usize {
        self.number.unwrap_or(1).max(1)
    }
}
