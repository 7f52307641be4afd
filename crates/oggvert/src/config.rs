use std::path::PathBuf;

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory whose `.wav` files are converted.
    pub directory: PathBuf,
    /// If set, nothing is executed or removed.
    pub dry_run: bool,
    /// If set, prints the encoder command lines and a summary.
    pub verbose: bool,
}

impl Config {
    /// Configuration for converting `directory` with default options.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            dry_run: false,
            verbose: false,
        }
    }
}
