//! Configuration for PostScript output

use std::path::PathBuf;

use crate::geometry::{PageConfig, WedgeStrategy};

/// Configuration options for the generated document
#[derive(Debug, Clone)]
pub struct PostScriptConfig {
    /// Physical page and margin
    pub page: PageConfig,

    /// Value of the `%%Creator` comment
    pub creator: String,

    /// Where `write_star` puts the document
    pub output: PathBuf,

    /// How wedges after the first are derived
    pub strategy: WedgeStrategy,
}

impl Default for PostScriptConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            creator: "sstar".to_string(),
            output: PathBuf::from("sstar.ps"),
            strategy: WedgeStrategy::default(),
        }
    }
}

impl PostScriptConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page description
    pub fn with_page(mut self, page: PageConfig) -> Self {
        self.page = page;
        self
    }

    /// Set the creator tag
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the wedge generation strategy
    pub fn with_strategy(mut self, strategy: WedgeStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
