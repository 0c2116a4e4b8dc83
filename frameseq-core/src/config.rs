//! Engine configuration

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::metadata::{FsMetadata, MetadataProvider};
use crate::pattern::FramePattern;

/// Separator used to join broken-range tokens by default
pub const DEFAULT_RANGE_SEPARATOR: &str = ", ";

/// Configuration for sequence detection and formatting
#[derive(Debug, Clone)]
pub struct Config {
    frame_pattern: FramePattern,
    strict_padding: bool,
    range_separator: String,
    metadata: Arc<dyn MetadataProvider>,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The rule used to locate frame numbers in names
    pub fn frame_pattern(&self) -> &FramePattern {
        &self.frame_pattern
    }

    /// Whether all members of a sequence must share one pad width
    pub fn strict_padding(&self) -> bool {
        self.strict_padding
    }

    /// Separator joining broken-range tokens
    pub fn range_separator(&self) -> &str {
        &self.range_separator
    }

    /// The injected metadata capability
    pub fn metadata(&self) -> &Arc<dyn MetadataProvider> {
        &self.metadata
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_pattern: FramePattern::digits(),
            strict_padding: false,
            range_separator: DEFAULT_RANGE_SEPARATOR.to_string(),
            metadata: Arc::new(FsMetadata),
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Compile and set a custom frame pattern
    pub fn frame_pattern(mut self, pattern: &str) -> Result<Self> {
        self.config.frame_pattern = FramePattern::new(pattern)?;
        Ok(self)
    }

    /// Set a prebuilt frame pattern rule
    pub fn pattern_rule(mut self, rule: FramePattern) -> Self {
        self.config.frame_pattern = rule;
        self
    }

    /// Enable or disable strict padding
    pub fn strict_padding(mut self, strict: bool) -> Self {
        self.config.strict_padding = strict;
        self
    }

    /// Set the broken-range token separator
    pub fn range_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.range_separator = separator.into();
        self
    }

    /// Inject a metadata provider
    pub fn metadata(mut self, provider: Arc<dyn MetadataProvider>) -> Self {
        self.config.metadata = provider;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<Config> {
        // a separator containing digits or '-' cannot be told apart from
        // the range tokens it joins
        let sep = &self.config.range_separator;
        if sep.trim_end().is_empty() || sep.contains(|c: char| c.is_ascii_digit() || c == '-') {
            return Err(Error::InvalidSeparator {
                separator: sep.clone(),
            });
        }
        Ok(self.config)
    }
}
