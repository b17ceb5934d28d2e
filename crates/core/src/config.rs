//! Conversion options.

use crate::converters::StringStyle;

/// Options shared by the facade and the converters it builds.
///
/// # Example
///
/// ```rust
/// use jsonify_core::{ConvertConfig, StringStyle};
///
/// let config = ConvertConfig::builder()
///     .string_style(StringStyle::Escaped)
///     .include_label(false)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// How keys and values are quoted (default: verbatim).
    pub string_style: StringStyle,

    /// Prefix results with `Result of {FORMAT} conversion: ` (default: true).
    pub include_label: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { string_style: StringStyle::Verbatim, include_label: true }
    }
}

impl ConvertConfig {
    /// Creates a new builder for ConvertConfig.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }
}

/// Builder for ConvertConfig.
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ConvertConfig::default() }
    }

    /// Sets the quoting style for keys and values.
    pub fn string_style(mut self, value: StringStyle) -> Self {
        self.config.string_style = value;
        self
    }

    /// Sets whether results carry the descriptive label.
    pub fn include_label(mut self, value: bool) -> Self {
        self.config.include_label = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

impl Default for ConvertConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
