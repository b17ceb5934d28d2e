//! Format dispatch.
//!
//! [`ConversionFacade`] maps a format tag to its converter and labels the
//! result. Converters are created on first use and kept for the life of the
//! facade.
//!
//! # Example
//!
//! ```rust
//! use jsonify_core::ConversionFacade;
//!
//! let facade = ConversionFacade::new();
//! let out = facade.convert("a,b\n1,2", "CSV");
//! assert_eq!(out, r#"Result of CSV conversion: [{"a":"1","b":"2"}]"#);
//!
//! let out = facade.convert("%PDF-1.7", "pdf");
//! assert_eq!(out, "Unsupported file format: pdf");
//! ```

use std::sync::OnceLock;

use crate::config::ConvertConfig;
use crate::converters::{Converter, CsvConverter, HtmlConverter, XmlConverter};
use crate::{Format, Result};

/// Routes content to the converter for its format.
#[derive(Debug, Default)]
pub struct ConversionFacade {
    config: ConvertConfig,
    xml: OnceLock<XmlConverter>,
    csv: OnceLock<CsvConverter>,
    html: OnceLock<HtmlConverter>,
}

impl ConversionFacade {
    /// Creates a facade with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a facade with a custom config.
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts `content` using the converter named by `format_tag`.
    ///
    /// Tags are matched case-insensitively. An unrecognised tag returns
    /// `Unsupported file format: {format_tag}` with the tag as given.
    pub fn convert(&self, content: &str, format_tag: &str) -> String {
        self.try_convert(content, format_tag).unwrap_or_else(|e| {
            tracing::warn!(tag = format_tag, "unsupported format tag");
            e.to_string()
        })
    }

    /// Like [`convert`](Self::convert), but an unrecognised tag is an error.
    pub fn try_convert(&self, content: &str, format_tag: &str) -> Result<String> {
        let format: Format = format_tag.parse()?;
        Ok(self.convert_format(content, format))
    }

    /// Converts `content` as `format` and applies the label if configured.
    pub fn convert_format(&self, content: &str, format: Format) -> String {
        let raw = self.convert_raw(content, format);
        if self.config.include_label { labelled(format, &raw) } else { raw }
    }

    /// Converter output for `format` without any label.
    pub fn convert_raw(&self, content: &str, format: Format) -> String {
        self.converter(format).convert_to_json(content)
    }

    /// Converts XML content and applies the label if configured.
    pub fn convert_xml_to_json(&self, content: &str) -> String {
        self.convert_format(content, Format::Xml)
    }

    /// Converts CSV content and applies the label if configured.
    pub fn convert_csv_to_json(&self, content: &str) -> String {
        self.convert_format(content, Format::Csv)
    }

    /// Converts HTML content and applies the label if configured.
    pub fn convert_html_to_json(&self, content: &str) -> String {
        self.convert_format(content, Format::Html)
    }

    fn converter(&self, format: Format) -> &dyn Converter {
        let style = self.config.string_style;
        match format {
            Format::Xml => self.xml.get_or_init(|| {
                tracing::trace!("initialising XML converter");
                XmlConverter::new(style)
            }),
            Format::Csv => self.csv.get_or_init(|| {
                tracing::trace!("initialising CSV converter");
                CsvConverter::new(style)
            }),
            Format::Html => self.html.get_or_init(|| {
                tracing::trace!("initialising HTML converter");
                HtmlConverter::new(style)
            }),
        }
    }

    /// Whether the converter for `format` has been created yet.
    pub fn is_initialized(&self, format: Format) -> bool {
        match format {
            Format::Xml => self.xml.get().is_some(),
            Format::Csv => self.csv.get().is_some(),
            Format::Html => self.html.get().is_some(),
        }
    }
}

/// Prefixes converter output with `Result of {FORMAT} conversion: `.
pub fn labelled(format: Format, output: &str) -> String {
    format!("Result of {} conversion: {}", format.label(), output)
}

/// Converts `content` with a default facade.
///
/// See [`ConversionFacade::convert`].
pub fn convert(content: &str, format_tag: &str) -> String {
    ConversionFacade::new().convert(content, format_tag)
}
