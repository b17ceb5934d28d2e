//! Format-specific converters.
//!
//! Each converter is a single pass of substring searches over the input,
//! producing a JSON-shaped string. None of them understand the grammar of
//! their format: there is no quoting in CSV, no nesting or attributes in
//! XML and HTML, and no entity decoding.

pub mod csv;
pub mod html;
pub mod xml;

pub use csv::CsvConverter;
pub use html::HtmlConverter;
pub use xml::XmlConverter;

use crate::Format;

/// A `content -> JSON-like string` conversion for one format.
///
/// Implementations never fail; unusable input maps to a fixed output
/// (`[]`, `{}` or an empty string depending on the format).
pub trait Converter: Send + Sync {
    /// The format this converter reads.
    fn format(&self) -> Format;

    /// Converts `content` into a JSON-like string.
    fn convert_to_json(&self, content: &str) -> String;
}

/// How keys and values are written into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringStyle {
    /// Wrap text in double quotes exactly as found.
    #[default]
    Verbatim,
    /// Write text as a JSON string literal with escapes.
    Escaped,
}

impl StringStyle {
    /// Appends `text` as a quoted string to `out`.
    pub(crate) fn push_quoted(self, out: &mut String, text: &str) {
        match self {
            StringStyle::Verbatim => {
                out.push('"');
                out.push_str(text);
                out.push('"');
            }
            StringStyle::Escaped => {
                out.push_str(&serde_json::Value::String(text.to_string()).to_string());
            }
        }
    }
}

/// Splits `s` on `sep`, dropping trailing empty pieces.
///
/// An empty input yields one empty piece, and an input made only of
/// separators yields none.
pub(crate) fn split_trimmed<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if s.is_empty() {
        return vec![s];
    }

    let mut parts: Vec<&str> = s.split(sep).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}
