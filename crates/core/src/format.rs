//! Supported input formats and format-tag resolution.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{JsonifyError, Result};

/// Input formats that have a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Xml,
    Csv,
    Html,
}

impl Format {
    /// All supported formats, in dispatch order.
    pub const ALL: [Format; 3] = [Format::Xml, Format::Csv, Format::Html];

    /// Upper-case name used in result labels and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Format::Xml => "XML",
            Format::Csv => "CSV",
            Format::Html => "HTML",
        }
    }

    /// Lower-case tag accepted by [`FromStr`].
    pub fn tag(self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Csv => "csv",
            Format::Html => "html",
        }
    }

    /// Detects the format from a file extension.
    ///
    /// `.htm` is accepted as HTML. Matching ignores case.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("xml") => Ok(Format::Xml),
            Some("csv") => Ok(Format::Csv),
            Some("html") | Some("htm") => Ok(Format::Html),
            _ => Err(JsonifyError::UnknownFormat { path: path.to_path_buf() }),
        }
    }
}

impl FromStr for Format {
    type Err = JsonifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "csv" => Ok(Format::Csv),
            "html" => Ok(Format::Html),
            _ => Err(JsonifyError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("XML".parse::<Format>().unwrap(), Format::Xml);
        assert_eq!("Csv".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("hTmL".parse::<Format>().unwrap(), Format::Html);
    }

    #[test]
    fn test_parse_unsupported_keeps_original_casing() {
        match "PDF".parse::<Format>() {
            Err(JsonifyError::UnsupportedFormat(tag)) => assert_eq!(tag, "PDF"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_padded_tag() {
        assert!(" xml".parse::<Format>().is_err());
        assert!("htm".parse::<Format>().is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path("data/items.XML").unwrap(), Format::Xml);
        assert_eq!(Format::from_path("people.csv").unwrap(), Format::Csv);
        assert_eq!(Format::from_path("index.htm").unwrap(), Format::Html);
        assert_eq!(Format::from_path("index.html").unwrap(), Format::Html);
    }

    #[test]
    fn test_from_path_unknown() {
        assert!(matches!(
            Format::from_path("notes.txt"),
            Err(JsonifyError::UnknownFormat { .. })
        ));
        assert!(Format::from_path("Makefile").is_err());
    }

    #[test]
    fn test_display_round_trips_through_tag() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }
}
