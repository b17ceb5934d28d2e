//! Header-keyed CSV to JSON array conversion.

use super::{Converter, StringStyle, split_trimmed};
use crate::Format;

/// Converts comma-separated rows into an array of header-keyed objects.
///
/// The first line names the fields. Each later line becomes one object,
/// pairing fields and values by position up to the shorter of the two.
#[derive(Debug, Clone, Default)]
pub struct CsvConverter {
    style: StringStyle,
}

impl CsvConverter {
    pub fn new(style: StringStyle) -> Self {
        Self { style }
    }
}

impl Converter for CsvConverter {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn convert_to_json(&self, content: &str) -> String {
        tracing::debug!(len = content.len(), "converting CSV to JSON");

        let lines = split_trimmed(content, "\n");
        if lines.len() < 2 {
            tracing::debug!(lines = lines.len(), "no data rows after header");
            return "[]".to_string();
        }

        let headers = split_trimmed(lines[0], ",");
        let mut out = String::from("[");

        for (row, line) in lines[1..].iter().enumerate() {
            if row > 0 {
                out.push(',');
            }

            let values = split_trimmed(line, ",");
            if values.len() != headers.len() {
                tracing::debug!(
                    row = row + 1,
                    headers = headers.len(),
                    values = values.len(),
                    "field count mismatch, keeping overlap"
                );
            }

            out.push('{');
            for (i, (header, value)) in headers.iter().zip(&values).enumerate() {
                if i > 0 {
                    out.push(',');
                }
                self.style.push_quoted(&mut out, header);
                out.push(':');
                self.style.push_quoted(&mut out, value);
            }
            out.push('}');
        }

        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(content: &str) -> String {
        CsvConverter::default().convert_to_json(content)
    }

    #[test]
    fn test_rows_keyed_by_header() {
        assert_eq!(
            convert("a,b\n1,2\n3,4"),
            r#"[{"a":"1","b":"2"},{"a":"3","b":"4"}]"#
        );
    }

    #[test]
    fn test_header_only() {
        assert_eq!(convert("a,b"), "[]");
    }

    #[test]
    fn test_header_with_trailing_newline_has_no_rows() {
        assert_eq!(convert("a,b\n"), "[]");
        assert_eq!(convert("a,b\n\n\n"), "[]");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "[]");
    }

    #[test]
    fn test_short_row_keeps_overlap() {
        assert_eq!(convert("a,b,c\n1,2"), r#"[{"a":"1","b":"2"}]"#);
    }

    #[test]
    fn test_long_row_drops_extra_values() {
        assert_eq!(convert("a\n1,2,3"), r#"[{"a":"1"}]"#);
    }

    #[test]
    fn test_blank_middle_line_keeps_first_field() {
        assert_eq!(
            convert("a,b\n1,2\n\n3,4"),
            r#"[{"a":"1","b":"2"},{"a":""},{"a":"3","b":"4"}]"#
        );
    }

    #[test]
    fn test_row_of_only_commas_is_empty_object() {
        assert_eq!(convert("a,b\n,,\n1,2"), r#"[{},{"a":"1","b":"2"}]"#);
    }

    #[test]
    fn test_trailing_empty_value_is_dropped() {
        assert_eq!(convert("a,b\n1,"), r#"[{"a":"1"}]"#);
    }

    #[test]
    fn test_quoted_commas_are_not_special() {
        assert_eq!(
            convert("name,city\n\"Doe, J\",Paris"),
            r#"[{"name":""Doe","city":" J""}]"#
        );
    }

    #[test]
    fn test_carriage_returns_are_kept() {
        assert_eq!(convert("a\r\n1\r\n"), "[{\"a\r\":\"1\r\"}]");
    }

    #[test]
    fn test_escaped_style() {
        let converter = CsvConverter::new(StringStyle::Escaped);
        let out = converter.convert_to_json("quote\nsay \"hi\"");
        assert_eq!(out, r#"[{"quote":"say \"hi\""}]"#);
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }

    #[test]
    fn test_format() {
        assert_eq!(CsvConverter::default().format(), Format::Csv);
    }
}
