//! Input reading and output reformatting.
//!
//! Reads content from local files and standard input, and re-renders
//! converter output as indented JSON when it happens to be valid.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::{JsonifyError, Result};

/// Reads content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(JsonifyError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(JsonifyError::from)
    }
}

/// Reads content from standard input until EOF.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Pretty-prints a JSON document.
///
/// Fails with [`JsonifyError::InvalidJson`] when `json` does not parse,
/// which includes the empty string produced for XML without `<root>`.
pub fn prettify(json: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| JsonifyError::InvalidJson(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| JsonifyError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a,b\n1,2").unwrap();

        let content = read_file(file.path()).unwrap();
        assert_eq!(content, "a,b\n1,2");
    }

    #[test]
    fn test_read_file_not_found() {
        let result = read_file("/nonexistent/path/data.csv");
        assert!(matches!(result, Err(JsonifyError::FileNotFound(_))));
    }

    #[test]
    fn test_prettify() {
        let pretty = prettify(r#"{"root":{"item":["A"]}}"#).unwrap();
        assert!(pretty.contains('\n'));
        assert!(pretty.contains(r#""item": ["#));
    }

    #[test]
    fn test_prettify_keeps_key_order() {
        let pretty = prettify(r#"{"title":"T","paragraphs":["p"]}"#).unwrap();
        assert!(pretty.find("title").unwrap() < pretty.find("paragraphs").unwrap());
    }

    #[test]
    fn test_prettify_rejects_unescaped_quotes() {
        let result = prettify(r#"[{"a":"say "hi""}]"#);
        assert!(matches!(result, Err(JsonifyError::InvalidJson(_))));
    }

    #[test]
    fn test_prettify_rejects_empty() {
        assert!(matches!(prettify(""), Err(JsonifyError::InvalidJson(_))));
    }
}
