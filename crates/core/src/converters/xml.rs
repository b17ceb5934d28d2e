//! `<root><item>` list extraction from XML.

use super::{Converter, StringStyle, split_trimmed};
use crate::Format;

const ROOT_TAG: &str = "<root>";
const ITEM_OPEN: &str = "<item>";
const ITEM_CLOSE: &str = "</item>";

/// Reads a flat `<root><item>..</item>..</root>` document.
///
/// Content without a literal `<root>` converts to an empty string. Anything
/// other than `<item>` bodies is ignored.
#[derive(Debug, Clone, Default)]
pub struct XmlConverter {
    style: StringStyle,
}

impl XmlConverter {
    pub fn new(style: StringStyle) -> Self {
        Self { style }
    }
}

impl Converter for XmlConverter {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn convert_to_json(&self, content: &str) -> String {
        tracing::debug!(len = content.len(), "converting XML to JSON");

        if !content.contains(ROOT_TAG) {
            tracing::debug!("no <root> element, nothing to convert");
            return String::new();
        }

        let mut out = String::from(r#"{"root":{"item":["#);

        // Everything before the first <item> is framing.
        for (i, segment) in split_trimmed(content, ITEM_OPEN).into_iter().skip(1).enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.style.push_quoted(&mut out, item_value(segment));
        }

        out.push_str("]}}");
        out
    }
}

/// Text up to the first `</item>` in a segment, or the whole segment.
fn item_value(segment: &str) -> &str {
    split_trimmed(segment, ITEM_CLOSE).first().copied().unwrap_or("")
}
