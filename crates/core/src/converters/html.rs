//! Heading and paragraph extraction from HTML.

use super::{Converter, StringStyle};
use crate::Format;

/// Pulls the first `<h1>` and every `<p>` out of an HTML snippet.
///
/// Tags are matched literally, so `<p class="x">` or `<H1>` are not seen.
/// Text between tags is copied as-is, including entities and nested markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    style: StringStyle,
}

impl HtmlConverter {
    pub fn new(style: StringStyle) -> Self {
        Self { style }
    }
}

impl Converter for HtmlConverter {
    fn format(&self) -> Format {
        Format::Html
    }

    fn convert_to_json(&self, content: &str) -> String {
        tracing::debug!(len = content.len(), "converting HTML to JSON");

        let mut fields = Vec::with_capacity(2);

        if let Some(title) = tag_content(content, "h1") {
            let mut field = String::from("\"title\":");
            self.style.push_quoted(&mut field, title);
            fields.push(field);
        }

        let paragraphs = all_tag_contents(content, "p");
        if !paragraphs.is_empty() {
            let mut field = String::from("\"paragraphs\":[");
            for (i, paragraph) in paragraphs.iter().enumerate() {
                if i > 0 {
                    field.push(',');
                }
                self.style.push_quoted(&mut field, paragraph);
            }
            field.push(']');
            fields.push(field);
        }

        if fields.is_empty() {
            tracing::debug!("no <h1> or <p> content found");
        }

        format!("{{{}}}", fields.join(","))
    }
}

/// Text between the first `<tag>` and the next `</tag>` after it.
fn tag_content<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = html.find(&open)? + open.len();
    let end = start + html[start..].find(&close)?;
    Some(&html[start..end])
}

/// Every non-overlapping `<tag>`...`</tag>` body, left to right.
///
/// Stops at the first opening tag that has no closing tag after it.
fn all_tag_contents<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let mut contents = Vec::new();
    let mut cursor = 0;

    while let Some(found) = html[cursor..].find(&open) {
        let start = cursor + found + open.len();
        let Some(len) = html[start..].find(&close) else {
            break;
        };
        let end = start + len;
        contents.push(&html[start..end]);
        cursor = end + close.len();
    }

    contents
}
