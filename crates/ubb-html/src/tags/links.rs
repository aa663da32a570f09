//! Link and embedded-frame tags.
//!
//! Both are leaf handlers: their content is the raw inner text, never
//! recursively rendered markup. Destination URLs are validated before any
//! live markup is emitted; on failure the handlers degrade to the escaped
//! inner text.

use crate::escape::{escape_attr, escape_text};
use ubb_build::{Context, HandlerError, LeafTagHandler, TagNode};
use url::Url;

/// Scheme allow-list shared by the link and embed handlers. Only absolute
/// http/https URLs pass; anything else (javascript:, data:, relative paths,
/// unparseable input) is refused.
pub(crate) fn is_safe_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// `[url=https://…]label[/url]` or `[url]https://…[/url]` — a hyperlink.
/// The destination comes from the `url` attribute, falling back to the
/// inner text.
pub struct Link;

impl LeafTagHandler<String> for Link {
    fn render(&self, node: &TagNode, _ctx: &mut Context) -> Result<String, HandlerError> {
        let dest = node.attr_value("url").unwrap_or(node.inner_text.as_str());

        if is_safe_url(dest) {
            Ok(format!(
                "<a href=\"{}\">{}</a>",
                escape_attr(dest.trim()),
                escape_text(&node.inner_text)
            ))
        } else {
            Ok(escape_text(&node.inner_text))
        }
    }
}

/// `[sandbox=https://…]fallback[/sandbox]` — an embedded frame, always
/// sandboxed. Unsafe destinations render no frame at all.
pub struct Sandbox;

impl LeafTagHandler<String> for Sandbox {
    fn render(&self, node: &TagNode, _ctx: &mut Context) -> Result<String, HandlerError> {
        let dest = node.attr_value("sandbox").or_else(|| node.attr_value("url"));

        let dest = match dest.filter(|d| is_safe_url(d)) {
            Some(dest) => dest,
            None => return Ok(escape_text(&node.inner_text)),
        };

        let mut dims = String::new();
        for key in ["width", "height"] {
            if let Some(value) = node.attr_value(key).filter(|v| is_css_length(v)) {
                dims.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
            }
        }

        Ok(format!(
            "<iframe sandbox=\"allow-scripts allow-forms allow-same-origin\" src=\"{}\"{}>{}</iframe>",
            escape_attr(dest.trim()),
            dims,
            escape_text(&node.inner_text)
        ))
    }
}

/// Digits with an optional `%` or `px` suffix.
fn is_css_length(value: &str) -> bool {
    let digits = value
        .strip_suffix("px")
        .or_else(|| value.strip_suffix('%'))
        .unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
