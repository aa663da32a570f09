//! Inline styling tags: fixed wrappers and attribute-driven spans.

use crate::escape::escape_attr;
use ubb_build::{Context, HandlerError, RecursiveTagHandler, TagNode};

/// Wraps child output in a fixed element pair. Covers `b`/`i`/`u` and the
/// table family.
pub struct Wrap {
    open: &'static str,
    close: &'static str,
}

impl Wrap {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }
}

impl RecursiveTagHandler<String> for Wrap {
    fn render(
        &self,
        _node: &TagNode,
        _ctx: &mut Context,
        children: Vec<String>,
    ) -> Result<String, HandlerError> {
        Ok(format!("{}{}{}", self.open, children.concat(), self.close))
    }
}

/// `[color=red]…[/color]` — a colored span. Values that are not a color
/// keyword or `#hex` degrade to the unwrapped children.
pub struct Color;

impl RecursiveTagHandler<String> for Color {
    fn render(
        &self,
        node: &TagNode,
        _ctx: &mut Context,
        children: Vec<String>,
    ) -> Result<String, HandlerError> {
        match node.attr_value("color").filter(|v| is_css_color(v)) {
            Some(color) => Ok(format!(
                "<span style=\"color:{}\">{}</span>",
                escape_attr(color),
                children.concat()
            )),
            None => Ok(children.concat()),
        }
    }
}

/// `[cursor=pointer]…[/cursor]` — a span with a cursor style.
pub struct Cursor;

impl RecursiveTagHandler<String> for Cursor {
    fn render(
        &self,
        node: &TagNode,
        _ctx: &mut Context,
        children: Vec<String>,
    ) -> Result<String, HandlerError> {
        match node.attr_value("cursor").filter(|v| is_css_ident(v)) {
            Some(cursor) => Ok(format!(
                "<span style=\"cursor:{}\">{}</span>",
                escape_attr(cursor),
                children.concat()
            )),
            None => Ok(children.concat()),
        }
    }
}

/// A color keyword (`red`) or hex form (`#1a2b3c`, 3 to 8 hex digits).
fn is_css_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return (3..=8).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// A lowercase CSS identifier like `pointer` or `not-allowed`.
fn is_css_ident(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-')
}
