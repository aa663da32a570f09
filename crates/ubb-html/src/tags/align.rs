//! Alignment tags, dispatched by pattern.
//!
//! `[left]`, `[center]`, and `[right]` share one handler registered as a
//! general (pattern-matched) handler rather than three specific entries:
//! the tag name itself is the alignment value.

use ubb_build::{Context, HandlerError, RecursiveTagHandler, TagNode};

/// The pattern this handler is registered under.
pub const PATTERN: &str = "^(left|center|right)$";

/// Aligned block: `<div style="text-align:…">`.
pub struct Align;

impl RecursiveTagHandler<String> for Align {
    fn render(
        &self,
        node: &TagNode,
        _ctx: &mut Context,
        children: Vec<String>,
    ) -> Result<String, HandlerError> {
        Ok(format!(
            "<div style=\"text-align:{}\">{}</div>",
            node.name,
            children.concat()
        ))
    }
}
