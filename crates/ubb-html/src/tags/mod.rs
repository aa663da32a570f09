//! The handler set for HTML output.
//!
//! One module per tag family, mirroring how the handlers are registered in
//! [`crate::hub`]. Handlers here follow the engine's fail-safe contract:
//! when an attribute fails validation, the handler degrades to plain
//! content rather than emitting live markup.

pub mod align;
pub mod links;
pub mod quote;
pub mod style;

use crate::escape::escape_text;
use ubb_build::{
    Context, HandlerError, LeafTagHandler, RootHandler, RootNode, TagNode, TextHandler, TextNode,
};

/// Root handler: seeds the quote-depth counter, concatenates top-level
/// outputs.
pub struct HtmlRoot;

impl RootHandler<String> for HtmlRoot {
    fn enter(&self, _node: &RootNode, ctx: &mut Context) -> Result<(), HandlerError> {
        ctx.set(quote::DEPTH_KEY, 0);
        Ok(())
    }

    fn render(
        &self,
        _node: &RootNode,
        _ctx: &mut Context,
        children: Vec<String>,
    ) -> Result<String, HandlerError> {
        Ok(children.concat())
    }

    fn exit(&self, _node: &RootNode, _ctx: &mut Context) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// Text handler: HTML-escapes the literal content.
pub struct PlainText;

impl TextHandler<String> for PlainText {
    fn render(&self, node: &TextNode, _ctx: &mut Context) -> Result<String, HandlerError> {
        Ok(escape_text(&node.text))
    }
}

/// Default handler: unknown tags come back as visible, escaped source text
/// instead of disappearing silently.
pub struct Literal;

impl LeafTagHandler<String> for Literal {
    fn render(&self, node: &TagNode, _ctx: &mut Context) -> Result<String, HandlerError> {
        if node.closed {
            Ok(escape_text(&format!(
                "[{0}]{1}[/{0}]",
                node.name, node.inner_text
            )))
        } else {
            Ok(escape_text(&format!("[{}]", node.name)))
        }
    }
}
