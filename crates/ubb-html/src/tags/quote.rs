//! Nested quotation blocks.
//!
//! The quote handler is the one tag that genuinely needs the traversal's
//! enter/exit discipline: it tracks its own nesting depth in the context
//! and remembers the outermost quote of the document, so callers can show
//! deeply nested reply chains differently (or collapse them) after the
//! build.

use ubb_build::{Context, HandlerError, RecursiveTagHandler, TagNode};

/// Context key holding the current quote nesting depth.
pub const DEPTH_KEY: &str = "quote.depth";

/// Context key holding the raw inner text of the outermost quote seen
/// first in document order.
pub const ROOT_KEY: &str = "quote.root";

/// `[quote]…[/quote]` — a block quote carrying its nesting depth as a
/// class, e.g. `<blockquote class="quote-depth-2">`.
pub struct Quote;

impl RecursiveTagHandler<String> for Quote {
    fn enter(&self, node: &TagNode, ctx: &mut Context) -> Result<(), HandlerError> {
        let depth = ctx.increment(DEPTH_KEY);
        if depth == 1 && !ctx.contains(ROOT_KEY) {
            ctx.set(ROOT_KEY, node.inner_text.clone());
        }
        Ok(())
    }

    fn render(
        &self,
        _node: &TagNode,
        ctx: &mut Context,
        children: Vec<String>,
    ) -> Result<String, HandlerError> {
        Ok(format!(
            "<blockquote class=\"quote-depth-{}\">{}</blockquote>",
            ctx.counter(DEPTH_KEY),
            children.concat()
        ))
    }

    fn exit(&self, _node: &TagNode, ctx: &mut Context) -> Result<(), HandlerError> {
        ctx.decrement(DEPTH_KEY);
        Ok(())
    }
}
