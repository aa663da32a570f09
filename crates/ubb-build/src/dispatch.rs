//! Handler resolution for tag nodes.
//!
//! Resolution is total by construction: hub assembly already guaranteed a
//! default handler, so every tag node resolves to exactly one handler.
//! Text nodes never reach the resolver; the hub's single text handler
//! covers them all.

use crate::handler::{HandlerHub, TagHandler};
use crate::node::TagNode;

/// Picks the handler governing `node`, in strict precedence order:
///
/// 1. the tag is closed and a specific handler is registered under its
///    exact name;
/// 2. the first general handler, in registration order, whose pattern
///    matches the name;
/// 3. the default handler.
///
/// Closed tags get the cheap, unambiguous exact lookup; pattern handlers
/// are a second tier whose relative order is caller-controlled; the default
/// handler makes resolution total.
pub(crate) fn resolve<'h, T>(hub: &'h HandlerHub<T>, node: &TagNode) -> &'h TagHandler<T> {
    if node.closed {
        if let Some(handler) = hub.specific.get(&node.name) {
            return handler;
        }
    }

    for general in &hub.general {
        if general.pattern.is_match(&node.name) {
            return &general.handler;
        }
    }

    &hub.default
}
