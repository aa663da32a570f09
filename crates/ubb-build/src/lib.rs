//! # ubb-build — tag-dispatch tree rendering for UBB documents
//!
//! `ubb-build` turns a parsed UBB (BBCode-style) document tree into an
//! arbitrary target representation: an HTML string, plain text, or any other
//! type the caller chooses. It is generic over the output type and knows
//! nothing about markup grammar or output formats; an external parser
//! supplies the tree, and caller-supplied handlers produce the output.
//!
//! ## Core Concepts
//!
//! - [`RootNode`] / [`TagNode`] / [`TextNode`]: the immutable document tree
//! - [`HandlerHub`]: the handler bundle — root, specific (exact tag name),
//!   general (ordered patterns), default, and text handlers
//! - [`TagHandler`]: recursive (children built first) or leaf (children
//!   never visited), with optional enter/exit hooks
//! - [`Context`]: mutable per-build state threaded through every hook
//! - [`build`] / [`Builder`]: the depth-first walk producing one output
//!   value per node
//!
//! ## Quick Start
//!
//! ```rust
//! use ubb_build::{build, Context, ConcatRoot, HandlerHub, Node, RootNode, TagHandler, TagNode};
//!
//! let hub = HandlerHub::builder()
//!     .root(ConcatRoot)
//!     .specific(
//!         "b",
//!         TagHandler::recursive_fn(|_, _, children: Vec<String>| {
//!             Ok(format!("<b>{}</b>", children.concat()))
//!         }),
//!     )
//!     .default_handler(TagHandler::leaf_fn(|node, _| Ok(node.inner_text.clone())))
//!     .text_fn(|node, _| Ok(node.text.clone()))
//!     .build()?;
//!
//! // [b]hi[/b] there
//! let root = RootNode::new()
//!     .child(TagNode::new("b").child(Node::text("hi")))
//!     .child(Node::text(" there"));
//!
//! let mut ctx = Context::new();
//! let html = build(&root, &hub, &mut ctx)?;
//! assert_eq!(html, "<b>hi</b> there");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Dispatch Precedence
//!
//! For each tag node, exactly one handler applies:
//!
//! 1. the tag is closed and a specific handler matches its exact name;
//! 2. otherwise the first general handler (registration order) whose
//!    pattern matches;
//! 3. otherwise the default handler.
//!
//! Hub assembly fails fast when the root, default, or text handler is
//! missing, so dispatch is total at traversal time.
//!
//! ## Lifecycle Guarantees
//!
//! Hooks fire deterministically: `enter` pre-order, `exit` post-order,
//! siblings strictly left to right. That ordering is the contract handlers
//! rely on when they track state in the [`Context`] — nesting depth,
//! outermost-instance-of-a-tag, and the like. A handler error aborts the
//! build immediately; context mutations made before the failure are kept.

pub mod build;
pub mod context;
mod dispatch;
pub mod error;
pub mod handler;
pub mod node;

pub use build::{build, Builder};
pub use context::{Context, Extensions};
pub use error::{BuildError, ConfigError, HandlerError};
pub use handler::{
    ConcatRoot, HandlerHub, HandlerHubBuilder, LeafTagHandler, RecursiveTagHandler, RootHandler,
    TagHandler, TextHandler,
};
pub use node::{Node, RootNode, TagNode, TextNode};
