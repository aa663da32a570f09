//! The handler contract and the handler hub.
//!
//! A build is driven entirely by handlers supplied by the caller. The hub
//! bundles them: one root handler, exact-name handlers for specific tags, an
//! ordered list of pattern-matched general handlers, one default handler,
//! and one text handler. The engine imposes no source for the hub; it is a
//! pure configuration object assembled once and reused across builds.
//!
//! # Recursive vs. leaf handlers
//!
//! A tag handler is one of two kinds, and the distinction controls the
//! traversal itself:
//!
//! - a **recursive** handler's `render` receives the already-built outputs
//!   of all children, in document order;
//! - a **leaf** handler's `render` receives only the node; the engine never
//!   visits the node's children, and the handler is solely responsible for
//!   any inner content (typically via [`TagNode::inner_text`]).
//!
//! Both kinds have optional `enter`/`exit` hooks with no-op defaults. For
//! recursive handlers, `enter` fires strictly before any child is visited
//! and `exit` strictly after `render`; for leaf handlers, `exit` follows
//! `render` immediately.
//!
//! # Example
//!
//! ```rust
//! use ubb_build::{HandlerHub, TagHandler};
//!
//! let hub: HandlerHub<String> = HandlerHub::builder()
//!     .root(ubb_build::handler::ConcatRoot)
//!     .specific(
//!         "b",
//!         TagHandler::recursive_fn(|_, _, children: Vec<String>| {
//!             Ok(format!("<b>{}</b>", children.concat()))
//!         }),
//!     )
//!     .general(
//!         "^h[1-6]$",
//!         TagHandler::recursive_fn(|node, _, children: Vec<String>| {
//!             Ok(format!("<{0}>{1}</{0}>", node.name, children.concat()))
//!         }),
//!     )
//!     .default_handler(TagHandler::leaf_fn(|node, _| Ok(node.inner_text.clone())))
//!     .text_fn(|node, _| Ok(node.text.clone()))
//!     .build()
//!     .unwrap();
//! # let _ = hub;
//! ```

use crate::context::Context;
use crate::error::{ConfigError, HandlerError};
use crate::node::{RootNode, TagNode, TextNode};
use regex::Regex;
use std::collections::HashMap;

/// Handler for the document root. All three hooks are required: the root is
/// where per-build context state is seeded and torn down.
pub trait RootHandler<T> {
    /// Runs once, before any child is visited.
    fn enter(&self, node: &RootNode, ctx: &mut Context) -> Result<(), HandlerError>;

    /// Synthesizes the final output from all top-level child outputs, in
    /// document order.
    fn render(
        &self,
        node: &RootNode,
        ctx: &mut Context,
        children: Vec<T>,
    ) -> Result<T, HandlerError>;

    /// Runs once, after `render`.
    fn exit(&self, node: &RootNode, ctx: &mut Context) -> Result<(), HandlerError>;
}

/// A root handler that concatenates child outputs.
///
/// Covers the common case for string-like outputs; callers with their own
/// context setup implement [`RootHandler`] directly.
pub struct ConcatRoot;

impl RootHandler<String> for ConcatRoot {
    fn enter(&self, _node: &RootNode, _ctx: &mut Context) -> Result<(), HandlerError> {
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

/// Handler for a tag whose children are built first.
pub trait RecursiveTagHandler<T> {
    /// Runs before any child of this node is visited.
    fn enter(&self, _node: &TagNode, _ctx: &mut Context) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Synthesizes this node's output from its child outputs, in document
    /// order.
    fn render(
        &self,
        node: &TagNode,
        ctx: &mut Context,
        children: Vec<T>,
    ) -> Result<T, HandlerError>;

    /// Runs after all children have been visited and `render` has returned.
    fn exit(&self, _node: &TagNode, _ctx: &mut Context) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// Handler for a tag rendered without visiting its children.
pub trait LeafTagHandler<T> {
    /// Runs before `render`.
    fn enter(&self, _node: &TagNode, _ctx: &mut Context) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Produces this node's output. The engine computes nothing for the
    /// node's children.
    fn render(&self, node: &TagNode, ctx: &mut Context) -> Result<T, HandlerError>;

    /// Runs immediately after `render`.
    fn exit(&self, _node: &TagNode, _ctx: &mut Context) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// Handler for text leaves. Text nodes have no enter/exit lifecycle and
/// bypass dispatch entirely: one text handler covers them all.
pub trait TextHandler<T> {
    /// Produces the output for a text leaf.
    fn render(&self, node: &TextNode, ctx: &mut Context) -> Result<T, HandlerError>;
}

impl<T, F> TextHandler<T> for F
where
    F: Fn(&TextNode, &mut Context) -> Result<T, HandlerError>,
{
    fn render(&self, node: &TextNode, ctx: &mut Context) -> Result<T, HandlerError> {
        self(node, ctx)
    }
}

/// A tag handler with its recursion mode as an explicit variant.
///
/// The variant tag is load-bearing: the traversal matches on it
/// exhaustively, so the recursive/leaf split is checked at compile time
/// rather than discovered per call.
pub enum TagHandler<T> {
    /// Children are built first and passed to `render`.
    Recursive(Box<dyn RecursiveTagHandler<T>>),
    /// `render` runs alone; children are never visited.
    Leaf(Box<dyn LeafTagHandler<T>>),
}

impl<T> TagHandler<T> {
    /// Wraps a recursive handler.
    pub fn recursive(handler: impl RecursiveTagHandler<T> + 'static) -> Self {
        TagHandler::Recursive(Box::new(handler))
    }

    /// Wraps a leaf handler.
    pub fn leaf(handler: impl LeafTagHandler<T> + 'static) -> Self {
        TagHandler::Leaf(Box::new(handler))
    }

    /// Builds a recursive handler from a render closure, with no-op
    /// enter/exit.
    pub fn recursive_fn<F>(render: F) -> Self
    where
        F: Fn(&TagNode, &mut Context, Vec<T>) -> Result<T, HandlerError> + 'static,
        T: 'static,
    {
        TagHandler::Recursive(Box::new(RecursiveFn(render)))
    }

    /// Builds a leaf handler from a render closure, with no-op enter/exit.
    pub fn leaf_fn<F>(render: F) -> Self
    where
        F: Fn(&TagNode, &mut Context) -> Result<T, HandlerError> + 'static,
        T: 'static,
    {
        TagHandler::Leaf(Box::new(LeafFn(render)))
    }

    /// Whether the engine builds this handler's children.
    pub fn is_recursive(&self) -> bool {
        matches!(self, TagHandler::Recursive(_))
    }
}

struct RecursiveFn<F>(F);

impl<T, F> RecursiveTagHandler<T> for RecursiveFn<F>
where
    F: Fn(&TagNode, &mut Context, Vec<T>) -> Result<T, HandlerError>,
{
    fn render(
        &self,
        node: &TagNode,
        ctx: &mut Context,
        children: Vec<T>,
    ) -> Result<T, HandlerError> {
        (self.0)(node, ctx, children)
    }
}

struct LeafFn<F>(F);

impl<T, F> LeafTagHandler<T> for LeafFn<F>
where
    F: Fn(&TagNode, &mut Context) -> Result<T, HandlerError>,
{
    fn render(&self, node: &TagNode, ctx: &mut Context) -> Result<T, HandlerError> {
        (self.0)(node, ctx)
    }
}

struct TextFn<F>(F);

impl<T, F> TextHandler<T> for TextFn<F>
where
    F: Fn(&TextNode, &mut Context) -> Result<T, HandlerError>,
{
    fn render(&self, node: &TextNode, ctx: &mut Context) -> Result<T, HandlerError> {
        (self.0)(node, ctx)
    }
}

/// A pattern-matched handler. Relative order in the hub decides precedence
/// among overlapping patterns.
pub(crate) struct GeneralTagHandler<T> {
    pub(crate) pattern: Regex,
    pub(crate) handler: TagHandler<T>,
}

/// The complete handler bundle for a build.
///
/// Assembled via [`HandlerHub::builder`]; validation happens once, at
/// [`HandlerHubBuilder::build`], so traversal never encounters an
/// unresolvable tag.
pub struct HandlerHub<T> {
    pub(crate) root: Box<dyn RootHandler<T>>,
    pub(crate) specific: HashMap<String, TagHandler<T>>,
    pub(crate) general: Vec<GeneralTagHandler<T>>,
    pub(crate) default: TagHandler<T>,
    pub(crate) text: Box<dyn TextHandler<T>>,
}

impl<T> HandlerHub<T> {
    /// Starts assembling a hub.
    pub fn builder() -> HandlerHubBuilder<T> {
        HandlerHubBuilder::new()
    }
}

impl<T> std::fmt::Debug for HandlerHub<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerHub")
            .field("specific", &self.specific.keys().collect::<Vec<_>>())
            .field("general", &self.general.len())
            .finish_non_exhaustive()
    }
}

/// Chained assembly for [`HandlerHub`].
pub struct HandlerHubBuilder<T> {
    root: Option<Box<dyn RootHandler<T>>>,
    specific: HashMap<String, TagHandler<T>>,
    general: Vec<(String, TagHandler<T>)>,
    default: Option<TagHandler<T>>,
    text: Option<Box<dyn TextHandler<T>>>,
}

impl<T> Default for HandlerHubBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HandlerHubBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            root: None,
            specific: HashMap::new(),
            general: Vec::new(),
            default: None,
            text: None,
        }
    }

    /// Sets the root handler.
    pub fn root(mut self, handler: impl RootHandler<T> + 'static) -> Self {
        self.root = Some(Box::new(handler));
        self
    }

    /// Registers an exact-name handler. Specific handlers apply only to
    /// closed tags; see [`crate::build`] for the full precedence rules.
    pub fn specific(mut self, name: impl Into<String>, handler: TagHandler<T>) -> Self {
        self.specific.insert(name.into(), handler);
        self
    }

    /// Appends a pattern-matched handler. Registration order is match
    /// order: register more specific patterns before catch-alls.
    pub fn general(mut self, pattern: impl Into<String>, handler: TagHandler<T>) -> Self {
        self.general.push((pattern.into(), handler));
        self
    }

    /// Sets the fallback handler for tags no specific or general handler
    /// covers.
    pub fn default_handler(mut self, handler: TagHandler<T>) -> Self {
        self.default = Some(handler);
        self
    }

    /// Sets the handler for text leaves.
    pub fn text(mut self, handler: impl TextHandler<T> + 'static) -> Self {
        self.text = Some(Box::new(handler));
        self
    }

    /// Sets the text handler from a render closure.
    pub fn text_fn<F>(mut self, render: F) -> Self
    where
        F: Fn(&TextNode, &mut Context) -> Result<T, HandlerError> + 'static,
        T: 'static,
    {
        self.text = Some(Box::new(TextFn(render)));
        self
    }

    /// Validates and assembles the hub. Fails fast if the root, default, or
    /// text handler is missing, or a general pattern does not compile.
    pub fn build(self) -> Result<HandlerHub<T>, ConfigError> {
        let root = self.root.ok_or(ConfigError::MissingRootHandler)?;
        let default = self.default.ok_or(ConfigError::MissingDefaultHandler)?;
        let text = self.text.ok_or(ConfigError::MissingTextHandler)?;

        let mut general = Vec::with_capacity(self.general.len());
        for (pattern, handler) in self.general {
            let compiled = Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            general.push(GeneralTagHandler {
                pattern: compiled,
                handler,
            });
        }

        Ok(HandlerHub {
            root,
            specific: self.specific,
            general,
            default,
            text,
        })
    }
}
