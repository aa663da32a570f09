//! Depth-first construction of the target output.
//!
//! The engine walks the tree once, top to bottom, left to right. For each
//! tag it resolves one handler, runs `enter`, then either builds the
//! children first (recursive handlers) or not (leaf handlers), then `render`
//! and `exit`. Text leaves go straight to the text handler. Exactly one
//! output value is produced per node, bubbling up to a single root-level
//! output.
//!
//! The hook sequence is the engine's core contract: `enter` fires pre-order,
//! `exit` post-order, and siblings are processed strictly left to right.
//! Handlers rely on that ordering for stateful context use (nesting depth,
//! outermost-instance tracking), so the walk is single-threaded and
//! synchronous; sibling subtrees are never interleaved.
//!
//! Recursion depth equals tree depth. Input trees come from user-authored
//! markup, so callers that do not bound depth at parse time should set
//! [`Builder::max_depth`].
//!
//! There is no mid-traversal cancellation. A handler that needs to abort
//! returns an error from any hook, which discards the partial result and
//! surfaces as [`BuildError::Handler`] from the top-level call.

use crate::context::Context;
use crate::dispatch::resolve;
use crate::error::{BuildError, HandlerError};
use crate::handler::{HandlerHub, TagHandler};
use crate::node::{Node, RootNode, TagNode};

/// Builds the output for `root` with no depth limit.
///
/// Equivalent to `Builder::new(hub).build(root, ctx)`.
///
/// # Example
///
/// ```rust
/// use ubb_build::handler::ConcatRoot;
/// use ubb_build::{build, Context, HandlerHub, Node, RootNode, TagNode, TagHandler};
///
/// let hub = HandlerHub::builder()
///     .root(ConcatRoot)
///     .specific(
///         "b",
///         TagHandler::recursive_fn(|_, _, children: Vec<String>| {
///             Ok(format!("<b>{}</b>", children.concat()))
///         }),
///     )
///     .default_handler(TagHandler::leaf_fn(|node, _| Ok(node.inner_text.clone())))
///     .text_fn(|node, _| Ok(node.text.clone()))
///     .build()
///     .unwrap();
///
/// let root = RootNode::new().child(TagNode::new("b").child(Node::text("hi")));
///
/// let mut ctx = Context::new();
/// assert_eq!(build(&root, &hub, &mut ctx).unwrap(), "<b>hi</b>");
/// ```
pub fn build<T>(root: &RootNode, hub: &HandlerHub<T>, ctx: &mut Context) -> Result<T, BuildError> {
    Builder::new(hub).build(root, ctx)
}

/// A configured build entry point.
///
/// Borrows the hub, so one hub serves any number of builds. Each build takes
/// its own [`Context`]; the caller keeps the context afterward and can
/// inspect whatever the handlers left in it.
pub struct Builder<'h, T> {
    hub: &'h HandlerHub<T>,
    max_depth: Option<usize>,
}

impl<'h, T> Builder<'h, T> {
    /// Creates a builder over `hub` with no depth limit.
    pub fn new(hub: &'h HandlerHub<T>) -> Self {
        Self {
            hub,
            max_depth: None,
        }
    }

    /// Caps nesting depth. The root's immediate children sit at depth 1;
    /// entering a node deeper than `limit` fails with
    /// [`BuildError::DepthExceeded`] before any further recursion.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Walks the tree and returns the root handler's output.
    ///
    /// On failure the traversal stops where it is: later siblings are never
    /// visited and context mutations already made are kept.
    pub fn build(&self, root: &RootNode, ctx: &mut Context) -> Result<T, BuildError> {
        let at_root = |source| BuildError::Handler {
            at: "root".into(),
            source,
        };

        self.hub.root.enter(root, ctx).map_err(at_root)?;

        let mut children = Vec::with_capacity(root.children.len());
        for child in &root.children {
            children.push(self.visit(child, ctx, 1)?);
        }

        let output = self
            .hub
            .root
            .render(root, ctx, children)
            .map_err(at_root)?;
        self.hub.root.exit(root, ctx).map_err(at_root)?;
        Ok(output)
    }

    fn visit(&self, node: &Node, ctx: &mut Context, depth: usize) -> Result<T, BuildError> {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(BuildError::DepthExceeded { depth, limit });
            }
        }

        match node {
            Node::Text(text) => self
                .hub
                .text
                .render(text, ctx)
                .map_err(|source| BuildError::Handler {
                    at: "text".into(),
                    source,
                }),
            Node::Tag(tag) => {
                if tag.name.is_empty() {
                    return Err(BuildError::MalformedTree(
                        "tag node with an empty name".into(),
                    ));
                }

                match resolve(self.hub, tag) {
                    TagHandler::Recursive(handler) => {
                        handler.enter(tag, ctx).map_err(|e| failed_at(tag, e))?;

                        let mut children = Vec::with_capacity(tag.children.len());
                        for child in &tag.children {
                            children.push(self.visit(child, ctx, depth + 1)?);
                        }

                        let output = handler
                            .render(tag, ctx, children)
                            .map_err(|e| failed_at(tag, e))?;
                        handler.exit(tag, ctx).map_err(|e| failed_at(tag, e))?;
                        Ok(output)
                    }
                    TagHandler::Leaf(handler) => {
                        handler.enter(tag, ctx).map_err(|e| failed_at(tag, e))?;
                        let output = handler.render(tag, ctx).map_err(|e| failed_at(tag, e))?;
                        handler.exit(tag, ctx).map_err(|e| failed_at(tag, e))?;
                        Ok(output)
                    }
                }
            }
        }
    }
}

fn failed_at(tag: &TagNode, source: HandlerError) -> BuildError {
    BuildError::Handler {
        at: format!("[{}]", tag.name),
        source,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::handler::{RecursiveTagHandler, RootHandler};
    use proptest::prelude::*;

    #[derive(Default)]
    struct Events(Vec<String>);

    struct LogRoot;

    impl RootHandler<String> for LogRoot {
        fn enter(&self, _node: &RootNode, ctx: &mut Context) -> Result<(), HandlerError> {
            ctx.extensions.insert(Events::default());
            Ok(())
        }

        fn render(
            &self,
            _node: &RootNode,
            ctx: &mut Context,
            children: Vec<String>,
        ) -> Result<String, HandlerError> {
            if let Some(events) = ctx.extensions.get_mut::<Events>() {
                events.0.push("root.render".into());
            }
            Ok(children.concat())
        }

        fn exit(&self, _node: &RootNode, _ctx: &mut Context) -> Result<(), HandlerError> {
            Ok(())
        }
    }

    struct Trace;

    impl RecursiveTagHandler<String> for Trace {
        fn enter(&self, node: &TagNode, ctx: &mut Context) -> Result<(), HandlerError> {
            if let Some(events) = ctx.extensions.get_mut::<Events>() {
                events.0.push(format!("enter:{}", node.name));
            }
            Ok(())
        }

        fn render(
            &self,
            node: &TagNode,
            _ctx: &mut Context,
            children: Vec<String>,
        ) -> Result<String, HandlerError> {
            Ok(format!("<{}>{}</{}>", node.name, children.concat(), node.name))
        }

        fn exit(&self, node: &TagNode, ctx: &mut Context) -> Result<(), HandlerError> {
            if let Some(events) = ctx.extensions.get_mut::<Events>() {
                events.0.push(format!("exit:{}", node.name));
            }
            Ok(())
        }
    }

    fn hub() -> HandlerHub<String> {
        HandlerHub::builder()
            .root(LogRoot)
            .specific(
                "b",
                TagHandler::recursive_fn(|_, _, children: Vec<String>| {
                    Ok(format!("<b>{}</b>", children.concat()))
                }),
            )
            .general("^x", TagHandler::recursive(Trace))
            .general(".*", TagHandler::recursive(Trace))
            .default_handler(TagHandler::leaf_fn(|node, _| Ok(node.inner_text.clone())))
            .text_fn(|node, _| Ok(node.text.clone()))
            .build()
            .expect("static hub must assemble")
    }

    fn node_strategy() -> impl Strategy<Value = Node> {
        let leaf = "[a-z ]{0,8}".prop_map(Node::text);
        leaf.prop_recursive(4, 32, 4, |inner| {
            (
                "[a-z]{1,4}",
                any::<bool>(),
                proptest::collection::vec(inner, 0..4),
            )
                .prop_map(|(name, closed, children)| {
                    let mut tag = TagNode::new(name);
                    tag.closed = closed;
                    tag.children = children;
                    Node::Tag(tag)
                })
        })
    }

    fn run(root: &RootNode) -> (String, Vec<String>) {
        let hub = hub();
        let mut ctx = Context::new();
        let output = build(root, &hub, &mut ctx).expect("infallible handlers");
        let events = ctx
            .extensions
            .remove::<Events>()
            .map(|e| e.0)
            .unwrap_or_default();
        (output, events)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        // Same tree, same hub, fresh context: outputs and hook sequences
        // must be identical across runs.
        #[test]
        fn build_is_deterministic(children in proptest::collection::vec(node_strategy(), 0..6)) {
            let root = RootNode { children };
            let first = run(&root);
            let second = run(&root);
            prop_assert_eq!(first.0, second.0);
            prop_assert_eq!(first.1, second.1);
        }

        // Every enter has a matching exit and nesting is well bracketed.
        #[test]
        fn hook_log_is_balanced(children in proptest::collection::vec(node_strategy(), 0..6)) {
            let root = RootNode { children };
            let (_, events) = run(&root);

            let mut stack: Vec<String> = Vec::new();
            for event in &events {
                if let Some(name) = event.strip_prefix("enter:") {
                    stack.push(name.to_string());
                } else if let Some(name) = event.strip_prefix("exit:") {
                    let popped = stack.pop();
                    prop_assert_eq!(popped.as_deref(), Some(name));
                }
            }
            prop_assert!(stack.is_empty());
        }
    }
}
