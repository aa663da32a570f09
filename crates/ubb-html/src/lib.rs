//! # ubb-html — HTML output for UBB documents
//!
//! A ready-made handler hub for the [`ubb_build`] engine that renders a
//! parsed UBB tree to an HTML string. All user-controlled content is
//! escaped, link and embed destinations go through a scheme allow-list,
//! and handlers degrade to plain text whenever validation fails — a bad
//! attribute never becomes live markup.
//!
//! ## Tag Coverage
//!
//! | Tag | Handler kind | Output |
//! |-----|--------------|--------|
//! | `b`, `i`, `u` | recursive | `<b>`, `<i>`, `<u>` |
//! | `color`, `cursor` | recursive | styled `<span>`, value validated |
//! | `quote` | recursive | `<blockquote>` with nesting depth |
//! | `table`, `tr`, `td` | recursive | table elements |
//! | `url` | leaf | `<a>`, http/https only |
//! | `sandbox` | leaf | sandboxed `<iframe>`, http/https only |
//! | `left`/`center`/`right` | general (pattern) | `text-align` div |
//! | anything else | default | escaped literal source |
//!
//! ## Quick Start
//!
//! ```rust
//! use ubb_html::render_html;
//! use ubb_build::{Context, Node, RootNode, TagNode};
//!
//! // [b]hi[/b]
//! let root = RootNode::new().child(TagNode::new("b").child(Node::text("hi")));
//!
//! let mut ctx = Context::new();
//! let html = render_html(&root, &mut ctx)?;
//! assert_eq!(html, "<b>hi</b>");
//! # Ok::<(), ubb_html::RenderError>(())
//! ```
//!
//! After a build the context is yours to inspect: the quote handler, for
//! instance, leaves the outermost quote's raw text under
//! [`tags::quote::ROOT_KEY`].

pub mod escape;
pub mod tags;

use tags::align::{self, Align};
use tags::links::{Link, Sandbox};
use tags::quote::Quote;
use tags::style::{Color, Cursor, Wrap};
use tags::{HtmlRoot, Literal, PlainText};
use thiserror::Error;
use ubb_build::{build, BuildError, ConfigError, Context, HandlerHub, RootNode, TagHandler};

/// Error from [`render_html`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// The hub failed to assemble.
    #[error("handler hub assembly failed")]
    Config(#[from] ConfigError),

    /// The build itself failed.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Assembles the full HTML handler hub.
///
/// The hub borrows nothing and can be reused across any number of builds;
/// [`render_html`] is the one-shot convenience over it.
pub fn hub() -> Result<HandlerHub<String>, ConfigError> {
    HandlerHub::builder()
        .root(HtmlRoot)
        .specific("b", TagHandler::recursive(Wrap::new("<b>", "</b>")))
        .specific("i", TagHandler::recursive(Wrap::new("<i>", "</i>")))
        .specific("u", TagHandler::recursive(Wrap::new("<u>", "</u>")))
        .specific("color", TagHandler::recursive(Color))
        .specific("cursor", TagHandler::recursive(Cursor))
        .specific("quote", TagHandler::recursive(Quote))
        .specific("table", TagHandler::recursive(Wrap::new("<table>", "</table>")))
        .specific("tr", TagHandler::recursive(Wrap::new("<tr>", "</tr>")))
        .specific("td", TagHandler::recursive(Wrap::new("<td>", "</td>")))
        .specific("url", TagHandler::leaf(Link))
        .specific("sandbox", TagHandler::leaf(Sandbox))
        .general(align::PATTERN, TagHandler::recursive(Align))
        .default_handler(TagHandler::leaf(Literal))
        .text(PlainText)
        .build()
}

/// Renders `root` to an HTML string with the default hub.
pub fn render_html(root: &RootNode, ctx: &mut Context) -> Result<String, RenderError> {
    let hub = hub()?;
    Ok(build(root, &hub, ctx)?)
}
