//! Error types for hub assembly and tree building.

use thiserror::Error;

/// Error raised while assembling a [`HandlerHub`](crate::HandlerHub).
///
/// A hub is validated once, up front. This is what guarantees that dispatch
/// can never fail to resolve a tag at traversal time: a hub without a
/// default handler (or root/text handler) is unbuildable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No root handler was registered.
    #[error("handler hub has no root handler")]
    MissingRootHandler,

    /// No default tag handler was registered.
    #[error("handler hub has no default tag handler")]
    MissingDefaultHandler,

    /// No text handler was registered.
    #[error("handler hub has no text handler")]
    MissingTextHandler,

    /// A general-handler pattern failed to compile.
    #[error("invalid general handler pattern {pattern:?}")]
    InvalidPattern {
        /// The pattern as registered.
        pattern: String,
        /// The compilation failure.
        #[source]
        source: regex::Error,
    },
}

/// Error returned by a handler's `enter`, `render`, or `exit`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl HandlerError {
    /// Creates a handler error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Sets the underlying error source.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        self.source = Some(source.into());
        self
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Error surfaced by [`build`](crate::build).
///
/// There is no per-node isolation: one failing node aborts the whole render.
/// Context mutations made before the failure are kept; the context is not
/// transactional, and the caller decides whether a partially-mutated context
/// is still useful.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A handler hook or render failed. Traversal stops immediately; nodes
    /// after the failing one in document order are never visited.
    #[error("handler failed at {at}")]
    Handler {
        /// Where the failure occurred, e.g. `[b]`, `text`, or `root`.
        at: String,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },

    /// Tag nesting went past the configured limit. Raised before recursing
    /// further, so runaway input cannot exhaust the stack.
    #[error("nesting depth {depth} exceeds the configured limit {limit}")]
    DepthExceeded {
        /// The depth that would have been entered.
        depth: usize,
        /// The configured limit.
        limit: usize,
    },

    /// The input tree violates a structural requirement.
    #[error("malformed tree: {0}")]
    MalformedTree(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_handler_error_display() {
        let err = HandlerError::new("fetch refused");
        assert_eq!(err.to_string(), "fetch refused");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_handler_error_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        let err = HandlerError::new("fetch refused").with_source(io);
        assert!(err.source().unwrap().to_string().contains("socket closed"));
    }

    #[test]
    fn test_build_error_names_location() {
        let err = BuildError::Handler {
            at: "[url]".into(),
            source: "bad destination".into(),
        };
        assert!(err.to_string().contains("[url]"));
        assert!(err.source().unwrap().to_string().contains("bad destination"));
    }

    #[test]
    fn test_depth_exceeded_display() {
        let err = BuildError::DepthExceeded {
            depth: 65,
            limit: 64,
        };
        assert!(err.to_string().contains("65"));
        assert!(err.to_string().contains("64"));
    }
}
