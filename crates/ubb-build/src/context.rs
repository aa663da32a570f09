//! Shared state for one traversal.
//!
//! A [`Context`] is created by the caller, passed `&mut` through every
//! handler hook of a single [`build`](crate::build) call, and handed back
//! (it stays caller-owned) once the build completes. It is the only channel
//! for cross-node communication: a handler that increments a counter in
//! `enter` and decrements it in `exit` observes the current nesting depth
//! of its tag, because hooks fire pre-order/post-order with siblings
//! processed left to right.
//!
//! Two stores are available:
//!
//! - string-keyed [`serde_json::Value`]s for data with an obvious JSON shape
//!   (counters, flags, collected snippets);
//! - [`Extensions`], a type-keyed map for arbitrary Rust values that have no
//!   JSON representation.
//!
//! Contexts are never global. Scoping one per invocation keeps concurrent
//! builds independent and handlers testable in isolation.

use serde_json::Value;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Type-keyed storage for values with no JSON representation.
///
/// At most one value per type is stored; inserting again replaces the
/// previous value.
///
/// # Example
///
/// ```rust
/// use ubb_build::Context;
///
/// struct Theme { accent: &'static str }
///
/// let mut ctx = Context::new();
/// ctx.extensions.insert(Theme { accent: "teal" });
///
/// let theme = ctx.extensions.get::<Theme>().unwrap();
/// assert_eq!(theme.accent, "teal");
/// ```
#[derive(Default)]
pub struct Extensions {
    map: HashMap<TypeId, Box<dyn Any>>,
}

impl Extensions {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value of the same type if any.
    pub fn insert<T: 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|b| *b))
    }

    /// Returns a reference to the value of type `T`, if present.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Returns a mutable reference to the value of type `T`, if present.
    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    /// Removes and returns the value of type `T`, if present.
    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|b| *b))
    }

    /// Returns `true` if a value of type `T` is stored.
    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("len", &self.map.len())
            .finish()
    }
}

/// The mutable state bag threaded through one full traversal.
#[derive(Debug, Default)]
pub struct Context {
    values: HashMap<String, Value>,
    /// Type-keyed storage for non-JSON state.
    pub extensions: Extensions,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns a mutable reference to the value under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.values.get_mut(key)
    }

    /// Removes and returns the value under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Reads `key` as an integer counter. Missing or non-integer values
    /// read as zero.
    pub fn counter(&self, key: &str) -> i64 {
        self.values.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    /// Adds one to the counter under `key` and returns the new value.
    pub fn increment(&mut self, key: &str) -> i64 {
        let next = self.counter(key) + 1;
        self.values.insert(key.to_string(), Value::from(next));
        next
    }

    /// Subtracts one from the counter under `key` and returns the new value.
    pub fn decrement(&mut self, key: &str) -> i64 {
        let next = self.counter(key) - 1;
        self.values.insert(key.to_string(), Value::from(next));
        next
    }
}
