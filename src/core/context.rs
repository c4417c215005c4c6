//! Per-call context values and call-site metadata
//!
//! This module provides:
//! - `ContextValue`: a text value or a lazily evaluated closure
//! - `Context`: caller-supplied key-value overrides for the template
//! - `CallSite`: where in the source a log call was made

use std::collections::HashMap;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// A value supplied for template interpolation.
///
/// `Lazy` values are zero-argument closures evaluated at log time, and
/// only once per call — useful for values that are expensive or change
/// between the call and the actual write.
pub enum ContextValue {
    Text(String),
    Lazy(Box<dyn Fn() -> String + Send>),
}

impl ContextValue {
    /// Wrap a closure for deferred evaluation.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + 'static,
    {
        ContextValue::Lazy(Box::new(f))
    }

    /// Produce the rendered text, invoking a lazy closure.
    pub fn resolve(self) -> String {
        match self {
            ContextValue::Text(s) => s,
            ContextValue::Lazy(f) => f(),
        }
    }
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            ContextValue::Lazy(_) => f.debug_tuple("Lazy").field(&"<closure>").finish(),
        }
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::Text(s)
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::Text(s.to_string())
    }
}

impl From<i64> for ContextValue {
    fn from(i: i64) -> Self {
        ContextValue::Text(i.to_string())
    }
}

impl From<u32> for ContextValue {
    fn from(i: u32) -> Self {
        ContextValue::Text(i.to_string())
    }
}

impl From<bool> for ContextValue {
    fn from(b: bool) -> Self {
        ContextValue::Text(b.to_string())
    }
}

/// Caller-supplied context merged into the template's substitution set.
///
/// Keys here override same-named standard keys (`time`, `name`,
/// `message`, ...), and may introduce entirely new placeholders.
#[derive(Debug, Default)]
pub struct Context {
    values: HashMap<String, ContextValue>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Add a value to the context
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Add a lazily evaluated value to the context
    pub fn with_lazy<K, F>(mut self, key: K, f: F) -> Self
    where
        K: Into<String>,
        F: Fn() -> String + Send + 'static,
    {
        self.values.insert(key.into(), ContextValue::lazy(f));
        self
    }

    /// Add a value to the context (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl IntoIterator for Context {
    type Item = (String, ContextValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, ContextValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Call-site metadata recorded for each entry.
///
/// Rust has no stack introspection for recovering the enclosing function
/// name, so `function` defaults to the [`CallSite::MODULE_LEVEL`] sentinel
/// and callers who care supply their own via [`Context`] or an explicit
/// `CallSite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    /// Sentinel used when the enclosing function cannot be named.
    pub const MODULE_LEVEL: &'static str = "<module>";

    /// Capture the caller's location.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
            function: Self::MODULE_LEVEL,
        }
    }

    /// Build a call site with an explicit function name.
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Module name derived from the source file stem.
    pub fn module(&self) -> &str {
        Path::new(self.file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("<unknown>")
    }
}
