//! Parser registry — kind identifier → parser.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::args::convert;
use crate::args::parser::{self, ParseOption};

/// Kind identifiers registered by [`ParserRegistry::builtin`].
pub const BOOLEAN: &str = "boolean";
pub const INTEGER: &str = "integer";
pub const STRING: &str = "string";
pub const INTEGER_LIST: &str = "integer-list";
pub const STRING_LIST: &str = "string-list";

/// Lookup table from kind identifier to parser.
///
/// Built once, then only read; cloning shares the parsers.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: BTreeMap<String, Arc<dyn ParseOption>>,
}

impl ParserRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in kinds.
    ///
    /// | kind           | arity  | default |
    /// |----------------|--------|---------|
    /// | `boolean`      | Flag   | `false` |
    /// | `integer`      | Single | `0`     |
    /// | `string`       | Single | `""`    |
    /// | `integer-list` | List   | `[]`    |
    /// | `string-list`  | List   | `[]`    |
    pub fn builtin() -> Self {
        Self::new()
            .register(BOOLEAN, parser::boolean())
            .register(INTEGER, parser::unary(0, convert::integer))
            .register(STRING, parser::unary(String::new(), convert::string))
            .register(INTEGER_LIST, parser::list(Vec::new(), convert::integer))
            .register(STRING_LIST, parser::list(Vec::new(), convert::string))
    }

    /// Add a parser for `kind`, replacing any earlier registration.
    pub fn register<P>(mut self, kind: &str, parser: P) -> Self
    where
        P: ParseOption + 'static,
    {
        if self.parsers.insert(kind.to_string(), Arc::new(parser)).is_some() {
            tracing::debug!(kind, "replaced registered parser");
        }
        self
    }

    pub fn lookup(&self, kind: &str) -> Option<&dyn ParseOption> {
        self.parsers.get(kind).map(|parser| parser.as_ref())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.parsers.contains_key(kind)
    }

    /// Registered kind identifiers, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}

/// Process-wide built-in registry, initialised on first use.
pub fn default_registry() -> &'static ParserRegistry {
    static REGISTRY: OnceLock<ParserRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ParserRegistry::builtin)
}
