//! Option parsers — arity + default + conversion, as data.

use std::any::Any;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::args::arity::Arity;
use crate::args::convert::{self, Converter};
use crate::args::error::{ArgsError, BoxError};
use crate::args::tokenizer;

/// A parsed option value, erased so the registry can hold every kind.
#[derive(Clone)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Str(String),
    IntList(Vec<i32>),
    StrList(Vec<String>),
    /// Value of a caller-registered kind; read back with `downcast_ref`.
    Other(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap an arbitrary value as [`Value::Other`].
    pub fn other<T: Any + Send + Sync>(value: T) -> Self {
        Value::Other(Arc::new(value))
    }

    /// Name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::IntList(_) => "integer-list",
            Value::StrList(_) => "string-list",
            Value::Other(_) => "other",
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Other(inner) => inner.downcast_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::IntList(v) => f.debug_tuple("IntList").field(v).finish(),
            Value::StrList(v) => f.debug_tuple("StrList").field(v).finish(),
            Value::Other(_) => f.write_str("Other(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::IntList(a), Value::IntList(b)) => a == b,
            (Value::StrList(a), Value::StrList(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(v) => v.serialize(serializer),
            Value::Int(v) => v.serialize(serializer),
            Value::Str(v) => v.serialize(serializer),
            Value::IntList(v) => v.serialize(serializer),
            Value::StrList(v) => v.serialize(serializer),
            // Opaque to serde.
            Value::Other(_) => serializer.serialize_unit(),
        }
    }
}

/// Types an [`OptionParser`] can produce.
///
/// The default method stores the value as [`Value::Other`]; implement it
/// with an empty body for your own types.
pub trait OptionValue: Clone + Send + Sync + 'static {
    fn into_value(self) -> Value {
        Value::other(self)
    }
}

impl OptionValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl OptionValue for i32 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl OptionValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl OptionValue for Vec<i32> {
    fn into_value(self) -> Value {
        Value::IntList(self)
    }
}

impl OptionValue for Vec<String> {
    fn into_value(self) -> Value {
        Value::StrList(self)
    }
}

macro_rules! other_option_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OptionValue for $ty {}
            impl OptionValue for Vec<$ty> {}
        )*
    };
}

other_option_values!(i64, u16, u32, u64, f64, char, PathBuf);

type Assemble<T> = Arc<dyn Fn(&str, &[String]) -> Result<T, ArgsError> + Send + Sync>;

/// Parser for one option kind: arity policy, default and conversion.
#[derive(Clone)]
pub struct OptionParser<T> {
    arity: Arity,
    default: T,
    assemble: Assemble<T>,
}

/// Boolean flag: `true` when present, `false` when absent.
pub fn boolean() -> OptionParser<bool> {
    OptionParser {
        arity: Arity::Flag,
        default: false,
        assemble: Arc::new(|_: &str, _: &[String]| Ok::<_, ArgsError>(true)),
    }
}

/// Single-value option converted with `parse`.
pub fn unary<T, E, F>(default: T, parse: F) -> OptionParser<T>
where
    T: 'static,
    E: Into<BoxError> + 'static,
    F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
{
    let convert_fn: Converter<T> = convert::converter(parse);
    OptionParser {
        arity: Arity::Single,
        default,
        assemble: Arc::new(move |flag: &str, segment: &[String]| {
            convert::convert_single(flag, segment, &convert_fn)
        }),
    }
}

/// List option; every value is converted with `parse`, in order.
pub fn list<T, E, F>(default: Vec<T>, parse: F) -> OptionParser<Vec<T>>
where
    T: 'static,
    E: Into<BoxError> + 'static,
    F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
{
    let convert_fn: Converter<T> = convert::converter(parse);
    OptionParser {
        arity: Arity::List,
        default,
        assemble: Arc::new(move |flag: &str, segment: &[String]| {
            convert::convert_list(flag, segment, &convert_fn)
        }),
    }
}

impl<T: Clone> OptionParser<T> {
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Same parser with a different value for the absent case.
    pub fn with_default(mut self, default: T) -> Self {
        self.default = default;
        self
    }

    /// Parse the first occurrence of `-<flag>` in `arguments`.
    ///
    /// Absent flags yield the default; otherwise the segment is validated
    /// against the arity before conversion.
    pub fn parse(&self, arguments: &[String], flag: &str) -> Result<T, ArgsError> {
        let Some(segment) = tokenizer::extract(arguments, flag) else {
            tracing::trace!(flag, "option absent, using default");
            return Ok(self.default.clone());
        };

        self.arity.validate(flag, segment)?;
        (self.assemble)(flag, segment)
    }
}

impl<T> fmt::Debug for OptionParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionParser")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Object-safe view of a parser, as stored in the registry.
pub trait ParseOption: Send + Sync {
    fn arity(&self) -> Arity;

    fn parse_value(&self, arguments: &[String], flag: &str) -> Result<Value, ArgsError>;
}

impl<T: OptionValue> ParseOption for OptionParser<T> {
    fn arity(&self) -> Arity {
        self.arity
    }

    fn parse_value(&self, arguments: &[String], flag: &str) -> Result<Value, ArgsError> {
        self.parse(arguments, flag).map(OptionValue::into_value)
    }
}
