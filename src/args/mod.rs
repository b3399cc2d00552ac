//! Option parsing core.
//!
//! Each schema field goes through the same linear pipeline:
//!
//! ```text
//! Arguments → Locate → Extract segment → Validate arity → Convert → Value
//! ```
//!
//! Every stage is a pure function over the shared, read-only argument list,
//! so fields are independent of each other.

mod arity;
mod binder;
pub mod convert;
mod error;
pub mod parser;
mod registry;
mod schema;
pub mod tokenizer;

pub use arity::Arity;
pub use binder::{Args, FromArgs, ParsedOptions};
pub use error::{ArgsError, BoxError};
pub use parser::{boolean, list, unary, OptionParser, OptionValue, ParseOption, Value};
pub use registry::{
    default_registry, ParserRegistry, BOOLEAN, INTEGER, INTEGER_LIST, STRING, STRING_LIST,
};
pub use schema::{FieldSpec, Schema};
