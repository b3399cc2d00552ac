//! Value conversion — raw tokens → typed values.

use std::sync::Arc;

use crate::args::error::{ArgsError, BoxError};

/// Per-token conversion function, shared between parser clones and threads.
pub type Converter<T> = Arc<dyn Fn(&str) -> Result<T, BoxError> + Send + Sync>;

/// Wrap a plain conversion function as a [`Converter`].
pub fn converter<T, E, F>(f: F) -> Converter<T>
where
    T: 'static,
    E: Into<BoxError> + 'static,
    F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
{
    Arc::new(move |raw: &str| f(raw).map_err(Into::into))
}

/// Integer conversion (`i32`); rejects suffixes such as `8080L`.
pub fn integer(raw: &str) -> Result<i32, std::num::ParseIntError> {
    raw.parse()
}

/// Identity conversion for string options.
pub fn string(raw: &str) -> Result<String, std::convert::Infallible> {
    Ok(raw.to_string())
}

/// Convert the sole token of a validated single-value segment.
pub fn convert_single<T>(
    flag: &str,
    segment: &[String],
    convert: &Converter<T>,
) -> Result<T, ArgsError> {
    match segment {
        [raw] => apply(flag, raw, convert),
        [] => Err(ArgsError::InsufficientArguments {
            flag: flag.to_string(),
        }),
        _ => Err(ArgsError::TooManyArguments {
            flag: flag.to_string(),
        }),
    }
}

/// Convert every token of a validated list segment, preserving order.
///
/// The first failing token aborts the whole list.
pub fn convert_list<T>(
    flag: &str,
    segment: &[String],
    convert: &Converter<T>,
) -> Result<Vec<T>, ArgsError> {
    segment.iter().map(|raw| apply(flag, raw, convert)).collect()
}

fn apply<T>(flag: &str, raw: &str, convert: &Converter<T>) -> Result<T, ArgsError> {
    convert(raw).map_err(|source| ArgsError::InvalidValueFormat {
        flag: flag.to_string(),
        raw: raw.to_string(),
        source,
    })
}
