//! Tokenizer — locate a flag and cut out the values that follow it.

/// Render the literal token a flag is matched against (`p` → `-p`).
pub fn flag_token(flag: &str) -> String {
    format!("-{}", flag)
}

/// Index of the first token equal to `-<flag>`.
///
/// Later occurrences of the same flag are ignored.
pub fn locate(arguments: &[String], flag: &str) -> Option<usize> {
    let token = flag_token(flag);
    arguments.iter().position(|arg| *arg == token)
}

/// Whether a token starts a new flag and therefore ends the current segment.
///
/// Any token beginning with `-` counts, except negative numbers (`-3`,
/// `-14`), which stay inside the segment as values.
// TODO: a negative value directly after a single-value flag (`-p -3`) is
// accepted as a value too; revisit if registered-flag matching is added.
pub fn is_flag_boundary(token: &str) -> bool {
    match token.strip_prefix('-') {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

/// Whether `flag` can be declared on a field.
///
/// The name must be non-empty and must not start with `-` or an ASCII digit,
/// so its token is always a segment boundary and never a value.
pub fn is_valid_flag_name(flag: &str) -> bool {
    match flag.chars().next() {
        Some(first) => first != '-' && !first.is_ascii_digit(),
        None => false,
    }
}

/// Tokens after `flag_index` up to the next flag boundary or end of list.
pub fn segment(arguments: &[String], flag_index: usize) -> &[String] {
    let start = (flag_index + 1).min(arguments.len());
    let end = arguments[start..]
        .iter()
        .position(|arg| is_flag_boundary(arg))
        .map_or(arguments.len(), |offset| start + offset);
    &arguments[start..end]
}

/// Segment belonging to the first occurrence of `flag`, or `None` if absent.
pub fn extract<'a>(arguments: &'a [String], flag: &str) -> Option<&'a [String]> {
    locate(arguments, flag).map(|index| segment(arguments, index))
}
