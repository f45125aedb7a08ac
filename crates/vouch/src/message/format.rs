//! Positional message formatting.
//!
//! Patterns use `{0}`, `{1}`, ... placeholders that index into the argument
//! list. `{{` and `}}` produce literal braces. A placeholder that is out of
//! range or not a number is copied verbatim, so rendering a diagnostic never
//! fails.

use std::fmt::{self, Write};

/// Arguments substituted into a message pattern.
pub type Args<'a> = &'a [&'a dyn fmt::Display];

/// Formats `pattern` against `args`.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::message::format_pattern;
///
/// assert_eq!(format_pattern("be between {0} and {1}", &[&1, &5]), "be between 1 and 5");
/// assert_eq!(format_pattern("{{literal}} {3}", &[]), "{literal} {3}");
/// ```
pub fn format_pattern(pattern: &str, args: Args<'_>) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        match tail.find('}') {
            Some(end) => {
                let placeholder = &tail[..=end];
                match tail[1..end].trim().parse::<usize>().ok().and_then(|i| args.get(i)) {
                    Some(arg) => {
                        // Writing to a String cannot fail.
                        let _ = write!(out, "{arg}");
                    }
                    None => out.push_str(placeholder),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// ARGUMENT ADAPTERS
// ============================================================================

/// Displays a value through its `Debug` implementation.
///
/// Lets predicates pass subjects and operands that are not `Display` as
/// message arguments.
pub struct Debugged<'a, T: ?Sized>(pub &'a T);

impl<T: fmt::Debug + ?Sized> fmt::Display for Debugged<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positional_arguments() {
        assert_eq!(format_pattern("{1} then {0}", &[&"a", &"b"]), "b then a");
    }

    #[test]
    fn test_repeated_argument() {
        assert_eq!(format_pattern("{0}{0}", &[&7]), "77");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(format_pattern("{{0}} is {0}", &[&1]), "{0} is 1");
        assert_eq!(format_pattern("a }} b", &[]), "a } b");
    }

    #[test]
    fn test_missing_argument_kept_verbatim() {
        assert_eq!(format_pattern("be {0} and {1}", &[&"x"]), "be x and {1}");
        assert_eq!(format_pattern("{name}", &[&"x"]), "{name}");
    }

    #[test]
    fn test_unterminated_placeholder() {
        assert_eq!(format_pattern("open {0", &[&1]), "open {0");
        assert_eq!(format_pattern("stray } brace", &[]), "stray } brace");
    }

    #[test]
    fn test_debugged_adapter() {
        let items = vec![1, 2];
        assert_eq!(format_pattern("one of {0}", &[&Debugged(&items)]), "one of [1, 2]");
        assert_eq!(Debugged("x").to_string(), "\"x\"");
    }
}
