//! String predicates

use std::fmt;

use regex::Regex;

use crate::foundation::{Verifier, VerifyError, VerifyResult, all, any};
use crate::message::{Debugged, keys};

/// Predicates for string-like subjects (`&str`, `String`, `Cow<str>`, ...).
///
/// Character classes are Unicode-aware; lengths are counted in `char`s.
pub trait TextVerify: Sized {
    /// Verifies that the subject has no characters.
    fn empty(self) -> VerifyResult<Self>;

    /// Verifies that the subject is empty or whitespace only.
    fn blank(self) -> VerifyResult<Self>;

    /// Verifies that the subject starts with `prefix`.
    fn starts_with(self, prefix: &str) -> VerifyResult<Self>;

    /// Verifies that the subject starts with at least one of `prefixes`.
    fn starts_with_any(self, prefixes: &[&str]) -> VerifyResult<Self>;

    /// Verifies that the subject ends with `suffix`.
    fn ends_with(self, suffix: &str) -> VerifyResult<Self>;

    /// Verifies that the subject contains `needle`.
    fn contains(self, needle: &str) -> VerifyResult<Self>;

    /// Verifies that the subject contains `needle`, ignoring case.
    fn contains_ignore_case(self, needle: &str) -> VerifyResult<Self>;

    /// Verifies that the subject contains every one of `needles`.
    fn contains_all(self, needles: &[&str]) -> VerifyResult<Self>;

    /// Verifies that the subject contains at least one of `needles`.
    fn contains_any(self, needles: &[&str]) -> VerifyResult<Self>;

    /// Verifies equality with `other`, ignoring case.
    fn equal_to_ignore_case(self, other: &str) -> VerifyResult<Self>;

    /// Verifies that the subject is non-empty and contains only letters.
    fn alpha(self) -> VerifyResult<Self>;

    /// Verifies that the subject is non-empty and contains only letters or digits.
    fn alphanumeric(self) -> VerifyResult<Self>;

    /// Verifies that the subject is non-empty and contains only digits.
    fn numeric(self) -> VerifyResult<Self>;

    /// Verifies that the subject has no upper case characters.
    fn lower_case(self) -> VerifyResult<Self>;

    /// Verifies that the subject has no lower case characters.
    fn upper_case(self) -> VerifyResult<Self>;

    /// Verifies that the subject is exactly `length` characters long.
    fn length(self, length: usize) -> VerifyResult<Self>;

    /// Verifies that the subject length is within `min..=max`.
    ///
    /// Returns [`VerifyError::InvalidArgument`] when `min > max`.
    fn length_between(self, min: usize, max: usize) -> VerifyResult<Self>;

    /// Verifies that the whole subject matches the regular expression `pattern`.
    ///
    /// Returns [`VerifyError::InvalidArgument`] if `pattern` does not compile.
    fn matches(self, pattern: &str) -> VerifyResult<Self>;

    /// Verifies that `regex`, as built by the caller, matches the whole subject.
    ///
    /// The caller's builder options (case folding, size limits, ...) apply.
    /// The leftmost match must span the subject, so patterns with
    /// alternatives such as `a|ab` should be anchored by the caller.
    fn matches_regex(self, regex: &Regex) -> VerifyResult<Self>;
}

/// Compiles `pattern` so that it must match the whole subject.
fn anchored(pattern: &str) -> VerifyResult<Regex> {
    Regex::new(&format!("^(?:{pattern})$"))
        .map_err(|e| VerifyError::invalid_argument("pattern", e.to_string()))
}

impl<S> TextVerify for Verifier<S>
where
    S: AsRef<str> + fmt::Debug,
{
    fn empty(self) -> VerifyResult<Self> {
        let result = self.value().as_ref().is_empty();
        self.check_key(result, keys::TEXT_EMPTY, &[])
    }

    fn blank(self) -> VerifyResult<Self> {
        let result = self.value().as_ref().trim().is_empty();
        self.check_key(result, keys::TEXT_BLANK, &[])
    }

    fn starts_with(self, prefix: &str) -> VerifyResult<Self> {
        let result = self.value().as_ref().starts_with(prefix);
        self.check_key(result, keys::STARTS_WITH, &[&prefix])
    }

    fn starts_with_any(self, prefixes: &[&str]) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = any(prefixes, |prefix| text.starts_with(*prefix));
        self.check_key(result, keys::STARTS_WITH_ANY, &[&Debugged(prefixes)])
    }

    fn ends_with(self, suffix: &str) -> VerifyResult<Self> {
        let result = self.value().as_ref().ends_with(suffix);
        self.check_key(result, keys::ENDS_WITH, &[&suffix])
    }

    fn contains(self, needle: &str) -> VerifyResult<Self> {
        let result = self.value().as_ref().contains(needle);
        self.check_key(result, keys::TEXT_CONTAINS, &[&needle])
    }

    fn contains_ignore_case(self, needle: &str) -> VerifyResult<Self> {
        let haystack = self.value().as_ref().to_lowercase();
        let result = haystack.contains(&needle.to_lowercase());
        self.check_key(result, keys::TEXT_CONTAINS_IGNORE_CASE, &[&needle])
    }

    fn contains_all(self, needles: &[&str]) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = all(needles, |needle| text.contains(*needle));
        self.check_key(result, keys::TEXT_CONTAINS_ALL, &[&Debugged(needles)])
    }

    fn contains_any(self, needles: &[&str]) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = any(needles, |needle| text.contains(*needle));
        self.check_key(result, keys::TEXT_CONTAINS_ANY, &[&Debugged(needles)])
    }

    fn equal_to_ignore_case(self, other: &str) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = text.to_lowercase() == other.to_lowercase();
        self.check_key(result, keys::EQUAL_TO_IGNORE_CASE, &[&other])
    }

    fn alpha(self) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = !text.is_empty() && text.chars().all(char::is_alphabetic);
        self.check_key(result, keys::ALPHA, &[])
    }

    fn alphanumeric(self) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = !text.is_empty() && text.chars().all(char::is_alphanumeric);
        self.check_key(result, keys::ALPHANUMERIC, &[])
    }

    fn numeric(self) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = !text.is_empty() && text.chars().all(char::is_numeric);
        self.check_key(result, keys::NUMERIC, &[])
    }

    fn lower_case(self) -> VerifyResult<Self> {
        let result = !self.value().as_ref().chars().any(char::is_uppercase);
        self.check_key(result, keys::LOWER_CASE, &[])
    }

    fn upper_case(self) -> VerifyResult<Self> {
        let result = !self.value().as_ref().chars().any(char::is_lowercase);
        self.check_key(result, keys::UPPER_CASE, &[])
    }

    fn length(self, length: usize) -> VerifyResult<Self> {
        let result = self.value().as_ref().chars().count() == length;
        self.check_key(result, keys::TEXT_LENGTH, &[&length])
    }

    fn length_between(self, min: usize, max: usize) -> VerifyResult<Self> {
        if min > max {
            return Err(VerifyError::invalid_argument(
                "min",
                "minimum length must not exceed the maximum",
            ));
        }
        let length = self.value().as_ref().chars().count();
        let result = (min..=max).contains(&length);
        self.check_key(result, keys::TEXT_LENGTH_BETWEEN, &[&min, &max])
    }

    fn matches(self, pattern: &str) -> VerifyResult<Self> {
        let regex = anchored(pattern)?;
        let result = regex.is_match(self.value().as_ref());
        self.check_key(result, keys::MATCHES, &[&pattern])
    }

    fn matches_regex(self, regex: &Regex) -> VerifyResult<Self> {
        let text = self.value().as_ref();
        let result = regex
            .find(text)
            .is_some_and(|m| m.start() == 0 && m.end() == text.len());
        self.check_key(result, keys::MATCHES, &[&regex.as_str()])
    }
}
