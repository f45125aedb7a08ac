//! Symbolic message keys
//!
//! A [`MessageKey`] pairs a stable code (used for lookups in a
//! [`MessageSource`](super::MessageSource) and for programmatic handling of
//! failures) with an English default pattern used when no source provides a
//! translation.

use std::fmt;

/// A symbolic, localizable message.
///
/// Keys are plain `Copy` values, so predicate sets outside this crate can
/// declare their own:
///
/// ```rust,ignore
/// use vouch::message::MessageKey;
///
/// const PALINDROME: MessageKey = MessageKey::new("text.palindrome", "be a palindrome");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageKey {
    code: &'static str,
    default_pattern: &'static str,
}

impl MessageKey {
    /// Creates a key from its code and English default pattern.
    pub const fn new(code: &'static str, default_pattern: &'static str) -> Self {
        Self {
            code,
            default_pattern,
        }
    }

    /// The lookup code, e.g. `"number.even"`.
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// The pattern used when no message source translates this key.
    pub const fn default_pattern(&self) -> &'static str {
        self.default_pattern
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

// ============================================================================
// BUILT-IN KEYS
// ============================================================================

/// Keys used by the built-in predicate sets.
///
/// Patterns describe what the subject "must" do; the default reporter wraps
/// them with the subject name through [`DEFAULT_TEMPLATE`](keys::DEFAULT_TEMPLATE).
pub mod keys {
    use super::MessageKey;

    /// Wraps a rendered description with the subject name.
    pub const DEFAULT_TEMPLATE: MessageKey = MessageKey::new("verifier.default", "{0} must {1}");

    // General
    pub const EQUAL_TO: MessageKey = MessageKey::new("object.equal_to", "be equal to {0}");
    pub const SAME_AS: MessageKey = MessageKey::new("object.same_as", "be same as {0}");
    pub const ONE_OF: MessageKey = MessageKey::new("object.one_of", "be one of {0}");
    pub const SATISFY_ANY: MessageKey =
        MessageKey::new("object.satisfy_any", "satisfy any of {0} conditions");
    pub const SATISFY_ALL: MessageKey =
        MessageKey::new("object.satisfy_all", "satisfy all of {0} conditions");
    pub const TYPE_OF: MessageKey = MessageKey::new("object.type_of", "be an instance of {0}");

    // Comparable
    pub const GREATER_THAN: MessageKey =
        MessageKey::new("comparable.greater_than", "be greater than {0}");
    pub const GREATER_THAN_OR_EQUAL_TO: MessageKey = MessageKey::new(
        "comparable.greater_than_or_equal_to",
        "be greater than or equal to {0}",
    );
    pub const LESS_THAN: MessageKey = MessageKey::new("comparable.less_than", "be less than {0}");
    pub const LESS_THAN_OR_EQUAL_TO: MessageKey = MessageKey::new(
        "comparable.less_than_or_equal_to",
        "be less than or equal to {0}",
    );
    pub const BETWEEN: MessageKey =
        MessageKey::new("comparable.between", "be between {0} and {1} (inclusive)");
    pub const BETWEEN_EXCLUSIVE: MessageKey = MessageKey::new(
        "comparable.between_exclusive",
        "be between {0} and {1} (exclusive)",
    );

    // Numeric
    pub const EVEN: MessageKey = MessageKey::new("number.even", "be even");
    pub const ODD: MessageKey = MessageKey::new("number.odd", "be odd");
    pub const POSITIVE: MessageKey = MessageKey::new("number.positive", "be positive");
    pub const NEGATIVE: MessageKey = MessageKey::new("number.negative", "be negative");
    pub const ZERO: MessageKey = MessageKey::new("number.zero", "be zero");
    pub const ONE: MessageKey = MessageKey::new("number.one", "be one");
    pub const DIVISIBLE_BY: MessageKey =
        MessageKey::new("number.divisible_by", "be divisible by {0}");

    // Truthy
    pub const TRUTHY: MessageKey = MessageKey::new("truth.truthy", "be true");
    pub const FALSY: MessageKey = MessageKey::new("truth.falsy", "be false");

    // Option
    pub const SOME: MessageKey = MessageKey::new("option.some", "be present");
    pub const NONE: MessageKey = MessageKey::new("option.none", "be absent");

    // Text
    pub const TEXT_EMPTY: MessageKey = MessageKey::new("text.empty", "be empty");
    pub const TEXT_BLANK: MessageKey = MessageKey::new("text.blank", "be blank");
    pub const STARTS_WITH: MessageKey = MessageKey::new("text.starts_with", "start with '{0}'");
    pub const STARTS_WITH_ANY: MessageKey =
        MessageKey::new("text.starts_with_any", "start with any of {0}");
    pub const ENDS_WITH: MessageKey = MessageKey::new("text.ends_with", "end with '{0}'");
    pub const TEXT_CONTAINS: MessageKey = MessageKey::new("text.contains", "contain '{0}'");
    pub const TEXT_CONTAINS_IGNORE_CASE: MessageKey = MessageKey::new(
        "text.contains_ignore_case",
        "contain '{0}' (ignore case)",
    );
    pub const TEXT_CONTAINS_ALL: MessageKey =
        MessageKey::new("text.contains_all", "contain all of {0}");
    pub const TEXT_CONTAINS_ANY: MessageKey =
        MessageKey::new("text.contains_any", "contain any of {0}");
    pub const EQUAL_TO_IGNORE_CASE: MessageKey =
        MessageKey::new("text.equal_to_ignore_case", "be equal to '{0}' (ignore case)");
    pub const ALPHA: MessageKey = MessageKey::new("text.alpha", "contain only letters");
    pub const ALPHANUMERIC: MessageKey =
        MessageKey::new("text.alphanumeric", "contain only letters or digits");
    pub const NUMERIC: MessageKey = MessageKey::new("text.numeric", "contain only digits");
    pub const LOWER_CASE: MessageKey = MessageKey::new("text.lower_case", "be all lower case");
    pub const UPPER_CASE: MessageKey = MessageKey::new("text.upper_case", "be all upper case");
    pub const TEXT_LENGTH: MessageKey = MessageKey::new("text.length", "have length of {0}");
    pub const TEXT_LENGTH_BETWEEN: MessageKey =
        MessageKey::new("text.length_between", "have length between {0} and {1}");
    pub const MATCHES: MessageKey = MessageKey::new("text.matches", "match '{0}'");

    // Collections and maps
    pub const COLLECTION_EMPTY: MessageKey = MessageKey::new("collection.empty", "be empty");
    pub const SIZE_OF: MessageKey = MessageKey::new("collection.size_of", "have a size of {0}");
    pub const SIZE_BETWEEN: MessageKey =
        MessageKey::new("collection.size_between", "have a size between {0} and {1}");
    pub const COLLECTION_CONTAINS: MessageKey =
        MessageKey::new("collection.contains", "contain {0}");
    pub const COLLECTION_CONTAINS_ALL: MessageKey =
        MessageKey::new("collection.contains_all", "contain all of {0}");
    pub const COLLECTION_CONTAINS_ANY: MessageKey =
        MessageKey::new("collection.contains_any", "contain any of {0}");
    pub const ALL_MATCH: MessageKey =
        MessageKey::new("collection.all_match", "have all elements {0}");
    pub const ANY_MATCH: MessageKey =
        MessageKey::new("collection.any_match", "have any element {0}");
    pub const CONTAINS_KEY: MessageKey = MessageKey::new("map.contains_key", "contain key {0}");
    pub const CONTAINS_VALUE: MessageKey =
        MessageKey::new("map.contains_value", "contain value {0}");

    // Temporal
    pub const BEFORE: MessageKey = MessageKey::new("time.before", "be before {0}");
    pub const AFTER: MessageKey = MessageKey::new("time.after", "be after {0}");
    pub const SAME_DAY_AS: MessageKey = MessageKey::new("time.same_day_as", "be same day as {0}");
    pub const WEEKDAY: MessageKey = MessageKey::new("time.weekday", "be on a {0}");
    pub const WEEKEND: MessageKey = MessageKey::new("time.weekend", "be on a weekend");
    pub const LEAP_YEAR: MessageKey = MessageKey::new("time.leap_year", "be in a leap year");
    pub const YEAR: MessageKey = MessageKey::new("time.year", "be in year {0}");

    // Errors
    pub const MESSAGE_CONTAINS: MessageKey =
        MessageKey::new("error.message_contains", "have a message containing '{0}'");
    pub const CAUSED: MessageKey = MessageKey::new("error.caused", "have a cause");
    pub const CAUSED_BY: MessageKey = MessageKey::new("error.caused_by", "have been caused by {0}");

    // Locales
    pub const LANGUAGE: MessageKey = MessageKey::new("locale.language", "be language '{0}'");
    pub const COUNTRY: MessageKey = MessageKey::new("locale.country", "be country '{0}'");
    pub const DEFAULT_LOCALE: MessageKey =
        MessageKey::new("locale.default", "be the default locale");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_accessors() {
        assert_eq!(keys::EVEN.code(), "number.even");
        assert_eq!(keys::EVEN.default_pattern(), "be even");
        assert_eq!(keys::EVEN.to_string(), "number.even");
    }

    #[test]
    fn test_custom_key_is_const() {
        const PALINDROME: MessageKey = MessageKey::new("text.palindrome", "be a palindrome");
        assert_eq!(PALINDROME.code(), "text.palindrome");
    }
}
