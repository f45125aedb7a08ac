//! Message sources: where localized patterns come from.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::key::MessageKey;
use super::locale::Locale;

// ============================================================================
// MESSAGE SOURCE TRAIT
// ============================================================================

/// Looks up the pattern for a message key in one locale.
///
/// Implementations only answer for the exact locale they are asked about;
/// language fallback and built-in defaults are applied by [`resolve_pattern`].
/// A source is only consulted while a message is being rendered, which for
/// the default reporter means only when a check fails.
pub trait MessageSource: Send + Sync {
    /// Returns the pattern for `key` in `locale`, or `None` if unknown.
    fn pattern(&self, key: &MessageKey, locale: &Locale) -> Option<Cow<'_, str>>;
}

/// Resolves the pattern for `key`, walking the locale fallbacks.
///
/// Falls back to the key's built-in pattern, then to the key code itself.
pub fn resolve_pattern<'s>(
    source: &'s dyn MessageSource,
    key: &MessageKey,
    locale: &Locale,
) -> Cow<'s, str> {
    for candidate in locale.fallbacks() {
        if let Some(pattern) = source.pattern(key, &candidate) {
            return pattern;
        }
    }

    if key.default_pattern().is_empty() {
        Cow::Borrowed(key.code())
    } else {
        Cow::Borrowed(key.default_pattern())
    }
}

// ============================================================================
// BUILT-IN MESSAGES
// ============================================================================

/// A source that never translates, leaving every key at its English default.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMessages;

impl MessageSource for BuiltinMessages {
    fn pattern(&self, _key: &MessageKey, _locale: &Locale) -> Option<Cow<'_, str>> {
        None
    }
}

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// In-memory per-locale message bundles.
///
/// Deserializes from a map of locale tag to `{ code: pattern }`:
///
/// ```json
/// {
///   "fr": { "number.even": "être pair", "verifier.default": "{0} doit {1}" },
///   "fr-CA": { "number.odd": "être impair" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    bundles: HashMap<Locale, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one pattern.
    pub fn insert(
        &mut self,
        locale: Locale,
        code: impl Into<String>,
        pattern: impl Into<String>,
    ) -> &mut Self {
        self.bundles
            .entry(locale)
            .or_default()
            .insert(code.into(), pattern.into());
        self
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(
        mut self,
        locale: Locale,
        code: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.insert(locale, code, pattern);
        self
    }

    /// Merges `other` into this catalog; entries in `other` win.
    pub fn merge(&mut self, other: MessageCatalog) {
        for (locale, bundle) in other.bundles {
            self.bundles.entry(locale).or_default().extend(bundle);
        }
    }

    /// Locales with at least one pattern.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }

    /// Returns `true` if the catalog holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.bundles.values().all(HashMap::is_empty)
    }
}

impl MessageSource for MessageCatalog {
    fn pattern(&self, key: &MessageKey, locale: &Locale) -> Option<Cow<'_, str>> {
        self.bundles
            .get(locale)
            .and_then(|bundle| bundle.get(key.code()))
            .map(|pattern| Cow::Borrowed(pattern.as_str()))
    }
}
