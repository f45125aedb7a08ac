//! Locale identifiers used for message lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language tag with an optional country, e.g. `en` or `en-GB`.
///
/// Parsing accepts `-` and `_` as separators. The language is stored lower
/// case and the country upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

/// Error returned when a locale tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid locale tag `{tag}`: {reason}")]
pub struct LocaleParseError {
    tag: String,
    reason: &'static str,
}

impl Locale {
    /// Creates a locale from a language code.
    pub fn new(language: impl AsRef<str>) -> Self {
        Self {
            language: language.as_ref().to_ascii_lowercase(),
            country: None,
        }
    }

    /// Creates a locale from a language and a country code.
    pub fn with_country(language: impl AsRef<str>, country: impl AsRef<str>) -> Self {
        Self {
            language: language.as_ref().to_ascii_lowercase(),
            country: Some(country.as_ref().to_ascii_uppercase()),
        }
    }

    /// English, the locale of the built-in patterns.
    pub fn english() -> Self {
        Self::new("en")
    }

    /// The language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The country code, if any.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Candidate locales for a lookup, most specific first.
    pub fn fallbacks(&self) -> impl Iterator<Item = Locale> + '_ {
        let language_only = self.country.is_some().then(|| Self::new(&self.language));
        std::iter::once(self.clone()).chain(language_only)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| LocaleParseError {
            tag: tag.to_owned(),
            reason,
        };

        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("language must be alphabetic"));
        }

        let locale = match parts.next() {
            None => Self::new(language),
            Some(country)
                if !country.is_empty() && country.chars().all(|c| c.is_ascii_alphanumeric()) =>
            {
                Self::with_country(language, country)
            }
            Some(_) => return Err(invalid("country must be alphanumeric")),
        };

        if parts.next().is_some() {
            return Err(invalid("too many subtags"));
        }
        Ok(locale)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleParseError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
