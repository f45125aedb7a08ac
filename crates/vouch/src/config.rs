//! Verification settings and their serialized configuration.
//!
//! [`Settings`] bundle everything a [`Verifier`](crate::Verifier) reports
//! through: the reporter chain, the message source, the locale and the
//! default subject name. They are immutable once built and shared via `Arc`.
//!
//! [`VerifierConfig`] is the serializable form, suitable for loading from a
//! JSON file:
//!
//! ```json
//! {
//!   "locale": "fr-FR",
//!   "default_name": "valeur",
//!   "log_outcomes": true,
//!   "messages": {
//!     "fr": { "verifier.default": "{0} doit {1}", "number.even": "être pair" }
//!   }
//! }
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::message::{BuiltinMessages, Locale, MessageCatalog, MessageSource};
use crate::report::{DefaultReporter, LoggingReporter, ReportExecutor, Reporter};

/// Subject name used when a verification is not named.
pub const DEFAULT_NAME: &str = "value";

// ============================================================================
// SETTINGS
// ============================================================================

/// Immutable configuration shared by verification sessions.
pub struct Settings {
    executor: ReportExecutor,
    messages: Arc<dyn MessageSource>,
    locale: Locale,
    default_name: Cow<'static, str>,
}

impl Settings {
    /// Starts building settings.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Process-wide default settings: the default reporter, built-in English
    /// messages and [`DEFAULT_NAME`].
    ///
    /// Built once on first use and never changed afterwards.
    pub fn global() -> Arc<Settings> {
        static GLOBAL: OnceLock<Arc<Settings>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Settings::default())))
    }

    /// The reporter chain.
    pub fn executor(&self) -> &ReportExecutor {
        &self.executor
    }

    /// The message source.
    pub fn messages(&self) -> &dyn MessageSource {
        self.messages.as_ref()
    }

    /// The locale messages are rendered for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Subject name used when a verification is not named.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("executor", &self.executor)
            .field("locale", &self.locale)
            .field("default_name", &self.default_name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SETTINGS BUILDER
// ============================================================================

/// Builder for [`Settings`].
///
/// The [`DefaultReporter`] is included unless
/// [`without_default_reporter`](Self::without_default_reporter) is called.
pub struct SettingsBuilder {
    reporters: Vec<Arc<dyn Reporter>>,
    default_reporter: bool,
    messages: Arc<dyn MessageSource>,
    locale: Locale,
    default_name: Cow<'static, str>,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            reporters: Vec::new(),
            default_reporter: true,
            messages: Arc::new(BuiltinMessages),
            locale: Locale::default(),
            default_name: Cow::Borrowed(DEFAULT_NAME),
        }
    }
}

impl SettingsBuilder {
    /// Adds a reporter to the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporters.push(Arc::new(reporter));
        self
    }

    /// Adds a reporter the caller keeps a handle to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporters.push(reporter);
        self
    }

    /// Leaves the [`DefaultReporter`] out of the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_default_reporter(mut self) -> Self {
        self.default_reporter = false;
        self
    }

    /// Sets the message source.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: impl MessageSource + 'static) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    /// Sets a shared message source.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_messages(mut self, messages: Arc<dyn MessageSource>) -> Self {
        self.messages = messages;
        self
    }

    /// Sets the locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the subject name used when a verification is not named.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Builds the settings, sorting the reporter chain.
    pub fn build(self) -> Settings {
        let mut reporters = self.reporters;
        if self.default_reporter {
            reporters.push(Arc::new(DefaultReporter));
        }

        Settings {
            executor: ReportExecutor::new(reporters),
            messages: self.messages,
            locale: self.locale,
            default_name: self.default_name,
        }
    }
}

// ============================================================================
// SERIALIZED CONFIG
// ============================================================================

/// Error loading a [`VerifierConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid verifier config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serializable verification configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Locale for messages; English when absent.
    pub locale: Option<Locale>,
    /// Subject name used when a verification is not named.
    pub default_name: Option<String>,
    /// Log every check outcome through [`LoggingReporter`].
    pub log_outcomes: bool,
    /// Message overrides per locale.
    pub messages: MessageCatalog,
}

impl VerifierConfig {
    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turns the config into a builder, so reporters can still be added.
    pub fn into_builder(self) -> SettingsBuilder {
        let mut builder = Settings::builder();
        if let Some(locale) = self.locale {
            builder = builder.with_locale(locale);
        }
        if let Some(name) = self.default_name {
            builder = builder.with_default_name(name);
        }
        if self.log_outcomes {
            builder = builder.with_reporter(LoggingReporter::new());
        }
        if !self.messages.is_empty() {
            builder = builder.with_messages(self.messages);
        }
        builder
    }

    /// Builds settings from the config.
    pub fn into_settings(self) -> Settings {
        self.into_builder().build()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_name(), "value");
        assert_eq!(settings.locale(), &Locale::english());
        assert_eq!(settings.executor().len(), 1);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&Settings::global(), &Settings::global()));
    }

    #[test]
    fn test_builder_without_default_reporter() {
        let settings = Settings::builder().without_default_reporter().build();
        assert!(settings.executor().is_empty());
    }

    #[test]
    fn test_default_reporter_runs_last() {
        let settings = Settings::builder()
            .with_reporter(LoggingReporter::new().with_weight(i32::MAX))
            .build();
        let names: Vec<&str> = settings.executor().reporters().map(|r| r.name()).collect();
        assert_eq!(names, vec!["logging", "default"]);
    }

    #[test]
    fn test_config_from_json() {
        let config = VerifierConfig::from_json(
            r#"{
                "locale": "fr_FR",
                "default_name": "valeur",
                "log_outcomes": true,
                "messages": { "fr": { "number.even": "être pair" } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.locale, Some(Locale::with_country("fr", "FR")));
        let settings = config.into_settings();
        assert_eq!(settings.default_name(), "valeur");
        assert_eq!(settings.executor().len(), 2);
    }

    #[test]
    fn test_config_defaults_when_empty() {
        let config = VerifierConfig::from_json("{}").unwrap();
        assert_eq!(config, VerifierConfig::default());
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let err = VerifierConfig::from_json(r#"{ "colour": "blue" }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid verifier config"));
    }

    #[test]
    fn test_config_rejects_bad_locale() {
        assert!(VerifierConfig::from_json(r#"{ "locale": "??" }"#).is_err());
    }
}
