//! Read-only view of a verification handed to reporters.

use std::fmt;

use crate::config::Settings;
use crate::foundation::VerificationFailure;
use crate::message::{Locale, MessageHolder, MessageSource, format_pattern, keys, resolve_pattern};

/// What a reporter can see about the check it is reporting.
///
/// The context borrows from the verifier for the duration of one check.
/// Reporters observe it; nothing here can change the subject or the
/// negation state.
pub struct ReportContext<'a> {
    value: &'a dyn fmt::Debug,
    name: &'a str,
    negated: bool,
    settings: &'a Settings,
}

impl<'a> ReportContext<'a> {
    /// Creates a context for one check.
    pub fn new(
        value: &'a dyn fmt::Debug,
        name: &'a str,
        negated: bool,
        settings: &'a Settings,
    ) -> Self {
        Self {
            value,
            name,
            negated,
            settings,
        }
    }

    /// The subject of the verification.
    pub fn value(&self) -> &'a dyn fmt::Debug {
        self.value
    }

    /// The subject name used in messages.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Whether the check ran under negation.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The locale messages are rendered for.
    pub fn locale(&self) -> &'a Locale {
        self.settings.locale()
    }

    /// The source localized patterns are looked up in.
    pub fn messages(&self) -> &'a dyn MessageSource {
        self.settings.messages()
    }

    /// Renders `message` and wraps it with the subject name.
    ///
    /// The description is rendered as given: negation changes the outcome of
    /// a check, never its wording.
    pub fn failure(&self, message: &MessageHolder<'_>) -> VerificationFailure {
        let description = message.render(self);
        let template = resolve_pattern(self.messages(), &keys::DEFAULT_TEMPLATE, self.locale());
        let rendered = format_pattern(&template, &[&self.name, &description]);

        let failure = VerificationFailure::new(rendered.trim_end().to_owned(), self.name.to_owned())
            .with_negated(self.negated);
        match message.code() {
            Some(code) => failure.with_code(code),
            None => failure,
        }
    }
}

impl fmt::Debug for ReportContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportContext")
            .field("value", &self.value)
            .field("name", &self.name)
            .field("negated", &self.negated)
            .field("locale", self.locale())
            .finish()
    }
}
