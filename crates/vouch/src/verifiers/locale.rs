//! Locale predicates

use crate::foundation::{Verifier, VerifyResult};
use crate::message::{Locale, keys};

/// Predicates for [`Locale`] subjects.
pub trait LocaleVerify: Sized {
    /// Verifies the language code, ignoring case.
    fn language(self, language: &str) -> VerifyResult<Self>;

    /// Verifies the country code, ignoring case. A locale without a country
    /// never matches.
    fn country(self, country: &str) -> VerifyResult<Self>;

    /// Verifies that the subject is the locale messages are rendered for.
    fn default_locale(self) -> VerifyResult<Self>;
}

impl LocaleVerify for Verifier<Locale> {
    fn language(self, language: &str) -> VerifyResult<Self> {
        let result = self.value().language().eq_ignore_ascii_case(language);
        self.check_key(result, keys::LANGUAGE, &[&language])
    }

    fn country(self, country: &str) -> VerifyResult<Self> {
        let result = self
            .value()
            .country()
            .is_some_and(|c| c.eq_ignore_ascii_case(country));
        self.check_key(result, keys::COUNTRY, &[&country])
    }

    fn default_locale(self) -> VerifyResult<Self> {
        let result = self.value() == self.settings().locale();
        self.check_key(result, keys::DEFAULT_LOCALE, &[])
    }
}
