//! The verification core.
//!
//! [`Verifier`] is the single funnel every predicate goes through. It owns
//! the subject, the negation flag and a handle to the [`Settings`] that
//! supply the reporter chain and message source.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::config::Settings;
use crate::foundation::{ReportContext, VerifyResult};
use crate::message::{Args, MessageHolder, MessageKey};

/// Starts a verification chain for `value` using the global settings.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::prelude::*;
///
/// verify(42).positive()?.even()?.between(1, 100)?;
/// verify("foo").starts_with("fo")?;
/// assert!(verify(4).not().even().is_err());
/// ```
pub fn verify<T>(value: T) -> Verifier<T> {
    Verifier::with_settings(value, Settings::global())
}

/// Starts a verification chain for a named subject.
///
/// The name replaces the default subject name in failure messages.
pub fn verify_named<T>(value: T, name: impl Into<Cow<'static, str>>) -> Verifier<T> {
    verify(value).named(name)
}

/// A verification session over one subject.
///
/// Predicates consume the verifier and hand it back on success, so a chain
/// moves the same session (and the same subject) from call to call:
///
/// ```rust,ignore
/// let verifier = verify(vec![1, 2, 3]).not().empty()?.contains(&2)?;
/// let items = verifier.into_inner();
/// ```
///
/// A session is single-owner and lives for one chain. Negation set with
/// [`not`](Self::not) persists for every following check until toggled back.
#[must_use = "a verifier does nothing until a predicate is called"]
pub struct Verifier<T> {
    value: T,
    negated: bool,
    name: Option<Cow<'static, str>>,
    settings: Arc<Settings>,
}

impl<T> Verifier<T> {
    /// Starts a verification chain with explicit settings.
    pub fn with_settings(value: T, settings: Arc<Settings>) -> Self {
        Self {
            value,
            negated: false,
            name: None,
            settings,
        }
    }

    /// Names the subject for failure messages.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Inverts the sense of every following check.
    ///
    /// Calling `not` twice restores the original sense.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// The subject being verified.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Ends the chain, returning the subject.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Whether checks are currently negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The subject name used in messages.
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.settings.default_name())
    }

    /// The settings this session reports through.
    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }
}

impl<T: fmt::Debug> Verifier<T> {
    /// Reports the outcome of a predicate through the reporter chain.
    ///
    /// `result` is the raw predicate outcome; it is inverted when the chain
    /// is negated before any reporter sees it. Every predicate must call this
    /// (or [`check`](Self::check) / [`check_key`](Self::check_key)) exactly
    /// once.
    pub fn report(self, result: bool, message: MessageHolder<'_>) -> VerifyResult<Self> {
        let effective = result != self.negated;
        let context = ReportContext::new(&self.value, self.name(), self.negated, &self.settings);
        self.settings
            .executor()
            .execute(&context, effective, &message)?;
        Ok(self)
    }

    /// Reports a predicate described by an unlocalized pattern.
    pub fn check(self, result: bool, message: &str, args: Args<'_>) -> VerifyResult<Self> {
        self.report(result, MessageHolder::text(message, args))
    }

    /// Reports a predicate described by a message key.
    pub fn check_key(self, result: bool, key: MessageKey, args: Args<'_>) -> VerifyResult<Self> {
        self.report(result, MessageHolder::key(key, args))
    }
}

impl<T: fmt::Debug> fmt::Debug for Verifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("value", &self.value)
            .field("negated", &self.negated)
            .field("name", &self.name())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
