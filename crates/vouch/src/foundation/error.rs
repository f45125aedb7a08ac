//! Error types for verification failures
//!
//! Two kinds of error leave a verification chain:
//!
//! - [`VerifyError::Failed`]: the subject did not satisfy a predicate. Raised
//!   by a reporter (usually [`DefaultReporter`](crate::report::DefaultReporter)).
//! - [`VerifyError::InvalidArgument`]: the library itself was misused, e.g. an
//!   invalid regex or an inverted range. Raised directly by the predicate and
//!   never routed through the reporter chain.
//!
//! String fields use `Cow<'static, str>` so static codes and names do not
//! allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VERIFICATION FAILURE
// ============================================================================

/// Details of a failed check.
///
/// The rendered `message` is the only diagnostic a caller is guaranteed to
/// need; the remaining fields support programmatic handling.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::prelude::*;
///
/// let err = verify(4).not().even().unwrap_err();
/// let failure = err.failure().unwrap();
/// assert_eq!(failure.code(), Some("number.even"));
/// assert!(failure.is_negated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFailure {
    message: String,
    code: Option<Cow<'static, str>>,
    name: Cow<'static, str>,
    negated: bool,
}

impl VerificationFailure {
    /// Creates a failure from an already rendered message.
    pub fn new(message: impl Into<String>, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            code: None,
            name: name.into(),
            negated: false,
        }
    }

    /// Attaches the message key code the failure was rendered from.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Records whether the check ran under negation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// The rendered, human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message key code, when the check used a symbolic key.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The subject name used in the message.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the failed check ran under negation.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// VERIFY ERROR
// ============================================================================

/// Error returned from every fluent verification method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum VerifyError {
    /// The subject failed a check.
    #[error("{0}")]
    Failed(VerificationFailure),

    /// A predicate was called with an argument it cannot work with.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: Cow<'static, str>,
        reason: Cow<'static, str>,
    },
}

impl VerifyError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(
        parameter: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for a verification failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` for library misuse.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns the failure details, if this is a verification failure.
    #[must_use]
    pub fn failure(&self) -> Option<&VerificationFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Failed(_) => "verification",
            Self::InvalidArgument { .. } => "usage",
        }
    }
}

impl From<VerificationFailure> for VerifyError {
    fn from(failure: VerificationFailure) -> Self {
        Self::Failed(failure)
    }
}

/// Result of a fluent verification step.
pub type VerifyResult<T> = Result<T, VerifyError>;

// ============================================================================
// TESTS
// ============================================================================
