//! Soft assertions: collect failures instead of raising them.

use std::ops::ControlFlow;

use parking_lot::Mutex;

use super::{ReportFlow, Reporter};
use crate::foundation::{ReportContext, VerificationFailure, VerifyError};
use crate::message::MessageHolder;

/// Records failed checks and stops the chain before the default reporter.
///
/// Share it through an `Arc` so the failures can be read back after the
/// verifications ran:
///
/// ```rust,ignore
/// let soft = Arc::new(SoftReporter::new());
/// let settings = Arc::new(Settings::builder().with_shared_reporter(soft.clone()).build());
///
/// let _ = Verifier::with_settings(3, settings.clone()).even()?.positive()?;
/// assert_eq!(soft.take_failures().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SoftReporter {
    failures: Mutex<Vec<VerificationFailure>>,
}

impl SoftReporter {
    /// Runs before the default reporter but after the logging reporter.
    pub const WEIGHT: i32 = 0;

    /// Creates an empty soft reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Returns `true` if nothing failed.
    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Removes and returns the recorded failures.
    pub fn take_failures(&self) -> Vec<VerificationFailure> {
        std::mem::take(&mut *self.failures.lock())
    }

    /// Drains the failures into a single error, or `Ok` if there were none.
    ///
    /// The error message lists every failure on its own line.
    pub fn finish(&self) -> Result<(), VerifyError> {
        let failures = self.take_failures();
        let Some(first) = failures.first() else {
            return Ok(());
        };

        let message = failures
            .iter()
            .map(VerificationFailure::message)
            .collect::<Vec<_>>()
            .join("\n");
        Err(VerifyError::Failed(
            VerificationFailure::new(message, first.name().to_owned())
                .with_negated(first.is_negated()),
        ))
    }
}

impl Reporter for SoftReporter {
    fn weight(&self) -> i32 {
        Self::WEIGHT
    }

    fn name(&self) -> &str {
        "soft"
    }

    fn report(
        &self,
        context: &ReportContext<'_>,
        result: bool,
        message: &MessageHolder<'_>,
    ) -> ReportFlow {
        if result {
            return Ok(ControlFlow::Continue(()));
        }

        let failure = context.failure(message);
        tracing::debug!(message = failure.message(), "recorded soft failure");
        self.failures.lock().push(failure);
        Ok(ControlFlow::Break(()))
    }
}
