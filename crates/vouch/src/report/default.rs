//! The reporter that turns failed checks into errors.

use std::ops::ControlFlow;

use super::{ReportFlow, Reporter};
use crate::foundation::{ReportContext, VerifyError};
use crate::message::MessageHolder;

/// Raises [`VerifyError::Failed`] for a failed outcome and continues
/// otherwise.
///
/// Runs last: its weight is [`DefaultReporter::WEIGHT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultReporter;

impl DefaultReporter {
    /// The lowest priority.
    pub const WEIGHT: i32 = i32::MAX;
}

impl Reporter for DefaultReporter {
    fn weight(&self) -> i32 {
        Self::WEIGHT
    }

    fn name(&self) -> &str {
        "default"
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
        tracing::debug!(
            name = context.name(),
            negated = context.is_negated(),
            code = failure.code(),
            "verification failed"
        );
        Err(VerifyError::Failed(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::message::keys;

    #[test]
    fn test_pass_continues() {
        let settings = Settings::default();
        let context = ReportContext::new(&2, "value", false, &settings);
        let flow = DefaultReporter.report(&context, true, &MessageHolder::key(keys::EVEN, &[]));
        assert_eq!(flow, Ok(ControlFlow::Continue(())));
    }

    #[test]
    fn test_failure_raises() {
        let settings = Settings::default();
        let context = ReportContext::new(&3, "value", false, &settings);
        let err = DefaultReporter
            .report(&context, false, &MessageHolder::key(keys::EVEN, &[]))
            .unwrap_err();
        assert_eq!(err.to_string(), "value must be even");
    }

    #[test]
    fn test_weight_is_lowest_priority() {
        assert_eq!(DefaultReporter.weight(), i32::MAX);
    }
}
