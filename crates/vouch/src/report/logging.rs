//! A reporter that logs every outcome.

use std::ops::ControlFlow;

use super::{ReportFlow, Reporter};
use crate::foundation::ReportContext;
use crate::message::MessageHolder;

/// Logs each check through `tracing` and always continues.
///
/// Passing checks are logged at `TRACE`, failing ones at `WARN` with the
/// rendered description. Runs first by default.
#[derive(Debug, Clone, Copy)]
pub struct LoggingReporter {
    weight: i32,
}

impl LoggingReporter {
    /// The highest priority.
    pub const WEIGHT: i32 = i32::MIN;

    /// Creates a logging reporter that runs before every other reporter.
    pub fn new() -> Self {
        Self {
            weight: Self::WEIGHT,
        }
    }

    /// Overrides the weight.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for LoggingReporter {
    fn weight(&self) -> i32 {
        self.weight
    }

    fn name(&self) -> &str {
        "logging"
    }

    fn report(
        &self,
        context: &ReportContext<'_>,
        result: bool,
        message: &MessageHolder<'_>,
    ) -> ReportFlow {
        if result {
            tracing::trace!(
                name = context.name(),
                value = ?context.value(),
                negated = context.is_negated(),
                "check passed"
            );
        } else {
            tracing::warn!(
                name = context.name(),
                value = ?context.value(),
                negated = context.is_negated(),
                description = %message.render(context),
                "check failed"
            );
        }
        Ok(ControlFlow::Continue(()))
    }
}
