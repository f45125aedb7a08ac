//! Drives the reporter chain for one check.

use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;

use super::{DefaultReporter, Reporter};
use crate::foundation::{ReportContext, VerifyResult};
use crate::message::MessageHolder;

/// An ordered, immutable chain of reporters.
///
/// Reporters are sorted by ascending weight once, at construction, with ties
/// kept in the order they were supplied. The executor owns its own copy of
/// the list, so it can be shared freely (`Arc<ReportExecutor>`) between
/// verifications and threads.
#[derive(Clone)]
pub struct ReportExecutor {
    reporters: Vec<Arc<dyn Reporter>>,
}

impl ReportExecutor {
    /// Builds an executor from `reporters`, sorted by weight.
    pub fn new<I>(reporters: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Reporter>>,
    {
        let mut reporters: Vec<_> = reporters.into_iter().collect();
        // `sort_by_key` is stable.
        reporters.sort_by_key(|reporter| reporter.weight());
        Self { reporters }
    }

    /// Runs `message` through the chain.
    ///
    /// Each reporter is called at most once. The walk stops at the first
    /// reporter that breaks, and an error is returned as soon as one is
    /// raised.
    pub fn execute(
        &self,
        context: &ReportContext<'_>,
        result: bool,
        message: &MessageHolder<'_>,
    ) -> VerifyResult<()> {
        for reporter in &self.reporters {
            tracing::trace!(
                reporter = reporter.name(),
                weight = reporter.weight(),
                result,
                "running reporter"
            );

            if let ControlFlow::Break(()) = reporter.report(context, result, message)? {
                tracing::debug!(
                    reporter = reporter.name(),
                    result,
                    "reporter stopped the chain"
                );
                break;
            }
        }
        Ok(())
    }

    /// Reporters in the order they run.
    pub fn reporters(&self) -> impl Iterator<Item = &dyn Reporter> {
        self.reporters.iter().map(AsRef::as_ref)
    }

    /// Number of reporters.
    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    /// Returns `true` if the chain is empty, in which case every check passes.
    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl Default for ReportExecutor {
    /// A chain holding only the [`DefaultReporter`].
    fn default() -> Self {
        Self::new([Arc::new(DefaultReporter) as Arc<dyn Reporter>])
    }
}

impl fmt::Debug for ReportExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.reporters().map(|r| (r.name(), r.weight())))
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
