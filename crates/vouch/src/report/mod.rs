//! The reporter chain
//!
//! A check's effective outcome is passed to every [`Reporter`] of a
//! [`ReportExecutor`], lowest weight first. Each reporter may:
//!
//! - return `Err` to raise a verification error, ending the chain;
//! - return `Ok(ControlFlow::Break(()))` to stop the chain silently;
//! - return `Ok(ControlFlow::Continue(()))` to hand over to the next one.
//!
//! [`DefaultReporter`] has the highest possible weight, so custom reporters
//! always get to intercept an outcome before it turns into an error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::ops::ControlFlow;
//! use vouch::prelude::*;
//! use vouch::report::from_fn;
//!
//! // Swallow every failure.
//! let settings = Settings::builder()
//!     .with_reporter(from_fn(0, |_ctx, _result, _msg| Ok(ControlFlow::Break(()))))
//!     .build();
//! ```

use std::ops::ControlFlow;

use crate::foundation::{ReportContext, VerifyResult};
use crate::message::MessageHolder;

mod default;
mod executor;
mod logging;
mod soft;

pub use default::DefaultReporter;
pub use executor::ReportExecutor;
pub use logging::LoggingReporter;
pub use soft::SoftReporter;

/// Decision returned by a reporter.
pub type ReportFlow = VerifyResult<ControlFlow<()>>;

// ============================================================================
// REPORTER TRAIT
// ============================================================================

/// One policy step in the report chain.
///
/// Reporters are shared across every verification that uses the same
/// settings, possibly from several threads, so they must be `Send + Sync`
/// and keep any state behind their own synchronization.
pub trait Reporter: Send + Sync {
    /// Ordering weight; lower weights run first. Ties keep insertion order.
    fn weight(&self) -> i32 {
        0
    }

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handles one check outcome.
    ///
    /// `result` already accounts for negation.
    fn report(
        &self,
        context: &ReportContext<'_>,
        result: bool,
        message: &MessageHolder<'_>,
    ) -> ReportFlow;
}

// ============================================================================
// CLOSURE REPORTER
// ============================================================================

/// A reporter backed by a closure. Built with [`from_fn`].
pub struct FnReporter<F> {
    weight: i32,
    f: F,
}

impl<F> Reporter for FnReporter<F>
where
    F: Fn(&ReportContext<'_>, bool, &MessageHolder<'_>) -> ReportFlow + Send + Sync,
{
    fn weight(&self) -> i32 {
        self.weight
    }

    fn name(&self) -> &str {
        "fn"
    }

    fn report(
        &self,
        context: &ReportContext<'_>,
        result: bool,
        message: &MessageHolder<'_>,
    ) -> ReportFlow {
        (self.f)(context, result, message)
    }
}

/// Creates a reporter from a closure and a weight.
pub fn from_fn<F>(weight: i32, f: F) -> FnReporter<F>
where
    F: Fn(&ReportContext<'_>, bool, &MessageHolder<'_>) -> ReportFlow + Send + Sync,
{
    FnReporter { weight, f }
}
