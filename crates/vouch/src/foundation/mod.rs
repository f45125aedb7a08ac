//! Core verification types
//!
//! This module contains the building blocks every predicate set sits on:
//!
//! - **Core**: [`Verifier`], [`verify`], [`verify_named`]
//! - **Reporting view**: [`ReportContext`]
//! - **Errors**: [`VerifyError`], [`VerificationFailure`]
//! - **Folds**: [`any`], [`all`]
//!
//! # Architecture
//!
//! A predicate computes a raw boolean and hands it to [`Verifier::check`]
//! (or [`Verifier::check_key`]) together with a description. The core
//! applies negation and passes the effective outcome to the
//! [`ReportExecutor`](crate::report::ReportExecutor), which walks its
//! reporters in weight order. The default reporter turns a failed outcome
//! into [`VerifyError::Failed`].
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! // A predicate set of your own only needs `check_key`:
//! const PALINDROME: MessageKey = MessageKey::new("text.palindrome", "be a palindrome");
//!
//! fn palindrome(v: Verifier<&str>) -> VerifyResult<Verifier<&str>> {
//!     let s = *v.value();
//!     let result = s.chars().eq(s.chars().rev());
//!     v.check_key(result, PALINDROME, &[])
//! }
//! ```

mod context;
mod error;
mod verifier;

pub use context::ReportContext;
pub use error::{VerificationFailure, VerifyError, VerifyResult};
pub use verifier::{Verifier, verify, verify_named};

// ============================================================================
// FOLDS
// ============================================================================

/// Returns `true` if `predicate` holds for at least one item.
///
/// Short-circuits on the first match; an empty input yields `false`.
pub fn any<I, F>(items: I, mut predicate: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    items.into_iter().any(|item| predicate(item))
}

/// Returns `true` if `predicate` holds for every item.
///
/// Short-circuits on the first mismatch; an empty input yields `true`.
pub fn all<I, F>(items: I, mut predicate: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    items.into_iter().all(|item| predicate(item))
}

// ============================================================================
// TESTS
// ============================================================================
