//! # vouch
//!
//! Fluent value verification with a pluggable reporter chain.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! verify(42).positive()?.even()?.between(1, 100)?;
//! verify_named("alice", "username").not().blank()?.length_between(3, 20)?;
//!
//! // `not()` flips every following check until toggled back.
//! assert!(verify(4).not().even().is_err());
//! ```
//!
//! ## How a check runs
//!
//! A predicate computes a raw boolean and reports it through
//! [`Verifier::check_key`] (or [`Verifier::check`]). The verifier applies
//! negation and hands the outcome, together with a lazily rendered
//! [`MessageHolder`](message::MessageHolder), to the
//! [`ReportExecutor`](report::ReportExecutor) of its [`Settings`]. Reporters
//! run in ascending weight order; the
//! [`DefaultReporter`](report::DefaultReporter) runs last and turns a failed
//! outcome into [`VerifyError::Failed`].
//!
//! ## Built-in Predicates
//!
//! - **General**: `equal_to`, `one_of`, `satisfies`, `same_as`, `type_of`
//! - **Comparable**: [`ComparableVerify`](verifiers::ComparableVerify)
//! - **Numeric**: [`NumericVerify`](verifiers::NumericVerify)
//! - **Text**: [`TextVerify`](verifiers::TextVerify)
//! - **Collection**: [`CollectionVerify`](verifiers::CollectionVerify),
//!   [`MapVerify`](verifiers::MapVerify)
//! - **Logical**: [`TruthyVerify`](verifiers::TruthyVerify),
//!   [`OptionVerify`](verifiers::OptionVerify)
//! - **Error**: [`ErrorVerify`](verifiers::ErrorVerify)
//! - **Locale**: [`LocaleVerify`](verifiers::LocaleVerify)
//! - **Temporal** (`temporal` feature): `TemporalVerify`

// VerifyError carries a rendered message; boxing it would add an allocation
// to every failed check for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
pub mod message;
pub mod prelude;
pub mod report;
pub mod verifiers;

pub use config::Settings;
pub use foundation::{Verifier, VerifyError, VerifyResult, verify, verify_named};
