//! Prelude module for convenient imports.
//!
//! Provides a single `use vouch::prelude::*;` import that brings in the
//! entry points, the error types and every predicate trait.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! verify(7).odd()?.between(1, 9)?;
//! verify("foo").starts_with("fo")?;
//! ```

// ============================================================================
// FOUNDATION: Entry points, errors, folds
// ============================================================================

pub use crate::foundation::{
    ReportContext, VerificationFailure, Verifier, VerifyError, VerifyResult, all, any, verify,
    verify_named,
};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{Settings, SettingsBuilder, VerifierConfig};

// ============================================================================
// MESSAGES
// ============================================================================

pub use crate::message::{Locale, MessageHolder, MessageKey, MessageSource, keys};

// ============================================================================
// REPORTING
// ============================================================================

pub use crate::report::{
    DefaultReporter, LoggingReporter, ReportExecutor, ReportFlow, Reporter, SoftReporter,
};

// ============================================================================
// PREDICATES
// ============================================================================

#[cfg(feature = "temporal")]
pub use crate::verifiers::TemporalVerify;
pub use crate::verifiers::{
    CollectionVerify, ComparableVerify, ErrorVerify, LocaleVerify, MapVerify, NumericVerify,
    OptionVerify, TextVerify, TruthyVerify,
};
