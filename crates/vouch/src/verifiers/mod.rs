//! Built-in predicate sets
//!
//! Predicates that apply to any subject are inherent methods on
//! [`Verifier`](crate::Verifier). Everything else is grouped by capability
//! into extension traits, implemented for every `Verifier<T>` whose subject
//! has that capability.
//!
//! # Categories
//!
//! - **General**: equality, identity, membership, custom predicates, type checks
//! - **Comparable**: ordering and ranges ([`ComparableVerify`])
//! - **Numeric**: parity, sign, divisibility ([`NumericVerify`])
//! - **Logical**: booleans and options ([`TruthyVerify`], [`OptionVerify`])
//! - **Text**: prefixes, content, character classes, patterns ([`TextVerify`])
//! - **Collection**: size, membership, element folds ([`CollectionVerify`], [`MapVerify`])
//! - **Temporal**: ordering and calendar fields ([`TemporalVerify`], `temporal` feature)
//! - **Error**: messages and source chains ([`ErrorVerify`])
//! - **Locale**: language and country ([`LocaleVerify`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! verify(8).even()?.between(1, 10)?;
//! verify("release-1.2").starts_with("release-")?.matches(r"[a-z]+-\d+\.\d+")?;
//! verify(vec![1, 2, 3]).not().empty()?.all_match(|n| *n > 0, "positive")?;
//! ```

mod general;

// Capability sets
pub mod collection;
pub mod comparable;
pub mod error;
pub mod locale;
pub mod logical;
pub mod numeric;
#[cfg(feature = "temporal")]
pub mod temporal;
pub mod text;

pub use collection::{CollectionVerify, KeyValues, MapVerify, Sequence};
pub use comparable::ComparableVerify;
pub use error::ErrorVerify;
pub use locale::LocaleVerify;
pub use logical::{OptionVerify, TruthyVerify};
pub use numeric::{Number, NumericVerify};
#[cfg(feature = "temporal")]
pub use temporal::{Temporal, TemporalVerify};
pub use text::TextVerify;
