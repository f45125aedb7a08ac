//! Boolean and presence predicates

use std::fmt;

use crate::foundation::{Verifier, VerifyResult};
use crate::message::keys;

/// Predicates for `bool` subjects.
pub trait TruthyVerify: Sized {
    /// Verifies that the subject is `true`.
    fn truthy(self) -> VerifyResult<Self>;

    /// Verifies that the subject is `false`.
    fn falsy(self) -> VerifyResult<Self>;
}

impl TruthyVerify for Verifier<bool> {
    fn truthy(self) -> VerifyResult<Self> {
        let result = *self.value();
        self.check_key(result, keys::TRUTHY, &[])
    }

    fn falsy(self) -> VerifyResult<Self> {
        let result = !*self.value();
        self.check_key(result, keys::FALSY, &[])
    }
}

/// Predicates for `Option` subjects.
///
/// The core treats `None` like any other value; these are the only
/// predicates that look at presence.
pub trait OptionVerify: Sized {
    /// Verifies that the subject is `Some`.
    fn some(self) -> VerifyResult<Self>;

    /// Verifies that the subject is `None`.
    fn none(self) -> VerifyResult<Self>;
}

impl<T: fmt::Debug> OptionVerify for Verifier<Option<T>> {
    fn some(self) -> VerifyResult<Self> {
        let result = self.value().is_some();
        self.check_key(result, keys::SOME, &[])
    }

    fn none(self) -> VerifyResult<Self> {
        let result = self.value().is_none();
        self.check_key(result, keys::NONE, &[])
    }
}
