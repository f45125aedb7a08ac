//! Predicates available on every subject.

use std::any::{Any, TypeId, type_name};
use std::fmt;

use crate::foundation::{Verifier, VerifyResult, all, any};
use crate::message::{Debugged, keys};

impl<T: fmt::Debug> Verifier<T> {
    /// Verifies that the subject equals `other`.
    pub fn equal_to<U>(self, other: &U) -> VerifyResult<Self>
    where
        T: PartialEq<U>,
        U: fmt::Debug + ?Sized,
    {
        let result = self.value() == other;
        self.check_key(result, keys::EQUAL_TO, &[&Debugged(other)])
    }

    /// Verifies that the subject equals one of `candidates`.
    pub fn one_of<U>(self, candidates: &[U]) -> VerifyResult<Self>
    where
        T: PartialEq<U>,
        U: fmt::Debug,
    {
        let result = any(candidates, |candidate| self.value() == candidate);
        self.check_key(result, keys::ONE_OF, &[&Debugged(candidates)])
    }

    /// Verifies the subject against an arbitrary predicate.
    ///
    /// `description` is an unlocalized pattern such as `"be a valid port"`.
    pub fn satisfies<F>(self, predicate: F, description: &str) -> VerifyResult<Self>
    where
        F: FnOnce(&T) -> bool,
    {
        let result = predicate(self.value());
        self.check(result, description, &[])
    }

    /// Verifies that at least one of `predicates` holds.
    pub fn satisfies_any(self, predicates: &[&dyn Fn(&T) -> bool]) -> VerifyResult<Self> {
        let result = any(predicates, |predicate| predicate(self.value()));
        self.check_key(result, keys::SATISFY_ANY, &[&predicates.len()])
    }

    /// Verifies that every one of `predicates` holds.
    pub fn satisfies_all(self, predicates: &[&dyn Fn(&T) -> bool]) -> VerifyResult<Self> {
        let result = all(predicates, |predicate| predicate(self.value()));
        self.check_key(result, keys::SATISFY_ALL, &[&predicates.len()])
    }

    /// Verifies that the subject's type is `U`.
    pub fn type_of<U: Any>(self) -> VerifyResult<Self>
    where
        T: Any,
    {
        let result = TypeId::of::<T>() == TypeId::of::<U>();
        self.check_key(result, keys::TYPE_OF, &[&type_name::<U>()])
    }
}

impl<U: fmt::Debug + ?Sized> Verifier<&U> {
    /// Verifies that the subject is the very same object as `other`.
    pub fn same_as(self, other: &U) -> VerifyResult<Self> {
        let result = std::ptr::eq(*self.value(), other);
        self.check_key(result, keys::SAME_AS, &[&Debugged(other)])
    }
}
