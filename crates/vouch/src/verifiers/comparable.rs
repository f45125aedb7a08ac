//! Ordering predicates

use std::fmt;

use crate::foundation::{Verifier, VerifyError, VerifyResult};
use crate::message::{Debugged, keys};

/// Predicates for subjects with a partial order.
pub trait ComparableVerify: Sized {
    /// The operand type.
    type Operand;

    /// Verifies `subject > other`.
    fn greater_than(self, other: Self::Operand) -> VerifyResult<Self>;

    /// Verifies `subject >= other`.
    fn greater_than_or_equal_to(self, other: Self::Operand) -> VerifyResult<Self>;

    /// Verifies `subject < other`.
    fn less_than(self, other: Self::Operand) -> VerifyResult<Self>;

    /// Verifies `subject <= other`.
    fn less_than_or_equal_to(self, other: Self::Operand) -> VerifyResult<Self>;

    /// Verifies `start <= subject <= end`.
    ///
    /// Returns [`VerifyError::InvalidArgument`] when `start > end`.
    fn between(self, start: Self::Operand, end: Self::Operand) -> VerifyResult<Self>;

    /// Verifies `start < subject < end`.
    ///
    /// Returns [`VerifyError::InvalidArgument`] when `start > end`.
    fn between_exclusive(self, start: Self::Operand, end: Self::Operand) -> VerifyResult<Self>;
}

fn ordered_bounds<T: PartialOrd>(start: &T, end: &T) -> VerifyResult<()> {
    if start > end {
        return Err(VerifyError::invalid_argument(
            "start",
            "range start must not be greater than its end",
        ));
    }
    Ok(())
}

impl<T> ComparableVerify for Verifier<T>
where
    T: PartialOrd + fmt::Debug,
{
    type Operand = T;

    fn greater_than(self, other: T) -> VerifyResult<Self> {
        let result = *self.value() > other;
        self.check_key(result, keys::GREATER_THAN, &[&Debugged(&other)])
    }

    fn greater_than_or_equal_to(self, other: T) -> VerifyResult<Self> {
        let result = *self.value() >= other;
        self.check_key(result, keys::GREATER_THAN_OR_EQUAL_TO, &[&Debugged(&other)])
    }

    fn less_than(self, other: T) -> VerifyResult<Self> {
        let result = *self.value() < other;
        self.check_key(result, keys::LESS_THAN, &[&Debugged(&other)])
    }

    fn less_than_or_equal_to(self, other: T) -> VerifyResult<Self> {
        let result = *self.value() <= other;
        self.check_key(result, keys::LESS_THAN_OR_EQUAL_TO, &[&Debugged(&other)])
    }

    fn between(self, start: T, end: T) -> VerifyResult<Self> {
        ordered_bounds(&start, &end)?;
        let value = self.value();
        let result = *value >= start && *value <= end;
        self.check_key(result, keys::BETWEEN, &[&Debugged(&start), &Debugged(&end)])
    }

    fn between_exclusive(self, start: T, end: T) -> VerifyResult<Self> {
        ordered_bounds(&start, &end)?;
        let value = self.value();
        let result = *value > start && *value < end;
        self.check_key(
            result,
            keys::BETWEEN_EXCLUSIVE,
            &[&Debugged(&start), &Debugged(&end)],
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 1, 10, true)]
    #[case(1, 1, 10, true)]
    #[case(10, 1, 10, true)]
    #[case(0, 1, 10, false)]
    #[case(11, 1, 10, false)]
    fn test_between(#[case] value: i32, #[case] start: i32, #[case] end: i32, #[case] ok: bool) {
        assert_eq!(verify(value).between(start, end).is_ok(), ok);
    }

    #[rstest]
    #[case(5, true)]
    #[case(1, false)]
    #[case(10, false)]
    fn test_between_exclusive(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(verify(value).between_exclusive(1, 10).is_ok(), ok);
    }

    #[test]
    fn test_between_message() {
        let err = verify(0).between(1, 10).unwrap_err();
        assert_eq!(err.to_string(), "value must be between 1 and 10 (inclusive)");
    }

    #[test]
    fn test_inverted_bounds_is_usage_error() {
        let err = verify(5).between(10, 1).unwrap_err();
        assert!(err.is_invalid_argument());
        // Usage errors are raised even when every check is suppressed.
        let settings = std::sync::Arc::new(Settings::builder().without_default_reporter().build());
        assert!(Verifier::with_settings(5, settings).between(10, 1).is_err());
    }

    #[test]
    fn test_orderings() {
        let checked = verify(2.5)
            .greater_than(1.0)
            .and_then(|v| v.greater_than_or_equal_to(2.5))
            .and_then(|v| v.less_than(3.0))
            .and_then(|v| v.less_than_or_equal_to(2.5));
        assert!(checked.is_ok());
        assert!(verify("b").less_than("a").is_err());
    }

    #[test]
    fn test_nan_is_never_ordered() {
        assert!(verify(f64::NAN).greater_than(0.0).is_err());
        assert!(verify(f64::NAN).not().greater_than(0.0).is_ok());
    }
}
