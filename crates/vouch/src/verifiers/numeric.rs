//! Numeric predicates

use std::fmt;

use crate::foundation::{Verifier, VerifyError, VerifyResult};
use crate::message::keys;

/// Primitive numbers the numeric predicates understand.
pub trait Number: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Two, the divisor behind even and odd.
    const TWO: Self;

    /// `self % divisor == 0`. `divisor` is never zero.
    fn is_multiple_of(self, divisor: Self) -> bool;

    /// Whether the number has no fractional part. False for NaN and infinities.
    fn is_whole(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;

            #[inline]
            fn is_multiple_of(self, divisor: Self) -> bool {
                // `wrapping_rem` keeps `MIN % -1` from overflowing.
                self.wrapping_rem(divisor) == 0
            }

            #[inline]
            fn is_whole(self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn is_multiple_of(self, divisor: Self) -> bool {
                self % divisor == 0.0
            }

            #[inline]
            fn is_whole(self) -> bool {
                self.fract() == 0.0
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Predicates for primitive numbers.
pub trait NumericVerify: Sized {
    /// The number type.
    type Number;

    /// Verifies that the subject is divisible by two.
    fn even(self) -> VerifyResult<Self>;

    /// Verifies that the subject is not divisible by two.
    fn odd(self) -> VerifyResult<Self>;

    /// Verifies `subject > 0`.
    fn positive(self) -> VerifyResult<Self>;

    /// Verifies `subject < 0`.
    fn negative(self) -> VerifyResult<Self>;

    /// Verifies `subject == 0`.
    fn zero(self) -> VerifyResult<Self>;

    /// Verifies `subject == 1`.
    fn one(self) -> VerifyResult<Self>;

    /// Verifies that the subject is a multiple of `divisor`.
    ///
    /// Returns [`VerifyError::InvalidArgument`] for a zero divisor.
    fn divisible_by(self, divisor: Self::Number) -> VerifyResult<Self>;
}

impl<N: Number> NumericVerify for Verifier<N> {
    type Number = N;

    fn even(self) -> VerifyResult<Self> {
        let result = self.value().is_multiple_of(N::TWO);
        self.check_key(result, keys::EVEN, &[])
    }

    fn odd(self) -> VerifyResult<Self> {
        let value = *self.value();
        // Fractions, NaN and infinities are neither even nor odd.
        let result = value.is_whole() && !value.is_multiple_of(N::TWO);
        self.check_key(result, keys::ODD, &[])
    }

    fn positive(self) -> VerifyResult<Self> {
        let result = *self.value() > N::ZERO;
        self.check_key(result, keys::POSITIVE, &[])
    }

    fn negative(self) -> VerifyResult<Self> {
        let result = *self.value() < N::ZERO;
        self.check_key(result, keys::NEGATIVE, &[])
    }

    fn zero(self) -> VerifyResult<Self> {
        let result = *self.value() == N::ZERO;
        self.check_key(result, keys::ZERO, &[])
    }

    fn one(self) -> VerifyResult<Self> {
        let result = *self.value() == N::ONE;
        self.check_key(result, keys::ONE, &[])
    }

    fn divisible_by(self, divisor: N) -> VerifyResult<Self> {
        if divisor == N::ZERO {
            return Err(VerifyError::invalid_argument("divisor", "must not be zero"));
        }
        let result = self.value().is_multiple_of(divisor);
        self.check_key(result, keys::DIVISIBLE_BY, &[&divisor])
    }
}
