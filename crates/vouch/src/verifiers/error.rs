//! Error predicates

use std::any::type_name;
use std::error::Error;
use std::iter::successors;

use crate::foundation::{Verifier, VerifyResult, any};
use crate::message::keys;

/// Predicates for subjects implementing [`std::error::Error`].
pub trait ErrorVerify: Sized {
    /// Verifies that the error's display text contains `needle`.
    fn message_contains(self, needle: &str) -> VerifyResult<Self>;

    /// Verifies that the error has a source.
    fn caused(self) -> VerifyResult<Self>;

    /// Verifies that some error in the source chain is a `C`.
    ///
    /// The subject itself is not part of its own source chain.
    fn caused_by<C: Error + 'static>(self) -> VerifyResult<Self>;
}

impl<E: Error + 'static> ErrorVerify for Verifier<E> {
    fn message_contains(self, needle: &str) -> VerifyResult<Self> {
        let result = self.value().to_string().contains(needle);
        self.check_key(result, keys::MESSAGE_CONTAINS, &[&needle])
    }

    fn caused(self) -> VerifyResult<Self> {
        let result = self.value().source().is_some();
        self.check_key(result, keys::CAUSED, &[])
    }

    fn caused_by<C: Error + 'static>(self) -> VerifyResult<Self> {
        let chain = successors(self.value().source(), |&e| e.source());
        let result = any(chain, |e| e.is::<C>());
        self.check_key(result, keys::CAUSED_BY, &[&type_name::<C>()])
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io;

    use crate::prelude::*;

    #[derive(Debug)]
    struct Wrapped {
        inner: io::Error,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped: {}", self.inner)
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.inner)
        }
    }

    #[derive(Debug)]
    struct Outer(Wrapped);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "outer")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "config.json missing")
    }

    #[test]
    fn test_message_contains() {
        assert!(verify(not_found()).message_contains("missing").is_ok());
        let err = verify(not_found()).message_contains("denied").unwrap_err();
        assert_eq!(err.to_string(), "value must have a message containing 'denied'");
    }

    #[test]
    fn test_caused() {
        assert!(verify(not_found()).caused().is_err());
        assert!(verify(Wrapped { inner: not_found() }).caused().is_ok());
    }

    #[test]
    fn test_caused_by_walks_the_chain() {
        let outer = Outer(Wrapped { inner: not_found() });
        let v = verify(outer).caused_by::<Wrapped>().unwrap();
        assert!(v.caused_by::<io::Error>().is_ok());
    }

    #[test]
    fn test_caused_by_excludes_subject() {
        let err = verify(Wrapped { inner: not_found() })
            .caused_by::<Wrapped>()
            .unwrap_err();
        assert!(err.to_string().contains("Wrapped"));
    }
}
