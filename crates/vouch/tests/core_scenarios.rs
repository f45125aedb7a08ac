//! End-to-end behavior of the verification core.

use std::borrow::Cow;
use std::ops::ControlFlow;
use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use vouch::prelude::*;
use vouch::report::from_fn;

/// Records every key looked up through it.
#[derive(Default)]
struct SpySource {
    lookups: Mutex<Vec<String>>,
}

impl SpySource {
    fn lookups_of(&self, code: &str) -> usize {
        self.lookups.lock().iter().filter(|c| *c == code).count()
    }

    fn total(&self) -> usize {
        self.lookups.lock().len()
    }
}

impl MessageSource for SpySource {
    fn pattern(&self, key: &MessageKey, _locale: &Locale) -> Option<Cow<'_, str>> {
        self.lookups.lock().push(key.code().to_owned());
        None
    }
}

fn spied() -> (Arc<SpySource>, Arc<Settings>) {
    let spy = Arc::new(SpySource::default());
    let settings = Settings::builder()
        .with_shared_messages(Arc::clone(&spy) as Arc<dyn MessageSource>)
        .build();
    (spy, Arc::new(settings))
}

// ============================================================================
// NEGATION
// ============================================================================

#[test]
fn negated_passing_predicate_fails_with_original_wording() {
    let err = verify(4).not().even().unwrap_err();

    assert!(err.is_failure());
    assert!(err.to_string().contains("be even"));
    let failure = err.failure().unwrap();
    assert_eq!(failure.message(), "value must be even");
    assert!(failure.is_negated());
}

#[test]
fn negated_failing_predicate_passes() {
    assert!(verify(5).not().even().is_ok());
}

#[test]
fn double_negation_restores_sense() {
    assert!(verify(4).not().not().even().is_ok());
    assert!(verify(3).not().not().even().is_err());
}

// ============================================================================
// CHAINING
// ============================================================================

#[test]
fn passing_check_returns_the_same_session() {
    let v = verify("foo").starts_with("fo").unwrap();
    assert_eq!(*v.value(), "foo");
    assert!(!v.is_negated());
}

#[test]
fn chain_keeps_the_subject_in_place() {
    let items = vec![3, 1, 2];
    let ptr = items.as_ptr();

    let v = verify(items)
        .not()
        .empty()
        .and_then(|v| v.not().contains(&1))
        .and_then(|v| v.size_of(3))
        .unwrap();

    assert_eq!(v.into_inner().as_ptr(), ptr);
}

#[test]
fn repeated_check_is_independent() {
    let v = verify(10).even().unwrap();
    let v = v.even().unwrap();
    assert!(v.odd().is_err());
}

// ============================================================================
// SUPPRESSION
// ============================================================================

#[test]
fn lower_weight_breaking_reporter_suppresses_default() {
    let settings = Settings::builder()
        .with_reporter(from_fn(-10, |_, _, _| Ok(ControlFlow::Break(()))))
        .build();

    assert!(Verifier::with_settings(3, Arc::new(settings)).even().is_ok());
}

#[test]
fn reporter_tied_with_default_runs_first() {
    let settings = Settings::builder()
        .with_reporter(from_fn(DefaultReporter::WEIGHT, |_, _, _| {
            Ok(ControlFlow::Break(()))
        }))
        .build();

    // Ties keep insertion order and the default reporter is appended last.
    assert!(Verifier::with_settings(3, Arc::new(settings)).even().is_ok());
}

#[test]
fn reporter_after_a_failure_never_runs() {
    let settings = Settings::builder()
        .without_default_reporter()
        .with_reporter(DefaultReporter)
        .with_reporter(from_fn(DefaultReporter::WEIGHT, |_, _, _| {
            Ok(ControlFlow::Break(()))
        }))
        .build();

    assert!(Verifier::with_settings(3, Arc::new(settings)).even().is_err());
}

// ============================================================================
// DEFERRED FORMATTING
// ============================================================================

#[test]
fn passing_checks_never_touch_the_message_source() {
    let (spy, settings) = spied();

    let checked = Verifier::with_settings(4, Arc::clone(&settings))
        .even()
        .and_then(|v| v.between(1, 10));
    assert!(checked.is_ok());
    assert!(Verifier::with_settings("abc", settings).alpha().is_ok());

    assert_eq!(spy.total(), 0);
}

#[test]
fn failing_check_renders_its_message_once() {
    let (spy, settings) = spied();

    let err = Verifier::with_settings(3, settings).even().unwrap_err();

    assert_eq!(err.to_string(), "value must be even");
    assert_eq!(spy.lookups_of("number.even"), 1);
}

#[test]
fn holders_are_inert_until_rendered() {
    let (spy, settings) = spied();
    let context = ReportContext::new(&3, "value", false, &settings);

    let first = MessageHolder::key(keys::EVEN, &[]);
    let second = MessageHolder::key(keys::EVEN, &[]);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
    assert_eq!(spy.total(), 0);

    assert_eq!(first.render(&context), "be even");
    assert_eq!(spy.lookups_of("number.even"), 1);
    assert_eq!(spy.total(), 1);
}

// ============================================================================
// USAGE ERRORS
// ============================================================================

#[test]
fn usage_errors_bypass_the_chain() {
    let soft = Arc::new(SoftReporter::new());
    let settings = Settings::builder()
        .with_shared_reporter(Arc::clone(&soft) as Arc<dyn Reporter>)
        .build();

    let err = Verifier::with_settings(9, Arc::new(settings))
        .divisible_by(0)
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(soft.is_empty());
}

#[test]
fn custom_predicate_routes_through_check() {
    const PALINDROME: MessageKey = MessageKey::new("text.palindrome", "be a palindrome");

    fn palindrome(v: Verifier<&str>) -> VerifyResult<Verifier<&str>> {
        let s = *v.value();
        let result = s.chars().eq(s.chars().rev());
        v.check_key(result, PALINDROME, &[])
    }

    assert!(palindrome(verify("level")).is_ok());
    let err = palindrome(verify_named("hello", "word")).unwrap_err();
    assert_eq!(err.to_string(), "word must be a palindrome");
    assert!(palindrome(verify("hello").not()).is_ok());
}
