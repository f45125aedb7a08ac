//! Reporter chain composition through `Settings`.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use vouch::prelude::*;

/// Appends its label to a shared journal and continues.
struct Journal {
    label: &'static str,
    weight: i32,
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl Reporter for Journal {
    fn weight(&self) -> i32 {
        self.weight
    }

    fn name(&self) -> &str {
        self.label
    }

    fn report(&self, _: &ReportContext<'_>, _: bool, _: &MessageHolder<'_>) -> ReportFlow {
        self.entries.lock().push(self.label);
        Ok(ControlFlow::Continue(()))
    }
}

/// Raises its own error on failure, naming the subject.
struct Strict;

impl Reporter for Strict {
    fn weight(&self) -> i32 {
        -1
    }

    fn report(
        &self,
        context: &ReportContext<'_>,
        result: bool,
        message: &MessageHolder<'_>,
    ) -> ReportFlow {
        if result {
            return Ok(ControlFlow::Continue(()));
        }
        Err(VerifyError::Failed(
            context.failure(message).with_code("strict"),
        ))
    }
}

#[test]
fn reporters_run_in_weight_order() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let journal = |label, weight| Journal {
        label,
        weight,
        entries: Arc::clone(&entries),
    };

    let settings = Settings::builder()
        .with_reporter(journal("late", 5))
        .with_reporter(journal("early", -5))
        .with_reporter(journal("tie-a", 0))
        .with_reporter(journal("tie-b", 0))
        .build();

    assert!(Verifier::with_settings(2, Arc::new(settings)).even().is_ok());

    assert_eq!(*entries.lock(), ["early", "tie-a", "tie-b", "late"]);
}

#[test]
fn raising_reporter_stops_the_chain() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let settings = Settings::builder()
        .with_reporter(Strict)
        .with_reporter(Journal {
            label: "after",
            weight: 10,
            entries: Arc::clone(&entries),
        })
        .build();

    let err = Verifier::with_settings(3, Arc::new(settings))
        .even()
        .unwrap_err();

    assert_eq!(err.failure().and_then(|f| f.code()), Some("strict"));
    assert!(entries.lock().is_empty());
}

#[test]
fn soft_reporter_collects_across_a_chain() {
    let soft = Arc::new(SoftReporter::new());
    let settings = Arc::new(
        Settings::builder()
            .with_shared_reporter(Arc::clone(&soft) as Arc<dyn Reporter>)
            .build(),
    );

    let v = Verifier::with_settings(-3, Arc::clone(&settings))
        .named("offset")
        .even()
        .and_then(|v| v.positive())
        .and_then(|v| v.negative())
        .unwrap();
    assert_eq!(*v.value(), -3);
    assert!(Verifier::with_settings("", settings).not().empty().is_ok());

    assert_eq!(soft.len(), 3);
    let err = soft.finish().unwrap_err();
    assert_eq!(
        err.to_string(),
        "offset must be even\noffset must be positive\nvalue must be empty"
    );
    assert!(soft.is_empty());
    assert!(soft.finish().is_ok());
}

#[test]
fn logging_reporter_never_changes_the_outcome() {
    let settings = Arc::new(
        Settings::builder()
            .with_reporter(LoggingReporter::new())
            .build(),
    );

    assert!(Verifier::with_settings(2, Arc::clone(&settings)).even().is_ok());
    assert!(Verifier::with_settings(3, settings).even().is_err());
}

#[test]
fn empty_chain_accepts_everything() {
    let settings = Arc::new(Settings::builder().without_default_reporter().build());

    assert!(settings.executor().is_empty());
    assert!(Verifier::with_settings(3, settings).even().is_ok());
}

#[test]
fn settings_are_shared_between_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let settings = Arc::new(
        Settings::builder()
            .with_reporter(vouch::report::from_fn(0, move |_, _, _| {
                counter.fetch_add(1, Ordering::Relaxed);
                Ok(ControlFlow::Continue(()))
            }))
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let settings = Arc::clone(&settings);
            thread::spawn(move || {
                Verifier::with_settings(n * 2, settings)
                    .even()
                    .and_then(|v| v.less_than(100))
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(calls.load(Ordering::Relaxed), 8);
}
