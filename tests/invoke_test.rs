//! Tests for the single and repeat invocation passes

use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use annotated::prelude::*;
use annotated::{Denied, InvocationFailure, MemberRef};

#[derive(Default)]
struct Log(RefCell<Vec<&'static str>>);

impl Log {
    fn push(&self, entry: &'static str) {
        self.0.borrow_mut().push(entry);
    }

    fn entries(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

// =============================================================================
// Subjects
// =============================================================================

#[derive(Annotated, Default)]
struct Ordered {
    log: Log,
}

#[annotated_methods]
impl Ordered {
    #[mark]
    pub fn first(&self) {
        self.log.push("first");
    }

    #[mark]
    pub fn second(&self) {
        self.log.push("second");
    }

    #[mark]
    #[mark_repeat(times = 2)]
    pub fn both(&self) {
        self.log.push("both");
    }

    #[mark_repeat(times = 3)]
    pub fn thrice(&self) {
        self.log.push("thrice");
    }

    // Restricted, but never reached: zero calls means no access check either.
    #[mark_repeat(times = 0)]
    fn never(&self) {
        self.log.push("never");
    }
}

#[derive(Annotated, Default)]
struct Guarded {
    log: Log,
}

#[annotated_methods]
impl Guarded {
    #[mark]
    pub fn open(&self) {
        self.log.push("open");
    }

    #[mark]
    fn locked(&self) {
        self.log.push("locked");
    }

    #[mark]
    pub fn after(&self) {
        self.log.push("after");
    }
}

#[derive(Debug)]
struct Boom;

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("boom")
    }
}

impl std::error::Error for Boom {}

#[derive(Annotated)]
struct Flaky {
    log: Log,
    fail_on: usize,
}

#[annotated_methods]
impl Flaky {
    #[mark_repeat(times = 3)]
    pub fn attempt(&self) -> Result<(), Boom> {
        self.log.push("attempt");
        if self.log.entries().len() == self.fail_on { Err(Boom) } else { Ok(()) }
    }

    #[mark_repeat(times = 1)]
    pub fn later(&self) -> Result<u32, String> {
        self.log.push("later");
        Ok(7)
    }
}

static ANNOUNCED: AtomicUsize = AtomicUsize::new(0);

#[derive(Annotated)]
struct Herald;

#[annotated_methods]
impl Herald {
    #[mark_repeat(times = 2)]
    pub fn announce() {
        ANNOUNCED.fetch_add(1, Ordering::SeqCst);
    }
}

struct DenyNamed(&'static str);

impl AccessPolicy for DenyNamed {
    fn may_invoke(&self, member: &MemberRef) -> Result<(), Denied> {
        if member.name == self.0 {
            Err(Denied::new(format!("{} is blocked", member.name)))
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Single pass
// =============================================================================

#[test]
fn test_single_pass_invokes_each_once_in_order() {
    let subject = Ordered::default();
    let calls = AnnotationRunner::new().invoke_single_marked(&subject).unwrap();
    assert_eq!(calls, 3);
    assert_eq!(subject.log.entries(), ["first", "second", "both"]);
}

#[test]
fn test_single_pass_is_repeatable() {
    let subject = Ordered::default();
    let runner = AnnotationRunner::new();
    runner.invoke_single_marked(&subject).unwrap();
    runner.invoke_single_marked(&subject).unwrap();
    assert_eq!(subject.log.entries().len(), 6);
}

#[test]
fn test_inaccessible_method_stops_the_pass() {
    let subject = Guarded::default();
    let err = AnnotationRunner::new().invoke_single_marked(&subject).unwrap_err();

    assert!(matches!(err, InvocationFailure::Denied { method: "locked", .. }));
    assert_eq!(err.to_string(), "cannot invoke `Guarded::locked`: method is not public");
    // `after` is declared later and never runs
    assert_eq!(subject.log.entries(), ["open"]);
}

#[test]
fn test_unrestricted_policy_invokes_restricted_methods() {
    let subject = Guarded::default();
    let runner = AnnotationRunner::with_policy(Unrestricted);
    assert_eq!(runner.invoke_single_marked(&subject).unwrap(), 3);
    assert_eq!(subject.log.entries(), ["open", "locked", "after"]);
}

#[test]
fn test_custom_policy() {
    let subject = Ordered::default();
    let runner = AnnotationRunner::with_policy(DenyNamed("second"));
    assert_eq!(runner.policy().0, "second");
    let err = runner.invoke_single_marked(&subject).unwrap_err();
    assert_eq!(err.method(), "second");
    assert!(err.to_string().ends_with("second is blocked"));
    assert_eq!(subject.log.entries(), ["first"]);
}

// =============================================================================
// Repeat pass
// =============================================================================

#[test]
fn test_repeat_pass_invokes_consecutively() {
    let subject = Ordered::default();
    let calls = AnnotationRunner::new().invoke_repeat_marked(&subject).unwrap();
    assert_eq!(calls, 5);
    assert_eq!(subject.log.entries(), ["both", "both", "thrice", "thrice", "thrice"]);
}

#[test]
fn test_zero_times_is_never_invoked() {
    let subject = Ordered::default();
    AnnotationRunner::new().invoke_repeat_marked(&subject).unwrap();
    assert!(!subject.log.entries().contains(&"never"));
}

#[test]
fn test_failure_aborts_remaining_iterations() {
    let subject = Flaky { log: Log::default(), fail_on: 2 };
    let err = AnnotationRunner::new().invoke_repeat_marked(&subject).unwrap_err();

    match &err {
        InvocationFailure::Target { subject, method, call, source } => {
            assert_eq!(*subject, "Flaky");
            assert_eq!(*method, "attempt");
            assert_eq!(*call, 2);
            assert!(source.downcast_ref::<Boom>().is_some());
        }
        other => panic!("unexpected failure: {other}"),
    }
    assert_eq!(err.to_string(), "`Flaky::attempt` failed on call 2");
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(subject.log.entries(), ["attempt", "attempt"]);
}

#[test]
fn test_result_returning_methods_succeed() {
    let subject = Flaky { log: Log::default(), fail_on: usize::MAX };
    let calls = AnnotationRunner::new().invoke_repeat_marked(&subject).unwrap();
    assert_eq!(calls, 4);
    assert_eq!(subject.log.entries(), ["attempt", "attempt", "attempt", "later"]);
}

#[test]
fn test_receiverless_method() {
    let calls = AnnotationRunner::new().invoke_repeat_marked(&Herald).unwrap();
    assert_eq!(calls, 2);
    assert_eq!(ANNOUNCED.load(Ordering::SeqCst), 2);
}
