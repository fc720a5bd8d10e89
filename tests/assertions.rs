//! End-to-end tests of the assertion macros against both shipped handles.
//!
//! Failure messages are asserted byte for byte through a [`Recorder`];
//! panic-based behavior is observed through a [`Case`] under `catch_unwind`.

use std::{io, panic, rc::Rc};

use attest::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("stage {stage} failed")]
struct StageError {
    stage: u32,
}

#[derive(Debug, Error)]
#[error("pipeline halted")]
struct PipelineError {
    #[source]
    cause: StageError,
}

#[derive(Debug, Error)]
#[error("request aborted")]
struct RequestError {
    #[source]
    cause: PipelineError,
}

fn failed_request() -> Result<(), RequestError> {
    Err(RequestError {
        cause: PipelineError {
            cause: StageError { stage: 7 },
        },
    })
}

/// Equal whenever the instant matches, whatever the offset; `PartialEq`
/// would disagree for the fixtures below.
#[derive(Debug, Clone, PartialEq)]
struct Stamp {
    utc_secs: i64,
    offset_secs: i32,
}

impl Equivalence for Stamp {
    fn equivalent(&self, other: &Self) -> bool {
        self.utc_secs == other.utc_secs
    }
}

fn panic_text(result: std::thread::Result<()>) -> String {
    let payload = result.expect_err("expected a panic");
    match payload.downcast::<String>() {
        Ok(s) => *s,
        Err(payload) => payload.downcast::<&str>().map(|s| s.to_string()).unwrap(),
    }
}

#[test]
fn test_passing_assertions_stay_silent() {
    let mut t = Recorder::new();

    equal!(t, 2 + 2, 4);
    equal!(t, 9, 9,);
    equal!(t, "abc".to_string(), "abc".to_string());
    equal!(t, "same"[..], "same"[..]);
    not_equal!(t, 1, 2);
    is_true!(t, "team".contains('a'));
    is_false!(t, "team".contains('i'));
    nil!(t, None::<u32>);
    nil!(t, std::ptr::null::<u8>());
    let dead = Rc::downgrade(&Rc::new(0));
    nil!(t, dead);
    not_nil!(t, Some(5));
    equal!(t, None::<String>, None::<String>);
    equal!(t, std::ptr::null::<u8>(), std::ptr::null::<u8>());
    matches_regexp!(t, "v1.20.3", r"^v\d+\.\d+\.\d+$");
    error_is!(t, Ok::<u32, io::Error>(7), ErrorExpectation::Absent);
    error_is!(t, failed_request(), "stage 7 failed");

    let strong = Rc::new(1);
    not_nil!(t, Rc::downgrade(&strong));

    let got = failed_request();
    let link = error_as!(t, got, StageError);
    assert_eq!(link, Some(&StageError { stage: 7 }));

    assert!(!t.failed());
}

#[test]
fn test_nonfatal_failures_accumulate_in_order() {
    let mut t = Recorder::new();

    equal!(t, 1, 2);
    is_true!(t, false);
    not_nil!(t, None::<u8>);

    assert!(t.failed());
    assert!(!t.aborted());
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(
        messages,
        [
            "got: 1; want: 2;",
            "got: false; want: true;",
            "got: <nil>; expected non-nil;",
        ]
    );
}

#[test]
fn test_failure_message_formats() {
    let mut t = Recorder::new();

    equal!(t, "got".to_string(), "want".to_string());
    not_equal!(t, 7, 7);
    is_false!(t, true);
    nil!(t, Some(3));

    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(
        messages,
        [
            r#"got: "got"; want: "want";"#,
            "got: 7; expected values to be different;",
            "got: true; want: false;",
            "got: Some(3); want: <nil>;",
        ]
    );
}

#[test]
fn test_byte_sequences_compare_elementwise() {
    let mut t = Recorder::new();

    equal!(t, vec![0x1Fu8, 0x8B], vec![0x1F, 0x8B]);
    equal!(t, b"gzip"[..], b"gzip"[..]);
    not_equal!(t, None::<Vec<u8>>, Some(vec![]));
    assert!(!t.failed());

    equal!(t, vec![1u8, 2], vec![1u8, 2, 3]);
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(messages, ["got: [1, 2]; want: [1, 2, 3];"]);
}

#[test]
fn test_context_suffix_forms() {
    let mut t = Recorder::new();

    is_true!(t, false);
    is_true!(t, false, "checking flags");
    is_true!(t, false, "attempt {} of {}", 1, 3);
    is_true!(t, false, "100% {literal}");
    is_true!(t, false, 42);

    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(
        messages,
        [
            "got: false; want: true;",
            "got: false; want: true; checking flags",
            "got: false; want: true; attempt 1 of 3",
            "got: false; want: true; 100% {literal}",
            "got: false; want: true; 42",
        ]
    );
}

#[test]
fn test_equivalence_wins_over_partialeq() {
    let utc = Stamp {
        utc_secs: 1000,
        offset_secs: 0,
    };
    let oslo = Stamp {
        utc_secs: 1000,
        offset_secs: 3600,
    };
    assert_ne!(utc, oslo);

    let mut t = Recorder::new();
    equal!(t, utc.clone(), oslo.clone());
    assert!(!t.failed());

    not_equal!(t, utc, oslo);
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(
        messages,
        ["got: Stamp { utc_secs: 1000, offset_secs: 0 }; expected values to be different;"]
    );
}

#[test]
fn test_matches_regexp_searches_unanchored() {
    let mut t = Recorder::new();
    matches_regexp!(t, "release v2.1 (stable)", r"v\d+\.\d+");
    assert!(!t.failed());

    matches_regexp!(t, "release v2.1 (stable)", r"^v\d+\.\d+$");
    matches_regexp!(t, "abc123d", "abc[123]+$");
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(
        messages,
        [
            r#"got: "release v2.1 (stable)"; want to match "^v\\d+\\.\\d+$";"#,
            r#"got: "abc123d"; want to match "abc[123]+$";"#,
        ]
    );
}

#[test]
fn test_unparsable_pattern_aborts_without_suffix() {
    let mut t = Recorder::new();
    matches_regexp!(t, "input", "(unclosed", "context that must not appear");

    assert!(t.aborted());
    let failure = t.last().unwrap();
    assert!(failure.is_fatal());
    assert!(
        failure
            .message()
            .starts_with("unable to parse regexp pattern (unclosed: ")
    );
    assert!(!failure.message().contains("context that must not appear"));
}

#[test]
fn test_error_is_substring_matches_any_chain_link() {
    let mut t = Recorder::new();
    error_is!(t, failed_request(), "request aborted");
    error_is!(t, failed_request(), "pipeline halted");
    error_is!(t, failed_request(), "stage 7");
    assert!(!t.failed());

    error_is!(t, failed_request(), "network down");
    assert!(t.aborted());
    assert!(t.last().unwrap().is_fatal());
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(messages, [r#"got: "request aborted"; want: "network down";"#]);
}

#[test]
fn test_error_is_substring_on_absent_error() {
    let mut t = Recorder::new();
    error_is!(t, Ok::<(), io::Error>(()), "boom", "while dialing");

    assert!(t.aborted());
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(messages, [r#"got: <nil>; want: "boom"; while dialing"#]);
}

#[test]
fn test_error_is_identity_matches_value_in_chain() {
    let want = StageError { stage: 7 };

    let mut t = Recorder::new();
    error_is!(t, failed_request(), ErrorExpectation::is(&want));
    assert!(!t.failed());

    let other = StageError { stage: 8 };
    error_is!(t, failed_request(), ErrorExpectation::is(&other));
    assert!(t.aborted());

    let name = std::any::type_name::<StageError>();
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(
        messages,
        [format!(
            "got: RequestError {{ cause: PipelineError {{ cause: StageError {{ stage: 7 }} }} }}; \
             want: {name}(stage 8 failed);"
        )]
    );

    let mut t = Recorder::new();
    let absent: Option<StageError> = None;
    error_is!(t, absent, ErrorExpectation::is(&want));
    assert!(t.aborted());
    assert_eq!(
        t.messages().collect::<Vec<_>>(),
        [format!("got: <nil>; want: {name}(stage 7 failed);")]
    );
}

#[test]
fn test_error_is_type_expectation() {
    let mut t = Recorder::new();
    error_is!(t, failed_request(), ErrorExpectation::of::<StageError>());
    error_is!(t, failed_request(), ErrorType::of::<RequestError>());
    assert!(!t.failed());

    error_is!(t, failed_request(), ErrorExpectation::of::<io::Error>());
    assert!(t.aborted());

    let name = std::any::type_name::<io::Error>();
    let top = "RequestError { cause: PipelineError { cause: StageError { stage: 7 } } }";
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(messages, [format!("got: {top}; want: {name};")]);
}

#[test]
fn test_error_is_type_on_absent_error() {
    let mut t = Recorder::new();
    error_is!(t, None::<io::Error>, ErrorExpectation::of::<io::Error>());

    assert!(t.aborted());
    let name = std::any::type_name::<io::Error>();
    assert_eq!(
        t.messages().collect::<Vec<_>>(),
        [format!("got: <nil>; want: {name};")]
    );
}

#[test]
fn test_unexpected_error_is_fatal() {
    let mut t = Recorder::new();
    let got: Result<(), io::Error> = Err(io::Error::other("boom"));
    error_is!(t, got, ErrorExpectation::Absent, "cleanup path");

    assert!(t.aborted());
    assert_eq!(
        t.messages().collect::<Vec<_>>(),
        ["unexpected error: boom; cleanup path"]
    );
}

#[test]
fn test_error_as_extracts_and_reports() {
    let got = failed_request();
    let mut t = Recorder::new();
    let link = error_as!(t, got, PipelineError);
    assert_eq!(
        link.map(|e| e.to_string()),
        Some("pipeline halted".to_string())
    );
    assert!(!t.failed());

    let absent: Option<StageError> = None;
    let link = error_as!(t, absent, StageError);
    assert!(link.is_none());

    let got = failed_request();
    let link = error_as!(t, got, io::Error);
    assert!(link.is_none());

    assert!(!t.aborted());
    let stage_name = std::any::type_name::<StageError>();
    let io_name = std::any::type_name::<io::Error>();
    let messages: Vec<&str> = t.messages().collect();
    assert_eq!(
        messages,
        [
            format!("got: nil; want assignable to: {stage_name};"),
            format!("got: request aborted; want assignable to: {io_name};"),
        ]
    );
}

#[test]
fn test_error_shapes_all_resolve() {
    let mut t = Recorder::new();
    let e = io::Error::other("boom");

    error_is!(t, e, "boom");
    error_is!(t, &e, "boom");

    let opt_ref: Option<&io::Error> = Some(&e);
    error_is!(t, opt_ref, "boom");

    let opt_dyn: Option<&(dyn std::error::Error + 'static)> = Some(&e);
    error_is!(t, opt_dyn, "boom");

    let opt_dyn_ss: Option<&(dyn std::error::Error + Send + Sync + 'static)> = Some(&e);
    error_is!(t, opt_dyn_ss, "boom");

    let opt_owned: Option<io::Error> = Some(io::Error::other("boom"));
    error_is!(t, opt_owned, "boom");

    let res: Result<u8, io::Error> = Err(io::Error::other("boom"));
    error_is!(t, res, "boom");
    error_is!(t, &res, "boom");

    let boxed: Box<dyn std::error::Error> = Box::new(io::Error::other("boom"));
    error_is!(t, boxed, "boom");

    let boxed_ss: Box<dyn std::error::Error + Send + Sync> = Box::new(io::Error::other("boom"));
    error_is!(t, boxed_ss, "boom");

    let res_boxed: Result<u8, Box<dyn std::error::Error>> = Err(Box::new(io::Error::other("boom")));
    error_is!(t, res_boxed, "boom");

    let opt_boxed: Option<Box<dyn std::error::Error>> = Some(Box::new(io::Error::other("boom")));
    error_is!(t, opt_boxed, "boom");

    let boxed_concrete: Box<io::Error> = Box::new(io::Error::other("boom"));
    error_is!(t, boxed_concrete, "boom");

    let res_boxed_concrete: Result<u8, Box<io::Error>> = Err(Box::new(io::Error::other("boom")));
    error_is!(t, res_boxed_concrete, "boom");

    let opt_boxed_concrete: Option<Box<io::Error>> = Some(Box::new(io::Error::other("boom")));
    error_is!(t, opt_boxed_concrete, "boom");

    let dyn_ref: &(dyn std::error::Error + 'static) = &e;
    error_is!(t, dyn_ref, "boom");
    error_is!(t, *dyn_ref, "boom");

    assert!(!t.failed());
}

#[test]
fn test_borrowed_errors_need_no_static_lifetime() {
    let mut t = Recorder::new();
    let err = io::Error::other("transient");

    let view: &io::Error = &err;
    error_is!(t, view, "transient");

    let as_dyn: &(dyn std::error::Error + 'static) = &err;
    error_is!(t, as_dyn, "transient");

    let wrapped = PipelineError {
        cause: StageError { stage: 2 },
    };
    let link = error_as!(t, &wrapped, StageError);
    assert_eq!(link, Some(&StageError { stage: 2 }));

    assert!(!t.failed());
}

#[test]
fn test_boxed_concrete_errors_expose_the_inner_link() {
    let mut t = Recorder::new();

    let boxed: Box<io::Error> = Box::new(io::Error::other("disk gone"));
    let link = error_as!(t, boxed, io::Error);
    assert_eq!(link.map(|e| e.to_string()), Some("disk gone".to_string()));

    let res: Result<(), Box<io::Error>> = Err(Box::new(io::Error::other("disk gone")));
    error_is!(t, res, ErrorExpectation::of::<io::Error>());

    let opt: Option<Box<io::Error>> = Some(Box::new(io::Error::other("disk gone")));
    error_is!(t, opt, ErrorExpectation::of::<io::Error>());

    let boxed_chain: Box<RequestError> = Box::new(RequestError {
        cause: PipelineError {
            cause: StageError { stage: 4 },
        },
    });
    let link = error_as!(t, boxed_chain, StageError);
    assert_eq!(link, Some(&StageError { stage: 4 }));

    assert!(!t.failed());
}

#[test]
fn test_case_panic_aggregates_all_failures() {
    let text = panic_text(panic::catch_unwind(|| {
        let mut t = Case::new();
        equal!(t, 1, 2);
        is_true!(t, false);
    }));
    assert!(text.starts_with("2 assertion failures:"));
    assert!(text.contains("got: 1; want: 2;"));
    assert!(text.contains("got: false; want: true;"));
    assert!(text.contains("tests/assertions.rs"));
}

#[test]
fn test_case_fatal_panics_at_the_call() {
    let text = panic_text(panic::catch_unwind(|| {
        let mut t = Case::new();
        error_is!(t, failed_request(), "network down");
        unreachable!("error_is! must abort the test on a wrong error");
    }));
    assert!(text.ends_with(r#"got: "request aborted"; want: "network down";"#));
}

#[test]
fn test_failures_are_attributed_to_the_call_site() {
    let mut t = Recorder::new();
    equal!(t, 1, 2);
    let expected_line = line!() - 1;

    let failure = t.last().expect("one failure");
    let location = failure.location().expect("location attributed");
    assert!(location.file().ends_with("assertions.rs"));
    assert_eq!(location.line(), expected_line);
}

#[test]
fn test_handles_are_send() {
    static_assertions::assert_impl_all!(Case: Send, Sync);
    static_assertions::assert_impl_all!(Recorder: Send, Sync);
    static_assertions::assert_impl_all!(attest::Failure: Send, Sync, Clone);
}

#[test]
fn test_nilness_is_opt_in() {
    static_assertions::assert_impl_all!(Option<u8>: Nilness);
    static_assertions::assert_impl_all!(*const u8: Nilness);
    static_assertions::assert_impl_all!(*mut u8: Nilness);
    static_assertions::assert_impl_all!(std::rc::Weak<u8>: Nilness);
    static_assertions::assert_impl_all!(std::sync::Weak<u8>: Nilness);

    static_assertions::assert_not_impl_any!(u8: Nilness);
    static_assertions::assert_not_impl_any!(String: Nilness);
    static_assertions::assert_not_impl_any!(bool: Nilness);
    static_assertions::assert_not_impl_any!(Vec<u8>: Nilness);
}
