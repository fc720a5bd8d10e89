//! The functions behind the assertion macros.
//!
//! Each macro in this crate expands to a call into this module. The macros
//! are the intended surface, but the functions are public and callable on
//! their own: they are useful when a value does not fit the shapes the
//! macros accept (hand it in as `Option<&dyn Error>` yourself), or when you
//! are building your own assertion on top of this crate's reporting
//! contract.
//!
//! Every function takes the reporting handle first and the optional,
//! already-formatted context suffix last. Passing `None` for the suffix is
//! what the macros do when the call site gives no trailing context.
//!
//! ```
//! use std::{error::Error, io};
//!
//! use attest::{ErrorExpectation, Recorder, assertions};
//!
//! // Hand the error view in as `Option<&dyn Error>` and call the
//! // function layer directly, skipping the macros' shape dispatch.
//! let held = io::Error::new(io::ErrorKind::NotFound, "missing");
//! let got: Option<&io::Error> = Some(&held);
//!
//! let mut t = Recorder::new();
//! assertions::error_is(
//!     &mut t,
//!     got.map(|e| e as &(dyn Error + 'static)),
//!     ErrorExpectation::from("missing"),
//!     None,
//! );
//! assert!(!t.failed());
//! ```

use core::{any::type_name, fmt, panic::Location};
use std::error::Error;

use regex::Regex;

use crate::{
    expectation::{ErrorExpectation, chain},
    message::Suffix,
    nilness::Nilness,
    reporter::Reporter,
};

/// Asserts that `got` is `true`.
///
/// On failure reports `got: false; want: true;` plus the suffix, nonfatally.
#[track_caller]
pub fn is_true<R: Reporter + ?Sized>(t: &mut R, got: bool, msg: Option<fmt::Arguments<'_>>) {
    t.helper(Location::caller());
    if !got {
        let suffix = Suffix(msg);
        t.error(format_args!("got: false; want: true;{suffix}"));
    }
}

/// Asserts that `got` is `false`.
///
/// On failure reports `got: true; want: false;` plus the suffix, nonfatally.
#[track_caller]
pub fn is_false<R: Reporter + ?Sized>(t: &mut R, got: bool, msg: Option<fmt::Arguments<'_>>) {
    t.helper(Location::caller());
    if got {
        let suffix = Suffix(msg);
        t.error(format_args!("got: true; want: false;{suffix}"));
    }
}

/// Asserts that `got` is nil, as judged by its [`Nilness`] implementation.
///
/// On failure reports `got: {got:?}; want: <nil>;` plus the suffix,
/// nonfatally.
#[track_caller]
pub fn nil<R, N>(t: &mut R, got: &N, msg: Option<fmt::Arguments<'_>>)
where
    R: Reporter + ?Sized,
    N: Nilness + fmt::Debug + ?Sized,
{
    t.helper(Location::caller());
    if !got.is_nil() {
        let suffix = Suffix(msg);
        t.error(format_args!("got: {got:?}; want: <nil>;{suffix}"));
    }
}

/// Asserts that `got` is not nil.
///
/// On failure reports `got: <nil>; expected non-nil;` plus the suffix,
/// nonfatally. The value is never rendered, so no `Debug` bound applies.
#[track_caller]
pub fn not_nil<R, N>(t: &mut R, got: &N, msg: Option<fmt::Arguments<'_>>)
where
    R: Reporter + ?Sized,
    N: Nilness + ?Sized,
{
    t.helper(Location::caller());
    if got.is_nil() {
        let suffix = Suffix(msg);
        t.error(format_args!("got: <nil>; expected non-nil;{suffix}"));
    }
}

/// Asserts that `pattern` compiles and matches somewhere in `got`.
///
/// The pattern is compiled fresh per call. An unparsable pattern is caller
/// misuse: it reports `unable to parse regexp pattern {pattern}: {err}`
/// fatally (no suffix) and never evaluates the match. A compiled pattern
/// that finds no match reports `got: {got:?}; want to match {pattern:?};`
/// plus the suffix, nonfatally.
#[track_caller]
pub fn matches_regexp<R, S, P>(t: &mut R, got: S, pattern: P, msg: Option<fmt::Arguments<'_>>)
where
    R: Reporter + ?Sized,
    S: AsRef<str>,
    P: AsRef<str>,
{
    t.helper(Location::caller());
    let pattern = pattern.as_ref();
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => {
            t.fatal(format_args!(
                "unable to parse regexp pattern {pattern}: {err}"
            ));
            return;
        }
    };
    let got = got.as_ref();
    if !re.is_match(got) {
        let suffix = Suffix(msg);
        t.error(format_args!(
            "got: {got:?}; want to match {pattern:?};{suffix}"
        ));
    }
}

/// Asserts that `got` satisfies `want`, per the [`ErrorExpectation`]
/// dispatch rules.
///
/// All failures here are fatal: a test that got the wrong error has nothing
/// meaningful left to check. See the [crate documentation](crate#failure-reporting)
/// for the full policy.
#[track_caller]
pub fn error_is<R: Reporter + ?Sized>(
    t: &mut R,
    got: Option<&(dyn Error + 'static)>,
    want: ErrorExpectation<'_>,
    msg: Option<fmt::Arguments<'_>>,
) {
    t.helper(Location::caller());
    let suffix = Suffix(msg);
    match want {
        ErrorExpectation::Absent => {
            if let Some(err) = got {
                t.fatal(format_args!("unexpected error: {err};{suffix}"));
            }
        }
        ErrorExpectation::Substring(want) => match got {
            None => {
                t.fatal(format_args!("got: <nil>; want: {want:?};{suffix}"));
            }
            Some(err) => {
                if !chain(err).any(|link| link.to_string().contains(want)) {
                    let msg = err.to_string();
                    t.fatal(format_args!("got: {msg:?}; want: {want:?};{suffix}"));
                }
            }
        },
        ErrorExpectation::Is(identity) => {
            let name = identity.type_name();
            let want = identity.want();
            match got {
                None => {
                    t.fatal(format_args!("got: <nil>; want: {name}({want});{suffix}"));
                }
                Some(err) => {
                    if !chain(err).any(|link| identity.matches(link)) {
                        t.fatal(format_args!(
                            "got: {err:?}; want: {name}({want});{suffix}"
                        ));
                    }
                }
            }
        }
        ErrorExpectation::Type(descriptor) => {
            let name = descriptor.name();
            match got {
                None => {
                    t.fatal(format_args!("got: <nil>; want: {name};{suffix}"));
                }
                Some(err) => {
                    if !chain(err).any(|link| descriptor.matches(link)) {
                        t.fatal(format_args!("got: {err:?}; want: {name};{suffix}"));
                    }
                }
            }
        }
    }
}

/// Asserts that `got` is present and some wrap-chain link has type `E`,
/// returning that link.
///
/// On success returns the first matching link and reports nothing. On
/// failure reports nonfatally and returns `None`: `got: nil; want assignable
/// to: {type};` when `got` is absent, `got: {got}; want assignable to:
/// {type};` when no link matches.
#[track_caller]
pub fn error_as<'e, E, R>(
    t: &mut R,
    got: Option<&'e (dyn Error + 'static)>,
    msg: Option<fmt::Arguments<'_>>,
) -> Option<&'e E>
where
    E: Error + 'static,
    R: Reporter + ?Sized,
{
    t.helper(Location::caller());
    let name = type_name::<E>();
    let err = match got {
        Some(err) => err,
        None => {
            let suffix = Suffix(msg);
            t.error(format_args!("got: nil; want assignable to: {name};{suffix}"));
            return None;
        }
    };
    match chain(err).find_map(|link| link.downcast_ref::<E>()) {
        Some(found) => Some(found),
        None => {
            let suffix = Suffix(msg);
            t.error(format_args!(
                "got: {err}; want assignable to: {name};{suffix}"
            ));
            None
        }
    }
}

#[doc(hidden)]
#[cold]
#[track_caller]
pub fn fail_equal<R, T>(t: &mut R, got: &T, want: &T, msg: Option<fmt::Arguments<'_>>)
where
    R: Reporter + ?Sized,
    T: fmt::Debug + ?Sized,
{
    t.helper(Location::caller());
    let suffix = Suffix(msg);
    t.error(format_args!("got: {got:?}; want: {want:?};{suffix}"));
}

#[doc(hidden)]
#[cold]
#[track_caller]
pub fn fail_not_equal<R, T>(t: &mut R, got: &T, msg: Option<fmt::Arguments<'_>>)
where
    R: Reporter + ?Sized,
    T: fmt::Debug + ?Sized,
{
    t.helper(Location::caller());
    let suffix = Suffix(msg);
    t.error(format_args!(
        "got: {got:?}; expected values to be different;{suffix}"
    ));
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::reporter::Recorder;

    use super::*;

    #[test]
    fn test_is_true_reports_constant_message() {
        let mut t = Recorder::new();
        is_true(&mut t, false, None);
        assert_eq!(
            t.messages().collect::<Vec<_>>(),
            ["got: false; want: true;"]
        );
        assert!(!t.aborted());
    }

    #[test]
    fn test_is_false_passes_silently() {
        let mut t = Recorder::new();
        is_false(&mut t, false, None);
        assert!(!t.failed());
    }

    #[test]
    fn test_unparsable_pattern_is_fatal_and_skips_matching() {
        let mut t = Recorder::new();
        matches_regexp(&mut t, "anything", "[", None);
        assert!(t.aborted());
        let message = t.last().unwrap().message();
        assert!(message.starts_with("unable to parse regexp pattern [: "));
        // Caller misuse carries no user suffix even when one was supplied.
        let mut t = Recorder::new();
        matches_regexp(&mut t, "anything", "[", Some(format_args!("ignored")));
        assert!(!t.last().unwrap().message().ends_with("ignored"));
    }

    #[test]
    fn test_pattern_mismatch_quotes_both_sides() {
        let mut t = Recorder::new();
        matches_regexp(&mut t, "abc123d", "abc[123]+$", None);
        assert_eq!(
            t.messages().collect::<Vec<_>>(),
            [r#"got: "abc123d"; want to match "abc[123]+$";"#]
        );
        assert!(!t.aborted());
    }

    #[test]
    fn test_error_as_returns_matched_link() {
        let held = io::Error::new(io::ErrorKind::NotFound, "gone");
        let mut t = Recorder::new();
        let found: Option<&io::Error> = error_as(&mut t, Some(&held), None);
        assert_eq!(found.unwrap().kind(), io::ErrorKind::NotFound);
        assert!(!t.failed());
    }

    #[test]
    fn test_error_as_absent_reports_nil() {
        let mut t = Recorder::new();
        let found: Option<&io::Error> = error_as(&mut t, None, None);
        assert!(found.is_none());
        assert_eq!(
            t.messages().collect::<Vec<_>>(),
            [format!(
                "got: nil; want assignable to: {};",
                type_name::<io::Error>()
            )]
        );
    }

    #[test]
    fn test_error_is_absent_vs_present() {
        let mut t = Recorder::new();
        error_is(&mut t, None, ErrorExpectation::Absent, None);
        assert!(!t.failed());

        let err = io::Error::other("boom");
        let mut t = Recorder::new();
        error_is(&mut t, Some(&err), ErrorExpectation::Absent, None);
        assert!(t.aborted());
        assert_eq!(t.messages().collect::<Vec<_>>(), ["unexpected error: boom;"]);
    }
}
