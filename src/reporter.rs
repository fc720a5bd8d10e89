//! The reporting handle assertions report failures through.
//!
//! # Overview
//!
//! Every assertion in this crate takes a reporting handle as its first
//! argument and communicates exclusively through it: a failed check calls
//! [`Reporter::error`] (record and keep going) or [`Reporter::fatal`]
//! (record and abort the test unit), and a passing check calls nothing.
//! Assertions never panic on their own and never return a [`Result`]; the
//! handle owns the consequences.
//!
//! Two handles ship with the crate:
//!
//! - [`Case`] — the handle for real tests. Nonfatal failures accumulate and
//!   surface as a single panic when the `Case` is dropped, so several
//!   independent failures in one test are all visible. Fatal failures panic
//!   on the spot.
//! - [`Recorder`] — the capturing handle. Nothing ever panics; every report
//!   is kept as a [`Failure`] for inspection. Use it to test custom
//!   assertions, or anywhere you want to look at failure messages as data.
//!
//! Implementing [`Reporter`] for your own harness type is supported and
//! expected; the trait is three methods, one of them optional.
//!
//! # Failure locations
//!
//! Assertions attribute failures to their call site: before reporting, they
//! pass [`Location::caller`] to [`Reporter::helper`]. The default `helper`
//! does nothing, so a handle that does not care about locations implements
//! only `error` and `fatal`. Both shipped handles override it and prefix
//! messages with `file:line:column`.

use std::{fmt, panic::Location, thread};

/// The minimal capability a test harness supplies to record assertion
/// outcomes.
///
/// Assertions call [`error`](Reporter::error) for failures the test should
/// survive and [`fatal`](Reporter::fatal) for failures that should abort the
/// surrounding test unit. A handle backed by a real test runner is expected
/// to abort in `fatal` (for Rust's harness that means panicking, as [`Case`]
/// does); a capturing handle such as [`Recorder`] may simply record and
/// return, in which case the assertion returns without doing further work.
///
/// # Examples
///
/// A handle that forwards to stderr and counts failures:
///
/// ```
/// use std::fmt;
///
/// use attest::{Reporter, equal};
///
/// #[derive(Default)]
/// struct Stderr {
///     failures: usize,
/// }
///
/// impl Reporter for Stderr {
///     fn error(&mut self, args: fmt::Arguments<'_>) {
///         self.failures += 1;
///         eprintln!("{args}");
///     }
///
///     fn fatal(&mut self, args: fmt::Arguments<'_>) {
///         self.error(args);
///         panic!("aborting after fatal assertion failure");
///     }
/// }
///
/// let mut t = Stderr::default();
/// equal!(t, 2 + 2, 4);
/// assert_eq!(t.failures, 0);
/// ```
pub trait Reporter {
    /// Records a failure and lets the test continue.
    fn error(&mut self, args: fmt::Arguments<'_>);

    /// Records a failure and aborts the surrounding test unit.
    fn fatal(&mut self, args: fmt::Arguments<'_>);

    /// Receives the source location of the assertion call about to report.
    ///
    /// Invoked immediately before [`error`](Reporter::error) or
    /// [`fatal`](Reporter::fatal), with the location of the assertion in the
    /// calling test. Affects only failure attribution, never behavior. The
    /// default implementation ignores it.
    fn helper(&mut self, location: &'static Location<'static>) {
        let _ = location;
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn error(&mut self, args: fmt::Arguments<'_>) {
        R::error(self, args)
    }

    fn fatal(&mut self, args: fmt::Arguments<'_>) {
        R::fatal(self, args)
    }

    fn helper(&mut self, location: &'static Location<'static>) {
        R::helper(self, location)
    }
}

/// The reporting handle for real tests, backed by the panic mechanism.
///
/// Nonfatal failures are collected; if any were recorded by the time the
/// `Case` is dropped, the drop panics with all of them, failing the test
/// while keeping every message visible. Fatal failures panic immediately.
///
/// # Examples
///
/// ```
/// use attest::{Case, equal, not_nil};
///
/// let mut t = Case::new();
/// equal!(t, "size".len(), 4);
/// not_nil!(t, Some(3));
/// // dropped clean: the test passes
/// ```
///
/// A failing check panics when the case is dropped, not at the call:
///
/// ```should_panic
/// use attest::{Case, equal};
///
/// let mut t = Case::new();
/// equal!(t, 1 + 1, 3); // records, execution continues
/// equal!(t, 2 + 2, 5); // also records
/// // both failures appear in the panic message here
/// ```
#[derive(Debug, Default)]
pub struct Case {
    failures: Vec<String>,
    pending: Option<&'static Location<'static>>,
}

impl Case {
    /// Creates a fresh case with no recorded failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any failure has been recorded so far.
    ///
    /// Useful for bailing out of a test early after a group of nonfatal
    /// checks:
    ///
    /// ```
    /// use attest::{Case, is_true};
    ///
    /// let mut t = Case::new();
    /// is_true!(t, 1 < 2);
    /// if t.failed() {
    ///     return;
    /// }
    /// // ... checks that only make sense if the above held ...
    /// ```
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    fn render(&mut self, args: fmt::Arguments<'_>) -> String {
        match self.pending.take() {
            Some(location) => format!("{location}: {args}"),
            None => args.to_string(),
        }
    }
}

impl Reporter for Case {
    fn error(&mut self, args: fmt::Arguments<'_>) {
        let message = self.render(args);
        self.failures.push(message);
    }

    fn fatal(&mut self, args: fmt::Arguments<'_>) {
        let message = self.render(args);
        self.failures.push(message.clone());
        panic!("{message}");
    }

    fn helper(&mut self, location: &'static Location<'static>) {
        self.pending = Some(location);
    }
}

impl Drop for Case {
    fn drop(&mut self) {
        if self.failures.is_empty() || thread::panicking() {
            return;
        }
        if self.failures.len() == 1 {
            panic!("{}", self.failures[0]);
        }
        let mut message = format!("{} assertion failures:", self.failures.len());
        for failure in &self.failures {
            message.push_str("\n  ");
            message.push_str(failure);
        }
        panic!("{message}");
    }
}

/// A single failure captured by a [`Recorder`].
#[derive(Debug, Clone)]
pub struct Failure {
    message: String,
    fatal: bool,
    location: Option<&'static Location<'static>>,
}

impl Failure {
    /// The failure message, without any location prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the failure came through the fatal reporting path.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// The call site the failure was attributed to, if one was supplied.
    #[must_use]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "{location}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// The capturing reporting handle: keeps every failure, panics never.
///
/// `Recorder` treats failures as data. The fatal path records a [`Failure`]
/// flagged as fatal and returns, so even "aborting" outcomes can be
/// inspected. Assertions are written to cope with a `fatal` that returns:
/// they stop evaluating and hand control back.
///
/// This is the handle to reach for when testing assertion behavior itself,
/// custom assertions built on [`Reporter`] included, and it is what the
/// examples throughout this documentation use to show failure messages.
///
/// # Examples
///
/// ```
/// use attest::{Recorder, equal};
///
/// let mut t = Recorder::new();
/// equal!(t, 1 + 1, 3);
///
/// assert!(t.failed());
/// assert_eq!(t.failures()[0].message(), "got: 2; want: 3;");
/// assert!(!t.failures()[0].is_fatal());
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Vec<Failure>,
    pending: Option<&'static Location<'static>>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All failures recorded so far, in order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns `true` if any failure has been recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns `true` if any recorded failure was fatal, meaning a real
    /// test would have aborted.
    #[must_use]
    pub fn aborted(&self) -> bool {
        self.failures.iter().any(Failure::is_fatal)
    }

    /// The most recent failure, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Failure> {
        self.failures.last()
    }

    /// Iterates over the recorded failure messages.
    ///
    /// ```
    /// use attest::{Recorder, is_true};
    ///
    /// let mut t = Recorder::new();
    /// is_true!(t, false, "first");
    /// is_true!(t, false, "second");
    ///
    /// let messages: Vec<&str> = t.messages().collect();
    /// assert_eq!(
    ///     messages,
    ///     ["got: false; want: true; first", "got: false; want: true; second"],
    /// );
    /// ```
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(Failure::message)
    }
}

impl Reporter for Recorder {
    fn error(&mut self, args: fmt::Arguments<'_>) {
        let location = self.pending.take();
        self.failures.push(Failure {
            message: args.to_string(),
            fatal: false,
            location,
        });
    }

    fn fatal(&mut self, args: fmt::Arguments<'_>) {
        let location = self.pending.take();
        self.failures.push(Failure {
            message: args.to_string(),
            fatal: true,
            location,
        });
    }

    fn helper(&mut self, location: &'static Location<'static>) {
        self.pending = Some(location);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    fn panic_text(result: std::thread::Result<()>) -> String {
        let payload = result.expect_err("expected a panic");
        match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => payload.downcast::<&str>().map(|s| s.to_string()).unwrap(),
        }
    }

    #[test]
    fn test_case_is_silent_when_clean() {
        let result = catch_unwind(|| {
            let mut t = Case::new();
            t.helper(Location::caller());
            drop(t);
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_case_panics_on_drop_with_single_failure() {
        let text = panic_text(catch_unwind(|| {
            let mut t = Case::new();
            t.error(format_args!("got: 2; want: 3;"));
        }));
        assert_eq!(text, "got: 2; want: 3;");
    }

    #[test]
    fn test_case_aggregates_multiple_failures() {
        let text = panic_text(catch_unwind(|| {
            let mut t = Case::new();
            t.error(format_args!("first"));
            t.error(format_args!("second"));
        }));
        assert!(text.starts_with("2 assertion failures:"));
        assert!(text.contains("\n  first"));
        assert!(text.contains("\n  second"));
    }

    #[test]
    fn test_case_fatal_panics_immediately_without_double_report() {
        let text = panic_text(catch_unwind(AssertUnwindSafe(|| {
            let mut t = Case::new();
            t.fatal(format_args!("stop here"));
            unreachable!("fatal must panic");
        })));
        assert_eq!(text, "stop here");
    }

    #[test]
    fn test_case_prefixes_attributed_location() {
        let text = panic_text(catch_unwind(|| {
            let mut t = Case::new();
            t.helper(Location::caller());
            t.error(format_args!("went wrong"));
        }));
        assert!(text.contains("reporter.rs"));
        assert!(text.ends_with("went wrong"));
    }

    #[test]
    fn test_recorder_keeps_order_and_fatality() {
        let mut t = Recorder::new();
        t.error(format_args!("soft"));
        t.fatal(format_args!("hard"));

        assert!(t.failed());
        assert!(t.aborted());
        assert_eq!(t.failures().len(), 2);
        assert_eq!(t.failures()[0].message(), "soft");
        assert!(!t.failures()[0].is_fatal());
        assert_eq!(t.last().unwrap().message(), "hard");
        assert!(t.last().unwrap().is_fatal());
    }

    #[test]
    fn test_recorder_location_is_consumed_per_report() {
        let mut t = Recorder::new();
        t.helper(Location::caller());
        t.error(format_args!("first"));
        t.error(format_args!("second"));

        assert!(t.failures()[0].location().is_some());
        assert!(t.failures()[1].location().is_none());
    }

    #[test]
    fn test_failure_display_includes_location() {
        let mut t = Recorder::new();
        t.helper(Location::caller());
        t.error(format_args!("boom"));

        let rendered = t.failures()[0].to_string();
        assert!(rendered.ends_with(": boom"));
        assert!(rendered.contains("reporter.rs"));
    }
}
