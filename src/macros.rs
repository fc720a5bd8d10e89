/// Asserts that two values of the same type are equal.
///
/// How "equal" is decided depends on the type, resolved at compile time:
///
/// - if the type implements [`Equivalence`], that implementation decides,
///   even when the type also derives [`PartialEq`];
/// - otherwise the type's [`PartialEq`] decides.
///
/// Both values must have the same type. Comparing a `u32` against a `u64`,
/// or a `Vec<i32>` against a `Vec<Box<dyn Any>>`, is a compile error rather
/// than a runtime inequality.
///
/// On failure reports `got: {got:?}; want: {want:?};` nonfatally: the test
/// keeps running and further failures are also recorded. See the
/// [crate documentation](crate#failure-reporting) for the policy.
///
/// Trailing context can be nothing, a single value rendered with
/// [`Display`](core::fmt::Display) (a lone string is appended verbatim, not
/// treated as a template), or a format string with arguments.
///
/// # Examples
///
/// ```
/// use attest::{Case, equal};
///
/// let mut t = Case::new();
/// equal!(t, 1 + 1, 2);
/// equal!(t, "a".repeat(3), "aaa".to_string());
/// equal!(t, vec![1, 2], vec![1, 2], "checking {} entries", 2);
/// ```
///
/// Failure messages, observed through a [`Recorder`](crate::Recorder):
///
/// ```
/// use attest::{Recorder, equal};
///
/// let mut t = Recorder::new();
/// equal!(t, 1 + 1, 3);
/// equal!(t, 2 + 2, 5, "while adding");
///
/// let messages: Vec<&str> = t.messages().collect();
/// assert_eq!(messages, ["got: 2; want: 3;", "got: 4; want: 5; while adding"]);
/// ```
///
/// A type with its own notion of equality is judged by it:
///
/// ```
/// use attest::{Case, Equivalence, equal};
///
/// #[derive(Debug, PartialEq)]
/// struct Stamp {
///     utc_secs: i64,
///     offset_secs: i32,
/// }
///
/// impl Equivalence for Stamp {
///     fn equivalent(&self, other: &Self) -> bool {
///         self.utc_secs == other.utc_secs
///     }
/// }
///
/// let utc = Stamp { utc_secs: 1000, offset_secs: 0 };
/// let oslo = Stamp { utc_secs: 1000, offset_secs: 3600 };
///
/// let mut t = Case::new();
/// equal!(t, utc, oslo); // same instant, different representation
/// ```
///
/// [`Equivalence`]: crate::Equivalence
#[macro_export]
macro_rules! equal {
    (@impl $t:expr, $got:expr, $want:expr, $msg:expr) => {{
        use $crate::__private::kind::*;
        let got = &$got;
        let want = &$want;
        if !(&&Wrap(got)).comparator().eq(got, want) {
            $crate::assertions::fail_equal(&mut $t, got, want, $msg);
        }
    }};
    ($t:expr, $got:expr, $want:expr $(,)?) => {
        $crate::equal!(@impl $t, $got, $want, $crate::__private::None)
    };
    ($t:expr, $got:expr, $want:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::equal!(
            @impl $t, $got, $want,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+))
        )
    };
    ($t:expr, $got:expr, $want:expr, $context:expr $(,)?) => {
        $crate::equal!(
            @impl $t, $got, $want,
            $crate::__private::Some($crate::__private::format_args!("{}", $context))
        )
    };
}

/// Asserts that two values of the same type are not equal.
///
/// Equality is resolved exactly as in [`equal!`]: a type's [`Equivalence`]
/// implementation if present, its [`PartialEq`] otherwise.
///
/// On failure reports `got: {got:?}; expected values to be different;`
/// nonfatally. Only `got` appears in the message; the values were equal, so
/// printing both would say the same thing twice.
///
/// # Examples
///
/// ```
/// use attest::{Case, not_equal};
///
/// let mut t = Case::new();
/// not_equal!(t, "before", "after");
/// not_equal!(t, 1, 2, "ids must differ");
/// ```
///
/// [`Equivalence`]: crate::Equivalence
#[macro_export]
macro_rules! not_equal {
    (@impl $t:expr, $got:expr, $want:expr, $msg:expr) => {{
        use $crate::__private::kind::*;
        let got = &$got;
        let want = &$want;
        if (&&Wrap(got)).comparator().eq(got, want) {
            $crate::assertions::fail_not_equal(&mut $t, got, $msg);
        }
    }};
    ($t:expr, $got:expr, $want:expr $(,)?) => {
        $crate::not_equal!(@impl $t, $got, $want, $crate::__private::None)
    };
    ($t:expr, $got:expr, $want:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::not_equal!(
            @impl $t, $got, $want,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+))
        )
    };
    ($t:expr, $got:expr, $want:expr, $context:expr $(,)?) => {
        $crate::not_equal!(
            @impl $t, $got, $want,
            $crate::__private::Some($crate::__private::format_args!("{}", $context))
        )
    };
}

/// Asserts that an expression is `true`.
///
/// On failure reports `got: false; want: true;` nonfatally. The expression
/// itself is not echoed; use the trailing context to say what was being
/// checked.
///
/// # Examples
///
/// ```
/// use attest::{Case, is_true};
///
/// let mut t = Case::new();
/// is_true!(t, 2 + 2 == 4);
/// is_true!(t, "team".contains('a'), "looking for an 'a' in {:?}", "team");
/// ```
#[macro_export]
macro_rules! is_true {
    ($t:expr, $got:expr $(,)?) => {
        $crate::assertions::is_true(&mut $t, $got, $crate::__private::None)
    };
    ($t:expr, $got:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::assertions::is_true(
            &mut $t,
            $got,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+)),
        )
    };
    ($t:expr, $got:expr, $context:expr $(,)?) => {
        $crate::assertions::is_true(
            &mut $t,
            $got,
            $crate::__private::Some($crate::__private::format_args!("{}", $context)),
        )
    };
}

/// Asserts that an expression is `false`. Counterpart of [`is_true!`].
///
/// On failure reports `got: true; want: false;` nonfatally.
///
/// # Examples
///
/// ```
/// use attest::{Case, is_false};
///
/// let mut t = Case::new();
/// is_false!(t, "".contains('x'));
/// ```
#[macro_export]
macro_rules! is_false {
    ($t:expr, $got:expr $(,)?) => {
        $crate::assertions::is_false(&mut $t, $got, $crate::__private::None)
    };
    ($t:expr, $got:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::assertions::is_false(
            &mut $t,
            $got,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+)),
        )
    };
    ($t:expr, $got:expr, $context:expr $(,)?) => {
        $crate::assertions::is_false(
            &mut $t,
            $got,
            $crate::__private::Some($crate::__private::format_args!("{}", $context)),
        )
    };
}

/// Asserts that a value is nil, as judged by its [`Nilness`] implementation:
/// `None`, a null raw pointer, or a dead [`Weak`](std::rc::Weak).
///
/// Types with no nil state (numbers, strings, structs, ...) do not implement
/// [`Nilness`], so asserting on them is a compile error. Value types are
/// never nil.
///
/// On failure reports `got: {got:?}; want: <nil>;` nonfatally.
///
/// # Examples
///
/// ```
/// use attest::{Case, nil};
///
/// let mut t = Case::new();
/// nil!(t, None::<u32>);
/// nil!(t, std::ptr::null::<u8>());
///
/// let gone = std::rc::Rc::downgrade(&std::rc::Rc::new(5));
/// nil!(t, gone, "the only strong count was dropped");
/// ```
///
/// [`Nilness`]: crate::Nilness
#[macro_export]
macro_rules! nil {
    ($t:expr, $got:expr $(,)?) => {
        $crate::assertions::nil(&mut $t, &$got, $crate::__private::None)
    };
    ($t:expr, $got:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::assertions::nil(
            &mut $t,
            &$got,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+)),
        )
    };
    ($t:expr, $got:expr, $context:expr $(,)?) => {
        $crate::assertions::nil(
            &mut $t,
            &$got,
            $crate::__private::Some($crate::__private::format_args!("{}", $context)),
        )
    };
}

/// Asserts that a value is not nil. Counterpart of [`nil!`].
///
/// On failure reports `got: <nil>; expected non-nil;` nonfatally. The value
/// never appears in the message, so unlike [`nil!`] this works on types
/// without a [`Debug`](core::fmt::Debug) implementation.
///
/// # Examples
///
/// ```
/// use attest::{Case, not_nil};
///
/// let mut t = Case::new();
/// not_nil!(t, Some("present"));
/// not_nil!(t, &7 as *const i32);
/// ```
///
/// [`Nilness`]: crate::Nilness
#[macro_export]
macro_rules! not_nil {
    ($t:expr, $got:expr $(,)?) => {
        $crate::assertions::not_nil(&mut $t, &$got, $crate::__private::None)
    };
    ($t:expr, $got:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::assertions::not_nil(
            &mut $t,
            &$got,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+)),
        )
    };
    ($t:expr, $got:expr, $context:expr $(,)?) => {
        $crate::assertions::not_nil(
            &mut $t,
            &$got,
            $crate::__private::Some($crate::__private::format_args!("{}", $context)),
        )
    };
}

/// Asserts that a string matches a regular expression.
///
/// The pattern is compiled with the [`regex`] crate on every call and
/// searched unanchored; anchor with `^`/`$` when full-string matching is
/// meant. A pattern that fails to compile is a defect in the test itself, so
/// it is reported fatally (`unable to parse regexp pattern {pattern}:
/// {err}`) and the match is never evaluated.
///
/// On no match reports `got: {got:?}; want to match {pattern:?};`
/// nonfatally.
///
/// # Examples
///
/// ```
/// use attest::{Case, Recorder, matches_regexp};
///
/// let mut t = Case::new();
/// matches_regexp!(t, "v1.2.3", r"^v\d+\.\d+\.\d+$");
///
/// let mut t = Recorder::new();
/// matches_regexp!(t, "abc123d", "abc[123]+$");
/// let messages: Vec<&str> = t.messages().collect();
/// assert_eq!(messages, [r#"got: "abc123d"; want to match "abc[123]+$";"#]);
/// ```
#[macro_export]
macro_rules! matches_regexp {
    ($t:expr, $got:expr, $pattern:expr $(,)?) => {
        $crate::assertions::matches_regexp(&mut $t, &$got, &$pattern, $crate::__private::None)
    };
    ($t:expr, $got:expr, $pattern:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::assertions::matches_regexp(
            &mut $t,
            &$got,
            &$pattern,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+)),
        )
    };
    ($t:expr, $got:expr, $pattern:expr, $context:expr $(,)?) => {
        $crate::assertions::matches_regexp(
            &mut $t,
            &$got,
            &$pattern,
            $crate::__private::Some($crate::__private::format_args!("{}", $context)),
        )
    };
}

/// Asserts that an error-carrying value satisfies an [`ErrorExpectation`].
///
/// `got` may be a `Result`, an `Option` of an error, a bare error value or
/// reference, a boxed error (`Box<dyn Error>` or a box of a concrete error),
/// or anything implementing [`Fallible`]; the error view is resolved at
/// compile time. Boxes are seen through, so the chain starts at the boxed
/// error rather than at the box. `want` is anything convertible into an
/// [`ErrorExpectation`]:
///
/// - [`ErrorExpectation::Absent`] — expect no error;
/// - a plain `&str` — expect a wrap-chain message containing it;
/// - [`ErrorExpectation::is(&e)`](crate::ErrorExpectation::is) — expect `e`
///   itself somewhere in the wrap-chain;
/// - [`ErrorExpectation::of::<E>()`](crate::ErrorExpectation::of) — expect a
///   link of type `E` somewhere in the wrap-chain.
///
/// Failures are **fatal**: with the wrong error in hand, later checks in the
/// test rarely mean anything. On a [`Case`](crate::Case) that panics at the
/// call; see the [crate documentation](crate#failure-reporting).
///
/// # Examples
///
/// ```
/// use std::io;
///
/// use attest::{Case, ErrorExpectation, error_is};
///
/// fn read() -> Result<u8, io::Error> {
///     Err(io::Error::new(io::ErrorKind::NotFound, "missing blob"))
/// }
///
/// let mut t = Case::new();
/// error_is!(t, read(), "missing");
/// error_is!(t, read(), ErrorExpectation::of::<io::Error>());
/// error_is!(t, Ok::<u8, io::Error>(1), ErrorExpectation::Absent);
/// ```
///
/// [`ErrorExpectation`]: crate::ErrorExpectation
/// [`ErrorExpectation::Absent`]: crate::ErrorExpectation::Absent
/// [`Fallible`]: crate::Fallible
#[macro_export]
macro_rules! error_is {
    (@impl $t:expr, $got:expr, $want:expr, $msg:expr) => {{
        use $crate::__private::kind::*;
        let got = &$got;
        $crate::assertions::error_is(
            &mut $t,
            (&&&&&Wrap(got)).fallibility().failure(got),
            $crate::ErrorExpectation::from($want),
            $msg,
        )
    }};
    ($t:expr, $got:expr, $want:expr $(,)?) => {
        $crate::error_is!(@impl $t, $got, $want, $crate::__private::None)
    };
    ($t:expr, $got:expr, $want:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::error_is!(
            @impl $t, $got, $want,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+))
        )
    };
    ($t:expr, $got:expr, $want:expr, $context:expr $(,)?) => {
        $crate::error_is!(
            @impl $t, $got, $want,
            $crate::__private::Some($crate::__private::format_args!("{}", $context))
        )
    };
}

/// Asserts that an error-carrying value holds an error of type `E` somewhere
/// in its wrap-chain, and evaluates to that link as `Option<&E>`.
///
/// `got` accepts the same shapes as [`error_is!`]. There is no out-parameter
/// to assign through; the macro returns the matched link instead: bind the
/// result to keep inspecting the concrete error, or discard it to just
/// assert.
///
/// On failure reports nonfatally (`got: nil; want assignable to: {type};`
/// when no error is present, `got: {got}; want assignable to: {type};` when
/// no link has the type) and evaluates to `None`.
///
/// # Examples
///
/// ```
/// use std::io;
///
/// use attest::{Case, error_as};
///
/// fn read() -> Result<u8, io::Error> {
///     Err(io::Error::new(io::ErrorKind::NotFound, "missing blob"))
/// }
///
/// let outcome = read();
/// let mut t = Case::new();
/// if let Some(err) = error_as!(t, outcome, io::Error) {
///     assert_eq!(err.kind(), io::ErrorKind::NotFound);
/// }
/// ```
#[macro_export]
macro_rules! error_as {
    (@impl $t:expr, $got:expr, $target:ty, $msg:expr) => {{
        use $crate::__private::kind::*;
        let got = &$got;
        $crate::assertions::error_as::<$target, _>(
            &mut $t,
            (&&&&&Wrap(got)).fallibility().failure(got),
            $msg,
        )
    }};
    ($t:expr, $got:expr, $target:ty $(,)?) => {
        $crate::error_as!(@impl $t, $got, $target, $crate::__private::None)
    };
    ($t:expr, $got:expr, $target:ty, $fmt:literal, $($arg:tt)+) => {
        $crate::error_as!(
            @impl $t, $got, $target,
            $crate::__private::Some($crate::__private::format_args!($fmt, $($arg)+))
        )
    };
    ($t:expr, $got:expr, $target:ty, $context:expr $(,)?) => {
        $crate::error_as!(
            @impl $t, $got, $target,
            $crate::__private::Some($crate::__private::format_args!("{}", $context))
        )
    };
}
