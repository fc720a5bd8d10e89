//! Error expectations: the "want" side of [`error_is!`], and the chain
//! machinery behind error matching.
//!
//! # Overview
//!
//! [`error_is!`] compares a possibly-absent error against an
//! [`ErrorExpectation`], which captures the four things a test usually wants
//! to say about an error:
//!
//! - [`Absent`](ErrorExpectation::Absent) — there must be no error at all.
//! - [`Substring`](ErrorExpectation::Substring) — the rendered message must
//!   contain the given text. Plain strings convert into this variant, so
//!   `error_is!(t, result, "permission denied")` just works.
//! - An [`is`](ErrorExpectation::is) expectation — some link of the
//!   wrap-chain must *be* the given error: same type, comparing equal.
//! - An [`of`](ErrorExpectation::of) expectation — some link of the
//!   wrap-chain must have the given type, whatever its value.
//!
//! The wrap-chain is the error itself followed by its transitive
//! [`source`](std::error::Error::source) links; [`chain`] exposes the walk
//! as an iterator.
//!
//! The "got" side is anything [`Fallible`]: a bare error, a reference to
//! one, a `Result`, an `Option` of an error. See the trait for the exact
//! shapes.
//!
//! [`error_is!`]: crate::error_is

use core::{any::type_name, fmt, iter::FusedIterator};
use std::error::Error;

/// Iterator over an error and its transitive sources, outermost first.
///
/// Created by [`chain`].
#[derive(Debug, Clone, Copy)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Walks `err` and every error it transitively wraps, outermost first.
///
/// # Examples
///
/// ```
/// use std::{error::Error, fmt};
///
/// #[derive(Debug)]
/// struct Outer(Inner);
/// #[derive(Debug)]
/// struct Inner;
///
/// impl fmt::Display for Outer {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("outer")
///     }
/// }
/// impl fmt::Display for Inner {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("inner")
///     }
/// }
/// impl Error for Outer {
///     fn source(&self) -> Option<&(dyn Error + 'static)> {
///         Some(&self.0)
///     }
/// }
/// impl Error for Inner {}
///
/// let err = Outer(Inner);
/// let messages: Vec<String> = attest::chain(&err).map(|e| e.to_string()).collect();
/// assert_eq!(messages, ["outer", "inner"]);
/// ```
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

fn is_type<E: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    err.is::<E>()
}

fn links_equal<E: Error + PartialEq + 'static>(
    candidate: &(dyn Error + 'static),
    want: &(dyn Error + 'static),
) -> bool {
    match (candidate.downcast_ref::<E>(), want.downcast_ref::<E>()) {
        (Some(candidate), Some(want)) => candidate == want,
        _ => false,
    }
}

/// A first-class description of an error type, matched against wrap-chain
/// links by downcast.
///
/// Built by [`ErrorExpectation::of`] (or [`ErrorType::of`] directly when you
/// want to store or pass the descriptor around). Carries the type's name for
/// failure messages and a monomorphized probe, so the described type does
/// not appear in the signature of anything that holds it.
///
/// # Examples
///
/// ```
/// use std::io;
///
/// use attest::ErrorType;
///
/// let descriptor = ErrorType::of::<io::Error>();
/// assert_eq!(descriptor.name(), std::any::type_name::<io::Error>());
///
/// let err = io::Error::new(io::ErrorKind::NotFound, "gone");
/// assert!(descriptor.matches(&err));
/// ```
#[derive(Clone, Copy)]
pub struct ErrorType {
    name: &'static str,
    matches: fn(&(dyn Error + 'static)) -> bool,
}

impl ErrorType {
    /// Describes the concrete error type `E`.
    #[must_use]
    pub fn of<E: Error + 'static>() -> Self {
        Self {
            name: type_name::<E>(),
            matches: is_type::<E>,
        }
    }

    /// The described type's name, as used in failure messages.
    ///
    /// This is [`type_name`](core::any::type_name)'s rendering, which uses
    /// the type's defining path and may differ from a re-export's path.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if `err` has the described type.
    ///
    /// This checks the value itself, not its sources; wrap-chain traversal
    /// is [`error_is!`]'s job.
    ///
    /// [`error_is!`]: crate::error_is
    #[must_use]
    pub fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        (self.matches)(err)
    }
}

impl fmt::Debug for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorType").field(&self.name).finish()
    }
}

/// A concrete error value to be found in the wrap-chain, compared with "is"
/// semantics.
///
/// Built by [`ErrorExpectation::is`]. A chain link matches when it has the
/// wanted error's type and compares equal to it.
#[derive(Clone, Copy)]
pub struct ErrorIdentity<'a> {
    want: &'a (dyn Error + 'static),
    name: &'static str,
    eq: fn(&(dyn Error + 'static), &(dyn Error + 'static)) -> bool,
}

impl ErrorIdentity<'_> {
    pub(crate) fn matches(&self, link: &(dyn Error + 'static)) -> bool {
        (self.eq)(link, self.want)
    }

    pub(crate) fn want(&self) -> &(dyn Error + 'static) {
        self.want
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ErrorIdentity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorIdentity")
            .field("want", &self.want)
            .field("type", &self.name)
            .finish()
    }
}

/// What an [`error_is!`] assertion expects of the "got" error.
///
/// See the [module documentation](self) for the meaning of each shape. The
/// enum is closed: every expectation a caller can express is one of these
/// variants, so there is no runtime "unsupported expectation" failure. An
/// inexpressible want does not compile.
///
/// # Examples
///
/// ```
/// use std::io;
///
/// use attest::{ErrorExpectation, Recorder, error_is};
///
/// let mut t = Recorder::new();
///
/// // No error expected, none present.
/// error_is!(t, None::<io::Error>, ErrorExpectation::Absent);
///
/// // Substring of the rendered message, via From<&str>.
/// let err = io::Error::other("disk on fire");
/// error_is!(t, err, "on fire");
///
/// // Some link of the chain has this type.
/// let err = io::Error::other("disk on fire");
/// error_is!(t, err, ErrorExpectation::of::<io::Error>());
///
/// assert!(!t.failed());
/// ```
///
/// [`error_is!`]: crate::error_is
#[derive(Debug, Clone, Copy)]
pub enum ErrorExpectation<'a> {
    /// No error at all.
    Absent,
    /// Some rendered message containing this text.
    Substring(&'a str),
    /// Some wrap-chain link being this very error.
    Is(ErrorIdentity<'a>),
    /// Some wrap-chain link having this type.
    Type(ErrorType),
}

impl<'a> ErrorExpectation<'a> {
    /// Expects `want` itself somewhere in the wrap-chain: a link with
    /// `want`'s type that compares equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::{error::Error, fmt};
    ///
    /// use attest::{ErrorExpectation, Recorder, error_is};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Denied {
    ///     user: &'static str,
    /// }
    ///
    /// impl fmt::Display for Denied {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "access denied for {}", self.user)
    ///     }
    /// }
    /// impl Error for Denied {}
    ///
    /// let got = Denied { user: "root" };
    /// let want = Denied { user: "root" };
    ///
    /// let mut t = Recorder::new();
    /// error_is!(t, got, ErrorExpectation::is(&want));
    /// assert!(!t.failed());
    /// ```
    #[must_use]
    pub fn is<E: Error + PartialEq + 'static>(want: &'a E) -> Self {
        ErrorExpectation::Is(ErrorIdentity {
            want,
            name: type_name::<E>(),
            eq: links_equal::<E>,
        })
    }

    /// Expects some wrap-chain link of type `E`, regardless of its value.
    #[must_use]
    pub fn of<E: Error + 'static>() -> Self {
        ErrorExpectation::Type(ErrorType::of::<E>())
    }
}

impl<'a> From<&'a str> for ErrorExpectation<'a> {
    fn from(substring: &'a str) -> Self {
        ErrorExpectation::Substring(substring)
    }
}

impl<'a> From<&'a String> for ErrorExpectation<'a> {
    fn from(substring: &'a String) -> Self {
        ErrorExpectation::Substring(substring)
    }
}

impl<'a> From<ErrorType> for ErrorExpectation<'a> {
    fn from(descriptor: ErrorType) -> Self {
        ErrorExpectation::Type(descriptor)
    }
}

/// Values that can be viewed as "maybe an error": the "got" side of
/// [`error_is!`] and [`error_as!`].
///
/// The macros accept, through this trait and a little call-site dispatch:
///
/// - a bare error value (anything implementing [`Error`], including
///   `Box<dyn Error>`), taken as present;
/// - a reference to one;
/// - `Result<T, E>` — the `Err` side is the error, `Ok` means absent
///   (including `Result<T, Box<dyn Error>>`);
/// - `Option<E>` — `Some` is the error, `None` means absent (including
///   `Option<&E>` and `Option<&dyn Error>`);
/// - `&(dyn Error + 'static)` and references to any of the above.
///
/// Boxes of concrete errors are seen through: for `Box<E>`,
/// `Result<T, Box<E>>`, and `Option<Box<E>>` the macros start the wrap-chain
/// at the boxed error, never at the box, so `E` stays downcastable.
///
/// Implement it for your own outcome types to hand them to the error
/// assertions directly:
///
/// ```
/// use std::{error::Error, io};
///
/// use attest::{ErrorExpectation, Fallible, Recorder, error_is};
///
/// struct Attempt {
///     tries: u32,
///     last_error: Option<io::Error>,
/// }
///
/// impl Fallible for Attempt {
///     fn failure(&self) -> Option<&(dyn Error + 'static)> {
///         self.last_error.as_ref().map(|e| e as _)
///     }
/// }
///
/// let attempt = Attempt { tries: 3, last_error: None };
/// let mut t = Recorder::new();
/// error_is!(t, attempt, ErrorExpectation::Absent);
/// assert!(!t.failed());
/// ```
///
/// [`error_is!`]: crate::error_is
/// [`error_as!`]: crate::error_as
pub trait Fallible {
    /// The error carried by this value, if any.
    fn failure(&self) -> Option<&(dyn Error + 'static)>;
}

impl Fallible for dyn Error + 'static {
    fn failure(&self) -> Option<&(dyn Error + 'static)> {
        Some(self)
    }
}

impl Fallible for dyn Error + Send + Sync + 'static {
    fn failure(&self) -> Option<&(dyn Error + 'static)> {
        Some(self)
    }
}

impl<T, E: Error + 'static> Fallible for Result<T, E> {
    fn failure(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Ok(_) => None,
            Err(err) => Some(err),
        }
    }
}

impl<E: Error + 'static> Fallible for Option<E> {
    fn failure(&self) -> Option<&(dyn Error + 'static)> {
        self.as_ref().map(|err| err as _)
    }
}

impl<F: Fallible + ?Sized> Fallible for Box<F> {
    fn failure(&self) -> Option<&(dyn Error + 'static)> {
        F::failure(self)
    }
}

impl<F: Fallible + ?Sized> Fallible for &F {
    fn failure(&self) -> Option<&(dyn Error + 'static)> {
        F::failure(self)
    }
}
