#![deny(
    missing_docs,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Small, explicit assertion helpers that report through a pluggable test
//! handle.
//!
//! ## Overview
//!
//! Every assertion in this crate takes a reporting handle as its first
//! argument and tells it, rather than the panic machinery, when a check
//! fails. That one design decision buys three things:
//!
//! - **All failures in a test are visible.** Most assertions report
//!   nonfatally; the test keeps running and every independent mismatch is
//!   recorded, instead of stopping at the first one.
//! - **Failure output is data.** The [`Recorder`] handle captures messages
//!   instead of panicking, so assertions themselves (including ones you
//!   build) can be tested byte for byte.
//! - **The harness is swappable.** [`Reporter`] is a three-method trait; the
//!   shipped [`Case`] handle adapts it to Rust's panic-based test runner,
//!   and custom handles can forward anywhere else.
//!
//! ## Quick example
//!
//! ```
//! use attest::prelude::*;
//!
//! fn parse_port(s: &str) -> Result<u16, std::num::ParseIntError> {
//!     s.parse()
//! }
//!
//! // #[test]
//! fn port_parsing() {
//!     let mut t = Case::new();
//!
//!     equal!(t, parse_port("8080"), Ok(8080));
//!     error_is!(t, parse_port("eighty"), "invalid digit");
//!     is_true!(t, parse_port("0").is_ok(), "zero parses, even if unusable");
//! }
//! # port_parsing();
//! ```
//!
//! ## Core concepts
//!
//! **Reporting handle.** Anything implementing [`Reporter`]: `error` records
//! a failure, `fatal` records one and aborts the test unit, and an optional
//! `helper` hook receives the call site for failure attribution. [`Case`]
//! (panic-backed, for real tests) and [`Recorder`] (capturing, for
//! inspecting assertion behavior) are provided.
//!
//! **Equality.** [`equal!`] and [`not_equal!`] compare two values of the
//! same type. A type that implements [`Equivalence`] is judged by it, even
//! when it also derives [`PartialEq`], so types with an equality broader
//! than representation (a timestamp with a timezone, say) compare the way
//! they mean to. Everything else falls back to [`PartialEq`]. Comparing
//! across types does not compile.
//!
//! **Nilness.** [`nil!`] and [`not_nil!`] accept the types with a real
//! "absent" state: [`Option`], raw pointers, and [`Weak`](std::rc::Weak)
//! handles, through the [`Nilness`] trait. Value types have no nil state
//! and are rejected at compile time.
//!
//! **Error expectations.** [`error_is!`] matches a possibly-absent error
//! against an [`ErrorExpectation`]: no error at all, a message substring, a
//! concrete error value, or an error type. The last two are matched against
//! every link of the error's [wrap chain](chain). [`error_as!`] extracts
//! the chain link of a given type. Both accept `Result`s, `Option`s of
//! errors, bare errors and references, and anything implementing
//! [`Fallible`].
//!
//! **Trailing context.** Every macro takes optional trailing context,
//! appended to the failure message after a space: nothing, a single value
//! rendered with `Display` (a lone string passes through verbatim), or a
//! format string with arguments.
//!
//! ## Failure reporting
//!
//! The reporting policy is fixed:
//!
//! - Comparison and matching assertions report **nonfatally**: [`equal!`],
//!   [`not_equal!`], [`is_true!`], [`is_false!`], [`nil!`], [`not_nil!`],
//!   the no-match case of [`matches_regexp!`], and [`error_as!`]. The test
//!   continues; on a [`Case`] the recorded failures panic together when the
//!   case drops.
//! - [`error_is!`] failures are **fatal**: the test got the wrong error,
//!   and later checks would assert on a world that does not exist.
//! - Defects in the test itself, such as an unparsable [`matches_regexp!`]
//!   pattern, are **fatal**.
//!
//! "Fatal" means the handle's abort path: [`Case`] panics at the call site,
//! [`Recorder`] records the failure as fatal and returns. Assertions never
//! panic on their own and never return `Result`s.
//!
//! ## Concurrency
//!
//! The crate holds no global state; every assertion runs synchronously on
//! the caller's thread against the handle it was given. Tests running in
//! parallel with independent handles do not interact.
//!
//! ## Feature flags
//!
//! - `compat-anyhow1` — accept [`anyhow::Error`](https://docs.rs/anyhow)
//!   values, and `Result`s and `Option`s of them, in [`error_is!`] and
//!   [`error_as!`]. See [`compat`].

#[macro_use]
mod macros;

pub mod assertions;
pub mod compat;
pub mod prelude;

mod equivalence;
mod expectation;
mod message;
mod nilness;
mod reporter;

pub use self::{
    equivalence::Equivalence,
    expectation::{Chain, ErrorExpectation, ErrorIdentity, ErrorType, Fallible, chain},
    nilness::Nilness,
    reporter::{Case, Failure, Recorder, Reporter},
};

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use core::{
        format_args,
        option::Option::{None, Some},
    };

    #[doc(hidden)]
    pub mod kind {
        use std::error::Error;

        use crate::{Equivalence, Fallible};

        #[doc(hidden)]
        pub struct Wrap<'a, T: ?Sized>(pub &'a T);

        // Equality resolution. The more-referenced impl is found first, so
        // a type's own Equivalence wins over its PartialEq.

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ByEquivalence;

        impl ByEquivalence {
            #[inline(always)]
            pub fn eq<T: Equivalence + ?Sized>(self, got: &T, want: &T) -> bool {
                got.equivalent(want)
            }
        }

        #[doc(hidden)]
        pub trait EquivalenceKind {
            #[inline(always)]
            fn comparator(&self) -> ByEquivalence {
                ByEquivalence
            }
        }

        impl<T> EquivalenceKind for &Wrap<'_, T> where T: Equivalence + ?Sized {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ByPartialEq;

        impl ByPartialEq {
            #[inline(always)]
            pub fn eq<T: PartialEq + ?Sized>(self, got: &T, want: &T) -> bool {
                got == want
            }
        }

        #[doc(hidden)]
        pub trait PartialEqKind {
            #[inline(always)]
            fn comparator(&self) -> ByPartialEq {
                ByPartialEq
            }
        }

        impl<T> PartialEqKind for Wrap<'_, T> where T: PartialEq + ?Sized {}

        // Error-view resolution for `error_is!`/`error_as!`, outermost rank
        // first. Reference operands need their own tiers: std's blanket
        // `impl Error for &E` would otherwise capture them in the bare-error
        // tier and demand `'static` of the reference itself. Boxes of
        // concrete errors likewise: through `impl Error for Box<E>` the box
        // itself would become the chain link, hiding `E` from downcasts.
        // Impls sharing a rank stay structurally disjoint.

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaFallibleRef;

        impl ViaFallibleRef {
            #[inline(always)]
            pub fn failure<'e, F: Fallible + ?Sized>(
                self,
                got: &&'e F,
            ) -> Option<&'e (dyn Error + 'static)> {
                F::failure(*got)
            }
        }

        #[doc(hidden)]
        pub trait FallibleRefKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaFallibleRef {
                ViaFallibleRef
            }
        }

        impl<F> FallibleRefKind for &&&&Wrap<'_, &'_ F> where F: Fallible + ?Sized {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaBoxedError;

        impl ViaBoxedError {
            #[inline(always)]
            pub fn failure<'a, E: Error + 'static>(
                self,
                got: &'a Box<E>,
            ) -> Option<&'a (dyn Error + 'static)> {
                Some(&**got)
            }
        }

        #[doc(hidden)]
        pub trait BoxedErrorKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaBoxedError {
                ViaBoxedError
            }
        }

        impl<E> BoxedErrorKind for &&&&Wrap<'_, Box<E>> where E: Error + 'static {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaBoxedErrorResult;

        impl ViaBoxedErrorResult {
            #[inline(always)]
            pub fn failure<'a, T, E: Error + 'static>(
                self,
                got: &'a Result<T, Box<E>>,
            ) -> Option<&'a (dyn Error + 'static)> {
                match got {
                    Ok(_) => None,
                    Err(boxed) => Some(&**boxed),
                }
            }
        }

        #[doc(hidden)]
        pub trait BoxedErrorResultKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaBoxedErrorResult {
                ViaBoxedErrorResult
            }
        }

        impl<T, E> BoxedErrorResultKind for &&&&Wrap<'_, Result<T, Box<E>>>
        where
            E: Error + 'static,
        {
        }

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaBoxedErrorOption;

        impl ViaBoxedErrorOption {
            #[inline(always)]
            pub fn failure<'a, E: Error + 'static>(
                self,
                got: &'a Option<Box<E>>,
            ) -> Option<&'a (dyn Error + 'static)> {
                got.as_deref().map(|err| err as _)
            }
        }

        #[doc(hidden)]
        pub trait BoxedErrorOptionKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaBoxedErrorOption {
                ViaBoxedErrorOption
            }
        }

        impl<E> BoxedErrorOptionKind for &&&&Wrap<'_, Option<Box<E>>> where E: Error + 'static {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaOptionRef;

        impl ViaOptionRef {
            #[inline(always)]
            pub fn failure<'e, E: Error + 'static>(
                self,
                got: &Option<&'e E>,
            ) -> Option<&'e (dyn Error + 'static)> {
                got.map(|err| err as _)
            }
        }

        #[doc(hidden)]
        pub trait OptionRefKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaOptionRef {
                ViaOptionRef
            }
        }

        impl<E> OptionRefKind for &&&Wrap<'_, Option<&'_ E>> where E: Error + 'static {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaDynOption;

        impl ViaDynOption {
            #[inline(always)]
            pub fn failure<'e, F: Fallible + ?Sized>(
                self,
                got: &Option<&'e F>,
            ) -> Option<&'e (dyn Error + 'static)> {
                got.and_then(|inner| inner.failure())
            }
        }

        #[doc(hidden)]
        pub trait DynOptionKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaDynOption {
                ViaDynOption
            }
        }

        impl DynOptionKind for &&&Wrap<'_, Option<&'_ (dyn Error + 'static)>> {}
        impl DynOptionKind for &&&Wrap<'_, Option<&'_ (dyn Error + Send + Sync + 'static)>> {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaBoxedResult;

        impl ViaBoxedResult {
            #[inline(always)]
            pub fn failure<'a, T, F: Fallible + ?Sized>(
                self,
                got: &'a Result<T, Box<F>>,
            ) -> Option<&'a (dyn Error + 'static)> {
                match got {
                    Ok(_) => None,
                    Err(boxed) => F::failure(boxed),
                }
            }
        }

        #[doc(hidden)]
        pub trait BoxedResultKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaBoxedResult {
                ViaBoxedResult
            }
        }

        impl<T, F> BoxedResultKind for &&&Wrap<'_, Result<T, Box<F>>> where F: Fallible + ?Sized {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaBoxedOption;

        impl ViaBoxedOption {
            #[inline(always)]
            pub fn failure<'a, F: Fallible + ?Sized>(
                self,
                got: &'a Option<Box<F>>,
            ) -> Option<&'a (dyn Error + 'static)> {
                got.as_ref().and_then(|boxed| F::failure(boxed))
            }
        }

        #[doc(hidden)]
        pub trait BoxedOptionKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaBoxedOption {
                ViaBoxedOption
            }
        }

        impl<F> BoxedOptionKind for &&&Wrap<'_, Option<Box<F>>> where F: Fallible + ?Sized {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaErrorRef;

        impl ViaErrorRef {
            #[inline(always)]
            pub fn failure<'e, E: Error + 'static>(
                self,
                got: &&'e E,
            ) -> Option<&'e (dyn Error + 'static)> {
                Some(*got)
            }
        }

        #[doc(hidden)]
        pub trait ErrorRefKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaErrorRef {
                ViaErrorRef
            }
        }

        impl<E> ErrorRefKind for &&&Wrap<'_, &'_ E> where E: Error + 'static {}

        #[cfg(feature = "compat-anyhow1")]
        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaAnyhowResult;

        #[cfg(feature = "compat-anyhow1")]
        impl ViaAnyhowResult {
            #[inline(always)]
            pub fn failure<'a, T>(
                self,
                got: &'a Result<T, anyhow::Error>,
            ) -> Option<&'a (dyn Error + 'static)> {
                match got {
                    Ok(_) => None,
                    Err(err) => Some(AsRef::<dyn Error + Send + Sync>::as_ref(err)),
                }
            }
        }

        #[cfg(feature = "compat-anyhow1")]
        #[doc(hidden)]
        pub trait AnyhowResultKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaAnyhowResult {
                ViaAnyhowResult
            }
        }

        #[cfg(feature = "compat-anyhow1")]
        impl<T> AnyhowResultKind for &&&Wrap<'_, Result<T, anyhow::Error>> {}

        #[cfg(feature = "compat-anyhow1")]
        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaAnyhowOption;

        #[cfg(feature = "compat-anyhow1")]
        impl ViaAnyhowOption {
            #[inline(always)]
            pub fn failure<'a>(
                self,
                got: &'a Option<anyhow::Error>,
            ) -> Option<&'a (dyn Error + 'static)> {
                got.as_ref()
                    .map(|err| AsRef::<dyn Error + Send + Sync>::as_ref(err) as _)
            }
        }

        #[cfg(feature = "compat-anyhow1")]
        #[doc(hidden)]
        pub trait AnyhowOptionKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaAnyhowOption {
                ViaAnyhowOption
            }
        }

        #[cfg(feature = "compat-anyhow1")]
        impl AnyhowOptionKind for &&&Wrap<'_, Option<anyhow::Error>> {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaError;

        impl ViaError {
            #[inline(always)]
            pub fn failure<'a, E: Error + 'static>(
                self,
                got: &'a E,
            ) -> Option<&'a (dyn Error + 'static)> {
                Some(got)
            }
        }

        #[doc(hidden)]
        pub trait ErrorValueKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaError {
                ViaError
            }
        }

        impl<E> ErrorValueKind for &&Wrap<'_, E> where E: Error + 'static {}

        #[doc(hidden)]
        #[derive(Debug, Clone, Copy)]
        pub struct ViaFallible;

        impl ViaFallible {
            #[inline(always)]
            pub fn failure<'a, F: Fallible + ?Sized>(
                self,
                got: &'a F,
            ) -> Option<&'a (dyn Error + 'static)> {
                got.failure()
            }
        }

        #[doc(hidden)]
        pub trait FallibleKind {
            #[inline(always)]
            fn fallibility(&self) -> ViaFallible {
                ViaFallible
            }
        }

        impl<F> FallibleKind for Wrap<'_, F> where F: Fallible + ?Sized {}
    }
}
