//! Integration with the [`anyhow`] 1.x error handling library.
//!
//! This module specifically supports `anyhow` version 1.x. To enable this
//! integration, add the `compat-anyhow1` feature flag to your `Cargo.toml`.
//!
//! # Overview
//!
//! [`anyhow::Error`] deliberately does not implement [`std::error::Error`]
//! (its blanket `From<E: Error>` conversion forbids it), so without help it
//! can take part in neither [`error_is!`] nor [`error_as!`]. This module
//! implements [`Fallible`] for it, borrowing the boxed error as a plain
//! `&(dyn Error + 'static)` view. With the feature enabled, the error
//! assertions accept:
//!
//! - [`anyhow::Error`] values and references
//! - `Result<T, anyhow::Error>`, which is what [`anyhow::Result<T>`] expands
//!   to
//! - `Option<anyhow::Error>`
//!
//! ```
//! use anyhow::Context as _;
//! use attest::prelude::*;
//!
//! fn load_config() -> anyhow::Result<String> {
//!     Err(std::io::Error::other("permission denied")).context("reading config")
//! }
//!
//! let mut t = Recorder::new();
//! error_is!(t, load_config(), "permission denied");
//! assert!(!t.failed());
//! ```
//!
//! # Matching Semantics
//!
//! The borrowed view starts at the outermost context, and its source chain
//! walks inward exactly like [`anyhow::Error::chain`]. A substring
//! expectation can therefore match any context message or the root error,
//! and [`error_as!`] can extract the original typed error from under any
//! number of `.context(..)` layers.
//!
//! One asymmetry to be aware of: the links of the chain are the *underlying*
//! errors, never `anyhow::Error` itself. An [`ErrorExpectation::of`] built
//! from `anyhow::Error` will not match anything; name the concrete error
//! type that was put into the anyhow value instead.
//!
//! [`error_is!`]: crate::error_is
//! [`error_as!`]: crate::error_as
//! [`ErrorExpectation::of`]: crate::ErrorExpectation::of

use std::error::Error;

use crate::Fallible;

impl Fallible for anyhow::Error {
    fn failure(&self) -> Option<&(dyn Error + 'static)> {
        Some(AsRef::<dyn Error + Send + Sync>::as_ref(self))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use anyhow::Context as _;

    use crate::{ErrorExpectation, Recorder, error_as, error_is};

    fn refused() -> anyhow::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
        .context("dialing upstream")
    }

    #[test]
    fn test_results_flow_through_error_is() {
        let mut t = Recorder::new();
        error_is!(t, refused(), "connection refused");
        assert!(!t.failed());
    }

    #[test]
    fn test_context_layers_do_not_hide_the_root() {
        let mut t = Recorder::new();
        let got = refused();
        let err = error_as!(t, got, io::Error);
        assert_eq!(
            err.map(io::Error::kind),
            Some(io::ErrorKind::ConnectionRefused)
        );
        assert!(!t.failed());
    }

    #[test]
    fn test_bare_errors_are_accepted() {
        let mut t = Recorder::new();
        let err = anyhow::anyhow!("boom");
        error_is!(t, err, "boom");
        assert!(!t.failed());
    }

    #[test]
    fn test_absent_option_satisfies_absent_expectation() {
        let mut t = Recorder::new();
        let none: Option<anyhow::Error> = None;
        error_is!(t, none, ErrorExpectation::Absent);
        assert!(!t.failed());
    }
}
