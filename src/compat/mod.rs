//! Compatibility with other error handling libraries.
//!
//! # Overview
//!
//! The error assertions accept any value that can expose a
//! `&(dyn Error + 'static)` view of itself through the [`Fallible`] trait.
//! Error types from outside the [`std::error::Error`] ecosystem need a small
//! adapter to take part. This module collects those adapters, one submodule
//! per library, each behind its own feature flag so the crate stays
//! dependency-free by default.
//!
//! # Available Integrations
//!
//! - `anyhow1` - Integration with the `anyhow` 1.x error handling library
//!   (requires the `compat-anyhow1` feature flag)
//!
//! # When to Use Compatibility Modules
//!
//! These modules are useful when:
//! - **Testing code that returns foreign errors**: Assert on the errors of
//!   functions that return `anyhow::Result` without converting at every
//!   call site
//! - **Mixed codebases**: Work in projects where different parts use
//!   different error handling strategies
//!
//! # Example
//!
//! ```
//! use attest::prelude::*;
//!
//! # #[cfg(feature = "compat-anyhow1")] {
//! fn legacy() -> anyhow::Result<()> {
//!     anyhow::bail!("not wired up yet");
//! }
//!
//! let mut t = Recorder::new();
//! error_is!(t, legacy(), "not wired up");
//! assert!(!t.failed());
//! # }
//! ```
//!
//! See the individual module documentation for the exact matching semantics
//! of each integration.
//!
//! [`Fallible`]: crate::Fallible

#[cfg(feature = "compat-anyhow1")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-anyhow1")))]
pub mod anyhow1;
