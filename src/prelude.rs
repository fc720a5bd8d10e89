//! Commonly used items for convenient importing.
//!
//! The prelude module re-exports the assertion macros and the handle types
//! they report through. This allows a test module to import everything it
//! needs with a single use statement.
//!
//! # Usage
//!
//! ```rust
//! use attest::prelude::*;
//!
//! // #[test]
//! fn absolute_value() {
//!     let mut t = Case::new();
//!
//!     equal!(t, (-3i32).abs(), 3);
//!     is_true!(t, 0i32.abs() >= 0);
//! }
//! # absolute_value();
//! ```
//!
//! # What's Included
//!
//! This prelude includes:
//!
//! - **[`Case`]** and **[`Recorder`]**: The shipped reporting handles
//! - **[`Reporter`]**: The trait custom handles implement
//! - All nine assertion macros, [`equal!`] through [`error_as!`]
//! - **[`ErrorExpectation`]** and **[`ErrorType`]**: Expectations for
//!   [`error_is!`]
//! - **[`Equivalence`]**, **[`Nilness`]**, and **[`Fallible`]**: The traits
//!   that opt types into [`equal!`], [`nil!`], and the error assertions
//!
//! # When to Use the Prelude
//!
//! Use the prelude in test modules, where the macros dominate. Library code
//! that only needs one item, say [`Reporter`] to write a custom handle, is
//! better served by a direct import.

pub use crate::{
    Case, Equivalence, ErrorExpectation, ErrorType, Fallible, Nilness, Recorder, Reporter, equal,
    error_as, error_is, is_false, is_true, matches_regexp, nil, not_equal, not_nil,
};
