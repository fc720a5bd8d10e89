//! The self-describing equality capability consulted by [`equal!`] and
//! [`not_equal!`].
//!
//! # Overview
//!
//! By default, [`equal!`] judges two values with [`PartialEq`], Rust's
//! structural equality, where a derived implementation compares every field.
//! Some types want a different notion of equality in tests: a timestamp that
//! should compare by instant regardless of its zone representation, a struct
//! carrying a cache or a sampling jitter field that should not participate in
//! comparisons, an ID type that is case-insensitive on the wire.
//!
//! Implementing [`Equivalence`] for such a type makes [`equal!`] and
//! [`not_equal!`] delegate to it *instead of* [`PartialEq`]. The dispatch
//! happens at the assertion call site: a type implementing both traits is
//! judged by its [`Equivalence`].
//!
//! # Top-level only
//!
//! The capability applies to the compared pair itself, never to values nested
//! inside a container. Comparing two `Vec<Reading>` uses the vector's
//! structural equality, which compares every `Reading` field even if
//! `Reading` implements [`Equivalence`]. This keeps container comparisons
//! predictable: one rule for the whole structure, with the escape hatch at
//! the point you actually assert on.
//!
//! References forward: `&T` and `&mut T` are judged by `T`'s capability, so
//! passing either values or references to [`equal!`] behaves the same.
//! Owning smart pointers deliberately do not forward; a boxed pair is a
//! container like any other and is compared structurally.
//!
//! # Examples
//!
//! ```
//! use attest::{Equivalence, Recorder, equal};
//!
//! /// Compares by instant; the offset is presentation only.
//! #[derive(Debug, PartialEq, Clone, Copy)]
//! struct Stamp {
//!     utc_secs: i64,
//!     offset_secs: i32,
//! }
//!
//! impl Equivalence for Stamp {
//!     fn equivalent(&self, other: &Self) -> bool {
//!         self.utc_secs == other.utc_secs
//!     }
//! }
//!
//! let in_utc = Stamp { utc_secs: 1_700_000_000, offset_secs: 0 };
//! let in_oslo = Stamp { utc_secs: 1_700_000_000, offset_secs: 3600 };
//!
//! let mut t = Recorder::new();
//! equal!(t, in_utc, in_oslo);
//! assert!(!t.failed());
//! ```
//!
//! [`equal!`]: crate::equal
//! [`not_equal!`]: crate::not_equal

/// Equality as a type wants it judged in assertions.
///
/// Consulted by [`equal!`] and [`not_equal!`] ahead of [`PartialEq`]; see the
/// [module documentation](self) for the dispatch rules.
///
/// Implementations should be reflexive and symmetric, like any equality.
///
/// [`equal!`]: crate::equal
/// [`not_equal!`]: crate::not_equal
pub trait Equivalence {
    /// Returns `true` if the two values should be considered equal.
    fn equivalent(&self, other: &Self) -> bool;
}

impl<T: Equivalence + ?Sized> Equivalence for &T {
    fn equivalent(&self, other: &Self) -> bool {
        T::equivalent(self, other)
    }
}

impl<T: Equivalence + ?Sized> Equivalence for &mut T {
    fn equivalent(&self, other: &Self) -> bool {
        T::equivalent(self, other)
    }
}
