//! Runtime absence for reference-like values.
//!
//! # Overview
//!
//! [`nil!`] and [`not_nil!`] assert that a value is, or is not, an *unset
//! reference*: a value whose type admits "there is nothing here" as a
//! runtime state. Rust expresses that state in a handful of shapes, and
//! [`Nilness`] names them:
//!
//! - [`Option<T>`] — `None` is nil, for any payload type.
//! - Raw pointers (`*const T`, `*mut T`) — null is nil.
//! - [`rc::Weak`] and [`sync::Weak`] — nil once the target is gone, whether
//!   the weak reference was created by [`Weak::new`] or outlived every
//!   strong reference.
//! - Shared and mutable references forward to their target's nilness.
//!
//! Everything else (numbers, booleans, structs, strings, containers,
//! [`Box`], plain references) is never unset, carries no implementation,
//! and does not compile under [`nil!`]. Absence for such types is spelled
//! `Option` in Rust, and the `Option` implementation covers it.
//!
//! Note the asymmetry with equality: two `None`s of the same type are equal
//! under [`equal!`] as well, but [`nil!`] is the only assertion that accepts
//! *any* nil shape without caring what the payload type would have been.
//!
//! # Examples
//!
//! ```
//! use attest::{Recorder, nil, not_nil};
//!
//! let mut t = Recorder::new();
//!
//! let missing: Option<String> = None;
//! nil!(t, missing);
//!
//! let present = std::ptr::NonNull::<u8>::dangling().as_ptr();
//! not_nil!(t, present);
//!
//! assert!(!t.failed());
//! ```
//!
//! [`nil!`]: crate::nil
//! [`not_nil!`]: crate::not_nil
//! [`equal!`]: crate::equal
//! [`rc::Weak`]: std::rc::Weak
//! [`sync::Weak`]: std::sync::Weak
//! [`Weak::new`]: std::rc::Weak::new

/// The capability of being an unset reference at runtime.
///
/// See the [module documentation](self) for the implementing types. The
/// check is a pure read; it never upgrades, dereferences, or otherwise
/// touches the underlying data.
pub trait Nilness {
    /// Returns `true` if the value currently holds no underlying data.
    fn is_nil(&self) -> bool;
}

impl<T> Nilness for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilness for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilness for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilness for std::rc::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Nilness for std::sync::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<N: Nilness + ?Sized> Nilness for &N {
    fn is_nil(&self) -> bool {
        N::is_nil(self)
    }
}

impl<N: Nilness + ?Sized> Nilness for &mut N {
    fn is_nil(&self) -> bool {
        N::is_nil(self)
    }
}

#[cfg(test)]
mod tests {
    use std::{rc::Rc, sync::Arc};

    use super::*;

    #[test]
    fn test_options() {
        assert!(None::<u8>.is_nil());
        assert!(!Some(0u8).is_nil());
    }

    #[test]
    fn test_raw_pointers() {
        let x = 7;
        assert!(std::ptr::null::<i32>().is_nil());
        assert!(std::ptr::null_mut::<i32>().is_nil());
        assert!(!(&x as *const i32).is_nil());
    }

    #[test]
    fn test_weak_rc() {
        let empty: std::rc::Weak<i32> = std::rc::Weak::new();
        assert!(empty.is_nil());

        let strong = Rc::new(4);
        let weak = Rc::downgrade(&strong);
        assert!(!weak.is_nil());

        drop(strong);
        assert!(weak.is_nil());
    }

    #[test]
    fn test_weak_arc() {
        let strong = Arc::new("held");
        let weak = Arc::downgrade(&strong);
        assert!(!weak.is_nil());

        drop(strong);
        assert!(weak.is_nil());
    }

    #[test]
    fn test_references_forward() {
        let missing: Option<&str> = None;
        assert!((&missing).is_nil());
        assert!((&&missing).is_nil());
    }
}
