//! Rendering of the optional trailing context attached to an assertion.

use core::fmt;

/// The user-supplied annotation appended to a failure message.
///
/// Primary failure messages always end with a semicolon. When context is
/// present it is rendered with a single leading space, so the two pieces
/// concatenate without further punctuation; when absent, nothing is emitted.
pub(crate) struct Suffix<'a>(pub(crate) Option<fmt::Arguments<'a>>);

impl fmt::Display for Suffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(args) => write!(f, " {args}"),
            None => Ok(()),
        }
    }
}
