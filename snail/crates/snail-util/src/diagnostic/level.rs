//! Diagnostic severity levels.
//!
//! ```
//! use snail_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert_eq!(format!("{}", Level::Warning), "warning");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// The level decides whether compilation of a chunk can continue and how the
/// diagnostic is labelled when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that stops compilation of the chunk
    Error,
    /// Suspicious but valid code
    Warning,
}

impl Level {
    /// Returns true for [`Level::Error`].
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Level::Error)
    }

    /// The lowercase label used when rendering.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
