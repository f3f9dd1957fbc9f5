//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Compiler phases convert their own error types into [`Diagnostic`] values so
//! a driver can render every problem the same way.
//!
//! # Examples
//!
//! ```
//! use snail_util::diagnostic::{Diagnostic, DiagnosticCode, Location};
//!
//! let diag = Diagnostic::error("cannot find closing quotation mark for a short string")
//!     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .with_location(Location::new("main.snail", 3));
//!
//! assert_eq!(
//!     diag.to_string(),
//!     "error[E1002]: main.snail line 3: cannot find closing quotation mark for a short string"
//! );
//! ```

mod codes;
mod level;

pub use codes::DiagnosticCode;
pub use level::Level;

use std::fmt;

/// A position in a named chunk of source.
///
/// Lines are 1-based. The chunk name is a free-form label, usually a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Diagnostic label of the chunk
    pub chunk_name: String,
    /// 1-based line number
    pub line: u32,
}

impl Location {
    /// Create a new location
    pub fn new(chunk_name: impl Into<String>, line: u32) -> Self {
        Self {
            chunk_name: chunk_name.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line {}", self.chunk_name, self.line)
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location, if known
    pub location: Option<Location>,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: None,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a note to the diagnostic
    ///
    /// ```
    /// use snail_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error("syntax error near 'x'")
    ///     .with_note("expected `(`")
    ///     .with_note("found identifier");
    /// assert_eq!(diag.notes.len(), 2);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Returns true if this diagnostic stops compilation.
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = &self.code {
            write!(f, "[{}]", code)?;
        }
        f.write_str(": ")?;
        if let Some(location) = &self.location {
            write!(f, "{}: ", location)?;
        }
        f.write_str(&self.message)?;
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}
