//! Error types for the lexer.
//!
//! Every lexical error is fatal to the scan that raised it. The rendered form
//! is `"<chunk name> line <line>: <message>"`.

use snail_util::diagnostic::{Diagnostic, DiagnosticCode, Location};
use thiserror::Error;

use crate::token::TokenKind;

/// What went wrong during scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// The first character of `::` or `!=` on its own
    #[error("Invalid character `{0}`")]
    InvalidCharacter(char),

    /// A newline or end of input before the closing quote
    #[error("cannot find closing quotation mark for a short string")]
    UnterminatedShortString,

    /// End of input before the closing triple quote
    #[error("cannot find closing quotation mark for a long string")]
    UnterminatedLongString,

    /// End of input before the closing quote of a `b'...'` literal
    #[error("cannot find closing quotation mark for a bytes literal")]
    UnterminatedBytes,

    /// A character that starts no token
    #[error("unexpected symbol near '{0}'")]
    UnexpectedSymbol(char),

    /// A token of the wrong kind where a specific kind was required
    #[error("syntax error near '{lexeme}'")]
    UnexpectedToken {
        /// Kind the caller asked for
        expected: TokenKind,
        /// Kind that was scanned
        found: TokenKind,
        /// Text of the offending token
        lexeme: String,
    },
}

/// A fatal lexical error, located by chunk name and line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{chunk_name} line {line}: {kind}")]
pub struct LexError {
    /// Diagnostic label of the chunk being scanned
    pub chunk_name: String,
    /// Line counter of the lexer when the error was raised
    pub line: u32,
    /// The cause
    pub kind: LexErrorKind,
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// Creates an error.
    pub fn new(chunk_name: impl Into<String>, line: u32, kind: LexErrorKind) -> Self {
        Self {
            chunk_name: chunk_name.into(),
            line,
            kind,
        }
    }

    /// The diagnostic code for this error's cause.
    pub fn code(&self) -> DiagnosticCode {
        match self.kind {
            LexErrorKind::InvalidCharacter(_) => DiagnosticCode::E_LEXER_MALFORMED_OPERATOR,
            LexErrorKind::UnterminatedShortString | LexErrorKind::UnterminatedLongString => {
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING
            },
            LexErrorKind::UnterminatedBytes => DiagnosticCode::E_LEXER_UNTERMINATED_BYTES,
            LexErrorKind::UnexpectedSymbol(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexErrorKind::UnexpectedToken { .. } => DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN,
        }
    }

    /// Converts this error into an error-level [`Diagnostic`].
    ///
    /// ```
    /// use snail_lex::{LexError, LexErrorKind};
    ///
    /// let err = LexError::new("main.snail", 4, LexErrorKind::UnexpectedSymbol('#'));
    /// assert_eq!(
    ///     err.to_diagnostic().to_string(),
    ///     "error[E1001]: main.snail line 4: unexpected symbol near '#'"
    /// );
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.to_string())
            .with_code(self.code())
            .with_location(Location::new(self.chunk_name.clone(), self.line));
        match &self.kind {
            LexErrorKind::UnexpectedToken {
                expected, found, ..
            } => diag.with_note(format!("expected {}, found {}", expected, found)),
            _ => diag,
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        err.to_diagnostic()
    }
}
