//! snail-lex - Lexical Analyzer for the snail scripting language
//!
//! This crate turns snail source text into a stream of tokens for the parser.
//! Each token carries its kind, the line it starts on and its exact source
//! text. The parser drives the lexer one token at a time and may peek at the
//! kind of the next token without consuming it.
//!
//! # Example Usage
//!
//! ```
//! use snail_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("x = 1 + 2 // add\n", "init.snail");
//!
//! // Get tokens one at a time
//! let token = lexer.next_token()?;
//! assert_eq!((token.line, token.kind, token.lexeme), (1, TokenKind::Identifier, "x"));
//!
//! // Peek without consuming
//! assert_eq!(lexer.look_ahead()?, TokenKind::Assign);
//!
//! // Or iterate through the rest
//! let rest: Vec<&str> = lexer.map(|t| t.map(|t| t.lexeme)).collect::<Result<_, _>>()?;
//! assert_eq!(rest, ["=", "1", "+", "2"]);
//! # Ok::<(), snail_lex::LexError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, families and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`ascii`] - Character classes used by the lexer
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `break`, `continue`, `else`, `elseif`, `false`, `for`, `func`, `class`,
//! `if`, `in`, `nil`, `return`, `true`, `while`, and the word operators
//! `and`, `or`, `not`.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14`, `.5`, `6.02e23`, `0xFF`, `0x1A.8p-2`
//! - **String**: `'text'`, `"text"`, `'''multi-line'''`, `"""multi-line"""`
//! - **Bytes**: `b'raw'`, `b"raw"`
//!
//! Literal lexemes are the source text between the quotes, unmodified. Escape
//! sequences are left for later phases.
//!
//! ## Operators
//!
//! `=` `+` `-` `*` `**` `^` `%` `&` `|` `<` `<=` `>` `>=` `==` `!=`
//!
//! ## Separators
//!
//! `,` `.` `::` `(` `)` `[` `]` `{` `}`
//!
//! ## Comments
//!
//! `// to end of line` and `/* block */`. Block comments do not nest.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::{tokenize, Lexer};
pub use token::{keyword_from_ident, Token, TokenFamily, TokenKind};
