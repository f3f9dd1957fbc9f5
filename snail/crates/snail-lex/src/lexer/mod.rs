//! Lexer module.
//!
//! The lexer implementation is split by token shape:
//! - `core` - Lexer struct, dispatch and lookahead
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `operator` - Operators sharing a first character
//! - `string` - String and bytes literal lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{tokenize, Lexer};
