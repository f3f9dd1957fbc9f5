//! Operator and separator lexing for tokens whose first character is shared.
//!
//! Single-character tokens that are never a prefix of another token are
//! handled directly in the dispatch.

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `::`. A lone `:` is an error.
    pub(crate) fn lex_colon(&mut self) -> LexResult<Token<'a>> {
        if !self.cursor.starts_with("::") {
            return Err(self.error(LexErrorKind::InvalidCharacter(':')));
        }
        Ok(self.make_token(TokenKind::Domain, 2))
    }

    /// Lexes `!=`. A lone `!` is an error.
    pub(crate) fn lex_bang(&mut self) -> LexResult<Token<'a>> {
        if !self.cursor.starts_with("!=") {
            return Err(self.error(LexErrorKind::InvalidCharacter('!')));
        }
        Ok(self.make_token(TokenKind::Ne, 2))
    }

    /// Lexes `*` or `**`.
    ///
    /// Whether a star packs, unpacks or multiplies is decided by the parser.
    pub(crate) fn lex_star(&mut self) -> Token<'a> {
        self.lex_pair(b'*', TokenKind::PackDict, TokenKind::Mul)
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        self.lex_pair(b'=', TokenKind::Eq, TokenKind::Assign)
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.lex_pair(b'=', TokenKind::Le, TokenKind::Lt)
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.lex_pair(b'=', TokenKind::Ge, TokenKind::Gt)
    }

    /// Emits `pair` if the current character is followed by `second`,
    /// `single` otherwise.
    fn lex_pair(&mut self, second: u8, pair: TokenKind, single: TokenKind) -> Token<'a> {
        if self.cursor.peek_byte(1) == Some(second) {
            self.make_token(pair, 2)
        } else {
            self.make_token(single, 1)
        }
    }
}
