//! Identifier and keyword lexing.

use crate::ascii::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// ASCII letters, digits or underscores. The whole word is read before
    /// the keyword table is consulted, so `forward` is an identifier and not
    /// `for` followed by `ward`.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        Token::new(self.line, kind, text)
    }
}
