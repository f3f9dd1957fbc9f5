//! String and bytes literal lexing.
//!
//! Three literal shapes share the quote characters `'` and `"`:
//!
//! - short strings, `'...'`, which end at the same quote and may not contain
//!   a line break;
//! - long strings, `'''...'''`, which may span lines;
//! - bytes, `b'...'`, which end at the same quote. Line breaks inside are
//!   copied into the lexeme but not counted.
//!
//! There are no escape sequences: a backslash is an ordinary character and
//! the lexeme is the text between the quotes exactly as written.

use crate::ascii::is_new_line;
use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a short or long string opened by `quote`.
    pub(crate) fn lex_string(&mut self, quote: u8) -> LexResult<Token<'a>> {
        if self.cursor.peek_byte(1) == Some(quote) && self.cursor.peek_byte(2) == Some(quote) {
            self.lex_long_string(quote)
        } else {
            self.lex_short_string(quote)
        }
    }

    /// Lexes a single-line string.
    fn lex_short_string(&mut self, quote: u8) -> LexResult<Token<'a>> {
        let line = self.line;
        self.cursor.advance_bytes(1);
        let start = self.cursor.position();

        self.cursor.eat_while(|b| b != quote && !is_new_line(b));
        if self.cursor.current_byte() != Some(quote) {
            return Err(self.error(LexErrorKind::UnterminatedShortString));
        }

        let content = self.cursor.slice_from(start);
        self.cursor.advance_bytes(1);
        Ok(Token::new(line, TokenKind::String, content))
    }

    /// Lexes a triple-quoted string, counting the line breaks it contains.
    ///
    /// The token keeps the line of its opening quotes.
    fn lex_long_string(&mut self, quote: u8) -> LexResult<Token<'a>> {
        let line = self.line;
        let closing = [quote; 3];
        self.cursor.advance_bytes(3);
        let start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedLongString));
            }
            if self.cursor.remaining_bytes().starts_with(&closing) {
                break;
            }
            if !self.eat_line_break() {
                self.cursor.advance_bytes(1);
            }
        }

        let content = self.cursor.slice_from(start);
        self.cursor.advance_bytes(3);
        Ok(Token::new(line, TokenKind::String, content))
    }

    /// Lexes a `b'...'` or `b"..."` literal.
    ///
    /// Line breaks inside the literal are kept in the lexeme but do not move
    /// the line counter.
    pub(crate) fn lex_bytes(&mut self) -> LexResult<Token<'a>> {
        let line = self.line;
        let Some(quote) = self.cursor.peek_byte(1) else {
            return Err(self.error(LexErrorKind::UnterminatedBytes));
        };
        self.cursor.advance_bytes(2);
        let start = self.cursor.position();

        self.cursor.eat_while(|b| b != quote);
        if self.cursor.is_at_end() {
            return Err(self.error(LexErrorKind::UnterminatedBytes));
        }

        let content = self.cursor.slice_from(start);
        self.cursor.advance_bytes(1);
        Ok(Token::new(line, TokenKind::Bytes, content))
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexErrorKind, Lexer, TokenKind};

    fn lex_one(source: &str) -> (u32, TokenKind, &str) {
        let mut lexer = Lexer::new(source, "test");
        let token = lexer.next_token().unwrap();
        (token.line, token.kind, token.lexeme)
    }

    fn lex_err(source: &str) -> (u32, LexErrorKind) {
        let mut lexer = Lexer::new(source, "test");
        loop {
            match lexer.next_token() {
                Ok(token) if token.is_eof() => panic!("expected an error for {:?}", source),
                Ok(_) => continue,
                Err(err) => return (err.line, err.kind),
            }
        }
    }

    #[test]
    fn test_simple_strings() {
        assert_eq!(lex_one("'hello'"), (1, TokenKind::String, "hello"));
        assert_eq!(lex_one("\"hello\""), (1, TokenKind::String, "hello"));
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(lex_one("''"), (1, TokenKind::String, ""));
        assert_eq!(lex_one("\"\""), (1, TokenKind::String, ""));
        assert_eq!(lex_one("''''''"), (1, TokenKind::String, ""));
    }

    #[test]
    fn test_other_quote_is_content() {
        assert_eq!(lex_one("'say \"hi\"'"), (1, TokenKind::String, "say \"hi\""));
        assert_eq!(lex_one("\"it's\""), (1, TokenKind::String, "it's"));
    }

    #[test]
    fn test_backslash_is_not_an_escape() {
        assert_eq!(lex_one(r"'a\nb'"), (1, TokenKind::String, r"a\nb"));
        let mut lexer = Lexer::new(r"'a\' x", "test");
        assert_eq!(lexer.next_token().unwrap().lexeme, r"a\");
        assert_eq!(lexer.next_token().unwrap().lexeme, "x");
    }

    #[test]
    fn test_backslash_quote_then_b_opens_bytes() {
        // `'a\'` closes at the second quote, leaving `b'` to open a bytes literal
        let mut lexer = Lexer::new(r"'a\'b'", "test");
        assert_eq!(lexer.next_token().unwrap().lexeme, r"a\");
        assert_eq!(lexer.next_token().unwrap_err().kind, LexErrorKind::UnterminatedBytes);
    }

    #[test]
    fn test_short_string_stops_at_newline() {
        assert_eq!(lex_err("'abc\ndef'"), (1, LexErrorKind::UnterminatedShortString));
        assert_eq!(lex_err("\"abc\r\""), (1, LexErrorKind::UnterminatedShortString));
    }

    #[test]
    fn test_short_string_unterminated_at_eof() {
        assert_eq!(lex_err("x\n'abc"), (2, LexErrorKind::UnterminatedShortString));
    }

    #[test]
    fn test_long_string_spans_lines() {
        let mut lexer = Lexer::new("'''line1\nline2\r\nline3'''", "test");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "line1\nline2\r\nline3");
        assert_eq!(token.line, 1);
        assert_eq!(lexer.line(), 3);
    }

    #[test]
    fn test_long_string_double_quotes_contain_single() {
        assert_eq!(
            lex_one("\"\"\"it's '''fine'''\"\"\""),
            (1, TokenKind::String, "it's '''fine'''")
        );
    }

    #[test]
    fn test_long_string_line_after_other_lines() {
        let mut lexer = Lexer::new("\n\n'''a\n\rb'''\nz", "test");
        let string = lexer.next_token().unwrap();
        assert_eq!(string.line, 3);
        assert_eq!(lexer.line(), 4);
        let z = lexer.next_token().unwrap();
        assert_eq!((z.line, z.lexeme), (5, "z"));
    }

    #[test]
    fn test_long_string_unterminated() {
        assert_eq!(lex_err("'''abc\ndef''"), (2, LexErrorKind::UnterminatedLongString));
    }

    #[test]
    fn test_bytes() {
        assert_eq!(lex_one("b'\\x00raw'"), (1, TokenKind::Bytes, "\\x00raw"));
        assert_eq!(lex_one("b\"ab\""), (1, TokenKind::Bytes, "ab"));
        assert_eq!(lex_one("b''"), (1, TokenKind::Bytes, ""));
    }

    #[test]
    fn test_bytes_line_breaks_are_not_counted() {
        let mut lexer = Lexer::new("b'a\nb\r\nc' d", "test");
        let bytes = lexer.next_token().unwrap();
        assert_eq!((bytes.line, bytes.kind, bytes.lexeme), (1, TokenKind::Bytes, "a\nb\r\nc"));
        let d = lexer.next_token().unwrap();
        assert_eq!((d.line, d.lexeme), (1, "d"));
        assert_eq!(lexer.line(), 1);
    }

    #[test]
    fn test_bytes_unterminated() {
        assert_eq!(lex_err("b'abc"), (1, LexErrorKind::UnterminatedBytes));
        assert_eq!(lex_err("b\"a\nb"), (1, LexErrorKind::UnterminatedBytes));
    }

    #[test]
    fn test_non_ascii_content() {
        assert_eq!(lex_one("'héllo wörld'"), (1, TokenKind::String, "héllo wörld"));
        assert_eq!(lex_one("'''日本\n語'''"), (1, TokenKind::String, "日本\n語"));
    }
}
