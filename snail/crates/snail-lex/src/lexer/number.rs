//! Number literal lexing.
//!
//! Numbers are scanned by maximal munch over two shapes:
//!
//! - Hexadecimal: `0x` or `0X`, hex digits, an optional `.` with hex digits,
//!   an optional `p`/`P` exponent with an optional sign and decimal digits.
//! - Decimal: digits, an optional `.` with digits, an optional `e`/`E`
//!   exponent with an optional sign and digits.
//!
//! The lexeme is kept verbatim; converting it to a value is the parser's job.

use crate::ascii::{is_digit, is_hex_digit};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at a digit or at a `.` followed by a
    /// digit.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `3.14`, `.5`, `1.`, `6.02e23`, `1E-9`
    /// - Hexadecimal: `0xFF`, `0x1A.8`, `0x1p-4`, `0x1A.8p2`
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        let is_hex = self.cursor.current_byte() == Some(b'0')
            && matches!(self.cursor.peek_byte(1), Some(b'x' | b'X'));

        if is_hex {
            self.cursor.advance_bytes(2);
            self.eat_mantissa(is_hex_digit);
            self.eat_exponent(b'p');
        } else {
            self.eat_mantissa(is_digit);
            self.eat_exponent(b'e');
        }

        Token::new(self.line, TokenKind::Number, self.cursor.slice_from(start))
    }

    /// Eats `digit* ('.' digit*)?`.
    fn eat_mantissa(&mut self, digit: fn(u8) -> bool) {
        self.cursor.eat_while(digit);
        if self.cursor.current_byte() == Some(b'.') {
            self.cursor.advance_bytes(1);
            self.cursor.eat_while(digit);
        }
    }

    /// Eats an exponent introduced by `marker` in either case, but only if it
    /// is complete: an exponent needs at least one digit after the optional
    /// sign.
    fn eat_exponent(&mut self, marker: u8) {
        match self.cursor.current_byte() {
            Some(b) if b.eq_ignore_ascii_case(&marker) => {},
            _ => return,
        }

        let mut digits_at = 1;
        if matches!(self.cursor.peek_byte(1), Some(b'+' | b'-')) {
            digits_at += 1;
        }
        if !self.cursor.peek_byte(digits_at).is_some_and(is_digit) {
            return;
        }

        self.cursor.advance_bytes(digits_at);
        self.cursor.eat_while(is_digit);
    }
}
