//! Whitespace and comment skipping.
//!
//! Comments are `// ...` to the end of the line and `/* ... */` blocks. Block
//! comments do not nest.

use tracing::trace;

use crate::ascii::{is_new_line, is_white_space};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace, line breaks and comments.
    ///
    /// Called before every scanned token. Line breaks bump the line counter,
    /// with `\r\n` and `\n\r` counted once.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.starts_with("//") {
                self.skip_line_comment();
            } else if self.cursor.starts_with("/*") {
                self.skip_block_comment();
            } else if self.eat_line_break() {
                continue;
            } else if self.cursor.current_byte().is_some_and(is_white_space) {
                self.cursor.advance_bytes(1);
            } else {
                return;
            }
        }
    }

    /// Skips a line comment, leaving the line break in place.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_bytes(2);
        self.cursor.eat_while(|b| !is_new_line(b));
    }

    /// Skips a block comment through its closing `*/`.
    ///
    /// An unterminated block comment runs to the end of the input.
    fn skip_block_comment(&mut self) {
        let start_line = self.line;
        self.cursor.advance_bytes(2);

        while !self.cursor.is_at_end() {
            if self.cursor.starts_with("*/") {
                self.cursor.advance_bytes(2);
                return;
            }
            if !self.eat_line_break() {
                self.cursor.advance_bytes(1);
            }
        }

        trace!(start_line, "block comment runs to end of input");
    }
}
