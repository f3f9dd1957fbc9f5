//! Byte cursor for traversing source code.
//!
//! The cursor is a read-only view over the source with a forward-only byte
//! position. It knows nothing about lines; the lexer owns line counting
//! because only the lexer knows which bytes are line breaks in context
//! (a `\r\n` pair is one break, a newline inside a short string is an error).
//!
//! Every position at which the lexer slices text is either the end of the
//! source or directly before an ASCII byte, so slices always fall on UTF-8
//! character boundaries.

/// A cursor for traversing source code byte by byte.
///
/// # Example
///
/// ```
/// use snail_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 1");
/// assert_eq!(cursor.current_byte(), Some(b'x'));
/// cursor.advance_bytes(2);
/// assert!(cursor.starts_with("= 1"));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unconsumed suffix as bytes.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.position..]
    }

    /// Returns true if all input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead, or `None` past the end.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Returns the full character under the cursor, decoding UTF-8.
    ///
    /// Used for error messages, where a lone byte of a multi-byte character
    /// would be meaningless.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }

    /// Returns true if the unconsumed input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining_bytes().starts_with(prefix.as_bytes())
    }

    /// Advances by `count` bytes, stopping at the end of input.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Advances while `predicate` holds for the current byte.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// ```
    /// use snail_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), 3);
    /// assert_eq!(cursor.current_byte(), Some(b'a'));
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> usize {
        let start = self.position;
        while let Some(b) = self.current_byte() {
            if !predicate(b) {
                break;
            }
            self.position += 1;
        }
        self.position - start
    }

    /// Returns the source text between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
