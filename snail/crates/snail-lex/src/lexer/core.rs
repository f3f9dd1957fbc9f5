//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, token dispatch and the
//! one-token lookahead.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::ascii::{is_digit, is_ident_start, line_break_len};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};

/// A token that has been scanned by [`Lexer::look_ahead`] but not consumed.
#[derive(Clone, Copy, Debug)]
struct Lookahead<'a> {
    token: Token<'a>,
    /// Line counter right after the token was scanned. Differs from
    /// `token.line` only for tokens that span lines.
    end_line: u32,
}

/// Lexer for the snail scripting language.
///
/// The lexer is a forward-only cursor over one chunk of source. Each call to
/// [`next_token`](Lexer::next_token) skips whitespace and comments and
/// produces the next token, tagged with the line it starts on. The stream
/// always ends with a single [`TokenKind::Eof`] token; callers stop there.
///
/// Lexical errors are fatal: once an operation returns `Err`, the lexer must
/// not be used again.
///
/// # Example
///
/// ```
/// use snail_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 1", "example.snail");
/// assert_eq!(lexer.look_ahead()?, TokenKind::Identifier);
/// assert_eq!(lexer.next_identifier()?, (1, "x"));
/// assert_eq!(lexer.next_token()?.kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token()?.lexeme, "1");
/// assert!(lexer.next_token()?.is_eof());
/// # Ok::<(), snail_lex::LexError>(())
/// ```
pub struct Lexer<'a> {
    /// Cursor over the unconsumed source.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic label of the chunk, usually a file path.
    chunk_name: String,

    /// Current line number (1-based).
    pub(crate) line: u32,

    /// One scanned-but-unconsumed token.
    lookahead: Option<Lookahead<'a>>,

    /// Set once the iterator has yielded its last item.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at line 1 of `source`.
    pub fn new(source: &'a str, chunk_name: impl Into<String>) -> Self {
        let chunk_name = chunk_name.into();
        debug!(chunk = %chunk_name, bytes = source.len(), "created lexer");
        Self {
            cursor: Cursor::new(source),
            chunk_name,
            line: 1,
            lookahead: None,
            finished: false,
        }
    }

    /// Returns the chunk name used in error messages.
    pub fn chunk_name(&self) -> &str {
        &self.chunk_name
    }

    /// Returns the current line number (1-based).
    ///
    /// A token that has only been peeked with [`look_ahead`](Lexer::look_ahead)
    /// does not move the line counter.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the next token from the source.
    ///
    /// A token cached by [`look_ahead`](Lexer::look_ahead) is returned first,
    /// without rescanning.
    pub fn next_token(&mut self) -> LexResult<Token<'a>> {
        if let Some(Lookahead { token, end_line }) = self.lookahead.take() {
            self.line = end_line;
            trace!(line = token.line, kind = ?token.kind, "lookahead hit");
            return Ok(token);
        }

        self.skip_whitespace_and_comments();
        let token = self.lex_token()?;
        trace!(line = token.line, kind = ?token.kind, lexeme = token.lexeme, "token");
        Ok(token)
    }

    /// Returns the kind of the next token without consuming it.
    ///
    /// The first call scans the token and caches it; further calls before the
    /// next [`next_token`](Lexer::next_token) return the cached kind. The line
    /// counter is left untouched.
    pub fn look_ahead(&mut self) -> LexResult<TokenKind> {
        if let Some(cached) = &self.lookahead {
            return Ok(cached.token.kind);
        }

        let line = self.line;
        let token = self.next_token()?;
        let end_line = std::mem::replace(&mut self.line, line);
        debug!(line = token.line, kind = ?token.kind, "filled lookahead");
        self.lookahead = Some(Lookahead { token, end_line });
        Ok(token.kind)
    }

    /// Consumes the next token and checks that it has the `expected` kind.
    ///
    /// Returns the token's line and lexeme.
    pub fn next_token_of_kind(&mut self, expected: TokenKind) -> LexResult<(u32, &'a str)> {
        let token = self.next_token()?;
        if token.kind != expected {
            return Err(self.error(LexErrorKind::UnexpectedToken {
                expected,
                found: token.kind,
                lexeme: token.lexeme.to_string(),
            }));
        }
        Ok((token.line, token.lexeme))
    }

    /// Consumes the next token and checks that it is an identifier.
    pub fn next_identifier(&mut self) -> LexResult<(u32, &'a str)> {
        self.next_token_of_kind(TokenKind::Identifier)
    }

    /// Builds an error located at the current line.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        let err = LexError::new(self.chunk_name.clone(), self.line, kind);
        debug!(error = %err, "lexical error");
        err
    }

    /// Consumes one line break (`\n`, `\r`, `\r\n` or `\n\r`) and bumps the
    /// line counter. Returns false if the cursor is not on a line break.
    pub(crate) fn eat_line_break(&mut self) -> bool {
        let len = line_break_len(self.cursor.remaining_bytes());
        if len == 0 {
            return false;
        }
        self.cursor.advance_bytes(len);
        self.line += 1;
        true
    }

    /// Consumes `len` bytes as a token of `kind`.
    pub(crate) fn make_token(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance_bytes(len);
        Token::new(self.line, kind, self.cursor.slice_from(start))
    }

    /// Dispatches on the first byte of the remaining input.
    fn lex_token(&mut self) -> LexResult<Token<'a>> {
        let Some(c) = self.cursor.current_byte() else {
            return Ok(Token::eof(self.line));
        };

        let token = match c {
            b',' => self.make_token(TokenKind::Comma, 1),
            b'(' => self.make_token(TokenKind::LParen, 1),
            b')' => self.make_token(TokenKind::RParen, 1),
            b'[' => self.make_token(TokenKind::LBracket, 1),
            b']' => self.make_token(TokenKind::RBracket, 1),
            b'{' => self.make_token(TokenKind::LBrace, 1),
            b'}' => self.make_token(TokenKind::RBrace, 1),
            b'+' => self.make_token(TokenKind::Add, 1),
            b'-' => self.make_token(TokenKind::Sub, 1),
            b'^' => self.make_token(TokenKind::Pow, 1),
            b'%' => self.make_token(TokenKind::Mod, 1),
            b'&' => self.make_token(TokenKind::BitAnd, 1),
            b'|' => self.make_token(TokenKind::BitOr, 1),
            b':' => self.lex_colon()?,
            b'!' => self.lex_bang()?,
            b'*' => self.lex_star(),
            b'=' => self.lex_equals(),
            b'<' => self.lex_less(),
            b'>' => self.lex_greater(),
            b'.' if !self.cursor.peek_byte(1).is_some_and(is_digit) => {
                self.make_token(TokenKind::Dot, 1)
            },
            b'\'' | b'"' => self.lex_string(c)?,
            b'b' if matches!(self.cursor.peek_byte(1), Some(b'\'' | b'"')) => self.lex_bytes()?,
            c if c == b'.' || is_digit(c) => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => {
                let symbol = self.cursor.current_char().unwrap_or(char::from(c));
                return Err(self.error(LexErrorKind::UnexpectedSymbol(symbol)));
            },
        };
        Ok(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    /// Yields every token before the end-of-file token. Stops after the end
    /// of input or after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Scans a whole chunk, returning every token including the final
/// end-of-file token.
///
/// ```
/// use snail_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("f(x)", "inline")?;
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::LParen, TokenKind::Identifier, TokenKind::RParen, TokenKind::Eof]
/// );
/// # Ok::<(), snail_lex::LexError>(())
/// ```
pub fn tokenize<'a>(source: &'a str, chunk_name: impl Into<String>) -> LexResult<Vec<Token<'a>>> {
    let mut lexer = Lexer::new(source, chunk_name);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
