//! Token definitions for the snail language.
//!
//! [`TokenKind`] is declared family by family (end of file, separators,
//! operators, keywords, then identifiers and literals). The declaration order
//! is load-bearing: [`TokenKind::family`] classifies a kind with plain ordering
//! comparisons against the family boundaries.

use std::fmt;

/// The kind of a token.
///
/// Variants are ordered by family and the ordering is part of the API:
/// reordering variants changes [`TokenKind::code`] and the result of
/// [`TokenKind::family`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// End-of-file sentinel
    Eof,

    // ===== Separators =====
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `::`
    Domain,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ===== Operators =====
    /// `=`
    Assign,
    /// `~` (also bitwise xor)
    BitNot,
    /// `+`
    Add,
    /// `-` (also unary minus)
    Sub,
    /// `*` (also sequence pack/unpack)
    Mul,
    /// `**` (dict pack/unpack)
    PackDict,
    /// `/`
    Div,
    /// `//`
    IntDiv,
    /// `^`
    Pow,
    /// `%`
    Mod,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,

    // ===== Keywords =====
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `else`
    Else,
    /// `elseif`
    ElseIf,
    /// `false`
    False,
    /// `for`
    For,
    /// `func`
    Func,
    /// `class`
    Class,
    /// `if`
    If,
    /// `in`
    In,
    /// `nil`
    Nil,
    /// `return`
    Return,
    /// `true`
    True,
    /// `while`
    While,

    // ===== Identifiers and literals =====
    /// A name that is not a keyword
    Identifier,
    /// A numeric literal, decimal or hexadecimal
    Number,
    /// A short or long string literal
    String,
    /// A `b'...'` / `b"..."` literal
    Bytes,
}

/// The family a [`TokenKind`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenFamily {
    /// The end-of-file sentinel
    Eof,
    /// Punctuation that structures code
    Separator,
    /// Symbolic and word operators
    Operator,
    /// Reserved words
    Keyword,
    /// Names
    Identifier,
    /// Numeric literals
    Number,
    /// String literals
    String,
    /// Bytes literals
    Bytes,
}

impl TokenFamily {
    /// The label used in token dumps.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenFamily::Eof => "EOF",
            TokenFamily::Separator => "separator",
            TokenFamily::Operator => "operator",
            TokenFamily::Keyword => "keyword",
            TokenFamily::Identifier => "identifier",
            TokenFamily::Number => "number",
            TokenFamily::String => "string",
            TokenFamily::Bytes => "bytes",
        }
    }
}

impl fmt::Display for TokenFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TokenKind {
    /// Unary minus shares the `-` token.
    pub const UNM: TokenKind = TokenKind::Sub;
    /// Bitwise xor shares the `~` token.
    pub const BIT_XOR: TokenKind = TokenKind::BitNot;
    /// Sequence packing shares the `*` token.
    pub const PACK_TUPLE: TokenKind = TokenKind::Mul;
    /// Sequence unpacking shares the `*` token.
    pub const UNPACK_TUPLE: TokenKind = TokenKind::Mul;
    /// Dict unpacking shares the `**` token.
    pub const UNPACK_DICT: TokenKind = TokenKind::PackDict;

    const LAST_SEPARATOR: TokenKind = TokenKind::RBrace;
    const LAST_OPERATOR: TokenKind = TokenKind::Not;
    const LAST_KEYWORD: TokenKind = TokenKind::While;

    /// Returns the family of this kind.
    ///
    /// ```
    /// use snail_lex::{TokenFamily, TokenKind};
    ///
    /// assert_eq!(TokenKind::Domain.family(), TokenFamily::Separator);
    /// assert_eq!(TokenKind::And.family(), TokenFamily::Operator);
    /// assert_eq!(TokenKind::Func.family(), TokenFamily::Keyword);
    /// ```
    pub fn family(self) -> TokenFamily {
        match self {
            TokenKind::Eof => TokenFamily::Eof,
            k if k <= Self::LAST_SEPARATOR => TokenFamily::Separator,
            k if k <= Self::LAST_OPERATOR => TokenFamily::Operator,
            k if k <= Self::LAST_KEYWORD => TokenFamily::Keyword,
            TokenKind::Identifier => TokenFamily::Identifier,
            TokenKind::Number => TokenFamily::Number,
            TokenKind::String => TokenFamily::String,
            _ => TokenFamily::Bytes,
        }
    }

    /// Returns true for `,` `.` `::` and the brackets.
    pub fn is_separator(self) -> bool {
        self > TokenKind::Eof && self <= Self::LAST_SEPARATOR
    }

    /// Returns true for symbolic operators and `and`/`or`/`not`.
    pub fn is_operator(self) -> bool {
        self > Self::LAST_SEPARATOR && self <= Self::LAST_OPERATOR
    }

    /// Returns true for reserved words that are not word operators.
    pub fn is_keyword(self) -> bool {
        self > Self::LAST_OPERATOR && self <= Self::LAST_KEYWORD
    }

    /// Returns true for number, string and bytes literals.
    pub fn is_literal(self) -> bool {
        self > TokenKind::Identifier
    }

    /// Stable numeric code of this kind, as printed in token dumps.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Fixed spelling of the kind, or a descriptive name for open classes.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Domain => "::",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Assign => "=",
            TokenKind::BitNot => "~",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::PackDict => "**",
            TokenKind::Div => "/",
            TokenKind::IntDiv => "//",
            TokenKind::Pow => "^",
            TokenKind::Mod => "%",
            TokenKind::BitAnd => "&",
            TokenKind::BitOr => "|",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::Eq => "==",
            TokenKind::Ne => "!=",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Else => "else",
            TokenKind::ElseIf => "elseif",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Func => "func",
            TokenKind::Class => "class",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Nil => "nil",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::While => "while",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number literal",
            TokenKind::String => "string literal",
            TokenKind::Bytes => "bytes literal",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Looks up a scanned word in the keyword table.
///
/// `and`, `or` and `not` are word operators and map to operator kinds.
///
/// ```
/// use snail_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("elseif"), Some(TokenKind::ElseIf));
/// assert_eq!(keyword_from_ident("not"), Some(TokenKind::Not));
/// assert_eq!(keyword_from_ident("forward"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "else" => TokenKind::Else,
        "elseif" => TokenKind::ElseIf,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "func" => TokenKind::Func,
        "class" => TokenKind::Class,
        "if" => TokenKind::If,
        "in" => TokenKind::In,
        "nil" => TokenKind::Nil,
        "not" => TokenKind::Not,
        "or" => TokenKind::Or,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// A classified unit of source text.
///
/// `line` is the line the token starts on. `lexeme` borrows from the source:
/// the exact text for most kinds, the text between the quotes for string and
/// bytes literals, and `"EOF"` for the end-of-file sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// 1-based starting line
    pub line: u32,
    /// Token kind
    pub kind: TokenKind,
    /// Source text of the token
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub const fn new(line: u32, kind: TokenKind, lexeme: &'a str) -> Self {
        Self { line, kind, lexeme }
    }

    /// The end-of-file sentinel at `line`.
    pub const fn eof(line: u32) -> Self {
        Self::new(line, TokenKind::Eof, "EOF")
    }

    /// Returns true for the end-of-file sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders the token-dump line: `line 3: [12][operator  ] +`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: [{}][{:<10}] {}",
            self.line,
            self.kind.code(),
            self.kind.family(),
            self.lexeme
        )
    }
}
