//! ASCII character classes used by the lexer.
//!
//! The language only recognises ASCII letters, digits and underscore in names
//! and numbers, so every class here works on raw bytes. Non-ASCII bytes never
//! belong to any class.

/// Checks if a byte is whitespace: `\t \n \v \f \r` or space.
///
/// ```
/// use snail_lex::ascii::is_white_space;
///
/// assert!(is_white_space(b' '));
/// assert!(is_white_space(0x0B)); // vertical tab
/// assert!(!is_white_space(b'x'));
/// ```
#[inline]
pub fn is_white_space(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ')
}

/// Checks if a byte starts a line break (`\n` or `\r`).
#[inline]
pub fn is_new_line(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Checks if a byte is a decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is a hexadecimal digit.
#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Checks if a byte is an ASCII letter.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if a byte can start an identifier: `_` or a letter.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b == b'_' || is_letter(b)
}

/// Checks if a byte can continue an identifier: `_`, a letter or a digit.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Returns the length of a line break at the start of `bytes`.
///
/// `\r\n` and `\n\r` are one break of width 2, a lone `\n` or `\r` has width
/// 1, anything else is 0.
///
/// ```
/// use snail_lex::ascii::line_break_len;
///
/// assert_eq!(line_break_len(b"\r\nx"), 2);
/// assert_eq!(line_break_len(b"\n\rx"), 2);
/// assert_eq!(line_break_len(b"\n\nx"), 1);
/// assert_eq!(line_break_len(b"x"), 0);
/// ```
#[inline]
pub fn line_break_len(bytes: &[u8]) -> usize {
    match bytes {
        [b'\r', b'\n', ..] | [b'\n', b'\r', ..] => 2,
        [b, ..] if is_new_line(*b) => 1,
        _ => 0,
    }
}
