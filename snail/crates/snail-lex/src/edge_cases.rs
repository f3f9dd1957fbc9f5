//! Edge case tests for snail-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexErrorKind, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(source, "edge");
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.is_eof() { break; }
            tokens.push(token);
        }
        tokens
    }

    fn first_error(source: &str) -> LexErrorKind {
        tokenize(source, "edge").unwrap_err().kind
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert_eq!(tokenize("", "edge").unwrap(), vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_only_comments() {
        assert!(lex_all("// a\n/* b */\n// c").is_empty());
        assert_eq!(tokenize("// a\n/* b\n */", "edge").unwrap()[0].line, 3);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::new(1, TokenKind::Identifier, "x"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("{} = 1", name);
        let t = lex_all(&source);
        assert_eq!(t[0].lexeme, name);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("func if nil");
        assert_eq!(t[0].kind, TokenKind::Func);
        assert_eq!(t[1].kind, TokenKind::If);
        assert_eq!(t[2].kind, TokenKind::Nil);
    }

    #[test]
    fn test_edge_keyword_glued_to_symbol() {
        let kinds: Vec<TokenKind> = lex_all("if(x)return").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::If,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::Return,
            ]
        );
    }

    #[test]
    fn test_edge_hex_bounds() {
        let t = lex_all("0x0 0xFFFFFFFFFFFFFFFFFFFF");
        assert_eq!(t[0].lexeme, "0x0");
        assert_eq!(t[1].lexeme, "0xFFFFFFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_edge_huge_decimal_is_kept_verbatim() {
        let digits = "9".repeat(400);
        assert_eq!(lex_all(&digits)[0].lexeme, digits);
    }

    #[test]
    fn test_edge_minus_is_separate_from_number() {
        let t = lex_all("-1");
        assert_eq!(t[0].kind, TokenKind::UNM);
        assert_eq!(t[1].lexeme, "1");
    }

    #[test]
    fn test_edge_lone_carriage_returns() {
        let t = lex_all("a\rb\rc");
        let lines: Vec<u32> = t.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_mixed_line_endings() {
        // \n\r and \r\n each count once, \n\n and \r\r count twice
        let t = lex_all("a\n\rb\r\nc\n\nd\r\re");
        let lines: Vec<u32> = t.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 5, 7]);
    }

    #[test]
    fn test_edge_dot_at_end() {
        let t = lex_all("a.");
        assert_eq!(t[1], Token::new(1, TokenKind::Dot, "."));
    }

    #[test]
    fn test_edge_b_at_end() {
        let t = lex_all("b");
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_bytes_prefix_uppercase_is_identifier() {
        let t = lex_all("B'x'");
        assert_eq!(t[0], Token::new(1, TokenKind::Identifier, "B"));
        assert_eq!(t[1].kind, TokenKind::String);
    }

    #[test]
    fn test_edge_empty_long_string_then_quote() {
        // six quotes close the long string, the seventh opens a short one
        assert_eq!(first_error("'''''''"), LexErrorKind::UnterminatedShortString);
    }

    #[test]
    fn test_edge_two_quotes_is_empty_string() {
        let t = lex_all("'' x");
        assert_eq!(t[0].lexeme, "");
        assert_eq!(t[1].lexeme, "x");
    }

    #[test]
    fn test_edge_close_comment_without_open() {
        let mut lexer = Lexer::new("a */", "edge");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Mul);
        assert_eq!(lexer.next_token().unwrap_err().kind, LexErrorKind::UnexpectedSymbol('/'));
    }

    #[test]
    fn test_edge_nul_byte() {
        assert_eq!(first_error("a\0"), LexErrorKind::UnexpectedSymbol('\0'));
    }

    #[test]
    fn test_edge_emoji_in_comment_and_string() {
        let t = lex_all("// 🐌\n'🐌' /* 🐌 */ x");
        assert_eq!(t[0].lexeme, "🐌");
        assert_eq!((t[1].line, t[1].lexeme), (2, "x"));
    }

    #[test]
    fn test_edge_emoji_in_code() {
        assert_eq!(first_error("x = 🐌"), LexErrorKind::UnexpectedSymbol('🐌'));
    }

    #[test]
    fn test_edge_error_line_inside_long_string() {
        let err = tokenize("x\n'''a\nb\nc", "edge").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedLongString);
        assert_eq!(err.line, 4);
    }

    #[test]
    fn test_edge_peek_at_error() {
        let mut lexer = Lexer::new("#", "edge");
        assert_eq!(lexer.look_ahead().unwrap_err().kind, LexErrorKind::UnexpectedSymbol('#'));
    }

    #[test]
    fn test_edge_expect_eof() {
        let mut lexer = Lexer::new("  \n", "edge");
        assert_eq!(lexer.next_token_of_kind(TokenKind::Eof).unwrap(), (2, "EOF"));
    }
}
