//! Shared helpers for the snail-lex integration tests.

#![allow(dead_code)]

use snail_lex::{Lexer, TokenKind};
use tracing_subscriber::EnvFilter;

/// A small program touching every token family.
pub const SAMPLE_PROGRAM: &str = r#"// sample module
class Counter {
    func new(self, start) {
        self.count = start or 0
        self.tags = ['''first
second''', b'raw', "x"]
    }

    /* bump by n,
       default 1 */
    func bump(self, *rest, **opts) {
        if self.count >= 0x7FFF and not opts.wrap {
            return nil
        } elseif self.count != -1 {
            self.count = self.count + 1.5e0 ^ 2 % 3
        }
        for k, v in opts { continue }
        while true { break }
        return Counter::new(self.count & 0xff | 1, false)
    }
}
"#;

/// Installs a test-writer subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Lexes `source` to the end, returning `(line, kind, lexeme)` for every
/// token including EOF.
pub fn lex_triples(source: &str) -> Vec<(u32, TokenKind, String)> {
    let mut lexer = Lexer::new(source, "sample.snail");
    let mut out = Vec::new();
    loop {
        let token = lexer
            .next_token()
            .unwrap_or_else(|err| panic!("unexpected lex error: {}", err));
        out.push((token.line, token.kind, token.lexeme.to_string()));
        if token.is_eof() {
            return out;
        }
    }
}
