//! Lexer for lilsp source text

mod tokens;

pub use tokens::{Token, TokenKind};

use crate::common::Span;
use crate::diagnostics::{SourceFile, SyntaxError};
use logos::Logos;

/// Tokenize input typed at the prompt
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    lex_file(&SourceFile::stdin(source))
}

/// Tokenize a named source. The returned stream always ends with `Eof`.
///
/// At each position a number is tried before a symbol, so a symbol run that
/// starts with digits is split: `1-2` is `1` then `-2`, and `123abc` is `123`
/// then `abc`. Lexing restarts right after the split-off number.
pub fn lex_file(file: &SourceFile) -> Result<Vec<Token>, SyntaxError> {
    let source: &str = &file.content;
    let mut tokens = Vec::new();
    let mut offset = 0;

    'restart: loop {
        let mut lexer = TokenKind::lexer(&source[offset..]);
        while let Some(result) = lexer.next() {
            let range = lexer.span();
            let span = Span::new(offset + range.start, offset + range.end);
            let text = lexer.slice();
            match result {
                Ok(TokenKind::Symbol) => {
                    if let Some(len) = integer_prefix(text) {
                        tokens.push(Token {
                            kind: TokenKind::Integer,
                            span: Span::new(span.start, span.start + len),
                            text: text[..len].to_string(),
                        });
                        offset = span.start + len;
                        continue 'restart;
                    }
                    tokens.push(Token {
                        kind: TokenKind::Symbol,
                        span,
                        text: text.to_string(),
                    });
                }
                Ok(kind) => tokens.push(Token {
                    kind,
                    span,
                    text: text.to_string(),
                }),
                Err(()) => {
                    return Err(SyntaxError::UnexpectedCharacter {
                        found: text.to_string(),
                        span: span.into(),
                        src: file.to_named_source(),
                    });
                }
            }
        }
        break;
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::point(source.len()),
        text: String::new(),
    });
    tracing::trace!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Length of a leading `-?[0-9]+`, if any
fn integer_prefix(text: &str) -> Option<usize> {
    let sign = usize::from(text.starts_with('-'));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then_some(sign + digits)
}
