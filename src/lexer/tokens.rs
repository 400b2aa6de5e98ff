//! Token definitions for the lilsp lexer

use crate::common::Span;
use logos::Logos;

/// A token with its kind, span, and text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

/// Token kinds recognized by the lexer
///
/// logos picks the longest match, so `1+` comes out as one `Symbol` here;
/// [`lex_file`](super::lex_file) splits the leading number back off.
/// `-` alone and `-abc` stay symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r";[^\n]*")]
pub enum TokenKind {
    #[regex(r"-?[0-9]+\.[0-9]+", priority = 4)]
    Decimal,
    #[regex(r"-?[0-9]+", priority = 4)]
    Integer,
    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&%]+", priority = 2)]
    Symbol,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    Eof,
}

impl TokenKind {
    /// Check if this token closes a list
    pub fn is_close(&self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }

    /// Closing delimiter matching an opening one
    pub fn closer(&self) -> Option<TokenKind> {
        match self {
            TokenKind::LParen => Some(TokenKind::RParen),
            TokenKind::LBrace => Some(TokenKind::RBrace),
            _ => None,
        }
    }

    /// Get the string representation of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Decimal => "<decimal>",
            TokenKind::Integer => "<integer>",
            TokenKind::Symbol => "<symbol>",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Eof => "<eof>",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
