//! Parser for lilsp
//!
//! A recursive descent parser that builds the generic parse tree for the
//! grammar below. Tags name the rule chain that matched each node, outermost
//! first, so a number inside a list is tagged `expr|number|integer|regex`.
//!
//! ```text
//! integer : /-?[0-9]+/ ;
//! decimal : /-?[0-9]+\.[0-9]+/ ;
//! number  : <decimal> | <integer> ;
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&%]+/ ;
//! sexpr   : '(' <expr>* ')' ;
//! qexpr   : '{' <expr>* '}' ;
//! expr    : <number> | <symbol> | <sexpr> | <qexpr> ;
//! lilsp   : /^/ <expr>* /$/ ;
//! ```

use crate::ast::{ParseNode, rule};
use crate::common::Span;
use crate::diagnostics::{SourceFile, SyntaxError};
use crate::lexer::{self, Token, TokenKind};

/// Deepest list nesting accepted. Reading, evaluating and dropping a value
/// all recurse once per level.
pub const MAX_NESTING: usize = 256;

/// Parse input typed at the prompt
pub fn parse(source: &str) -> Result<ParseNode, SyntaxError> {
    parse_file(&SourceFile::stdin(source))
}

/// Parse a named source into a root node
pub fn parse_file(file: &SourceFile) -> Result<ParseNode, SyntaxError> {
    let tokens = lexer::lex_file(file)?;
    let mut parser = Parser::new(&tokens, file);
    let root = parser.parse_program()?;
    tracing::debug!(
        "parsed {} top-level expressions ({} nodes)",
        root.children.len().saturating_sub(2),
        root.node_count()
    );
    Ok(root)
}

/// Parser state
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    file: &'a SourceFile,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], file: &'a SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            file,
        }
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn span(&self) -> Span {
        self.current().map(|t| t.span).unwrap_or_default()
    }

    /// lilsp : /^/ <expr>* /$/
    fn parse_program(&mut self) -> Result<ParseNode, SyntaxError> {
        let mut exprs = Vec::new();
        loop {
            match self.peek() {
                TokenKind::Eof => break,
                kind if kind.is_close() => {
                    return Err(SyntaxError::UnexpectedClosing {
                        found: delimiter_char(kind),
                        span: self.span().into(),
                        src: self.file.to_named_source(),
                    });
                }
                _ => exprs.push(self.parse_expr()?),
            }
        }
        Ok(ParseNode::root(exprs))
    }

    /// expr : <number> | <symbol> | <sexpr> | <qexpr>
    fn parse_expr(&mut self) -> Result<ParseNode, SyntaxError> {
        let Some(tok) = self.advance() else {
            return Err(self.unexpected_eof());
        };
        let tag = match tok.kind {
            TokenKind::Integer => leaf_tag(&[rule::NUMBER, rule::INTEGER]),
            TokenKind::Decimal => leaf_tag(&[rule::NUMBER, rule::DECIMAL]),
            TokenKind::Symbol => leaf_tag(&[rule::SYMBOL]),
            TokenKind::LParen => return self.parse_list(tok, rule::SEXPR),
            TokenKind::LBrace => return self.parse_list(tok, rule::QEXPR),
            TokenKind::RParen | TokenKind::RBrace => {
                return Err(SyntaxError::UnexpectedClosing {
                    found: delimiter_char(tok.kind),
                    span: tok.span.into(),
                    src: self.file.to_named_source(),
                });
            }
            TokenKind::Eof => return Err(self.unexpected_eof()),
        };
        Ok(ParseNode::leaf(tag, tok.text.clone()))
    }

    /// sexpr : '(' <expr>* ')'  |  qexpr : '{' <expr>* '}'
    fn parse_list(&mut self, open: &'a Token, list_rule: &str) -> Result<ParseNode, SyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING,
                span: open.span.into(),
                src: self.file.to_named_source(),
            });
        }
        self.depth += 1;

        let mut children = vec![ParseNode::leaf(rule::CHAR, open.text.clone())];
        let close = open.kind.closer().unwrap_or(TokenKind::RParen);

        loop {
            match self.peek() {
                TokenKind::Eof => {
                    return Err(SyntaxError::UnclosedDelimiter {
                        open: delimiter_char(open.kind),
                        close: delimiter_char(close),
                        span: open.span.into(),
                        src: self.file.to_named_source(),
                    });
                }
                kind if kind == close => {
                    if let Some(tok) = self.advance() {
                        children.push(ParseNode::leaf(rule::CHAR, tok.text.clone()));
                    }
                    break;
                }
                kind if kind.is_close() => {
                    return Err(SyntaxError::MismatchedDelimiter {
                        open: delimiter_char(open.kind),
                        found: delimiter_char(kind),
                        open_span: open.span.into(),
                        span: self.span().into(),
                        src: self.file.to_named_source(),
                    });
                }
                _ => children.push(self.parse_expr()?),
            }
        }

        self.depth -= 1;
        Ok(ParseNode::branch(
            format!("{}|{}|>", rule::EXPR, list_rule),
            children,
        ))
    }

    fn unexpected_eof(&self) -> SyntaxError {
        SyntaxError::UnexpectedEof {
            span: Span::point(self.file.content.len()).into(),
            src: self.file.to_named_source(),
        }
    }
}

/// Tag of a collapsed leaf: `expr|<rules>|regex`
fn leaf_tag(rules: &[&str]) -> String {
    let mut tag = String::from(rule::EXPR);
    for r in rules {
        tag.push('|');
        tag.push_str(r);
    }
    tag.push('|');
    tag.push_str(rule::REGEX);
    tag
}

fn delimiter_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::LParen => '(',
        TokenKind::RParen => ')',
        TokenKind::LBrace => '{',
        TokenKind::RBrace => '}',
        _ => '?',
    }
}
