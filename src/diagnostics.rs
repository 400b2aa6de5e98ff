//! Diagnostic reporting with source locations
//!
//! Syntax errors from the front-end are reported through miette with the
//! offending span labelled. Evaluation errors are not diagnostics: they are
//! ordinary values (see [`crate::interp::EvalError`]).

use crate::common::Span;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

/// Name used for input typed at the prompt
pub const STDIN_NAME: &str = "<stdin>";

/// Source text for error reporting
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.into()),
        }
    }

    /// Source typed at the prompt
    pub fn stdin(content: impl Into<String>) -> Self {
        Self::new(STDIN_NAME, content)
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

/// Convert our Span to miette's SourceSpan
impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Front-end error: the input does not match the grammar
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum SyntaxError {
    #[error("Unexpected character `{found}`")]
    #[diagnostic(
        code(syntax::unexpected_character),
        help("symbols may contain letters, digits and _+-*/\\=<>!&%")
    )]
    UnexpectedCharacter {
        found: String,
        #[label("not part of any token")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unclosed `{open}`")]
    #[diagnostic(code(syntax::unclosed_delimiter))]
    UnclosedDelimiter {
        open: char,
        #[label("opened here, expected `{close}` before end of input")]
        span: SourceSpan,
        close: char,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected `{found}`")]
    #[diagnostic(code(syntax::unexpected_closing))]
    UnexpectedClosing {
        found: char,
        #[label("no matching opening delimiter")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected end of input")]
    #[diagnostic(code(syntax::unexpected_eof))]
    UnexpectedEof {
        #[label("expected an expression")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Lists nested deeper than {limit} levels")]
    #[diagnostic(code(syntax::nesting_too_deep))]
    NestingTooDeep {
        limit: usize,
        #[label("this list exceeds the nesting limit")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Mismatched delimiters: `{open}` closed by `{found}`")]
    #[diagnostic(code(syntax::mismatched_delimiter))]
    MismatchedDelimiter {
        open: char,
        found: char,
        #[label("opened here")]
        open_span: SourceSpan,
        #[label("closed here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}

impl SyntaxError {
    /// Primary span of the error
    pub fn span(&self) -> SourceSpan {
        match self {
            SyntaxError::UnexpectedCharacter { span, .. }
            | SyntaxError::UnclosedDelimiter { span, .. }
            | SyntaxError::UnexpectedClosing { span, .. }
            | SyntaxError::UnexpectedEof { span, .. }
            | SyntaxError::NestingTooDeep { span, .. }
            | SyntaxError::MismatchedDelimiter { span, .. } => *span,
        }
    }
}
