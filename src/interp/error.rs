//! Evaluation errors
//!
//! These are carried inside [`Value::Error`](super::Value::Error) and flow
//! through evaluation like any other value.

use thiserror::Error;

/// Why an evaluation failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Malformed parse tree: unexpected node tagged '{0}'")]
    MalformedParseTree(String),

    #[error("Unbound symbol '{0}'")]
    UnboundSymbol(String),

    #[error("First element is not a function, got {0}")]
    NotAFunction(&'static str),

    #[error("Function '{builtin}' passed {} arguments. Got {got}, expected {expected}.", arity_word(.got, .expected))]
    WrongArity {
        builtin: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Function '{builtin}' passed incorrect type for argument {position}. Got {got}, expected {expected}.")]
    WrongType {
        builtin: &'static str,
        position: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Cannot apply operator '{builtin}' to argument {position} of type {got}. Argument must be a numeric type.")]
    NotANumber {
        builtin: &'static str,
        position: usize,
        got: &'static str,
    },

    #[error("Function '{0}' passed nothing.")]
    EmptyList(&'static str),

    #[error("Function 'def' expected a symbol at argument {position}, instead got {got}.")]
    ExpectedSymbol { position: usize, got: &'static str },

    #[error("Function 'def' passed incorrect number of values. Expected {expected}, got {got}.")]
    WrongSymbolCount { expected: usize, got: usize },

    #[error("Numeric types don't match.")]
    TypeMismatch,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in '{0}'")]
    IntegerOverflow(&'static str),

    #[error("Cannot redefine builtin function '{0}'.")]
    CannotRedefineBuiltin(String),
}

fn arity_word(got: &usize, expected: &usize) -> &'static str {
    if got > expected { "too many" } else { "too few" }
}
