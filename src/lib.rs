//! lilsp: a small Lisp
//!
//! Values are integers, decimals, symbols, errors, builtin functions and two
//! kinds of list: S-expressions, which evaluate by applying their first
//! element to the rest, and Q-expressions, which are quoted data.
//!
//! # Architecture
//!
//! ```text
//! Source → Lexer → Parser → ParseNode → Reader → Value → Evaluator → Value → Printer
//! ```
//!
//! # Example
//!
//! ```lisp
//! lilsp> def {xs} {1 2 3}
//! ()
//! lilsp> eval (join {+} (tail xs))
//! 5
//! lilsp> (head xs)
//! {1}
//! ```

pub mod ast;
pub mod common;
pub mod config;
pub mod diagnostics;
pub mod interp;
pub mod lexer;
pub mod parser;
pub mod repl;

// Re-exports for convenience
pub use ast::ParseNode;
pub use diagnostics::{SourceFile, SyntaxError};
pub use interp::{Environment, EvalError, Interpreter, Value, evaluate, render};
pub use parser::parse;

/// Interpreter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse and evaluate one line of source against `env`
pub fn eval_source(source: &str, env: &mut Environment) -> Result<Value, SyntaxError> {
    let tree = parser::parse(source)?;
    Ok(evaluate(&tree, env))
}
