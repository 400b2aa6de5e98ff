//! Tree-walking evaluator

use crate::ast::ParseNode;
use crate::diagnostics::{SourceFile, SyntaxError};
use crate::parser;

use super::env::Environment;
use super::error::EvalError;
use super::read::read;
use super::value::Value;

/// Evaluate a value against an environment
///
/// Symbols are looked up, S-expressions are reduced, and every other value
/// (including Q-expressions) evaluates to itself.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

/// Reduce an S-expression
fn eval_sexpr(env: &mut Environment, items: Vec<Value>) -> Value {
    // Evaluate every child first, left to right
    let mut items: Vec<Value> = items.into_iter().map(|item| eval(env, item)).collect();

    // First error wins
    if let Some(pos) = items.iter().position(Value::is_error) {
        return items.swap_remove(pos);
    }

    match items.len() {
        0 => Value::SExpr(items),
        1 => items.remove(0),
        _ => {
            let head = items.remove(0);
            match head {
                Value::Function(builtin) => {
                    tracing::trace!("calling {} with {} arguments", builtin.name, items.len());
                    builtin.call(env, items)
                }
                other => Value::Error(EvalError::NotAFunction(other.type_name())),
            }
        }
    }
}

/// Read a parse tree and evaluate the result
pub fn evaluate(tree: &ParseNode, env: &mut Environment) -> Value {
    eval(env, read(tree))
}

/// Tree-walking interpreter holding one global environment
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Create an interpreter with the builtins registered
    pub fn new() -> Self {
        Interpreter {
            env: Environment::with_builtins(),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate a parse tree
    pub fn evaluate(&mut self, tree: &ParseNode) -> Value {
        evaluate(tree, &mut self.env)
    }

    /// Parse and evaluate one line of input
    pub fn eval_line(&mut self, source: &str) -> Result<Value, SyntaxError> {
        let tree = parser::parse(source)?;
        Ok(self.evaluate(&tree))
    }

    /// Parse a source file and evaluate each top-level expression in order
    ///
    /// Each expression is evaluated as if it were typed on its own line, so
    /// one failing expression does not stop the ones after it.
    pub fn eval_file(&mut self, file: &SourceFile) -> Result<Vec<Value>, SyntaxError> {
        let tree = parser::parse_file(file)?;
        let results = match read(&tree) {
            Value::SExpr(exprs) => exprs
                .into_iter()
                .map(|expr| eval(&mut self.env, expr))
                .collect(),
            other => vec![eval(&mut self.env, other)],
        };
        Ok(results)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
