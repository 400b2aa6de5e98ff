//! Tree-walking interpreter
//!
//! Reads a parse tree into values and reduces S-expressions against a flat
//! symbol environment pre-populated with the builtin table.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod read;
pub mod value;

pub use env::Environment;
pub use error::EvalError;
pub use eval::{Interpreter, eval, evaluate};
pub use read::read;
pub use value::{Builtin, BuiltinFn, Value};

/// Render a value as text
pub fn render(value: &Value) -> String {
    value.to_string()
}
