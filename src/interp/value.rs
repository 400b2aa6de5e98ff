//! Runtime values for the interpreter
//!
//! Every container owns its children outright; `Clone` is a structural deep
//! copy. Moving an element between lists removes it from the source list, so
//! no value is ever reachable from two places at once.

use std::fmt;

use super::env::Environment;
use super::error::EvalError;

/// Native implementation of a builtin. Owns its argument list.
pub type BuiltinFn = fn(&mut Environment, Vec<Value>) -> Value;

/// A native builtin, stored as data
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Self { name, func }
    }

    /// Invoke with an owned argument list
    pub fn call(&self, env: &mut Environment, args: Vec<Value>) -> Value {
        (self.func)(env, args)
    }
}

/// Builtins are identified by name; the table guarantees names are unique.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.name)
    }
}

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Decimal(f64),
    /// Failed evaluation
    Error(EvalError),
    /// Identifier awaiting lookup or definition
    Symbol(String),
    /// Native function
    Function(Builtin),
    /// Expression to be evaluated
    SExpr(Vec<Value>),
    /// Quoted list, never evaluated implicitly
    QExpr(Vec<Value>),
}

impl Value {
    /// Empty S-expression, the unit result of `def`
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Decimal(_) => "Decimal",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Decimal(_))
    }

    /// Children of a list value
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Some(items),
            _ => None,
        }
    }

    /// Relabel a list as an S-expression; other values are returned as is
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(items) => Value::SExpr(items),
            other => other,
        }
    }
}

fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", v)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{:.6}", d),
            Value::Error(e) => write!(f, "Error: {}", e),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Function(_) => write!(f, "<function>"),
            Value::SExpr(items) => fmt_list(f, items, '(', ')'),
            Value::QExpr(items) => fmt_list(f, items, '{', '}'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_copy_is_independent() {
        let original = Value::QExpr(vec![Value::Integer(1), Value::QExpr(vec![Value::symbol("x")])]);
        let mut copy = original.clone();
        if let Value::QExpr(items) = &mut copy {
            items.push(Value::Integer(2));
            if let Value::QExpr(inner) = &mut items[1] {
                inner.clear();
            }
        }
        assert_eq!(original.to_string(), "{1 {x}}");
        assert_eq!(copy.to_string(), "{1 {} 2}");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::unit().type_name(), "S-Expression");
        assert_eq!(Value::QExpr(vec![]).type_name(), "Q-Expression");
        assert_eq!(Value::Decimal(1.0).type_name(), "Decimal");
    }

    #[test]
    fn test_relabel() {
        let q = Value::QExpr(vec![Value::Integer(1)]);
        assert_eq!(q.into_sexpr(), Value::SExpr(vec![Value::Integer(1)]));
        assert_eq!(Value::Integer(3).into_sexpr(), Value::Integer(3));
    }
}
