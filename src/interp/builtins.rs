//! Builtin operations
//!
//! Every builtin takes ownership of its evaluated argument list and returns a
//! single value. Precondition failures return `Value::Error` naming the
//! builtin, the 1-based argument position where one applies, and what was
//! expected against what was received. The argument list is consumed on every
//! path, so callers never see it again.
//!
//! | name | arguments | result |
//! |------|-----------|--------|
//! | `list` | any | the arguments as a Q-expression |
//! | `head` | one non-empty Q-expression | Q-expression of its first element |
//! | `tail` | one non-empty Q-expression | Q-expression without its first element |
//! | `eval` | one Q-expression | the result of evaluating it as an S-expression |
//! | `join` | one or more Q-expressions | their concatenation |
//! | `def` | `{names...}` then one value per name | `()` |
//! | `+ - * / %` | numbers of one kind | left fold over the arguments |

use super::env::Environment;
use super::error::EvalError;
use super::eval::eval;
use super::value::{Builtin, Value};

/// The fixed builtin table, registered into every global environment
pub const BUILTINS: &[Builtin] = &[
    // List functions
    Builtin::new("list", builtin_list),
    Builtin::new("head", builtin_head),
    Builtin::new("tail", builtin_tail),
    Builtin::new("eval", builtin_eval),
    Builtin::new("join", builtin_join),
    Builtin::new("def", builtin_def),
    // Math functions
    Builtin::new("+", builtin_add),
    Builtin::new("-", builtin_sub),
    Builtin::new("*", builtin_mul),
    Builtin::new("/", builtin_div),
    Builtin::new("%", builtin_rem),
];

/// Find a builtin by name
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

/// Require exactly `expected` arguments
fn check_arity(builtin: &'static str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::WrongArity {
            builtin,
            expected,
            got: args.len(),
        })
    }
}

/// Require at least one argument
fn check_nonempty(builtin: &'static str, args: &[Value]) -> Result<(), EvalError> {
    if args.is_empty() {
        Err(EvalError::WrongArity {
            builtin,
            expected: 1,
            got: 0,
        })
    } else {
        Ok(())
    }
}

/// Require argument `index` (0-based) to be a Q-expression
fn check_qexpr(builtin: &'static str, args: &[Value], index: usize) -> Result<(), EvalError> {
    match &args[index] {
        Value::QExpr(_) => Ok(()),
        other => Err(EvalError::WrongType {
            builtin,
            position: index + 1,
            expected: "Q-Expression",
            got: other.type_name(),
        }),
    }
}

/// Take the single Q-expression argument, rejecting an empty one
fn single_nonempty_qexpr(builtin: &'static str, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    check_arity(builtin, &args, 1)?;
    check_qexpr(builtin, &args, 0)?;
    match args.into_iter().next() {
        Some(Value::QExpr(items)) if !items.is_empty() => Ok(items),
        _ => Err(EvalError::EmptyList(builtin)),
    }
}

fn builtin_list(_env: &mut Environment, args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

fn builtin_head(_env: &mut Environment, args: Vec<Value>) -> Value {
    match single_nonempty_qexpr("head", args) {
        Ok(mut items) => {
            items.truncate(1);
            Value::QExpr(items)
        }
        Err(e) => Value::Error(e),
    }
}

fn builtin_tail(_env: &mut Environment, args: Vec<Value>) -> Value {
    match single_nonempty_qexpr("tail", args) {
        Ok(mut items) => {
            items.remove(0);
            Value::QExpr(items)
        }
        Err(e) => Value::Error(e),
    }
}

fn builtin_eval(env: &mut Environment, args: Vec<Value>) -> Value {
    let checked = check_arity("eval", &args, 1).and_then(|()| check_qexpr("eval", &args, 0));
    if let Err(e) = checked {
        return Value::Error(e);
    }
    match args.into_iter().next() {
        Some(expr) => eval(env, expr.into_sexpr()),
        None => Value::unit(),
    }
}

fn builtin_join(_env: &mut Environment, args: Vec<Value>) -> Value {
    if let Err(e) = check_nonempty("join", &args) {
        return Value::Error(e);
    }
    for i in 0..args.len() {
        if let Err(e) = check_qexpr("join", &args, i) {
            return Value::Error(e);
        }
    }

    let mut joined = Vec::new();
    for arg in args {
        if let Value::QExpr(items) = arg {
            joined.extend(items);
        }
    }
    Value::QExpr(joined)
}

/// Validate a `def` call, returning the names to bind
fn def_names(env: &Environment, args: &[Value]) -> Result<Vec<String>, EvalError> {
    check_nonempty("def", args)?;
    check_qexpr("def", args, 0)?;
    let symbols = args[0].items().unwrap_or_default();

    let mut names = Vec::with_capacity(symbols.len());
    for (i, sym) in symbols.iter().enumerate() {
        match sym {
            Value::Symbol(name) => names.push(name.clone()),
            other => {
                return Err(EvalError::ExpectedSymbol {
                    position: i + 1,
                    got: other.type_name(),
                });
            }
        }
    }

    let values = args.len() - 1;
    if names.len() != values {
        return Err(EvalError::WrongSymbolCount {
            expected: names.len(),
            got: values,
        });
    }

    if let Some(name) = names.iter().find(|name| env.is_reserved(name)) {
        return Err(EvalError::CannotRedefineBuiltin(name.clone()));
    }
    Ok(names)
}

/// Binds only after every name has been checked, so a rejected call leaves
/// the environment untouched.
fn builtin_def(env: &mut Environment, args: Vec<Value>) -> Value {
    let names = match def_names(env, &args) {
        Ok(names) => names,
        Err(e) => return Value::Error(e),
    };

    for (name, value) in names.iter().zip(args.iter().skip(1)) {
        tracing::debug!("def {} = {}", name, value);
        env.put(name, value);
    }
    Value::unit()
}

/// Arithmetic operator applied by the numeric fold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl NumOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            NumOp::Add => "+",
            NumOp::Sub => "-",
            NumOp::Mul => "*",
            NumOp::Div => "/",
            NumOp::Rem => "%",
        }
    }

    fn apply_integer(self, a: i64, b: i64) -> Result<i64, EvalError> {
        let overflow = || EvalError::IntegerOverflow(self.symbol());
        match self {
            NumOp::Add => a.checked_add(b).ok_or_else(overflow),
            NumOp::Sub => a.checked_sub(b).ok_or_else(overflow),
            NumOp::Mul => a.checked_mul(b).ok_or_else(overflow),
            NumOp::Div if b == 0 => Err(EvalError::DivisionByZero),
            NumOp::Div => a.checked_div(b).ok_or_else(overflow),
            NumOp::Rem if b == 0 => Err(EvalError::DivisionByZero),
            // i64::MIN % -1 is 0
            NumOp::Rem => Ok(a.wrapping_rem(b)),
        }
    }

    fn apply_decimal(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            NumOp::Add => Ok(a + b),
            NumOp::Sub => Ok(a - b),
            NumOp::Mul => Ok(a * b),
            NumOp::Div | NumOp::Rem if b == 0.0 => Err(EvalError::DivisionByZero),
            NumOp::Div => Ok(a / b),
            NumOp::Rem => Ok(a % b),
        }
    }
}

/// Left fold shared by the arithmetic builtins
///
/// The first argument seeds the accumulator; each following operand must be
/// of the same numeric kind as the accumulator. `-` with a single argument
/// negates it.
pub fn numeric_fold(op: NumOp, args: Vec<Value>) -> Value {
    let name = op.symbol();
    if let Err(e) = check_nonempty(name, &args) {
        return Value::Error(e);
    }
    if let Some((i, arg)) = args.iter().enumerate().find(|(_, arg)| !arg.is_number()) {
        return Value::Error(EvalError::NotANumber {
            builtin: name,
            position: i + 1,
            got: arg.type_name(),
        });
    }

    let mut operands = args.into_iter();
    let Some(mut acc) = operands.next() else {
        return Value::unit();
    };

    if op == NumOp::Sub && operands.len() == 0 {
        return match acc {
            Value::Integer(n) => n
                .checked_neg()
                .map(Value::Integer)
                .unwrap_or(Value::Error(EvalError::IntegerOverflow(name))),
            Value::Decimal(d) => Value::Decimal(-d),
            other => other,
        };
    }

    for operand in operands {
        let step = match (&acc, operand) {
            (Value::Integer(a), Value::Integer(b)) => op.apply_integer(*a, b).map(Value::Integer),
            (Value::Decimal(a), Value::Decimal(b)) => op.apply_decimal(*a, b).map(Value::Decimal),
            _ => Err(EvalError::TypeMismatch),
        };
        match step {
            Ok(next) => acc = next,
            Err(e) => return Value::Error(e),
        }
    }
    acc
}

fn builtin_add(_env: &mut Environment, args: Vec<Value>) -> Value {
    numeric_fold(NumOp::Add, args)
}

fn builtin_sub(_env: &mut Environment, args: Vec<Value>) -> Value {
    numeric_fold(NumOp::Sub, args)
}

fn builtin_mul(_env: &mut Environment, args: Vec<Value>) -> Value {
    numeric_fold(NumOp::Mul, args)
}

fn builtin_div(_env: &mut Environment, args: Vec<Value>) -> Value {
    numeric_fold(NumOp::Div, args)
}

fn builtin_rem(_env: &mut Environment, args: Vec<Value>) -> Value {
    numeric_fold(NumOp::Rem, args)
}
