//! Parse tree to value conversion

use crate::ast::{ParseNode, rule};

use super::error::EvalError;
use super::value::Value;

/// Bracket literals that delimit lists but are not list elements
const BRACKETS: [&str; 4] = ["(", ")", "{", "}"];

/// Convert a parse tree node into a value
///
/// Malformed nodes become `Value::Error` rather than aborting the read, so a
/// single bad leaf surfaces when the enclosing expression is evaluated.
pub fn read(node: &ParseNode) -> Value {
    if node.has_rule(rule::NUMBER) {
        return read_number(node);
    }
    if node.has_rule(rule::SYMBOL) {
        return Value::Symbol(node.contents.clone());
    }
    if node.is_root() || node.has_rule(rule::SEXPR) {
        return Value::SExpr(read_children(node));
    }
    if node.has_rule(rule::QEXPR) {
        return Value::QExpr(read_children(node));
    }

    tracing::debug!("no reader rule for node tagged '{}'", node.tag);
    Value::Error(EvalError::MalformedParseTree(node.tag.clone()))
}

fn read_number(node: &ParseNode) -> Value {
    let text = node.contents.as_str();
    let invalid = || Value::Error(EvalError::InvalidNumber(text.to_string()));

    if node.has_rule(rule::INTEGER) {
        return text.parse::<i64>().map(Value::Integer).unwrap_or_else(|_| invalid());
    }
    if node.has_rule(rule::DECIMAL) {
        return match text.parse::<f64>() {
            Ok(d) if d.is_finite() => Value::Decimal(d),
            _ => invalid(),
        };
    }
    invalid()
}

fn read_children(node: &ParseNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| !is_punctuation(child))
        .map(read)
        .collect()
}

fn is_punctuation(node: &ParseNode) -> bool {
    node.tag == rule::REGEX || BRACKETS.contains(&node.contents.as_str())
}
