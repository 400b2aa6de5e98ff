//! Interpreter integration tests
//!
//! Tests the full pipeline: source → parse → read → eval → render

use lilsp::interp::{Environment, EvalError, Value};
use lilsp::{eval_source, render};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper to evaluate a line in a fresh environment
fn interpret(source: &str) -> Value {
    let mut env = Environment::with_builtins();
    interpret_in(&mut env, source)
}

/// Helper to evaluate a line in an existing environment
fn interpret_in(env: &mut Environment, source: &str) -> Value {
    eval_source(source, env).unwrap_or_else(|e| panic!("Parse error in {:?}: {}", source, e))
}

/// Helper to check the rendered result
fn assert_renders(source: &str, expected: &str) {
    assert_eq!(render(&interpret(source)), expected, "source: {}", source);
}

/// Helper to check the result is a specific error
fn assert_error(source: &str, expected: EvalError) {
    match interpret(source) {
        Value::Error(e) => assert_eq!(e, expected, "source: {}", source),
        v => panic!("Expected Error({:?}), got {:?}", expected, v),
    }
}

// ==================== Arithmetic ====================

#[test]
fn test_interpret_add_many() {
    assert_eq!(interpret("(+ 1 2 3)"), Value::Integer(6));
}

#[test]
fn test_interpret_unary_minus() {
    assert_eq!(interpret("(- 5)"), Value::Integer(-5));
}

#[test]
fn test_interpret_nested_arithmetic() {
    assert_renders("(* (+ 1 2) (- 10 4))", "18");
    assert_renders("/ 10 2", "5");
    assert_renders("(% 10 3)", "1");
}

#[test]
fn test_interpret_decimal_arithmetic() {
    assert_renders("(+ 1.5 2.25)", "3.750000");
    assert_renders("(/ 1.0 4.0)", "0.250000");
    assert_renders("(- 2.5)", "-2.500000");
}

#[test]
fn test_interpret_division_by_zero() {
    assert_error("(/ 5 0)", EvalError::DivisionByZero);
    assert_error("(% 5 0)", EvalError::DivisionByZero);
    assert_error("(/ 5.0 0.0)", EvalError::DivisionByZero);
}

#[test]
fn test_interpret_mixed_kinds_rejected() {
    assert_error("(+ 1 2.0)", EvalError::TypeMismatch);
    assert_error("(* 2.0 3)", EvalError::TypeMismatch);
}

#[test]
fn test_interpret_non_numeric_operand() {
    assert_error(
        "(+ 1 {2})",
        EvalError::NotANumber {
            builtin: "+",
            position: 2,
            got: "Q-Expression",
        },
    );
}

#[test]
fn test_interpret_adjacent_numbers_split() {
    assert_renders("(+ 1-2)", "-1");
    assert_renders("+ 5-3", "2");
    assert_renders("{123abc}", "{123 abc}");
    assert_error("(+ 123abc)", EvalError::UnboundSymbol("abc".to_string()));
}

#[test]
fn test_interpret_integer_literal_overflow() {
    assert_error(
        "(+ 1 99999999999999999999)",
        EvalError::InvalidNumber("99999999999999999999".to_string()),
    );
}

// ==================== Lists ====================

#[test]
fn test_interpret_head_tail() {
    assert_eq!(interpret("(head {1 2 3})"), Value::QExpr(vec![Value::Integer(1)]));
    assert_eq!(
        interpret("(tail {1 2 3})"),
        Value::QExpr(vec![Value::Integer(2), Value::Integer(3)])
    );
}

#[test]
fn test_interpret_list_evaluates_arguments() {
    assert_renders("(list 1 (+ 1 1) {x})", "{1 2 {x}}");
    assert_renders("list", "<function>");
    assert_renders("(list)", "<function>");
}

#[test]
fn test_interpret_eval() {
    assert_renders("eval {+ 1 2}", "3");
    assert_renders("eval (tail {tail tail {5 6 7}})", "{6 7}");
    assert_renders("eval {}", "()");
}

#[test]
fn test_interpret_join() {
    assert_renders("join {1} {2 3} {} {4}", "{1 2 3 4}");
    assert_renders("(eval (join {+} (tail {1 2 3})))", "5");
}

#[test]
fn test_interpret_list_errors() {
    assert_error("(head {})", EvalError::EmptyList("head"));
    assert_error("(tail {})", EvalError::EmptyList("tail"));
    assert_error(
        "(eval 1)",
        EvalError::WrongType {
            builtin: "eval",
            position: 1,
            expected: "Q-Expression",
            got: "Integer",
        },
    );
    assert_error(
        "(tail {1} {2})",
        EvalError::WrongArity {
            builtin: "tail",
            expected: 1,
            got: 2,
        },
    );
}

#[test]
fn test_interpret_error_rendering() {
    assert_renders("(head {})", "Error: Function 'head' passed nothing.");
    assert_renders(
        "def {a 1} 2 3",
        "Error: Function 'def' expected a symbol at argument 2, instead got Integer.",
    );
    assert_renders("foo", "Error: Unbound symbol 'foo'");
    assert_renders("(1 2)", "Error: First element is not a function, got Integer");
}

// ==================== Symbols and def ====================

#[test]
fn test_interpret_unbound_symbol() {
    assert_error("foo", EvalError::UnboundSymbol("foo".to_string()));
}

#[test]
fn test_interpret_def_last_write_wins() {
    let mut env = Environment::with_builtins();
    assert_eq!(interpret_in(&mut env, "def {x} 5"), Value::unit());
    assert_eq!(interpret_in(&mut env, "def {x} 10"), Value::unit());
    assert_eq!(interpret_in(&mut env, "x"), Value::Integer(10));
}

#[test]
fn test_interpret_def_builtin_rejected() {
    assert_error("def {+} 1", EvalError::CannotRedefineBuiltin("+".to_string()));
}

#[test]
fn test_interpret_def_multiple() {
    let mut env = Environment::with_builtins();
    interpret_in(&mut env, "def {a b} 5 6");
    assert_eq!(interpret_in(&mut env, "+ a b"), Value::Integer(11));
}

#[test]
fn test_interpret_def_binds_evaluated_copy() {
    let mut env = Environment::with_builtins();
    interpret_in(&mut env, "def {xs} {1 2 3}");
    interpret_in(&mut env, "def {ys} (tail xs)");
    assert_eq!(render(&interpret_in(&mut env, "xs")), "{1 2 3}");
    assert_eq!(render(&interpret_in(&mut env, "ys")), "{2 3}");
}

#[test]
fn test_interpret_def_names_from_list() {
    let mut env = Environment::with_builtins();
    interpret_in(&mut env, "def {names} {p q}");
    interpret_in(&mut env, "def names 1 2");
    assert_eq!(interpret_in(&mut env, "+ p q"), Value::Integer(3));
}

#[test]
fn test_interpret_alias_builtin() {
    let mut env = Environment::with_builtins();
    interpret_in(&mut env, "def {plus} +");
    assert_eq!(interpret_in(&mut env, "plus 2 3"), Value::Integer(5));
}

#[test]
fn test_interpret_failed_def_leaves_env_unchanged() {
    let mut env = Environment::with_builtins();
    interpret_in(&mut env, "def {x} 1");
    let before: Vec<(String, Value)> = env
        .bindings()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();

    for bad in [
        "def {x y} 2",
        "def {x head} 2 3",
        "def {x 1} 2 3",
        "def 1 2",
        "def {x} (/ 1 0)",
    ] {
        assert!(interpret_in(&mut env, bad).is_error(), "{bad} should fail");
    }

    let after: Vec<(String, Value)> = env
        .bindings()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    assert_eq!(before, after);
}

// ==================== Printer ====================

#[test]
fn test_render_lists() {
    assert_renders("{}", "{}");
    assert_renders("()", "()");
    assert_renders("{1 {2 {}} x}", "{1 {2 {}} x}");
    insta::assert_snapshot!(render(&interpret("{-1 2.5 (a b)}")), @"{-1 2.500000 (a b)}");
}

#[test]
fn test_deep_nesting_evaluates_up_to_limit() {
    let depth = lilsp::parser::MAX_NESTING;
    let source = format!("{}1{}", "{".repeat(depth), "}".repeat(depth));
    assert_renders(&source, &source);

    let mut env = Environment::with_builtins();
    let too_deep = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
    assert!(matches!(
        eval_source(&too_deep, &mut env),
        Err(lilsp::SyntaxError::NestingTooDeep { .. })
    ));
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn prop_integer_literal_round_trips(n in any::<i64>()) {
        let source = n.to_string();
        prop_assert_eq!(render(&interpret(&source)), source);
    }

    #[test]
    fn prop_symbol_literal_round_trips(name in "[a-z][a-z0-9_]{0,8}") {
        let mut env = Environment::with_builtins();
        let quoted = format!("{{{}}}", name);
        prop_assert_eq!(render(&interpret_in(&mut env, &quoted)), quoted);
    }

    #[test]
    fn prop_head_tail_partition(items in prop::collection::vec(-1000i64..1000, 1..8)) {
        let q = format!(
            "{{{}}}",
            items.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
        );
        let joined = interpret(&format!("join (head {q}) (tail {q})"));
        prop_assert_eq!(joined, interpret(&q));
    }

    #[test]
    fn prop_list_eval_idempotent(a in -1000i64..1000, b in -1000i64..1000) {
        let q = format!("{{+ {} {}}}", a, b);
        let direct = interpret(&format!("eval {}", q));
        let round_trip = interpret(&format!("eval (list (eval {}))", q));
        prop_assert_eq!(direct, round_trip);
    }

    #[test]
    fn prop_addition_matches_checked_add(a in any::<i64>(), b in any::<i64>()) {
        let result = interpret(&format!("+ {} {}", a, b));
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(result, Value::Integer(sum)),
            None => prop_assert!(result.is_error()),
        }
    }
}
