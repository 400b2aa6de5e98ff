//! Lexer tests

use lilsp::lexer::{TokenKind, lex};

#[test]
fn test_lex_empty() {
    let tokens = lex("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_lex_whitespace() {
    let tokens = lex("   \t\n  ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_lex_simple_def() {
    let tokens = lex("def {x} 42").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Symbol);
    assert_eq!(tokens[0].text, "def");
    assert_eq!(tokens[1].kind, TokenKind::LBrace);
    assert_eq!(tokens[2].kind, TokenKind::Symbol);
    assert_eq!(tokens[2].text, "x");
    assert_eq!(tokens[3].kind, TokenKind::RBrace);
    assert_eq!(tokens[4].kind, TokenKind::Integer);
    assert_eq!(tokens[4].text, "42");
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn test_lex_operators_are_symbols() {
    let tokens = lex("+ - * / % == <= !&").unwrap();
    for tok in &tokens[..8] {
        assert_eq!(tok.kind, TokenKind::Symbol, "{:?}", tok.text);
    }
}

#[test]
fn test_lex_numbers() {
    let tokens = lex("0 -12 3.25 -0.5").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].text, "-12");
    assert_eq!(tokens[2].kind, TokenKind::Decimal);
    assert_eq!(tokens[3].kind, TokenKind::Decimal);
    assert_eq!(tokens[3].text, "-0.5");
}

#[test]
fn test_lex_letters_then_digits_is_symbol() {
    let tokens = lex("x1 a_b -x").unwrap();
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Symbol));
}

#[test]
fn test_lex_leading_number_splits() {
    let tokens = lex("1x 5-3").unwrap();
    let pairs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Integer, "1"),
            (TokenKind::Symbol, "x"),
            (TokenKind::Integer, "5"),
            (TokenKind::Integer, "-3"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_lex_spans() {
    let tokens = lex("(+ 10 2)").unwrap();
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[2].span.start, 3);
    assert_eq!(tokens[2].span.end, 5);
    assert_eq!(tokens.last().unwrap().span.start, 8);
}

#[test]
fn test_lex_rejects_strings() {
    assert!(lex("\"hello\"").is_err());
}

#[test]
fn test_lex_rejects_lone_dot() {
    assert!(lex("1 . 2").is_err());
}
