//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Reserved words and identifiers
//! - Numeric literals (integer and real constants)
//! - Operators and punctuation
//! - Nested comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_reserved_words() {
    let source = "program var procedure begin end div integer real".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Program);
    assert_eq!(tokens[1].kind, TokenKind::Var);
    assert_eq!(tokens[2].kind, TokenKind::Procedure);
    assert_eq!(tokens[3].kind, TokenKind::Begin);
    assert_eq!(tokens[4].kind, TokenKind::End);
    assert_eq!(tokens[5].kind, TokenKind::IntegerDiv);
    assert_eq!(tokens[6].kind, TokenKind::Integer);
    assert_eq!(tokens[7].kind, TokenKind::Real);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_reserved_words_case_insensitive() {
    let source = "BEGIN Begin bEgIn".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Begin);
    assert_eq!(tokens[1].kind, TokenKind::Begin);
    assert_eq!(tokens[2].kind, TokenKind::Begin);
    assert_eq!(tokens[0].value, "BEGIN");
}

#[test]
fn test_tokenize_identifiers_lowercased() {
    let source = "foo Bar BAZ_123 _underscore".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_lone_underscore() {
    let source = "_".to_string();
    let result = tokenize(source, Some("test.pas".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "InvalidIdentifier");
}

#[test]
fn test_tokenize_double_underscore() {
    let source = "__x".to_string();
    let result = tokenize(source, Some("test.pas".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::RealConst);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::RealConst);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integer_before_dot() {
    // `3.` is an integer followed by a dot, not a real constant.
    let source = "3.".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[0].value, "3");
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / div".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::RealDiv);
    assert_eq!(tokens[4].kind, TokenKind::IntegerDiv);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) , : ; .".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::Colon);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Dot);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_assign_over_colon() {
    let source = "x := 1".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Assign);
    assert_eq!(tokens[2].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_colon_in_declaration() {
    let source = "x : integer".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
}

#[test]
fn test_tokenize_comment() {
    let source = "begin { a comment } end".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Begin);
    assert_eq!(tokens[1].kind, TokenKind::End);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_nested_comment() {
    let source = "{ outer { inner } still outer } x".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_comment() {
    let source = "begin { never closed".to_string();
    let result = tokenize(source, Some("test.pas".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnterminatedComment");
}

#[test]
fn test_tokenize_unterminated_nested_comment() {
    let source = "{ outer { inner }".to_string();
    let result = tokenize(source, Some("test.pas".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "x := @".to_string();
    let result = tokenize(source, Some("test.pas".to_string()));

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnrecognisedCharacter"
    );
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  begin   x   end  ".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Begin);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::End);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "program p; begin x := 2 end.".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens.len(), 10); // program, p, ;, begin, x, :=, 2, end, ., EOF
    assert_eq!(tokens[0].kind, TokenKind::Program);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "p");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::Begin);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::Assign);
    assert_eq!(tokens[6].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[7].kind, TokenKind::End);
    assert_eq!(tokens[8].kind, TokenKind::Dot);
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_mixed_expression() {
    let source = "a + 5 * (b - 3) div 2 / 4".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[3].kind, TokenKind::Star);
    assert_eq!(tokens[4].kind, TokenKind::OpenParen);
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].kind, TokenKind::Minus);
    assert_eq!(tokens[7].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[8].kind, TokenKind::CloseParen);
    assert_eq!(tokens[9].kind, TokenKind::IntegerDiv);
    assert_eq!(tokens[10].kind, TokenKind::IntegerConst);
    assert_eq!(tokens[11].kind, TokenKind::RealDiv);
    assert_eq!(tokens[12].kind, TokenKind::IntegerConst);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.pas".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}
