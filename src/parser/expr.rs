//! Expression parsing.
//!
//! Precedence is structural: `expr` handles `+`/`-`, `term` handles
//! `*`/`div`/`/`, `factor` handles prefix signs, literals, grouping and
//! variables. The iterative loops make both levels left-associative.

use crate::{
    ast::expressions::{
        BinaryExpr, BinaryOperator, Expr, NumberLiteral, UnaryExpr, UnaryOperator, Variable,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expr := term (('+' | '-') term)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut node = parse_term(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Minus
    ) {
        let operator_token = parser.advance().clone();
        let operator = match operator_token.kind {
            TokenKind::Plus => BinaryOperator::Add,
            _ => BinaryOperator::Subtract,
        };
        let right = parse_term(parser)?;

        node = Expr::Binary(BinaryExpr {
            left: Box::new(node),
            operator,
            right: Box::new(right),
            span: operator_token.span,
        });
    }

    Ok(node)
}

/// term := factor (('*' | 'div' | '/') factor)*
fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut node = parse_factor(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Star | TokenKind::IntegerDiv | TokenKind::RealDiv
    ) {
        let operator_token = parser.advance().clone();
        let operator = match operator_token.kind {
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::IntegerDiv => BinaryOperator::IntegerDiv,
            _ => BinaryOperator::RealDiv,
        };
        let right = parse_factor(parser)?;

        node = Expr::Binary(BinaryExpr {
            left: Box::new(node),
            operator,
            right: Box::new(right),
            span: operator_token.span,
        });
    }

    Ok(node)
}

/// factor := ('+' | '-') factor | INT_CONST | REAL_CONST | '(' expr ')' | variable
fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Plus => {
            let token = parser.advance().clone();
            Ok(Expr::Unary(UnaryExpr {
                operator: UnaryOperator::Plus,
                operand: Box::new(parse_factor(parser)?),
                span: token.span,
            }))
        }
        TokenKind::Minus => {
            let token = parser.advance().clone();
            Ok(Expr::Unary(UnaryExpr {
                operator: UnaryOperator::Minus,
                operand: Box::new(parse_factor(parser)?),
                span: token.span,
            }))
        }
        TokenKind::IntegerConst => {
            let token = parser.advance().clone();
            let value = token.value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            Ok(Expr::Number(NumberLiteral::Integer(value)))
        }
        TokenKind::RealConst => {
            let token = parser.advance().clone();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            Ok(Expr::Number(NumberLiteral::Real(value)))
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(expr)
        }
        TokenKind::Identifier => Ok(Expr::Variable(parse_variable(parser)?)),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("an expression"),
                found: parser.current_token().value.clone(),
            },
            parser.current_token().span.start.clone(),
        )),
    }
}

/// variable := ID
pub fn parse_variable(parser: &mut Parser) -> Result<Variable, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(Variable {
        name: token.value,
        span: token.span,
    })
}
