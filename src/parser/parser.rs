//! Parser state and the top-level `parse` entry point.

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_program;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token stream and tracks the current position in it.
/// All grammar functions consume tokens through `expect`/`advance`, which
/// gives the parser exactly one token of lookahead (`current_token`).
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The EOF token is never advanced past, so `current_token` stays valid.
    pub fn advance(&mut self) -> &Token {
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
            return self.tokens.get((self.pos - 1) as usize).unwrap();
        }
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Consumes a token of the specified kind, or fails with a parse error
    /// reporting the expected and actual token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. The whole token stream must be
/// consumed: anything left after the closing `.` is a parse error. Source
/// positions travel on the tokens' spans.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);

    let program = parse_program(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    Ok(program)
}
