use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words keyed by their uppercase spelling. The lexer uppercases
    /// every scanned identifier before looking it up here, so reserved words
    /// are case-insensitive.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROGRAM", TokenKind::Program);
        map.insert("VAR", TokenKind::Var);
        map.insert("PROCEDURE", TokenKind::Procedure);
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("END", TokenKind::End);
        map.insert("DIV", TokenKind::IntegerDiv);
        map.insert("INTEGER", TokenKind::Integer);
        map.insert("REAL", TokenKind::Real);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    IntegerConst,
    RealConst,
    Identifier,

    OpenParen,
    CloseParen,

    Comma,
    Colon,
    Dot,
    Semicolon,

    Assign, // :=

    Plus,
    Minus,
    Star,
    IntegerDiv, // div
    RealDiv,    // /

    // Reserved
    Program,
    Var,
    Procedure,
    Begin,
    End,
    Integer,
    Real,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}
