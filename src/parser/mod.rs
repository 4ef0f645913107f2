//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an AST following the fixed LL(1) grammar:
//!
//! - One parsing function per nonterminal
//! - One token of lookahead, consumed through `expect`
//! - Operator precedence encoded structurally (expr -> term -> factor)
//! - Statement and declaration parsing in `stmt`, expression parsing in `expr`

pub mod expr;
pub mod parser;
pub mod stmt;
