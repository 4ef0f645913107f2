//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts Pascal source
//! code into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of reserved words, identifiers, literals, and operators
//! - Case normalization (reserved words upper, identifiers lower)
//! - Token position tracking for error reporting
//! - Nested `{ }` comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
