//! Semantic analysis: scoped symbol tables and the declaration checker.
//!
//! - `symbols` holds the symbol kinds, individual scopes and the scope stack
//! - `analyzer` walks the AST, enforcing declaration-before-use, per-scope
//!   uniqueness and operand type agreement

pub mod analyzer;
pub mod symbols;
