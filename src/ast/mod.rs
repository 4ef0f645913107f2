//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! The node set is a closed group of enums and structs; both the semantic
//! analyzer and the interpreter traverse it with exhaustive matches.
//!
//! Submodules:
//! - statements: Program, Block, declarations and statement nodes
//! - expressions: Expression nodes and operator enums
//! - types: Type specifier for declarations

pub mod expressions;
pub mod statements;
pub mod types;
