//! Tree-walking interpreter.
//!
//! - `value` defines runtime values and their arithmetic
//! - `interpreter` walks the AST and executes the program body against a
//!   flat variable store

pub mod interpreter;
pub mod value;
