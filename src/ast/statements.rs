use crate::Span;

use super::{
    expressions::{Expr, Variable},
    types::TypeSpec,
};

#[derive(Debug, Clone)]
pub struct Program {
    pub name: String,
    pub block: Block,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub declarations: Vec<Declaration>,
    pub body: Compound,
}

#[derive(Debug, Clone)]
pub enum Declaration {
    Var(VarDecl),
    Procedure(ProcedureDecl),
}

/// One declared variable. A source line `a, b : integer` is flattened into
/// one `VarDecl` per name by the parser.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: String,
    pub declared_type: TypeSpec,
    pub span: Span,
}

/// A procedure declaration. Procedures are parsed and symbol-checked but the
/// interpreter never executes their bodies; the grammar has no call statement.
#[derive(Debug, Clone)]
pub struct ProcedureDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub block: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub declared_type: TypeSpec,
}

#[derive(Debug, Clone)]
pub struct Compound {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Compound(Compound),
    Assignment(Assignment),
    Empty,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub target: Variable,
    pub value: Expr,
}
