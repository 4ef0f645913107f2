//! Semantic analysis over the AST.
//!
//! Walks the tree with a scoped symbol table, checking declarations before
//! use, duplicate declarations within a scope, and operand type agreement
//! for binary operations. Each scope's rendering is captured into
//! `scope_log` at the moment the scope closes.

use crate::{
    ast::{
        expressions::{BinaryExpr, Expr, NumberLiteral, UnaryExpr, Variable},
        statements::{Assignment, Block, Compound, Declaration, ProcedureDecl, Program, Stmt, VarDecl},
        types::TypeSpec,
    },
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::symbols::{ScopedSymbolTable, Symbol};

pub struct SemanticAnalyzer {
    table: ScopedSymbolTable,
    /// Rendering of each scope, appended when the scope is closed.
    pub scope_log: Vec<String>,
}

impl SemanticAnalyzer {
    fn new() -> Self {
        SemanticAnalyzer {
            table: ScopedSymbolTable::new(),
            scope_log: vec![],
        }
    }

    fn close_scope(&mut self) {
        let scope = self.table.pop_scope();
        self.scope_log.push(scope.to_string());
    }

    fn visit_program(&mut self, program: &Program) -> Result<(), Error> {
        self.table.push_scope(String::from("global"));
        self.visit_block(&program.block)?;
        self.close_scope();
        Ok(())
    }

    fn visit_block(&mut self, block: &Block) -> Result<(), Error> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Var(decl) => self.visit_var_decl(decl)?,
                Declaration::Procedure(decl) => self.visit_procedure_decl(decl)?,
            }
        }
        self.visit_compound(&block.body)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> Result<(), Error> {
        self.resolve_type(decl.declared_type, &decl.span)?;

        if self.table.lookup(&decl.name, true).is_some() {
            return Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    variable: decl.name.clone(),
                },
                decl.span.start.clone(),
            ));
        }

        self.table.define(
            decl.name.clone(),
            Symbol::Variable {
                name: decl.name.clone(),
                declared_type: decl.declared_type,
            },
        );
        Ok(())
    }

    fn visit_procedure_decl(&mut self, decl: &ProcedureDecl) -> Result<(), Error> {
        self.table.define(
            decl.name.clone(),
            Symbol::Procedure {
                name: decl.name.clone(),
                params: vec![],
            },
        );

        self.table.push_scope(decl.name.clone());

        for param in &decl.params {
            self.resolve_type(param.declared_type, &decl.span)?;
            self.table.define(
                param.name.clone(),
                Symbol::Variable {
                    name: param.name.clone(),
                    declared_type: param.declared_type,
                },
            );

            // The procedure symbol lives one scope up; its parameter list is
            // appended to as each formal parameter is processed.
            if let Some(enclosing) = self.table.enclosing_scope_mut() {
                if let Some(Symbol::Procedure { params, .. }) = enclosing.lookup_mut(&decl.name) {
                    params.push((param.name.clone(), param.declared_type));
                }
            }
        }

        self.visit_block(&decl.block)?;
        self.close_scope();
        Ok(())
    }

    fn visit_compound(&mut self, compound: &Compound) -> Result<(), Error> {
        for statement in &compound.statements {
            self.visit_statement(statement)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self, statement: &Stmt) -> Result<(), Error> {
        match statement {
            Stmt::Compound(compound) => self.visit_compound(compound),
            Stmt::Assignment(assignment) => self.visit_assignment(assignment),
            Stmt::Empty => Ok(()),
        }
    }

    fn visit_assignment(&mut self, assignment: &Assignment) -> Result<(), Error> {
        // The value is resolved first, then the target. The target's declared
        // type is not checked against the value type.
        self.visit_expr(&assignment.value)?;
        self.visit_variable(&assignment.target)?;
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<TypeSpec, Error> {
        match expr {
            Expr::Number(NumberLiteral::Integer(_)) => Ok(TypeSpec::Integer),
            Expr::Number(NumberLiteral::Real(_)) => Ok(TypeSpec::Real),
            Expr::Unary(UnaryExpr { operand, .. }) => self.visit_expr(operand),
            Expr::Variable(variable) => self.visit_variable(variable),
            Expr::Binary(binary) => self.visit_binary(binary),
        }
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> Result<TypeSpec, Error> {
        let left = self.visit_expr(&binary.left)?;
        let right = self.visit_expr(&binary.right)?;

        if left != right {
            return Err(Error::new(
                ErrorImpl::TypeMismatch {
                    left: left.name().to_string(),
                    right: right.name().to_string(),
                },
                binary.span.start.clone(),
            ));
        }
        Ok(left)
    }

    fn visit_variable(&mut self, variable: &Variable) -> Result<TypeSpec, Error> {
        match self.table.lookup(&variable.name, false) {
            Some(Symbol::Variable { declared_type, .. }) => Ok(*declared_type),
            Some(_) => Err(Error::new(
                ErrorImpl::NotAVariable {
                    name: variable.name.clone(),
                },
                variable.span.start.clone(),
            )),
            None => Err(Error::new(
                ErrorImpl::UndeclaredVariable {
                    variable: variable.name.clone(),
                },
                variable.span.start.clone(),
            )),
        }
    }

    /// Resolves a declared type name through the symbol table. The builtins
    /// are seeded into every scope, so this only fails if the table is used
    /// without a scope having been opened.
    fn resolve_type(&self, type_spec: TypeSpec, span: &Span) -> Result<(), Error> {
        match self.table.lookup(type_spec.name(), false) {
            Some(Symbol::Builtin(_)) => Ok(()),
            _ => Err(Error::new(
                ErrorImpl::UnknownType {
                    type_name: type_spec.name().to_string(),
                },
                span.start.clone(),
            )),
        }
    }

}

/// Analyzes a program, returning the analyzer (for its scope log) together
/// with the first error found, if any.
pub fn analyze(program: &Program) -> (SemanticAnalyzer, Option<Error>) {
    let mut analyzer = SemanticAnalyzer::new();

    match analyzer.visit_program(program) {
        Ok(()) => (analyzer, None),
        Err(error) => (analyzer, Some(error)),
    }
}
