//! Statement and declaration parsing.
//!
//! Covers the nonterminals from `program` down to `assignment_statement`;
//! expression nonterminals live in `expr`.

use crate::{
    ast::{
        statements::{
            Assignment, Block, Compound, Declaration, Param, ProcedureDecl, Program, Stmt, VarDecl,
        },
        types::TypeSpec,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_variable},
    parser::Parser,
};

/// program := 'program' variable ';' block '.'
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    parser.expect(TokenKind::Program)?;
    let name = parse_variable(parser)?.name;
    parser.expect(TokenKind::Semicolon)?;

    let block = parse_block(parser)?;
    parser.expect(TokenKind::Dot)?;

    Ok(Program { name, block })
}

/// block := declarations compound_statement
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let declarations = parse_declarations(parser)?;
    let body = parse_compound_statement(parser)?;

    Ok(Block { declarations, body })
}

/// declarations := ('var' (var_declaration ';')+ | procedure_declaration)*
///
/// `var` sections and procedure declarations may interleave any number of
/// times before the compound statement begins.
pub fn parse_declarations(parser: &mut Parser) -> Result<Vec<Declaration>, Error> {
    let mut declarations = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::Var => {
                parser.advance();
                declarations.extend(parse_var_declaration(parser)?.into_iter().map(Declaration::Var));
                parser.expect(TokenKind::Semicolon)?;

                while parser.current_token_kind() == TokenKind::Identifier {
                    declarations
                        .extend(parse_var_declaration(parser)?.into_iter().map(Declaration::Var));
                    parser.expect(TokenKind::Semicolon)?;
                }
            }
            TokenKind::Procedure => {
                declarations.push(Declaration::Procedure(parse_procedure_declaration(parser)?));
            }
            _ => break,
        }
    }

    Ok(declarations)
}

/// var_declaration := ID (',' ID)* ':' type_spec
///
/// Returns one `VarDecl` per declared name, each carrying its own span.
pub fn parse_var_declaration(parser: &mut Parser) -> Result<Vec<VarDecl>, Error> {
    let mut names = vec![parser.expect(TokenKind::Identifier)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        names.push(parser.expect(TokenKind::Identifier)?);
    }

    parser.expect(TokenKind::Colon)?;
    let declared_type = parse_type_spec(parser)?;

    Ok(names
        .into_iter()
        .map(|token| VarDecl {
            name: token.value,
            declared_type,
            span: token.span,
        })
        .collect())
}

/// type_spec := 'integer' | 'real'
pub fn parse_type_spec(parser: &mut Parser) -> Result<TypeSpec, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            parser.advance();
            Ok(TypeSpec::Integer)
        }
        TokenKind::Real => {
            parser.advance();
            Ok(TypeSpec::Real)
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a type name"),
                found: parser.current_token().value.clone(),
            },
            parser.current_token().span.start.clone(),
        )),
    }
}

/// procedure_declaration := 'procedure' ID ('(' formal_parameter_list ')')? ';' block ';'
pub fn parse_procedure_declaration(parser: &mut Parser) -> Result<ProcedureDecl, Error> {
    parser.expect(TokenKind::Procedure)?;
    let name_token = parser.expect(TokenKind::Identifier)?;

    let params = if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();
        let params = parse_formal_parameter_list(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        params
    } else {
        vec![]
    };

    parser.expect(TokenKind::Semicolon)?;
    let block = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(ProcedureDecl {
        name: name_token.value,
        params,
        block,
        span: name_token.span,
    })
}

/// formal_parameter_list := formal_parameters (';' formal_parameters)*
pub fn parse_formal_parameter_list(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let mut params = parse_formal_parameters(parser)?;

    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        params.extend(parse_formal_parameters(parser)?);
    }

    Ok(params)
}

/// formal_parameters := ID (',' ID)* ':' type_spec
fn parse_formal_parameters(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let mut names = vec![parser.expect(TokenKind::Identifier)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        names.push(parser.expect(TokenKind::Identifier)?);
    }

    parser.expect(TokenKind::Colon)?;
    let declared_type = parse_type_spec(parser)?;

    Ok(names
        .into_iter()
        .map(|token| Param {
            name: token.value,
            declared_type,
        })
        .collect())
}

/// compound_statement := 'begin' statement_list 'end'
pub fn parse_compound_statement(parser: &mut Parser) -> Result<Compound, Error> {
    parser.expect(TokenKind::Begin)?;
    let statements = parse_statement_list(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(Compound { statements })
}

/// statement_list := statement (';' statement)*
fn parse_statement_list(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = vec![parse_statement(parser)?];

    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        statements.push(parse_statement(parser)?);
    }

    Ok(statements)
}

/// statement := compound_statement | assignment_statement | ε
fn parse_statement(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Begin => Ok(Stmt::Compound(parse_compound_statement(parser)?)),
        TokenKind::Identifier => Ok(Stmt::Assignment(parse_assignment_statement(parser)?)),
        _ => Ok(Stmt::Empty),
    }
}

/// assignment_statement := variable ':=' expr
fn parse_assignment_statement(parser: &mut Parser) -> Result<Assignment, Error> {
    let target = parse_variable(parser)?;
    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;

    Ok(Assignment { target, value })
}
