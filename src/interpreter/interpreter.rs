//! Tree-walking evaluator.
//!
//! Executes the program body against a single flat store keyed by variable
//! name. Procedure declarations are skipped entirely; only the main compound
//! statement runs. The store is unscoped, so nested-procedure declarations
//! that shadow an outer name would collide at runtime if their bodies ever
//! executed.

use std::collections::HashMap;

use crate::{
    ast::{
        expressions::{BinaryExpr, BinaryOperator, Expr, NumberLiteral, UnaryOperator},
        statements::{Assignment, Compound, Program, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::value::Value;

#[derive(Default)]
pub struct Interpreter {
    memory: HashMap<String, Value>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            memory: HashMap::new(),
        }
    }

    /// Executes the program body. Declarations are not visited; only the
    /// main compound statement has runtime effect.
    pub fn run(&mut self, program: &Program) -> Result<(), Error> {
        self.execute_compound(&program.block.body)
    }

    /// The store after execution, keyed by variable name.
    pub fn memory(&self) -> &HashMap<String, Value> {
        &self.memory
    }

    fn execute_compound(&mut self, compound: &Compound) -> Result<(), Error> {
        for statement in &compound.statements {
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    fn execute_statement(&mut self, statement: &Stmt) -> Result<(), Error> {
        match statement {
            Stmt::Compound(compound) => self.execute_compound(compound),
            Stmt::Assignment(assignment) => self.execute_assignment(assignment),
            Stmt::Empty => Ok(()),
        }
    }

    fn execute_assignment(&mut self, assignment: &Assignment) -> Result<(), Error> {
        let value = self.evaluate(&assignment.value)?;
        self.memory.insert(assignment.target.name.clone(), value);
        Ok(())
    }

    fn evaluate(&self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::Number(NumberLiteral::Integer(value)) => Ok(Value::Integer(*value)),
            Expr::Number(NumberLiteral::Real(value)) => Ok(Value::Real(*value)),
            Expr::Unary(unary) => {
                let value = self.evaluate(&unary.operand)?;
                match unary.operator {
                    UnaryOperator::Plus => Ok(value),
                    UnaryOperator::Minus => value.negate().ok_or_else(|| {
                        Error::new(ErrorImpl::ArithmeticOverflow, unary.span.start.clone())
                    }),
                }
            }
            Expr::Variable(variable) => {
                self.memory.get(&variable.name).copied().ok_or_else(|| {
                    Error::new(
                        ErrorImpl::UndefinedVariable {
                            variable: variable.name.clone(),
                        },
                        variable.span.start.clone(),
                    )
                })
            }
            Expr::Binary(binary) => self.evaluate_binary(binary),
        }
    }

    fn evaluate_binary(&self, binary: &BinaryExpr) -> Result<Value, Error> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        let result = match binary.operator {
            BinaryOperator::Add => left.add(right),
            BinaryOperator::Subtract => left.subtract(right),
            BinaryOperator::Multiply => left.multiply(right),
            BinaryOperator::IntegerDiv => {
                self.check_divisor(right, binary)?;
                left.floor_div(right)
            }
            BinaryOperator::RealDiv => {
                self.check_divisor(right, binary)?;
                Some(left.real_div(right))
            }
        };

        result.ok_or_else(|| {
            Error::new(ErrorImpl::ArithmeticOverflow, binary.span.start.clone())
        })
    }

    fn check_divisor(&self, divisor: Value, binary: &BinaryExpr) -> Result<(), Error> {
        if divisor.is_zero() {
            return Err(Error::new(
                ErrorImpl::DivisionByZero,
                binary.span.start.clone(),
            ));
        }
        Ok(())
    }
}

/// Runs a program and returns its final store.
pub fn interpret(program: &Program) -> Result<HashMap<String, Value>, Error> {
    let mut interpreter = Interpreter::new();
    interpreter.run(program)?;
    Ok(interpreter.memory)
}
