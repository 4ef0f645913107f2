use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The pipeline stage an error belongs to. Every error is fatal to its stage;
/// nothing is retried and no partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Parse,
    Semantic,
    Runtime,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lexical => write!(f, "lexical"),
            Stage::Parse => write!(f, "parse"),
            Stage::Semantic => write!(f, "semantic"),
            Stage::Runtime => write!(f, "runtime"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::NotAVariable { .. } => "NotAVariable",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ArithmeticOverflow => "ArithmeticOverflow",
        }
    }

    pub fn stage(&self) -> Stage {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::InvalidIdentifier { .. }
            | ErrorImpl::UnterminatedComment => Stage::Lexical,
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::NumberParseError { .. } => Stage::Parse,
            ErrorImpl::DuplicateDeclaration { .. }
            | ErrorImpl::UndeclaredVariable { .. }
            | ErrorImpl::UnknownType { .. }
            | ErrorImpl::NotAVariable { .. }
            | ErrorImpl::TypeMismatch { .. } => Stage::Semantic,
            ErrorImpl::UndefinedVariable { .. }
            | ErrorImpl::DivisionByZero
            | ErrorImpl::ArithmeticOverflow => Stage::Runtime,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidIdentifier { identifier } => ErrorTip::Suggestion(format!(
                "Invalid identifier `{}`, a leading underscore must be followed by a letter or digit",
                identifier
            )),
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Comment opened with `{` is never closed, did you forget a `}`?",
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::DuplicateDeclaration { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared in this scope",
                variable
            )),
            ErrorImpl::UndeclaredVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UnknownType { type_name } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_name))
            }
            ErrorImpl::NotAVariable { name } => {
                ErrorTip::Suggestion(format!("`{}` does not name a variable", name))
            }
            ErrorImpl::TypeMismatch { left, right } => ErrorTip::Suggestion(format!(
                "Operand types `{}` and `{}` do not match",
                left, right
            )),
            ErrorImpl::UndefinedVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` was never assigned a value",
                variable
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::ArithmeticOverflow => ErrorTip::Suggestion(String::from(
                "Integer arithmetic exceeded the 64-bit range",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("invalid identifier: {identifier:?}")]
    InvalidIdentifier { identifier: String },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unexpected token: expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} already declared in this scope")]
    DuplicateDeclaration { variable: String },
    #[error("variable {variable:?} not declared")]
    UndeclaredVariable { variable: String },
    #[error("unknown type {type_name:?}")]
    UnknownType { type_name: String },
    #[error("{name:?} does not name a variable")]
    NotAVariable { name: String },
    #[error("operand types do not match: {left:?} and {right:?}")]
    TypeMismatch { left: String, right: String },
    #[error("variable {variable:?} is not defined")]
    UndefinedVariable { variable: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    ArithmeticOverflow,
}
