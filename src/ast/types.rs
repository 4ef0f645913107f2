use std::fmt::Display;

/// The two builtin types of the language. Declarations name one of these;
/// expression typing resolves to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpec {
    Integer,
    Real,
}

impl TypeSpec {
    /// The lowercase spelling used as the builtin symbol's name.
    pub fn name(&self) -> &'static str {
        match self {
            TypeSpec::Integer => "integer",
            TypeSpec::Real => "real",
        }
    }
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeSpec::Integer => write!(f, "INTEGER"),
            TypeSpec::Real => write!(f, "REAL"),
        }
    }
}
