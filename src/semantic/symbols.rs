//! Symbols and the scoped symbol table.
//!
//! Each scope carries its own copy of the builtin type symbols, so lookups
//! for `integer` and `real` always succeed without walking the chain.

use std::collections::HashMap;
use std::fmt::Display;

use crate::ast::types::TypeSpec;

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// A builtin type name (`integer`, `real`).
    Builtin(TypeSpec),
    /// A declared variable with its resolved type.
    Variable { name: String, declared_type: TypeSpec },
    /// A declared procedure and its formal parameters.
    Procedure {
        name: String,
        params: Vec<(String, TypeSpec)>,
    },
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Builtin(type_spec) => write!(f, "<{}>", type_spec.name()),
            Symbol::Variable {
                name,
                declared_type,
            } => write!(f, "<{}:{}>", name, declared_type.name()),
            Symbol::Procedure { name, params } => {
                write!(f, "<procedure {}(", name)?;
                for (i, (param_name, param_type)) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}:{}", param_name, param_type.name())?;
                }
                write!(f, ")>")
            }
        }
    }
}

/// A single lexical scope.
///
/// Insertion order is tracked separately so the rendering is stable.
#[derive(Debug, Clone)]
pub struct Scope {
    pub name: String,
    pub level: usize,
    pub enclosing_name: Option<String>,
    symbols: HashMap<String, Symbol>,
    order: Vec<String>,
}

impl Scope {
    pub fn new(name: String, level: usize, enclosing_name: Option<String>) -> Self {
        let mut scope = Scope {
            name,
            level,
            enclosing_name,
            symbols: HashMap::new(),
            order: vec![],
        };

        scope.define(String::from("integer"), Symbol::Builtin(TypeSpec::Integer));
        scope.define(String::from("real"), Symbol::Builtin(TypeSpec::Real));
        scope
    }

    /// Inserts a symbol, overwriting any previous binding for the name.
    /// Duplicate detection happens in the analyzer, not here.
    pub fn define(&mut self, name: String, symbol: Symbol) {
        if !self.symbols.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.symbols.insert(name, symbol);
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.get_mut(name)
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SCOPE {} (level {})", self.name, self.level)?;
        writeln!(
            f,
            "enclosing scope: {}",
            self.enclosing_name.as_deref().unwrap_or("<none>")
        )?;
        for name in &self.order {
            writeln!(f, "  {:<12} {}", name, self.symbols[name])?;
        }
        Ok(())
    }
}

/// A stack of scopes, innermost last.
#[derive(Debug, Default)]
pub struct ScopedSymbolTable {
    scopes: Vec<Scope>,
}

impl ScopedSymbolTable {
    pub fn new() -> Self {
        ScopedSymbolTable { scopes: vec![] }
    }

    pub fn push_scope(&mut self, name: String) {
        let level = self.scopes.len() + 1;
        let enclosing_name = self.scopes.last().map(|scope| scope.name.clone());
        self.scopes.push(Scope::new(name, level, enclosing_name));
    }

    pub fn pop_scope(&mut self) -> Scope {
        self.scopes.pop().unwrap()
    }

    pub fn define(&mut self, name: String, symbol: Symbol) {
        self.scopes.last_mut().unwrap().define(name, symbol);
    }

    /// Resolves a name, walking from the innermost scope outwards unless
    /// `current_scope_only` is set.
    pub fn lookup(&self, name: &str, current_scope_only: bool) -> Option<&Symbol> {
        if current_scope_only {
            return self.scopes.last().and_then(|scope| scope.lookup(name));
        }

        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.lookup(name) {
                return Some(symbol);
            }
        }
        None
    }

    pub fn current_scope(&self) -> &Scope {
        self.scopes.last().unwrap()
    }

    /// The scope directly enclosing the current one. Used to append formal
    /// parameters onto a procedure symbol after its scope has been opened.
    pub fn enclosing_scope_mut(&mut self) -> Option<&mut Scope> {
        let len = self.scopes.len();
        if len < 2 {
            return None;
        }
        self.scopes.get_mut(len - 2)
    }
}
