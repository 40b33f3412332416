//! The static type environment.

use std::collections::HashMap;

use minisharp_syntax::ast::Type;

/// One flat name→type map for the whole program; blocks share it.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    types: HashMap<String, Type>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Type> {
        self.types.get(name).copied()
    }

    /// Registers `name`, returning the type it replaced, if any.
    pub fn declare(&mut self, name: impl Into<String>, ty: Type) -> Option<Type> {
        self.types.insert(name.into(), ty)
    }
}
