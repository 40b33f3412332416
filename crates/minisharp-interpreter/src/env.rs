//! Runtime bindings for the Minisharp interpreter.

use std::collections::HashMap;

use crate::value::Value;

/// One flat scope for the whole program. Blocks do not nest environments,
/// so a name bound inside a loop body stays visible after it.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, Value>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Binds or rebinds `name`.
    pub fn bind(&mut self, name: impl Into<String>, val: Value) {
        self.vars.insert(name.into(), val);
    }
}
