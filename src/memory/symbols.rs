//! Symbol table
//!
//! An ordered collection of [`Variable`] records with a name index. The engine
//! owns one table for its whole lifetime and keeps it across runs; the grammar
//! never reads or writes it, so callers must not assume any entry exists.

use super::value::{Value, Variable};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    vars: Vec<Variable>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, or replace the value of an existing one with the same
    /// name. Insertion order is kept.
    pub fn insert(&mut self, name: &str, value: Value) {
        if let Some(&idx) = self.index.get(name) {
            self.vars[idx].value = value;
        } else {
            self.index.insert(name.to_string(), self.vars.len());
            self.vars.push(Variable::new(name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&idx| &self.vars[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        match self.index.get(name) {
            Some(&idx) => self.vars.get_mut(idx),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.index.clear();
    }
}
