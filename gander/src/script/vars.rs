//! Script variable table.
//!
//! One table exists per interpretation run and is shared across
//! `add_subdirectory` recursion — sub-directories see and can alter parent
//! variables.  This global scoping is intentional and matches the dialect's
//! non-isolating behavior for the modeled subset.

use std::collections::HashMap;

/// Key/value variable store.
#[derive(Debug, Default)]
pub struct VarTable {
    vars: HashMap<String, String>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Append to a variable with a single separating space.
    ///
    /// Behaves as [`set`](Self::set) when the variable is absent or empty.
    pub fn append(&mut self, name: &str, value: &str) {
        match self.vars.get_mut(name) {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(value);
            }
            _ => self.set(name, value),
        }
    }

    /// Get the value of a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns `true` if the variable is set.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
