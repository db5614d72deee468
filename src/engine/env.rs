use crate::engine::object::Object;
use std::collections::HashMap;
use tracing::{debug, trace};

/// `let` bindings visible to the evaluator. Builtins are not stored here; they
/// are resolved from the registry when a name is not bound.
#[derive(Debug, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Object>,
}

impl Environment {
    pub fn new() -> Self {
        debug!("Creating new empty environment");
        Self::default()
    }

    /// Defines a new variable or replaces an existing binding.
    pub fn define(&mut self, name: String, value: Object) {
        trace!(name = %name, value = ?value, "Defining variable");
        self.bindings.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        trace!(name = %name, "Attempting to get variable from environment");
        let value = self.bindings.get(name).cloned();
        if value.is_none() {
            debug!(name = %name, "Variable not found in environment");
        }
        value
    }
}
