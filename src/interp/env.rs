//! Symbol environment
//!
//! The global environment is a single flat frame. A frame may also point at
//! an enclosing frame through a weak reference; lookups that miss locally
//! continue there while it is alive. The back-reference never keeps the
//! parent alive.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use super::builtins;
use super::error::EvalError;
use super::value::{Builtin, Value};

/// Symbol to value bindings
#[derive(Debug, Default)]
pub struct Environment {
    /// Bindings in definition order
    bindings: IndexMap<String, Value>,
    /// Names that `def` may not rebind
    reserved: HashSet<String>,
    /// Enclosing frame
    parent: Option<Weak<RefCell<Environment>>>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the global environment with every builtin registered
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        for builtin in builtins::BUILTINS {
            env.register_builtin(builtin.name, *builtin);
        }
        tracing::debug!("registered {} builtins", env.reserved.len());
        env
    }

    /// Create a frame nested inside `parent`
    pub fn child_of(parent: &Rc<RefCell<Environment>>) -> Self {
        Self {
            parent: Some(Rc::downgrade(parent)),
            ..Self::default()
        }
    }

    /// Look up a name, returning a copy the caller owns
    pub fn get(&self, name: &str) -> Value {
        if let Some(value) = self.bindings.get(name) {
            return value.clone();
        }
        match self.parent.as_ref().and_then(Weak::upgrade) {
            Some(parent) => parent.borrow().get(name),
            None => Value::Error(EvalError::UnboundSymbol(name.to_string())),
        }
    }

    /// Bind `name` to a copy of `value`, replacing any previous binding
    pub fn put(&mut self, name: &str, value: &Value) {
        match self.bindings.get_mut(name) {
            Some(slot) => *slot = value.clone(),
            None => {
                self.bindings.insert(name.to_string(), value.clone());
            }
        }
    }

    /// Bind a builtin and reserve its name
    pub fn register_builtin(&mut self, name: &str, builtin: Builtin) {
        self.put(name, &Value::Function(builtin));
        self.reserved.insert(name.to_string());
    }

    /// Whether `name` belongs to a builtin, here or in an enclosing frame
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
            || self
                .parent
                .as_ref()
                .and_then(Weak::upgrade)
                .is_some_and(|parent| parent.borrow().is_reserved(name))
    }

    /// Whether `name` is bound in this frame
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Local bindings in definition order
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Local bindings that are not builtins
    pub fn user_bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings()
            .filter(move |(name, _)| !self.reserved.contains(*name))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
