use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope mapping names to values.
///
/// Environments form a chain: lookups fall through to the `outer` scope when
/// the local map has no entry, while writes always land in the local map.
/// Scopes are shared by reference (`Rc<RefCell<_>>`), so every closure that
/// captured a scope observes bindings added to it later; this is what makes
/// recursive `let f = fn(...) { ... f(...) ... }` definitions work.
///
/// A function value holds its defining environment and that environment can
/// hold the function back, so dropping a scope with live cyclic closures
/// relies on the host dropping the whole chain.
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a fresh root environment with no outer scope.
    #[must_use]
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None, }))
    }

    /// Creates an environment nested inside `outer`.
    ///
    /// Function application uses this: the new scope's outer reference is
    /// the function's captured environment, not the caller's.
    #[must_use]
    pub fn new_enclosed(outer: &Rc<RefCell<Self>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up a name, walking outward through enclosing scopes.
    ///
    /// # Examples
    /// ```
    /// use capuchin::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let root = Environment::new();
    /// root.borrow_mut().set("x".to_string(), Value::Integer(1));
    ///
    /// let inner = Environment::new_enclosed(&root);
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    ///
    /// // Writes stay local: the inner scope shadows, the outer keeps its
    /// // binding.
    /// inner.borrow_mut().set("x".to_string(), Value::Integer(2));
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
    /// assert_eq!(root.borrow().get("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this scope, shadowing any outer binding of the same
    /// name.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
