use std::{collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// A hashable key inside a hash value.
///
/// Only integers, booleans, and strings can be keys. The derived `Hash` and
/// `Eq` impls give the one law keys must obey: two values that compare equal
/// produce equal keys, and distinct values produce distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Bool(bool),
    /// A string key.
    Str(Rc<str>),
}

impl TryFrom<&Value> for HashKey {
    type Error = RuntimeError;

    /// Converts a runtime value into a hash key.
    ///
    /// # Errors
    /// `RuntimeError::UnusableAsHashKey` for any value that is not an
    /// integer, boolean, or string.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(Self::Integer(*n)),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Str(s) => Ok(Self::Str(Rc::clone(s))),
            other => Err(RuntimeError::UnusableAsHashKey { kind: other.type_name() }),
        }
    }
}

impl std::fmt::Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Insertion-ordered storage behind a hash value.
///
/// Lookups go through a key→slot index; iteration and display walk the pair
/// list in the order keys were first inserted. Re-inserting an existing key
/// replaces its value but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct HashEntries {
    index: HashMap<HashKey, usize>,
    pairs: Vec<(HashKey, Value)>,
}

impl HashEntries {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair, replacing the value in place if the key is already
    /// present.
    ///
    /// # Examples
    /// ```
    /// use capuchin::interpreter::value::{
    ///     core::Value,
    ///     hash::{HashEntries, HashKey},
    /// };
    ///
    /// let mut entries = HashEntries::new();
    /// entries.insert(HashKey::Integer(1), Value::from("one"));
    /// entries.insert(HashKey::Integer(1), Value::from("uno"));
    ///
    /// assert_eq!(entries.len(), 1);
    /// assert_eq!(entries.get(&HashKey::Integer(1)), Some(&Value::from("uno")));
    /// ```
    pub fn insert(&mut self, key: HashKey, value: Value) {
        if let Some(&slot) = self.index.get(&key) {
            self.pairs[slot].1 = value;
        } else {
            self.index.insert(key.clone(), self.pairs.len());
            self.pairs.push((key, value));
        }
    }

    /// Looks up the value stored under a key.
    #[must_use]
    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.index.get(key).map(|&slot| &self.pairs[slot].1)
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the hash holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(HashKey, Value)> {
        self.pairs.iter()
    }
}
