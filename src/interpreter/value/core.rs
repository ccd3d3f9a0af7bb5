use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, LiteralValue},
    interpreter::{
        evaluator::builtin::Builtin,
        value::{environment::Environment, hash::HashEntries},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditions. Aggregate payloads (strings,
/// arrays, hashes, functions) sit behind `Rc`, so cloning a value never
/// copies its contents and identity comparison is meaningful for them.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// NOT (`!`). Any value may be used as a condition; only `false` and
    /// `null` are falsy.
    Bool(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value: missing `else` branches, out-of-range array
    /// indexing, absent hash keys, and `let` statements all produce it.
    Null,
    /// Transient wrapper carrying a `return` upward. Blocks hand it through
    /// untouched; the enclosing function or program unwraps it. It is never
    /// stored in an environment, array, or hash.
    Return(Box<Self>),
    /// A function value: parameters, body, and the environment captured at
    /// the point the literal was evaluated (the closure).
    Function(Rc<Function>),
    /// A host-provided function.
    Builtin(Builtin),
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A hash of key/value pairs in insertion order.
    Hash(Rc<HashEntries>),
}

/// A user-defined function together with its captured environment.
pub struct Function {
    /// The parameter names, bound left to right at each call.
    pub parameters: Vec<String>,
    /// The body evaluated on application.
    pub body:       Block,
    /// The scope the function literal was evaluated in.
    pub env:        Rc<RefCell<Environment>>,
}

// The captured environment can reach this function again, so Debug prints
// the function shape only.
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl Value {
    /// Returns the type tag used in error messages, e.g. `"INTEGER"`.
    ///
    /// # Examples
    /// ```
    /// use capuchin::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(5).type_name(), "INTEGER");
    /// assert_eq!(Value::from("text").type_name(), "STRING");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    /// Tests the value as a condition: everything is truthy except `false`
    /// and `null`. Zero and the empty string are truthy.
    ///
    /// # Examples
    /// ```
    /// use capuchin::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Returns `true` if the value is [`Null`](Self::Null).
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Scalars compare by contents; arrays, hashes, and functions compare by
/// identity (the language defines no structural equality for them).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Return(a), Self::Return(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(entries) => {
                write!(f, "{{")?;

                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                write!(f, "}}")
            },
        }
    }
}
