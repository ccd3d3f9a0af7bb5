use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, already checked
/// against the entry's arity.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` means the builtin accepts any number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Exact(usize),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Any => true,
        }
    }
}

/// A host-provided function exposed to programs by name.
///
/// Builtins are plain function pointers plus metadata, so they are `Copy`
/// and compare by name.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name programs use to refer to this builtin.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

impl Builtin {
    /// Invokes the builtin after checking the argument count.
    ///
    /// # Errors
    /// `RuntimeError::WrongArgumentCount` on arity mismatch, otherwise
    /// whatever the builtin itself raises.
    pub fn call(&self, arguments: &[Value]) -> EvalResult<Value> {
        if !self.arity.check(arguments.len()) {
            let Arity::Exact(want) = self.arity else {
                unreachable!("Any arity accepts every argument count");
            };

            return Err(RuntimeError::WrongArgumentCount { got: arguments.len(),
                                                          want });
        }

        (self.func)(arguments)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

static BUILTIN_TABLE: &[Builtin] = &[Builtin { name:  "len",
                                               arity: Arity::Exact(1),
                                               func:  len, },
                                     Builtin { name:  "first",
                                               arity: Arity::Exact(1),
                                               func:  first, },
                                     Builtin { name:  "last",
                                               arity: Arity::Exact(1),
                                               func:  last, },
                                     Builtin { name:  "rest",
                                               arity: Arity::Exact(1),
                                               func:  rest, },
                                     Builtin { name:  "push",
                                               arity: Arity::Exact(2),
                                               func:  push, },
                                     Builtin { name:  "puts",
                                               arity: Arity::Any,
                                               func:  puts, }];

/// Looks up a builtin by name.
///
/// The registry is only consulted after the environment chain, so programs
/// may shadow a builtin with their own binding.
///
/// # Examples
/// ```
/// use capuchin::interpreter::{evaluator::builtin, value::core::Value};
///
/// let len = builtin::lookup("len").unwrap();
/// assert_eq!(len.call(&[Value::from("four")]).unwrap(), Value::Integer(4));
///
/// assert!(builtin::lookup("missing").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied()
}

/// Returns the length of a string (in bytes) or an array (in elements).
fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::BuiltinNotSupported { name: "len",
                                                         got:  other.type_name(), }),
    }
}

/// Returns the first element of an array, or `null` if it is empty.
fn first(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::BuiltinArgument { name:     "first",
                                                     expected: "ARRAY",
                                                     got:      other.type_name(), }),
    }
}

/// Returns the last element of an array, or `null` if it is empty.
fn last(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::BuiltinArgument { name:     "last",
                                                     expected: "ARRAY",
                                                     got:      other.type_name(), }),
    }
}

/// Returns a new array holding every element but the first, or `null` for an
/// empty array.
fn rest(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(elements[1..].to_vec().into())
            }
        },
        other => Err(RuntimeError::BuiltinArgument { name:     "rest",
                                                     expected: "ARRAY",
                                                     got:      other.type_name(), }),
    }
}

/// Returns a new array with the value appended. The input array is not
/// mutated.
fn push(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(args[1].clone());
            Ok(elements.into())
        },
        other => Err(RuntimeError::BuiltinArgument { name:     "push",
                                                     expected: "ARRAY",
                                                     got:      other.type_name(), }),
    }
}

/// Prints each argument's display form on its own line and returns `null`.
fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Value::Null)
}
