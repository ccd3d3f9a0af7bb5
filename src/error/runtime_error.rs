use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error terminates the construct that produced it and bubbles up
/// through every enclosing frame to the caller of the evaluator. The
/// `Display` form of each variant is part of the public contract and is
/// matched verbatim by tests.
pub enum RuntimeError {
    /// Tried to use a name with no binding and no builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// A prefix operator was applied to an unsupported operand type.
    UnknownPrefixOperator {
        /// The operator.
        op:    PrefixOperator,
        /// Type tag of the operand.
        right: &'static str,
    },
    /// An infix operator was applied to operands of the same type that do
    /// not support it.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// An infix operator was applied to operands of differing types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// Tried to call a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type tag of the callee.
        kind: &'static str,
    },
    /// The index operator was applied to a value that supports no indexing.
    IndexNotSupported {
        /// Type tag of the indexed value.
        kind: &'static str,
    },
    /// A hash key expression evaluated to an unhashable value.
    UnusableAsHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
    },
    /// A function or builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many arguments were required.
        want: usize,
    },
    /// A builtin received an argument of the wrong type.
    BuiltinArgument {
        /// Name of the builtin.
        name:     &'static str,
        /// Type tag the builtin requires.
        expected: &'static str,
        /// Type tag of the argument that was supplied.
        got:      &'static str,
    },
    /// A polymorphic builtin received an argument type it has no case for.
    BuiltinNotSupported {
        /// Name of the builtin.
        name: &'static str,
        /// Type tag of the argument that was supplied.
        got:  &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::UnknownPrefixOperator { op, right } => {
                write!(f, "unknown operator: {op}{right}")
            },
            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::UnusableAsHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::BuiltinArgument { name, expected, got } => {
                write!(f, "argument to `{name}` must be {expected}, got {got}")
            },
            Self::BuiltinNotSupported { name, got } => {
                write!(f, "argument to `{name}` not supported, got {got}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
