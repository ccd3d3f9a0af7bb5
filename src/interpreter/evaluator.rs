/// Builtin functions.
///
/// The static registry of host-provided functions (`len`, `first`, `last`,
/// `rest`, `push`, `puts`) with per-entry arity checking.
pub mod builtin;

/// Core evaluation logic.
///
/// Contains the main evaluation engine: program, block, statement, and
/// expression dispatch, plus return-value and error propagation.
pub mod core;

/// Function application.
///
/// Evaluates call expressions: closure application with a freshly enclosed
/// environment, and builtin dispatch.
pub mod function;

/// Index operator evaluation.
///
/// Implements `array[integer]` and `hash[key]` access.
pub mod index;

/// Infix operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: integer
/// arithmetic and comparison, equality, and string concatenation.
pub mod infix;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod prefix;
