/// Core runtime value types.
///
/// Defines the `Value` enum covering every runtime type, together with type
/// tags, truthiness, display forms, and the equality rules (by value for
/// scalars, by identity for aggregates and functions).
pub mod core;

/// Lexical environments.
///
/// A chain of name→value maps with an optional outer scope, shared by
/// reference so closures observe later mutations of the scope they captured.
pub mod environment;

/// Hash values.
///
/// The key type for hash values (integers, booleans, and strings) and the
/// insertion-ordered pair storage behind `Value::Hash`.
pub mod hash;
