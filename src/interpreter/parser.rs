/// Core parsing machinery.
///
/// Contains the `Parser` itself, the operator precedence table, the
/// expression-parsing loop, and the shared token-window helpers.
pub mod core;

/// Expression parsing.
///
/// Implements the prefix and infix productions: literals, identifiers,
/// operators, grouped expressions, conditionals, function literals, calls,
/// array and hash literals, and indexing.
pub mod expression;

/// Statement parsing.
///
/// Handles `let` statements, `return` statements, expression statements, and
/// brace-delimited blocks.
pub mod statement;
