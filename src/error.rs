/// Parsing errors.
///
/// Defines all error types that can occur during parsing of source code.
/// Parse errors include unexpected tokens, tokens with no prefix parse rule,
/// and invalid integer literals. The parser accumulates these instead of
/// stopping at the first one.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, operator type mismatches, bad hash
/// keys, argument count mismatches, and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
