#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The parser collects these into a list rather than aborting, so a single
/// pass can report several problems. The `Display` form of each variant is
/// part of the public contract and is matched verbatim by tests.
pub enum ParseError {
    /// The token after the current one was not the expected kind.
    UnexpectedToken {
        /// Display form of the expected token kind.
        expected: String,
        /// Display form of the token that was found.
        got:      String,
    },
    /// The current token cannot begin an expression.
    NoPrefixFn {
        /// Display form of the offending token kind.
        token: String,
    },
    /// An integer literal did not fit into a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be {expected}, got {got} instead")
            },
            Self::NoPrefixFn { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse \"{literal}\" as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
