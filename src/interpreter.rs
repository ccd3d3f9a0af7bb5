/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, evaluating expressions and
/// statements against a chain of environments. It applies closures, threads
/// `return` values up through nested blocks, and surfaces runtime errors.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages environments, closures, and control flow.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles integer and string literals, identifiers, and operators.
/// - Emits `ILLEGAL` tokens for unrecognized input instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. Expressions are parsed with operator-precedence (Pratt)
/// dispatch; errors are accumulated so one pass reports every problem found.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Drives precedence and associativity for all operators.
/// - Collects parse errors without aborting the pass.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// integers, booleans, strings, arrays, hashes, functions, and builtins. It
/// also provides the environment chain that gives the language its lexical
/// scoping, and the hash-key type used by hash values.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements display forms, type tags, truthiness, and equality.
/// - Provides shared, lexically nested environments.
pub mod value;
