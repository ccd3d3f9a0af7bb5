//! # capuchin
//!
//! capuchin is a small, dynamically-typed, expression-oriented programming
//! language. This crate is its tree-walking interpreter: a lexer, a
//! Pratt-style operator-precedence parser, and a recursive evaluator with
//! first-class functions, closures, integers, booleans, strings, arrays,
//! hashes, and a handful of builtin functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, environment::Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression` and `Statement` enums and related
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Prints every node in a canonical, fully parenthesized surface form.
/// - Keeps the tree read-only for the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code. It standardizes error reporting: every variant's display
/// form is a fixed, documented string that tests match verbatim.
///
/// # Responsibilities
/// - Defines error enums for both failure surfaces (parser, evaluator).
/// - Keeps the exact diagnostic strings in one place.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Creates a token stream over source text.
///
/// The returned [`Lexer`] yields every token up to and including the final
/// `EOF` when used as an iterator; [`Lexer::next_token`] keeps yielding
/// `EOF` past the end for callers that prefer a pull interface.
///
/// # Examples
/// ```
/// use capuchin::{interpreter::lexer::Token, lex};
///
/// let tokens: Vec<Token> = lex("1 + 2").collect();
/// assert_eq!(tokens,
///            vec![Token::Integer("1".to_string()),
///                 Token::Plus,
///                 Token::Integer("2".to_string()),
///                 Token::Eof]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Parses source text into a program plus accumulated parse errors.
///
/// Parsing never aborts early; the error list is empty exactly when the
/// source parsed cleanly, and otherwise holds one entry per problem found.
///
/// # Examples
/// ```
/// use capuchin::parse;
///
/// let (program, errors) = parse("let x = 5;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = 5;");
/// ```
#[must_use]
pub fn parse(source: &str) -> (ast::Program, Vec<ParseError>) {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Parses and evaluates source text against the given environment.
///
/// This is the one-call surface drivers use: lex, parse, and evaluate, with
/// the first parse error (if any) or the runtime error reported through the
/// standard error trait. Bindings created by the source stay in `env`, so
/// repeated calls against the same environment behave like an interactive
/// session.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use capuchin::{interpret, interpreter::value::environment::Environment};
///
/// let env = Environment::new();
/// let value = interpret("let double = fn(x) { x * 2 }; double(21);", &env).unwrap();
/// assert_eq!(value.to_string(), "42");
///
/// // 'y' is not defined, so evaluation reports a runtime error.
/// let result = interpret("y + 1", &env);
/// assert!(result.is_err());
/// ```
pub fn interpret(source: &str,
                 env: &Rc<RefCell<Environment>>)
                 -> Result<Value, Box<dyn std::error::Error>> {
    let (program, mut errors) = parse(source);

    if !errors.is_empty() {
        return Err(Box::new(errors.remove(0)));
    }

    Ok(eval_program(&program, env)?)
}
