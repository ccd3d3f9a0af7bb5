use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, function, index, infix, prefix},
        value::{
            core::{Function, Value},
            environment::Environment,
            hash::{HashEntries, HashKey},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a [`Value`] or a [`RuntimeError`]
/// describing the failure. An error terminates the enclosing construct and
/// propagates to the caller of [`eval_program`].
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against an environment.
///
/// Statements run in order. A `return` produced anywhere inside ends the
/// program early with the unwrapped value; the result is otherwise the value
/// of the last statement, or `null` for an empty program.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The environment to evaluate in; `let` statements mutate it.
///
/// # Errors
/// The first runtime error raised by any statement.
///
/// # Examples
/// ```
/// use capuchin::{
///     interpreter::{evaluator::core::eval_program, value::environment::Environment},
///     parse,
/// };
///
/// let (program, errors) = parse("let x = 2; x * 3");
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// let value = eval_program(&program, &env).unwrap();
/// assert_eq!(value.to_string(), "6");
/// ```
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates a block of statements.
///
/// Like [`eval_program`], but a `return` value is handed back still wrapped
/// so enclosing blocks stop too; only the function or program frame unwraps
/// it.
pub fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` evaluates its value and binds it in the current scope, yielding
/// `null`; `return` wraps its value for upward propagation; an expression
/// statement yields the expression's value.
pub fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(Value::Null)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expression } => eval_expression(expression, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main dispatch of the evaluator: literals, identifiers,
/// operators, conditionals, function literals, calls, aggregates, and
/// indexing each route to their handler. Sub-expressions are evaluated
/// strictly left to right and the first error wins.
///
/// # Errors
/// Any runtime error raised by the expression or one of its
/// sub-expressions.
pub fn eval_expression(expression: &Expression,
                       env: &Rc<RefCell<Environment>>)
                       -> EvalResult<Value> {
    match expression {
        Expression::Literal { value } => Ok(value.into()),
        Expression::Identifier { name } => eval_identifier(name, env),
        Expression::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            prefix::eval_prefix(*op, &right)
        },
        Expression::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            infix::eval_infix(*op, &left, &right)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expression::Function { parameters, body } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expression::Call { callee, arguments } => {
            let callee = eval_expression(callee, env)?;
            let arguments = eval_expressions(arguments, env)?;
            function::apply(&callee, arguments)
        },
        Expression::Array { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(elements.into())
        },
        Expression::Hash { pairs } => eval_hash_literal(pairs, env),
        Expression::Index { container, index } => {
            let container = eval_expression(container, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&container, &index)
        },
    }
}

/// Evaluates a list of expressions left to right, stopping at the first
/// error.
pub(in crate::interpreter::evaluator) fn eval_expressions(expressions: &[Expression],
                                                          env: &Rc<RefCell<Environment>>)
                                                          -> EvalResult<Vec<Value>> {
    expressions.iter()
               .map(|expression| eval_expression(expression, env))
               .collect()
}

/// Resolves an identifier: the environment chain first, then the builtin
/// registry.
fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    builtin::lookup(name).map(Value::Builtin)
                         .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates a conditional: the consequence when the condition is truthy,
/// the alternative when present, `null` otherwise.
fn eval_if(condition: &Expression,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &Rc<RefCell<Environment>>)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else {
        match alternative {
            Some(alternative) => eval_block(alternative, env),
            None => Ok(Value::Null),
        }
    }
}

/// Evaluates a hash literal: each key, then its value, in source order.
fn eval_hash_literal(pairs: &[(Expression, Expression)],
                     env: &Rc<RefCell<Environment>>)
                     -> EvalResult<Value> {
    let mut entries = HashEntries::new();

    for (key, value) in pairs {
        let key = eval_expression(key, env)?;
        let key = HashKey::try_from(&key)?;
        let value = eval_expression(value, env)?;

        entries.insert(key, value);
    }

    Ok(Value::Hash(Rc::new(entries)))
}
