use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{eval_block, EvalResult},
        value::{core::Value, environment::Environment},
    },
};

/// Applies a callee to already-evaluated arguments.
///
/// User functions get a fresh environment enclosed in the function's
/// *captured* scope (not the caller's), with each parameter bound to the
/// corresponding argument. The body runs as a block and one layer of
/// `return` wrapping is removed, so a `return` ends the callee without
/// leaking into the caller.
///
/// Builtins dispatch to their host implementation after an arity check.
///
/// # Errors
/// - `WrongArgumentCount` when the argument count differs from the
///   parameter count.
/// - `NotAFunction` when the callee is neither a function nor a builtin.
/// - Whatever the body or builtin raises.
pub fn apply(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                              want: function.parameters.len(), });
            }

            let env = Environment::new_enclosed(&function.env);

            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.borrow_mut().set(parameter.clone(), argument);
            }

            let result = eval_block(&function.body, &env)?;

            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => builtin.call(&arguments),
        _ => Err(RuntimeError::NotAFunction { kind: callee.type_name() }),
    }
}

/// Removes one layer of `return` wrapping, if present.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        value => value,
    }
}
