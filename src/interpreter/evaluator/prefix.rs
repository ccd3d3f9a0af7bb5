use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// Supported operators:
/// - `Not`: truthiness negation. `!true` is `false`, `!null` is `true`, and
///   any other value (including `0` and `""`) negates to `false`.
/// - `Negate`: arithmetic negation, defined for integers only.
///
/// # Errors
/// `RuntimeError::UnknownPrefixOperator` when `-` is applied to a
/// non-integer.
///
/// # Examples
/// ```
/// use capuchin::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::prefix::eval_prefix, value::core::Value},
/// };
///
/// let v = eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_prefix(PrefixOperator::Not, &Value::Null).unwrap();
/// assert_eq!(v, Value::Bool(true));
/// ```
pub fn eval_prefix(op: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(n) => Ok(Value::Integer(-n)),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           right: right.type_name() }),
        },
    }
}
