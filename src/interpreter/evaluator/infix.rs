use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operation on already-evaluated operands.
///
/// Dispatch order:
/// 1. two integers take the arithmetic/comparison path;
/// 2. two strings support `+` (concatenation) and `==`/`!=`;
/// 3. `==`/`!=` on two booleans or two nulls compare directly;
/// 4. operands of differing types are a type mismatch;
/// 5. anything else (same type, no rule) is an unknown operator.
///
/// # Errors
/// `TypeMismatch` or `UnknownInfixOperator` as described above, plus
/// whatever the integer path raises.
///
/// # Examples
/// ```
/// use capuchin::{
///     ast::InfixOperator,
///     interpreter::{evaluator::infix::eval_infix, value::core::Value},
/// };
///
/// let v = eval_infix(InfixOperator::Add, &Value::Integer(2), &Value::Integer(3)).unwrap();
/// assert_eq!(v, Value::Integer(5));
///
/// let e = eval_infix(InfixOperator::Add, &Value::Integer(2), &Value::Bool(true)).unwrap_err();
/// assert_eq!(e.to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => match op {
            InfixOperator::Add => Ok(format!("{l}{r}").into()),
            InfixOperator::Equal => Ok(Value::Bool(l == r)),
            InfixOperator::NotEqual => Ok(Value::Bool(l != r)),
            _ => Err(unknown_operator(op, left, right)),
        },
        (Value::Bool(_), Value::Bool(_)) | (Value::Null, Value::Null) => match op {
            InfixOperator::Equal => Ok(Value::Bool(left == right)),
            InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
            _ => Err(unknown_operator(op, left, right)),
        },
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             op,
                                             right: right.type_name() })
        },
        _ => Err(unknown_operator(op, left, right)),
    }
}

/// Integer arithmetic and comparison. Division truncates toward zero;
/// dividing by zero is an error.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => Ok(Value::Integer(left + right)),
        InfixOperator::Sub => Ok(Value::Integer(left - right)),
        InfixOperator::Mul => Ok(Value::Integer(left * right)),
        InfixOperator::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left / right))
            }
        },
        InfixOperator::LessThan => Ok(Value::Bool(left < right)),
        InfixOperator::GreaterThan => Ok(Value::Bool(left > right)),
        InfixOperator::Equal => Ok(Value::Bool(left == right)),
        InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}

fn unknown_operator(op: InfixOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                         op,
                                         right: right.type_name() }
}
