use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, hash::HashKey},
    },
};

/// Evaluates the index operator on already-evaluated operands.
///
/// - `array[i]` returns the element at `i`, or `null` when `i` is negative
///   or past the end.
/// - `hash[key]` returns the stored value, or `null` for an absent key; the
///   key must be hashable.
///
/// # Errors
/// - `UnusableAsHashKey` when indexing a hash with a non-hashable value.
/// - `IndexNotSupported` for every other container type.
///
/// # Examples
/// ```
/// use capuchin::interpreter::{evaluator::index::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(20));
/// assert_eq!(eval_index(&array, &Value::Integer(-1)).unwrap(), Value::Null);
/// assert_eq!(eval_index(&array, &Value::Integer(2)).unwrap(), Value::Null);
/// ```
pub fn eval_index(container: &Value, index: &Value) -> EvalResult<Value> {
    match (container, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            let element = usize::try_from(*i).ok()
                                             .and_then(|i| elements.get(i))
                                             .cloned();
            Ok(element.unwrap_or(Value::Null))
        },
        (Value::Hash(entries), _) => {
            let key = HashKey::try_from(index)?;
            Ok(entries.get(&key).cloned().unwrap_or(Value::Null))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: container.type_name() }),
    }
}
