use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

/// Folds addition over the arguments.
///
/// A single array argument is spread first, so `sum([1, 2, 3])` and
/// `sum(1, 2, 3)` agree. The fold goes through the binary-operation
/// protocol, so units, percentages, and mixed numeric kinds combine exactly
/// the way `+` combines them.
///
/// # Parameters
/// - `environment`: The calling environment, for its unit registry.
/// - `args`: Values to add, or one array of values.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The folded total.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use unical::{
///     interpreter::{
///         evaluator::{core::Environment, function::sum::sum},
///         value::core::Value,
///     },
///     reference::ReferenceTable,
/// };
///
/// let environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
///
/// let args = [Value::Integer(1), Value::Integer(2), Value::Integer(3)];
/// let total = sum(&environment, &args, 1).unwrap();
///
/// assert_eq!(total, Value::Integer(6));
/// ```
pub fn sum(environment: &Environment, args: &[Value], line: usize) -> EvalResult<Value> {
    let values = match args {
        [Value::Array(elements)] => elements.as_slice(),
        _ => args,
    };

    let Some((first, rest)) = values.split_first() else {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "sum needs at least one value".to_string(),
                                                   line });
    };

    let mut total = first.clone();

    for value in rest {
        total = total.binary_operation(BinaryOperator::Add, value, &environment.units, line)?;
    }

    Ok(total)
}
