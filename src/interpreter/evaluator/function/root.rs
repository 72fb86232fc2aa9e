use crate::interpreter::{
    evaluator::core::{Environment, EvalResult},
    value::{core::Value, numeric::classify},
};

/// Computes square roots and n-th roots for numeric values.
///
/// - With one argument: the square root, `root(9)` is `3`.
/// - With two arguments: the n-th root, `args[0]^(1 / args[1])`, so
///   `root(8, 3)` is `2`.
///
/// The result is classified like any arithmetic result, so integral roots
/// come back as integers even when the underlying power is inexact.
///
/// # Parameters
/// - `args`: Slice of one or two numeric arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed root.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use unical::{
///     interpreter::{
///         evaluator::{core::Environment, function::root::root},
///         value::core::Value,
///     },
///     reference::ReferenceTable,
/// };
///
/// let environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
///
/// let r = root(&environment, &[Value::Integer(9)], 1).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let r = root(&environment, &[Value::Integer(8), Value::Integer(3)], 1).unwrap();
/// assert_eq!(r, Value::Integer(2));
/// ```
pub fn root(_environment: &Environment, args: &[Value], line: usize) -> EvalResult<Value> {
    let base = args[0].as_magnitude(line)?;
    let degree = match args.get(1) {
        Some(degree) => degree.as_magnitude(line)?,
        None => 2.0,
    };

    Ok(classify(base.powf(1.0 / degree)))
}
