use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

/// Divides two values through the binary-operation protocol.
///
/// `frac(a, b)` behaves exactly like `a / b`, including unit handling and
/// result classification, so `frac(1, 2)` is the float `0.5` and
/// `frac(4, 2)` is the integer `2`.
///
/// # Parameters
/// - `environment`: The calling environment, for its unit registry.
/// - `args`: Slice containing numerator and denominator.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The quotient.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use unical::{
///     interpreter::{
///         evaluator::{core::Environment, function::frac::frac},
///         value::core::Value,
///     },
///     reference::ReferenceTable,
/// };
///
/// let environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
///
/// let half = frac(&environment, &[Value::Integer(1), Value::Integer(2)], 1).unwrap();
/// assert_eq!(half, Value::Float(0.5));
/// ```
pub fn frac(environment: &Environment, args: &[Value], line: usize) -> EvalResult<Value> {
    args[0].binary_operation(BinaryOperator::Div, &args[1], &environment.units, line)
}
