use crate::interpreter::{
    evaluator::core::{Environment, EvalResult},
    value::{core::Value, numeric::classify},
};

/// Applies a trigonometric builtin to a numeric value.
///
/// The generated functions accept exactly one numeric argument and work in
/// degrees: forward functions convert their argument to radians first, and
/// inverse functions convert their result back to degrees. Results are
/// classified like any arithmetic result, so `sin(90)` is the integer `1`
/// and `atan(1)` is the integer `45`.
///
/// Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use unical::{
///     interpreter::{
///         evaluator::{core::Environment, function::trig::sin},
///         value::core::Value,
///     },
///     reference::ReferenceTable,
/// };
///
/// let environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
///
/// let r = sin(&environment, &[Value::Integer(90)], 1).unwrap();
/// assert_eq!(r, Value::Integer(1));
/// ```
macro_rules! degree_builtin {
    ($fname:ident, forward $trig_fn:ident) => {
        pub fn $fname(_environment: &Environment,
                      args: &[Value],
                      line: usize)
                      -> EvalResult<Value> {
            Ok(classify(args[0].as_magnitude(line)?.to_radians().$trig_fn()))
        }
    };
    ($fname:ident, inverse $trig_fn:ident) => {
        pub fn $fname(_environment: &Environment,
                      args: &[Value],
                      line: usize)
                      -> EvalResult<Value> {
            Ok(classify(args[0].as_magnitude(line)?.$trig_fn().to_degrees()))
        }
    };
}

degree_builtin!(sin, forward sin);
degree_builtin!(cos, forward cos);
degree_builtin!(tan, forward tan);
degree_builtin!(asin, inverse asin);
degree_builtin!(acos, inverse acos);
degree_builtin!(atan, inverse atan);
