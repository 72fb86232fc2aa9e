use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
    util::num::f64_to_i64_exact,
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers and floats.
    /// - `Not`: logical negation. The zero integer and the empty string count
    ///   as true (1); every other value counts as false (0).
    /// - `Round`: rounds a float to the nearest integer, half away from zero.
    ///   Identity on integers.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use unical::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// // Logical not: only the zero integer and the empty string are true
    /// let v = Environment::eval_unary(UnaryOperator::Not, &Value::Integer(0), 1).unwrap();
    /// assert_eq!(v, Value::Integer(1));
    ///
    /// // Rounding, half away from zero
    /// let v = Environment::eval_unary(UnaryOperator::Round, &Value::Float(2.5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(3));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Float(r) => Ok(Value::Float(-r)),
                _ => Err(RuntimeError::UnaryOperation { operation: op.to_string(),
                                                        operand:   value.kind().to_string(),
                                                        line }),
            },
            UnaryOperator::Not => {
                let truthy = match value {
                    Value::Integer(0) => true,
                    Value::String(s) => s.is_empty(),
                    _ => false,
                };
                Ok(Value::Integer(i64::from(truthy)))
            },
            UnaryOperator::Round => match value {
                Value::Integer(n) => Ok(Value::Integer(*n)),
                Value::Float(r) => f64_to_i64_exact(r.round())
                    .map(Value::Integer)
                    .ok_or(RuntimeError::LiteralTooLarge { line }),
                _ => Err(RuntimeError::UnaryOperation { operation: op.to_string(),
                                                        operand:   value.kind().to_string(),
                                                        line }),
            },
        }
    }
}
