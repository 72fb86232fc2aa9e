use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a unit conversion (`100m in km`).
    ///
    /// The right side of `in` must be a bare identifier naming the target
    /// unit; evaluating it as an expression would be meaningless. A unit
    /// value is converted through the registry. Any other numeric value is
    /// labeled with the target name instead, so `10 in km` is `10 km`.
    ///
    /// # Parameters
    /// - `value`: Expression producing the value to convert.
    /// - `target`: Expression naming the target unit.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The converted unit value.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use unical::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    ///     reference::ReferenceTable,
    /// };
    ///
    /// let mut environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
    ///
    /// let value = Expr::UnitSuffix { expr: Box::new(Expr::Literal { value: 100.into(),
    ///                                                               line:  1, }),
    ///                                unit: "m".to_string(),
    ///                                line: 1, };
    /// let target = Expr::Variable { name: "km".to_string(),
    ///                               line: 1, };
    ///
    /// let converted = environment.eval_conversion(&value, &target, 1).unwrap();
    ///
    /// assert_eq!(converted.to_string(), "0.1 km");
    /// ```
    pub fn eval_conversion(&mut self, value: &Expr, target: &Expr, line: usize) -> EvalResult<Value> {
        let Expr::Variable { name: target, .. } = target else {
            return Err(RuntimeError::InvalidConversion { details:
                                                             "The conversion target must be a unit name".to_string(),
                                                         line });
        };

        let value = self.eval(value)?;

        match &value {
            Value::Unit(unit) => {
                Ok(Value::Unit(self.units.convert(unit.value, &unit.unit, target, line)?))
            },
            // Same-name conversion only labels, so the target is not validated.
            _ if value.is_numeric() => {
                let magnitude = value.as_magnitude(line)?;
                Ok(Value::Unit(self.units.convert(magnitude, target, target, line)?))
            },
            _ => Err(RuntimeError::InvalidConversion { details: format!("Cannot convert {} to '{target}'",
                                                                        value.kind()),
                                                       line }),
        }
    }

    /// Evaluates an array indexing expression.
    ///
    /// The container expression must evaluate to an array and the index
    /// expression to an integer. Negative and past-the-end positions are
    /// reported as `IndexOutOfBounds` together with the largest valid index.
    ///
    /// # Parameters
    /// - `array`: Expression producing the array.
    /// - `index`: Expression producing the index.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The element at the given position.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use unical::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    ///     reference::ReferenceTable,
    /// };
    ///
    /// let mut environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
    ///
    /// let array = Expr::ArrayLiteral { elements: vec![Expr::Literal { value: 10.into(),
    ///                                                                 line:  1, },
    ///                                                 Expr::Literal { value: 20.into(),
    ///                                                                 line:  1, },],
    ///                                  line:     1, };
    /// let index = Expr::Literal { value: 1.into(),
    ///                             line:  1, };
    ///
    /// let result = environment.eval_index(&array, &index, 1).unwrap();
    ///
    /// assert_eq!(result, Value::Integer(20));
    /// ```
    pub fn eval_index(&mut self, array: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        let array_value = self.eval(array)?;
        let index_value = self.eval(index)?;

        let elements = array_value.as_vec(line)?;
        let max = elements.len().saturating_sub(1);

        let Value::Integer(position) = index_value else {
            return Err(RuntimeError::InvalidIndex { details: format!("Array index must be an integer, not {}",
                                                                     index_value.kind()),
                                                    line });
        };

        let index = usize::try_from(position).map_err(|_| RuntimeError::IndexOutOfBounds { max,
                                                                                           found: position,
                                                                                           line })?;

        elements.get(index)
                .cloned()
                .ok_or(RuntimeError::IndexOutOfBounds { max,
                                                        found: position,
                                                        line })
    }

    /// Evaluates a record field access (`hydrogen.atomic_mass`).
    ///
    /// # Errors
    /// Returns `ExpectedRecord` when the container is not a record, and
    /// `UndefinedField` when the record has no field of that name.
    pub fn eval_field_access(&mut self, record: &Expr, field: &str, line: usize) -> EvalResult<Value> {
        let value = self.eval(record)?;
        let fields = value.as_record(line)?;

        fields.get(field)
              .cloned()
              .ok_or_else(|| RuntimeError::UndefinedField { field: field.to_string(),
                                                            line })
    }

    /// Evaluates a list of expressions into concrete values, in order.
    ///
    /// Used for array literals and function-call arguments. The first failing
    /// element aborts the whole list.
    pub fn eval_elements(&mut self, elements: &[Expr]) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            values.push(self.eval(element)?);
        }

        Ok(values)
    }
}
