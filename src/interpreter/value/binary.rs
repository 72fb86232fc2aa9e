use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::Value,
            numeric::{classify, round_magnitude},
            unit::UnitValue,
        },
    },
    units::UnitRegistry,
};

impl Value {
    /// Applies a binary operator to `self` and `right`.
    ///
    /// Dispatch is driven by the operand kinds:
    /// - plain numbers (integer/float/percentage) combine on their magnitudes
    ///   and the result is re-classified;
    /// - two percentages stay a percentage;
    /// - two unit values are combined in the right operand's unit, converting
    ///   the left operand first;
    /// - a unit value combined with a plain number keeps its unit, regardless
    ///   of operand order;
    /// - strings support `+` as concatenation;
    /// - arrays support `+` as append, splicing in another array's elements.
    ///
    /// Every other pairing fails, naming both operand kinds.
    ///
    /// # Parameters
    /// - `operation`: The operator to apply.
    /// - `right`: The right operand.
    /// - `units`: Registry used when both operands carry units.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: The combined value.
    /// - `Err(RuntimeError)`: If the pairing or operator is unsupported.
    pub fn binary_operation(&self,
                            operation: BinaryOperator,
                            right: &Self,
                            units: &UnitRegistry,
                            line: usize)
                            -> EvalResult<Self> {
        match (self, right) {
            (Self::Integer(_) | Self::Float(_),
             Self::Integer(_) | Self::Float(_) | Self::Percentage(_)) => {
                let result = apply(self.as_magnitude(line)?, right.as_magnitude(line)?, operation);
                Ok(classify(result))
            },
            (Self::Integer(_) | Self::Float(_) | Self::Percentage(_), Self::Unit(unit)) => {
                let result = apply(self.as_magnitude(line)?, unit.value, operation);
                Ok(UnitValue { value: round_magnitude(result),
                               unit:  unit.unit.clone(), }.into())
            },
            (Self::Percentage(left), Self::Percentage(right)) => {
                // Fractional arithmetic; the result is not renormalized.
                Ok(Self::Percentage(apply(*left, *right, operation)))
            },
            (Self::Percentage(_), Self::Integer(_) | Self::Float(_)) => {
                let result = apply(self.as_magnitude(line)?, right.as_magnitude(line)?, operation);
                Ok(classify(result))
            },
            (Self::Unit(left), Self::Unit(right)) => {
                let converted = units.convert(left.value, &left.unit, &right.unit, line)?;
                let result = apply(converted.value, right.value, operation);
                Ok(UnitValue { value: round_magnitude(result),
                               unit:  right.unit.clone(), }.into())
            },
            (Self::Unit(unit), _) if right.is_numeric() => {
                let result = apply(unit.value, right.as_magnitude(line)?, operation);
                Ok(UnitValue { value: round_magnitude(result),
                               unit:  unit.unit.clone(), }.into())
            },
            (Self::String(left), Self::String(right)) if operation == BinaryOperator::Add => {
                Ok(Self::String(format!("{left}{right}")))
            },
            (Self::Array(elements), _) if operation == BinaryOperator::Add => {
                let mut combined = elements.as_ref().clone();
                match right {
                    Self::Array(other) => combined.extend(other.iter().cloned()),
                    _ => combined.push(right.clone()),
                }
                Ok(combined.into())
            },
            _ => Err(RuntimeError::BinaryOperation { left:      self.kind().to_string(),
                                                     operation: operation.to_string(),
                                                     right:     right.kind().to_string(),
                                                     line, }),
        }
    }
}

/// Combines two magnitudes with an arithmetic or comparison operator.
///
/// Comparison operators yield `1.0` for true and `0.0` for false.
#[allow(clippy::float_cmp)]
fn apply(left: f64, right: f64, operation: BinaryOperator) -> f64 {
    use BinaryOperator::{
        Add, Convert, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow,
        Sub,
    };

    match operation {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => left / right,
        Pow => left.powf(right),
        Mod => left % right,
        Equal => f64::from(left == right),
        NotEqual => f64::from(left != right),
        Less => f64::from(left < right),
        LessEqual => f64::from(left <= right),
        Greater => f64::from(left > right),
        GreaterEqual => f64::from(left >= right),
        // Conversion is intercepted before operator dispatch.
        Convert => f64::NAN,
    }
}
