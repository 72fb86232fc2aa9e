use std::{collections::BTreeMap, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::unit::UnitValue},
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and the session history.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a result, produced by assignments, function definitions,
    /// and output-only built-ins such as `print`.
    Nil,
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A magnitude paired with a unit name, such as `10 km`.
    Unit(UnitValue),
    /// A percentage, stored as a fraction (`10%` is `0.1`).
    Percentage(f64),
    /// A string value.
    String(String),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A record of named fields, such as a reference-table entry.
    Record(Rc<BTreeMap<String, Self>>),
    /// The results of every statement in one evaluated input.
    Program(Vec<Self>),
}

/// The kind of a [`Value`], used in diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    /// No result.
    Nil,
    /// A 64-bit integer.
    Integer,
    /// A double precision floating-point number.
    Float,
    /// A magnitude with a unit name.
    Unit,
    /// A fraction rendered as a percentage.
    Percentage,
    /// A string.
    String,
    /// An ordered list of values.
    Array,
    /// A mapping from field names to values.
    Record,
    /// The results of a whole input.
    Program,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Nil => "nil",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Unit => "unit",
            Self::Percentage => "percentage",
            Self::String => "string",
            Self::Array => "array",
            Self::Record => "record",
            Self::Program => "program",
        };
        write!(f, "{kind}")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<UnitValue> for Value {
    fn from(v: UnitValue) -> Self {
        Self::Unit(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(v: BTreeMap<String, Self>) -> Self {
        Self::Record(Rc::new(v))
    }
}

impl Value {
    /// Returns the magnitude of a numeric value as an `f64`.
    ///
    /// Accepts `Value::Integer`, `Value::Float`, `Value::Unit`, and
    /// `Value::Percentage`. For integers, conversion fails if the value is too
    /// large to be represented as `f64` exactly. Percentages expose their
    /// fraction, so `10%` has magnitude `0.1`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is numeric and safely representable.
    /// - `Err(RuntimeError::ExpectedNumber | LiteralTooLarge)`: If not numeric
    ///   or not representable.
    ///
    /// # Example
    /// ```
    /// use unical::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// let magnitude = x.as_magnitude(42).unwrap();
    ///
    /// assert_eq!(magnitude, 10.0);
    /// ```
    pub fn as_magnitude(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => Ok(i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line })?),
            Self::Float(r) => Ok(*r),
            Self::Unit(unit) => Ok(unit.value),
            Self::Percentage(fraction) => Ok(*fraction),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to a vector of values, or returns an error if not an
    /// array.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(&Vec<Value>)`: If the value is an array.
    /// - `Err(RuntimeError::ExpectedArray)`: If not an array.
    pub fn as_vec(&self, line: usize) -> EvalResult<&Vec<Self>> {
        match self {
            Self::Array(v) => Ok(v),
            _ => Err(RuntimeError::ExpectedArray { line }),
        }
    }

    /// Converts the value to a field mapping, or returns an error if not a
    /// record.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(&BTreeMap<String, Value>)`: If the value is a record.
    /// - `Err(RuntimeError::ExpectedRecord)`: If not a record.
    pub fn as_record(&self, line: usize) -> EvalResult<&BTreeMap<String, Self>> {
        match self {
            Self::Record(fields) => Ok(fields),
            _ => Err(RuntimeError::ExpectedRecord { line }),
        }
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Integer(..) => Kind::Integer,
            Self::Float(..) => Kind::Float,
            Self::Unit(..) => Kind::Unit,
            Self::Percentage(..) => Kind::Percentage,
            Self::String(..) => Kind::String,
            Self::Array(..) => Kind::Array,
            Self::Record(..) => Kind::Record,
            Self::Program(..) => Kind::Program,
        }
    }

    /// Returns `true` if the value is [`Nil`].
    ///
    /// [`Nil`]: Value::Nil
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if the value exposes a numeric magnitude.
    ///
    /// Integers, floats, unit values, and percentages are numeric.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self,
                 Self::Integer(..) | Self::Float(..) | Self::Unit(..) | Self::Percentage(..))
    }

    /// Returns the value of the final statement this value stands for.
    ///
    /// For a `Program` this is its last entry; every other value stands for
    /// itself. Returns `None` only for an empty program.
    ///
    /// # Example
    /// ```
    /// use unical::interpreter::value::core::Value;
    ///
    /// let program = Value::Program(vec![Value::Nil, Value::Integer(4)]);
    ///
    /// assert_eq!(program.last_value(), Some(&Value::Integer(4)));
    /// ```
    #[must_use]
    pub fn last_value(&self) -> Option<&Self> {
        match self {
            Self::Program(values) => values.last(),
            _ => Some(self),
        }
    }
}

impl std::fmt::Display for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Unit(unit) => write!(f, "{unit}"),
            Self::Percentage(fraction) => write!(f, "{}%", (fraction * 100.0) as i64),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Record(fields) => {
                write!(f, "{{")?;

                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{name}: {value}")?;
                }

                write!(f, "}}")
            },
            Self::Program(values) => {
                let mut first = true;

                for value in values {
                    if value.is_nil() {
                        continue;
                    }
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{value}")?;
                    first = false;
                }

                Ok(())
            },
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Float(n) => (*n).into(),
            LiteralValue::String(s) => s.clone().into(),
        }
    }
}
