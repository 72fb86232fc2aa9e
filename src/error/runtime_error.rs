#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// A binary operation was applied to incompatible operands.
    BinaryOperation {
        /// The kind of the left operand.
        left:      String,
        /// The operator that was applied.
        operation: String,
        /// The kind of the right operand.
        right:     String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A unary operation was applied to an incompatible operand.
    UnaryOperation {
        /// The operator that was applied.
        operation: String,
        /// The kind of the operand.
        operand:   String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Referenced a unit that is not in the registry.
    UnknownUnit {
        /// The name of the unit.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unit conversion could not be carried out.
    InvalidConversion {
        /// Details about the failed conversion.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Looked up an element that is not in the reference table.
    UnknownElement {
        /// The requested element name or symbol.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    FunctionArity {
        /// The name of the function.
        name:     String,
        /// Describes the accepted argument counts.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array value was expected, but not found.
    ExpectedArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A record value was expected, but not found.
    ExpectedRecord {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Accessed a field that the record does not contain.
    UndefinedField {
        /// The requested field name.
        field: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An index expression did not produce a usable index.
    InvalidIndex {
        /// Details about why the index is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to access an array element outside the allowed bounds.
    IndexOutOfBounds {
        /// The largest valid index.
        max:   usize,
        /// The index that was actually requested.
        found: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An identifier resolved to an empty name.
    EmptyIdentifier {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BinaryOperation { left, operation, right, line } => {
                write!(f, "Error on line {line}: Cannot apply '{operation}' to {left} and {right}.")
            },
            Self::UnaryOperation { operation, operand, line } => {
                write!(f, "Error on line {line}: Cannot apply '{operation}' to {operand}.")
            },
            Self::UnknownUnit { name, line } => {
                write!(f, "Error on line {line}: Unknown unit '{name}'.")
            },
            Self::InvalidConversion { details, line } => {
                write!(f, "Error on line {line}: Invalid conversion: {details}.")
            },
            Self::UnknownElement { name, line } => {
                write!(f, "Error on line {line}: Unknown element '{name}'.")
            },
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::FunctionArity { name, expected, found, line } => {
                write!(f, "Error on line {line}: Function '{name}' expects {expected} arguments, but found {found} instead.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::ExpectedArray { line } => write!(f, "Error on line {line}: Expected array."),
            Self::ExpectedRecord { line } => write!(f, "Error on line {line}: Expected record."),
            Self::UndefinedField { field, line } => {
                write!(f, "Error on line {line}: Unknown field '{field}'.")
            },
            Self::InvalidIndex { details, line } => {
                write!(f, "Error on line {line}: Invalid index: {details}.")
            },
            Self::IndexOutOfBounds { max, found, line } => {
                write!(f, "Error on line {line}: Index out of bounds. Maximum is {max}, but found {found} instead.")
            },
            Self::EmptyIdentifier { line } => {
                write!(f, "Error on line {line}: Identifier is empty.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::Overflow { line } => {
                write!(f, "Error on line {line}: Integer overflow while trying to compute result.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
