/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code, such as integers, floating-point numbers, and strings. It is
/// used in the AST to represent literal expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A quoted string literal.
    String(String),
}

impl<T: Into<Self> + Clone> From<&T> for LiteralValue {
    fn from(v: &T) -> Self {
        v.clone().into()
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// function calls, arithmetic, arrays, unit suffixes, and field access. Each
/// variant models a distinct syntactic construct and carries its source line
/// for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Array indexing expression (e.g., `arr[2]`).
    ArrayIndex {
        /// The array to index into.
        array: Box<Self>,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A measurement suffix applied to a number (e.g., `10 km`).
    UnitSuffix {
        /// The magnitude expression.
        expr: Box<Self>,
        /// The unit name as written.
        unit: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A percentage suffix applied to a number (e.g., `25%`).
    PercentSuffix {
        /// The magnitude expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Record field access (e.g., `iron.atomic_mass`).
    FieldAccess {
        /// The record expression.
        expr:  Box<Self>,
        /// The name of the accessed field.
        field: String,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use unical::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::ArrayIndex { line, .. }
            | Self::UnitSuffix { line, .. }
            | Self::PercentSuffix { line, .. }
            | Self::FieldAccess { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// A function binds parameter names to a body of statements. Calling the
/// function evaluates the body and yields the value of its final statement.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names (e.g. `x`).
    pub params: Vec<String>,
    /// The statements evaluated when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, and unit conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Unit conversion (`in`)
    Convert,
}

/// Represents a unary operator.
///
/// Unary operators include negation, logical NOT, and rounding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
    /// Rounding to the nearest integer (e.g. `~x`).
    Round,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Convert, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            Convert => "in",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Round => "~",
        };
        write!(f, "{operator}")
    }
}
