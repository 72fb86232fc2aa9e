use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::value::{core::Value, numeric::classify, unit::UnitValue},
    reference::ReferenceTable,
    units::UnitRegistry,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// This struct holds the interpreter state: variable assignments, user
/// defined functions, the predefined constants, the unit registry, and the
/// bundled reference table. It also records the result of every evaluated
/// statement so `prev` and `history` can replay earlier answers.
///
/// ## Usage
///
/// An `Environment` is created once per session and reused across inputs,
/// so assignments and definitions from earlier lines stay visible. Function
/// bodies run in a fresh child environment instead.
pub struct Environment {
    /// A mapping from variable names to their assigned values.
    pub variables: HashMap<String, Value>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated when declaring functions like `define square(x) => x * x`.
    pub functions: HashMap<String, FunctionDef>,
    /// Predefined constants such as `Pi`. Never reassigned at runtime.
    pub constants: HashMap<String, Value>,
    /// Units available for suffixes and conversions.
    pub units:     UnitRegistry,
    /// Bundled reference data, shared between parent and child environments.
    pub reference: Rc<ReferenceTable>,
    /// Results of previously evaluated statements, oldest first.
    pub history:   Vec<Value>,
}

impl Environment {
    /// Creates a new environment with the default unit catalog, the
    /// predefined constants, and no variables, functions, or history.
    ///
    /// # Parameters
    /// - `reference`: The reference table consulted by identifier resolution
    ///   and by `lookup`.
    #[must_use]
    pub fn new(reference: Rc<ReferenceTable>) -> Self {
        let constants = HashMap::from([
            ("Pi".to_string(), classify(std::f64::consts::PI)),
            ("E".to_string(), classify(std::f64::consts::E)),
        ]);

        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               constants,
               units: UnitRegistry::with_defaults(),
               reference,
               history: Vec::new(), }
    }

    /// Creates the environment a function body is evaluated in.
    ///
    /// The child starts without variables, functions, or history, so a
    /// function body can only reach its own parameters. Constants, units,
    /// and the reference table carry over from the parent.
    ///
    /// ## Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use unical::{interpreter::evaluator::core::Environment, reference::ReferenceTable};
    ///
    /// let mut parent = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
    /// parent.variables.insert("x".to_string(), 10.into());
    ///
    /// let child = parent.child();
    ///
    /// assert!(child.variables.is_empty());
    /// assert!(child.constants.contains_key("Pi"));
    /// ```
    #[must_use]
    pub fn child(&self) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               constants: self.constants.clone(),
               units:     self.units.clone(),
               reference: Rc::clone(&self.reference),
               history:   Vec::new(), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, identifiers, unary
    /// and binary operations, function calls, array literals and indexing,
    /// unit and percentage suffixes, and field access.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Errors
    /// Returns a `RuntimeError` describing the first failure encountered
    /// while evaluating `expr` or one of its subexpressions.
    ///
    /// ## Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use unical::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    ///     reference::ReferenceTable,
    /// };
    ///
    /// let mut environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
    /// let expr = Expr::Literal { value: LiteralValue::Integer(10),
    ///                            line:  1, };
    ///
    /// assert_eq!(environment.eval(&expr).unwrap(), Value::Integer(10));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_identifier(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.eval(expr)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line)
            },
            Expr::FunctionCall { name, arguments, line } => {
                let arguments = self.eval_elements(arguments)?;
                self.eval_function(name, &arguments, *line)
            },
            Expr::ArrayLiteral { elements, .. } => {
                Ok(Value::from(self.eval_elements(elements)?))
            },
            Expr::ArrayIndex { array, index, line } => self.eval_index(array, index, *line),
            Expr::UnitSuffix { expr, unit, line } => {
                let value = self.eval(expr)?.as_magnitude(*line)?;
                Ok(Value::Unit(UnitValue { value,
                                           unit: unit.clone(), }))
            },
            Expr::PercentSuffix { expr, line } => {
                let value = self.eval(expr)?.as_magnitude(*line)?;
                Ok(Value::Percentage(value / 100.0))
            },
            Expr::FieldAccess { expr, field, line } => self.eval_field_access(expr, field, *line),
        }
    }

    /// Evaluates a binary operation node.
    ///
    /// Conversions are intercepted before both sides are evaluated, because
    /// the right side of `in` is a unit name rather than a value.
    fn eval_binary_op(&mut self,
                      left: &Expr,
                      operation: BinaryOperator,
                      right: &Expr,
                      line: usize)
                      -> EvalResult<Value> {
        if operation == BinaryOperator::Convert {
            return self.eval_conversion(left, right, line);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;

        left.binary_operation(operation, &right, &self.units, line)
    }

    /// Evaluates a single statement.
    ///
    /// Function definitions register the function and assignments bind the
    /// variable; both produce [`Value::Nil`], so neither adds an output line
    /// or a history entry of its own.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when the contained expression fails to
    /// evaluate.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Function(def) => {
                self.functions.insert(def.name.clone(), def.clone());
                Ok(Value::Nil)
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(Value::Nil)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Evaluates a whole program, statement by statement.
    ///
    /// Every statement result that is not [`Value::Nil`] is appended to the
    /// history, so later statements can refer back to it with `prev` or
    /// `history`. The returned [`Value::Program`] keeps one entry per
    /// statement, in source order.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` encountered. Statements after the
    /// failing one are not evaluated, and their results are not recorded.
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(statements.len());

        for statement in statements {
            let value = self.eval_statement(statement)?;

            if !value.is_nil() {
                self.history.push(value.clone());
            }
            values.push(value);
        }

        Ok(Value::Program(values))
    }
}
