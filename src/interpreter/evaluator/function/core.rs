use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Environment, EvalResult},
            function::{frac, lookup, print, root, sum, trig},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the calling environment, a slice of evaluated argument
/// values, and the line number. It returns a value wrapped in `EvalResult`.
type BuiltinFn = fn(&Environment, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "frac"   => { arity: Arity::Exact(2), func: frac::frac },
    "root"   => { arity: Arity::OneOf(&[1, 2]), func: root::root },
    "sin"    => { arity: Arity::Exact(1), func: trig::sin },
    "cos"    => { arity: Arity::Exact(1), func: trig::cos },
    "tan"    => { arity: Arity::Exact(1), func: trig::tan },
    "asin"   => { arity: Arity::Exact(1), func: trig::asin },
    "acos"   => { arity: Arity::Exact(1), func: trig::acos },
    "atan"   => { arity: Arity::Exact(1), func: trig::atan },
    "lookup" => { arity: Arity::Exact(1), func: lookup::lookup },
    "print"  => { arity: Arity::AtLeast(0), func: print::print },
    "sum"    => { arity: Arity::AtLeast(1), func: sum::sum },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }

    /// Renders the accepted argument counts, for arity errors.
    fn describe(&self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::OneOf(counts) => counts.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(" or "),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin. If so,
    /// it verifies arity and executes the builtin, so builtins shadow
    /// user-defined functions of the same name. Otherwise it delegates to
    /// user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function(&mut self,
                                name: &str,
                                arguments: &[Value],
                                line: usize)
                                -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(arguments.len()) {
                return Err(RuntimeError::FunctionArity { name:     name.to_string(),
                                                         expected: builtin.arity.describe(),
                                                         found:    arguments.len(),
                                                         line });
            }
            return (builtin.func)(self, arguments, line);
        }

        self.call_user_defined_function(name, arguments, line)
    }

    /// Executes a user-defined function.
    ///
    /// The function is retrieved from the environment by name and its
    /// parameter count must match the number of supplied arguments. The body
    /// runs in a fresh child environment with each parameter bound
    /// positionally, so it cannot see the caller's variables or functions.
    /// The call's value is the value of the body's last statement.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  arguments: &[Value],
                                  line: usize)
                                  -> EvalResult<Value> {
        let Some(function) = self.functions.get(name).cloned() else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       line });
        };

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::FunctionArity { name:     name.to_string(),
                                                     expected: function.params.len().to_string(),
                                                     found:    arguments.len(),
                                                     line });
        }

        let mut scope = self.child();

        for (param, value) in function.params.iter().zip(arguments) {
            scope.variables.insert(param.clone(), value.clone());
        }

        let result = scope.eval_program(&function.body)?;
        Ok(result.last_value().cloned().unwrap_or(Value::Nil))
    }
}
