use crate::interpreter::{
    evaluator::core::{Environment, EvalResult},
    value::core::Value,
};

/// Prints the concatenated renderings of all arguments to standard output.
///
/// Arguments are formatted with their `Display` implementations and joined
/// without separators, so `print("x = ", x)` reads naturally. Printing works
/// for every value variant. The call itself produces `Nil`, so `print` never
/// adds an output line beyond the one it writes.
///
/// # Parameters
/// - `args`: Values to print; an empty slice prints an empty line.
/// - `line`: Line number, unused because printing cannot fail.
///
/// # Returns
/// `Value::Nil`.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use unical::{
///     interpreter::{
///         evaluator::{core::Environment, function::print::print},
///         value::core::Value,
///     },
///     reference::ReferenceTable,
/// };
///
/// let environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
///
/// // Writes "total: 42" to stdout; the call itself is Nil.
/// let args = [Value::String("total: ".to_string()), Value::Integer(42)];
/// let r = print(&environment, &args, 1).unwrap();
///
/// assert_eq!(r, Value::Nil);
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn print(_environment: &Environment, args: &[Value], _line: usize) -> EvalResult<Value> {
    let rendered: String = args.iter().map(ToString::to_string).collect();

    println!("{rendered}");
    Ok(Value::Nil)
}
