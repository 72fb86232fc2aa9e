use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

/// Reference fields `lookup` prints, in record order.
const PRINTED_FIELDS: &[&str] = &["appearance", "atomic_mass", "category", "name", "number",
                                  "period", "phase", "shells", "summary", "symbol"];

/// Prints the well-known reference fields of an element.
///
/// The argument must be a string naming an element by symbol or full name.
/// Each printed line has the shape `field : value`; fields outside the
/// printed set, and fields the entry does not carry, are skipped. The call
/// itself produces `Nil`, so `lookup` never adds an output line of its own.
///
/// # Parameters
/// - `environment`: The calling environment, for its reference table.
/// - `args`: Slice containing the element name.
/// - `line`: Line number for error reporting.
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
///         evaluator::{core::Environment, function::lookup::lookup},
///         value::core::Value,
///     },
///     reference::ReferenceTable,
/// };
///
/// let environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
///
/// // Prints the hydrogen entry to stdout; the call itself is Nil.
/// let r = lookup(&environment, &[Value::String("H".to_string())], 1).unwrap();
/// assert_eq!(r, Value::Nil);
/// ```
pub fn lookup(environment: &Environment, args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::String(name) = &args[0] else {
        return Err(RuntimeError::InvalidArgument { details: format!("lookup expects an element name as a string, not {}",
                                                                    args[0].kind()),
                                                   line });
    };

    let Some(record) = environment.reference.find(name) else {
        return Err(RuntimeError::UnknownElement { name: name.clone(),
                                                  line });
    };

    for (field, value) in record.as_record(line)? {
        if PRINTED_FIELDS.contains(&field.as_str()) {
            println!("{field} : {value}");
        }
    }

    Ok(Value::Nil)
}
