/// Builtin lookup table, arity checking, and user-defined function dispatch.
pub mod core;
/// The `frac` function implementation.
///
/// Divides two values through the binary-operation protocol.
pub mod frac;
/// The `lookup` function implementation.
///
/// Prints selected reference-table fields for an element.
pub mod lookup;
/// The `print` function implementation.
///
/// Outputs the concatenated renderings of its arguments.
pub mod print;
/// The `root` function implementation.
///
/// Computes square roots and n-th roots.
pub mod root;
/// The `sum` function implementation.
///
/// Folds addition over its arguments, or over a single array argument.
pub mod sum;
/// Trigonometric function implementations.
///
/// Forward functions take degrees; inverse functions return degrees.
pub mod trig;
