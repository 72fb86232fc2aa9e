/// Core evaluation logic and environment management.
///
/// Contains the main evaluation engine, the runtime environment, statement
/// execution, and result-history recording.
pub mod core;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;

/// Identifier resolution.
///
/// Resolves names against contextual keywords, constants, the reference
/// table, and variables, with typo-tolerant matching as the last resort.
pub mod identifier;

/// Unary operator evaluation logic.
///
/// Implements all unary operations: arithmetic negation, logical NOT, and
/// rounding.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides conversion, indexing, and field-access routines shared by the
/// evaluation logic.
pub mod utils;
