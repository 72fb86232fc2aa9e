/// Core expression parsing.
///
/// Contains the binding power table, the expression entry point, and the
/// infix operator loop.
pub mod core;

/// Prefix position parsing.
///
/// Handles everything an expression can begin with: literals, identifiers,
/// calls, grouping, array literals, and prefix operators.
pub mod prefix;

/// Postfix suffix parsing.
///
/// Attaches unit suffixes, percent suffixes, field accesses, and index
/// accesses to an already parsed expression.
pub mod postfix;

/// Statement parsing.
///
/// Implements logic for parsing top-level statements: function definitions,
/// assignments, and expression statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and identifier tokens shared by
/// several parsing routines.
pub mod utils;
