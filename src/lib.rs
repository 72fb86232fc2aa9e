//! # unical
//!
//! unical is a calculator language interpreter written in Rust.
//! It parses and evaluates everyday calculations with support for physical
//! units, percentages, arrays, user defined functions, and a bundled
//! reference table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Environment,
        lexer::{LexerExtras, Token},
        parser::statement::parse_statement,
        value::core::Value,
    },
    reference::ReferenceTable,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Loads and queries the bundled reference data.
///
/// This module parses the packaged periodic table into runtime records and
/// answers lookups by element symbol or name. Identifier resolution and the
/// `lookup` builtin both consult it.
///
/// # Responsibilities
/// - Deserializes the packaged JSON data set at startup.
/// - Resolves entries by symbol first, then by case-insensitive name.
/// - Converts raw JSON fields into runtime record values.
pub mod reference;
/// Defines measurement units and conversions between them.
///
/// This module holds the unit catalog used by suffix expressions such as
/// `10 km` and by conversions such as `10 km in mi`. Units are grouped by
/// the physical quantity they measure, and only units of the same quantity
/// convert into each other.
///
/// # Responsibilities
/// - Declares the built in catalog of length, mass, time, temperature, and
///   data units.
/// - Converts magnitudes between compatible units, including offset scales.
/// - Supports registering user defined ratio units at runtime.
pub mod units;
/// General utilities for safe numeric conversion and text similarity.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the interpreter, parser, and evaluator. These include
/// safe conversions between integer and floating-point types and the
/// similarity scoring behind typo-tolerant identifier resolution.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u64`, `usize`, and `f64` without silent
///   data loss.
/// - Score how closely two identifiers resemble each other.
pub mod util;

/// Evaluates source text inside an existing environment.
///
/// The source is tokenized and parsed into statements, then every statement
/// runs against `environment`. State accumulates in the environment, so
/// repeated calls share variables, functions, and history. The returned
/// value renders one output line per statement whose result is not nil.
///
/// # Errors
/// Returns an error if tokenization or parsing fails, or if a statement
/// raises a runtime error. Statements before the failing one keep their
/// effect on `environment`.
///
/// # Examples
/// ```
/// use std::rc::Rc;
///
/// use unical::{evaluate, interpreter::evaluator::core::Environment, reference::ReferenceTable};
///
/// let mut environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
///
/// let result = evaluate("rent = 800\nrent * 2", &mut environment).unwrap();
/// assert_eq!(result.to_string(), "1600");
///
/// // The assignment above stays visible in later calls.
/// let result = evaluate("rent + 50", &mut environment).unwrap();
/// assert_eq!(result.to_string(), "850");
/// ```
pub fn evaluate(source: &str,
                environment: &mut Environment)
                -> Result<Value, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        while let Some((Token::NewLine | Token::Semicolon, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }

        statements.push(parse_statement(&mut iter)?);

        if let Some((token, line)) = iter.peek()
            && !matches!(token, Token::NewLine | Token::Semicolon)
        {
            return Err(Box::new(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                                       line:  *line, }));
        }
    }

    Ok(environment.eval_program(&statements)?)
}

/// Evaluates source text in a fresh environment.
///
/// This is the one-shot entry point: a new [`Environment`] with the bundled
/// reference table is created, the source runs in it, and the environment is
/// dropped afterwards.
///
/// # Errors
/// Returns an error if the bundled reference data fails to load, if parsing
/// fails, or if evaluation raises a runtime error.
///
/// # Examples
/// ```
/// let result = unical::run("2 + 2 * 3").unwrap();
///
/// assert_eq!(result.to_string(), "8");
/// ```
pub fn run(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut environment = Environment::new(Rc::new(ReferenceTable::bundled()?));

    evaluate(source, &mut environment)
}
