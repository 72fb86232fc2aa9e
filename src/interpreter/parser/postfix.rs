use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Attaches postfix suffixes to an already parsed expression.
///
/// Four suffix forms chain in any order after a prefix expression:
///
/// - a bare identifier labels the value with a unit: `10 km`,
/// - `%` turns the value into a percentage: `25%`,
/// - `.` accesses a record field: `hydrogen.atomic_mass`,
/// - `[...]` indexes an array: `shells[0]`.
///
/// A `%` followed by a value token is left in place so the infix loop can
/// treat it as the modulo operator. A `.` not followed by a field name is
/// likewise left for the infix loop to report.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the prefix expression.
/// - `expr`: The expression to attach suffixes to.
///
/// # Returns
/// The expression with all immediate suffixes applied.
///
/// # Errors
/// Returns a `ParseError` if an index expression fails to parse or its
/// closing bracket is missing.
pub(in crate::interpreter::parser) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>,
                                                           mut expr: Expr)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::Identifier(unit), line)) => {
                let line = *line;
                let unit = unit.clone();
                tokens.next();

                expr = Expr::UnitSuffix { expr: Box::new(expr),
                                          unit,
                                          line };
            },

            Some((Token::Percent, line)) => {
                let line = *line;
                let mut lookahead = tokens.clone();
                lookahead.next();

                // A value token after '%' means modulo, not a percentage.
                if matches!(lookahead.peek(),
                            Some((Token::Integer(_)
                                  | Token::Float(_)
                                  | Token::String(_)
                                  | Token::Identifier(_),
                                  _)))
                {
                    break;
                }
                tokens.next();

                expr = Expr::PercentSuffix { expr: Box::new(expr),
                                             line };
            },

            Some((Token::Dot, line)) => {
                let line = *line;
                let mut lookahead = tokens.clone();
                lookahead.next();

                let field = match lookahead.peek() {
                    Some((Token::Identifier(name), _)) => name.clone(),
                    Some((Token::String(text), _)) => text.clone(),
                    _ => break,
                };
                tokens.next();
                tokens.next();

                expr = Expr::FieldAccess { expr: Box::new(expr),
                                           field,
                                           line };
            },

            Some((Token::LBracket, line)) => {
                let line = *line;
                tokens.next();

                let index = parse_expression(tokens)?;
                match tokens.next() {
                    Some((Token::RBracket, _)) => {},
                    _ => return Err(ParseError::UnclosedBracket { line }),
                }

                expr = Expr::ArrayIndex { array: Box::new(expr),
                                          index: Box::new(index),
                                          line };
            },

            _ => break,
        }
    }

    Ok(expr)
}
