use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses the prefix position of an expression.
///
/// Handles everything an expression can begin with:
///
/// - numeric and string literals,
/// - identifiers, which become calls when immediately followed by `(`,
/// - grouping parentheses,
/// - array literals,
/// - the prefix operators `-`, `!`, and `~`.
///
/// Prefix operators bind tighter than any infix operator, so `-10 ^ 2`
/// squares negative ten. Suffixes still apply to the whole prefix expression;
/// attaching them is the caller's job.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the token cannot begin an expression,
/// - a grouping or array literal is left unclosed,
/// - input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Integer(*value),
                               line:  *line, })
        },
        Some((Token::Float(value), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Float(*value),
                               line:  *line, })
        },
        Some((Token::String(text), line)) => {
            Ok(Expr::Literal { value: LiteralValue::String(text.clone()),
                               line:  *line, })
        },

        Some((Token::Identifier(name), line)) => parse_identifier_prefix(tokens, name, *line),

        Some((Token::Minus, line)) => parse_unary(tokens, UnaryOperator::Negate, *line),
        Some((Token::Bang, line)) => parse_unary(tokens, UnaryOperator::Not, *line),
        Some((Token::Tilde, line)) => parse_unary(tokens, UnaryOperator::Round, *line),

        Some((Token::LParen, line)) => parse_grouping(tokens, *line),
        Some((Token::LBracket, line)) => parse_array_literal(tokens, *line),

        Some((token, line)) => {
            Err(ParseError::UnsupportedPrefix { token: format!("{token:?}"),
                                                line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an identifier in prefix position.
///
/// An identifier immediately followed by `(` is a function call with a
/// comma-separated argument list; anything else is a variable reference.
fn parse_identifier_prefix<'a, I>(tokens: &mut Peekable<I>,
                                  name: &str,
                                  line: usize)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen, line)?;

        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments,
                                       line });
    }

    Ok(Expr::Variable { name: name.to_string(),
                        line })
}

/// Parses the operand of a prefix operator.
///
/// The operand is another prefix expression, never a full binding loop, so
/// prefix operators outbind every infix operator.
fn parse_unary<'a, I>(tokens: &mut Peekable<I>, op: UnaryOperator, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let operand = parse_prefix(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(operand),
                       line })
}

/// Parses a parenthesized expression and unwraps it.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(ParseError::UnclosedParenthesis { line }),
    }
}

/// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
///
/// An empty array `[]` is accepted.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket, line)?;

    Ok(Expr::ArrayLiteral { elements,
                            line })
}
