use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{postfix::parse_postfix, prefix::parse_prefix},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Returns the infix binding power of a token.
///
/// Operators with higher powers bind their operands more tightly:
///
/// | Power | Tokens                           |
/// |-------|----------------------------------|
/// | 40    | `^`                              |
/// | 30    | `*`, `/`                         |
/// | 20    | `+`, `-`                         |
/// | 15    | `%` (modulo)                     |
/// | 10    | `==`, `!=`, `<`, `>`, `<=`, `>=` |
/// | 5     | `in`, `=>`                       |
///
/// Closing delimiters and statement separators report a negative power so
/// every operator loop stops on them. Tokens with no infix meaning report
/// zero and are rejected when they show up in operator position.
fn binding_power(token: &Token) -> i8 {
    match token {
        Token::In | Token::Arrow => 5,

        Token::EqualEqual
        | Token::BangEqual
        | Token::Less
        | Token::Greater
        | Token::LessEqual
        | Token::GreaterEqual => 10,

        Token::Percent => 15,
        Token::Plus | Token::Minus => 20,
        Token::Star | Token::Slash => 30,
        Token::Caret => 40,

        Token::RParen | Token::RBracket | Token::Comma | Token::Semicolon | Token::NewLine => -1,

        _ => 0,
    }
}

/// Maps an infix token to its binary operator.
///
/// `=>` doubles as a spelling of the conversion operator, so `10 m => km`
/// behaves exactly like `10 m in km`.
fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::In | Token::Arrow => Some(BinaryOperator::Convert),
        _ => None,
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It starts the binding power loop at the lowest level, so every infix
/// operator is accepted.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binding(tokens, 0)
}

/// Parses an expression whose operators all bind at least as tightly as
/// `min_power`.
///
/// The prefix position is parsed first and suffixes are attached to it, then
/// the loop folds infix operators left-associatively for as long as the
/// upcoming token binds tightly enough. Operators recurse with their own
/// power plus one, which is what makes equal powers group to the left.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `min_power`: The weakest binding power this call may consume.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the prefix position fails to parse,
/// - a token without infix meaning shows up in operator position.
pub(in crate::interpreter::parser) fn parse_binding<'a, I>(tokens: &mut Peekable<I>,
                                                           min_power: i8)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let prefix = parse_prefix(tokens)?;
    let mut left = parse_postfix(tokens, prefix)?;

    while let Some((token, line)) = tokens.peek() {
        let power = binding_power(token);
        if power < min_power {
            break;
        }

        let line = *line;
        let Some(op) = token_to_binary_operator(token) else {
            return Err(ParseError::UnsupportedOperator { token: format!("{token:?}"),
                                                         line });
        };
        tokens.next();

        let right = parse_binding(tokens, power + 1)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}
