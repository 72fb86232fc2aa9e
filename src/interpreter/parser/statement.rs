use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function definition (`define f(x) => x * x`),
/// - an assignment (`rent = 1200`),
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// The statement's source line is taken from the next available token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses a function definition of the form
/// `define <name>(param1, param2, ...) => <body>`.
///
/// The body is one or more statements separated by `;`, running to the end
/// of the line. The last statement of the body produces the call result.
///
/// If the next token is not `define`, this function returns `Ok(None)` and
/// does not consume any input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible `define`.
///
/// # Returns
/// - `Ok(Some(Statement::Function))` if a definition is parsed,
/// - `Ok(None)` if no definition is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name, parentheses, or `=>` are missing,
/// - parameters fail to parse,
/// - the body is empty or malformed.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Define, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        _ => return Err(ParseError::InvalidFunctionDefinition { line }),
    };
    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => return Err(ParseError::InvalidFunctionDefinition { line }),
    }

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen, line)?;

    match tokens.next() {
        Some((Token::Arrow, _)) => {},
        _ => return Err(ParseError::InvalidFunctionDefinition { line }),
    }

    let mut body = Vec::new();
    loop {
        match tokens.peek() {
            None | Some((Token::NewLine, _)) => break,
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            _ => body.push(parse_statement(tokens)?),
        }
    }
    if body.is_empty() {
        return Err(ParseError::InvalidFunctionDefinition { line });
    }

    Ok(Some(Statement::Function(FunctionDef { name,
                                              params,
                                              body,
                                              line })))
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead:
/// if the next token is an identifier and the following token is `=`, an
/// assignment is parsed.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Equals, line)) = lookahead.peek() {
            let name = if let Some((Token::Identifier(n), _)) = tokens.next() {
                n.clone()
            } else {
                unreachable!()
            };
            let line = *line;
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name,
                                                   value,
                                                   line }));
        }
    }
    Ok(None)
}
