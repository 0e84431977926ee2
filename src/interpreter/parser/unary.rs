use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation). Signs
/// stack, so `+-x` is `+(-(x))`, and bind looser than `^`: `-2^2` is
/// `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => Some(UnaryOperator::Negate),
        Some((Token::Plus, _)) => Some(UnaryOperator::Plus),
        _ => None,
    };
    let Some(op) = op else {
        return parse_power(tokens);
    };
    tokens.next();

    let operand = parse_unary(tokens)?;
    Ok(Expr::unary(op, operand))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - number literals
/// - identifiers, which become variables or function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | identifier "(" expression? ")"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` when the stream ends where an operand belongs.
/// - `UnexpectedToken` for any other token in operand position.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::Number { value: *value }),
        Some((Token::Identifier(name), _)) => parse_identifier_or_function(tokens, name),
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((Token::EndOfInput, position)) => {
            Err(ParseError::UnexpectedEndOfInput { position: *position })
        },
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a parenthesized expression after its opening `(`.
///
/// # Errors
/// A missing closing parenthesis yields `ParseError::ExpectedClosingParen`
/// naming the token found instead.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let expr = parse_expression(tokens)?;
    expect_closing_paren(tokens)?;
    Ok(expr)
}

/// Parses the remainder of an identifier.
///
/// An identifier directly followed by `(` is a function call with zero or one
/// argument; otherwise it is a variable reference. Whether the function exists
/// or takes that many arguments is left to the evaluator, so that syntax can
/// be validated without knowing the builtins.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    if !matches!(tokens.peek(), Some((Token::LParen, _))) {
        return Ok(Expr::Variable { name: name.to_string() });
    }
    tokens.next();

    let mut args = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
    } else {
        args.push(parse_expression(tokens)?);
        expect_closing_paren(tokens)?;
    }

    Ok(Expr::Call { name: name.to_string(),
                    args })
}

fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((tok, position)) => Err(ParseError::ExpectedClosingParen { found:    tok.to_string(),
                                                                        position: *position, }),
        None => Err(ParseError::ExpectedClosingParen { found:    Token::EndOfInput.to_string(),
                                                       position: 0, }),
    }
}
