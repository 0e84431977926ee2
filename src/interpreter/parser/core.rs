use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::binary::parse_comparison,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, comparison, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_comparison(tokens)
}

/// Parses a complete token stream into exactly one expression.
///
/// The stream is expected to end with [`Token::EndOfInput`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). After the expression is
/// parsed the cursor must sit on that marker; anything else is reported as a
/// trailing token.
///
/// # Errors
/// - `EmptyExpression` if the stream holds nothing but the end marker.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use benchexpr::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("1 + x").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
///
/// assert_eq!(expr,
///            Expr::binary(Expr::Number { value: 1.0 },
///                         BinaryOperator::Add,
///                         Expr::Variable { name: "x".to_string() }));
/// ```
pub fn parse_tokens(tokens: &[Spanned]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    match iter.peek() {
        None | Some((Token::EndOfInput, _)) => return Err(ParseError::EmptyExpression),
        Some(_) => {},
    }

    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        None | Some((Token::EndOfInput, _)) => Ok(expr),
        Some((tok, position)) => Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                                             position: *position, }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> ParseResult<Expr> {
        parse_tokens(&tokenize(source).unwrap())
    }

    fn num(value: f64) -> Expr {
        Expr::Number { value }
    }

    fn var(name: &str) -> Expr {
        Expr::Variable { name: name.to_string() }
    }

    #[test]
    fn precedence_levels() {
        // 1 + 2 * 3 < 4
        assert_eq!(parse("1 + 2 * 3 < 4").unwrap(),
                   Expr::binary(Expr::binary(num(1.0),
                                             BinaryOperator::Add,
                                             Expr::binary(num(2.0), BinaryOperator::Mul, num(3.0))),
                                BinaryOperator::Less,
                                num(4.0)));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(parse("2^3^2").unwrap(),
                   Expr::binary(num(2.0),
                                BinaryOperator::Pow,
                                Expr::binary(num(3.0), BinaryOperator::Pow, num(2.0))));
    }

    #[test]
    fn power_binds_tighter_than_sign() {
        assert_eq!(parse("-2^2").unwrap(),
                   Expr::unary(UnaryOperator::Negate,
                               Expr::binary(num(2.0), BinaryOperator::Pow, num(2.0))));
        assert_eq!(parse("2^-1").unwrap(),
                   Expr::binary(num(2.0),
                                BinaryOperator::Pow,
                                Expr::unary(UnaryOperator::Negate, num(1.0))));
    }

    #[test]
    fn subtraction_and_division_fold_left() {
        assert_eq!(parse("8 - 4 - 2").unwrap(),
                   Expr::binary(Expr::binary(num(8.0), BinaryOperator::Sub, num(4.0)),
                                BinaryOperator::Sub,
                                num(2.0)));
        assert_eq!(parse("8 / 4 / 2").unwrap(),
                   Expr::binary(Expr::binary(num(8.0), BinaryOperator::Div, num(4.0)),
                                BinaryOperator::Div,
                                num(2.0)));
    }

    #[test]
    fn chained_comparisons_fold_left() {
        assert_eq!(parse("a < b < c").unwrap(),
                   Expr::binary(Expr::binary(var("a"), BinaryOperator::Less, var("b")),
                                BinaryOperator::Less,
                                var("c")));
    }

    #[test]
    fn calls_and_groups() {
        assert_eq!(parse("random()").unwrap(),
                   Expr::Call { name: "random".to_string(),
                                args: vec![] });
        assert_eq!(parse("max((x + 1))").unwrap(),
                   Expr::Call { name: "max".to_string(),
                                args: vec![Expr::binary(var("x"), BinaryOperator::Add, num(1.0))] });
    }

    #[test]
    fn stacked_signs() {
        assert_eq!(parse("1 + +-2").unwrap(),
                   Expr::binary(num(1.0),
                                BinaryOperator::Add,
                                Expr::unary(UnaryOperator::Plus,
                                            Expr::unary(UnaryOperator::Negate, num(2.0)))));
    }

    #[test]
    fn empty_and_trailing() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse("  "), Err(ParseError::EmptyExpression));
        assert_eq!(parse("1 2"),
                   Err(ParseError::UnexpectedTrailingTokens { token:    "2".to_string(),
                                                              position: 2, }));
        assert_eq!(parse("(1))"),
                   Err(ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                              position: 3, }));
    }

    #[test]
    fn missing_operands_and_parens() {
        assert_eq!(parse("1 +"), Err(ParseError::UnexpectedEndOfInput { position: 3 }));
        assert_eq!(parse("(1 + 2"),
                   Err(ParseError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                          position: 6, }));
        assert_eq!(parse("max(1 2)"),
                   Err(ParseError::ExpectedClosingParen { found:    "2".to_string(),
                                                          position: 6, }));
        assert_eq!(parse("* 2"),
                   Err(ParseError::UnexpectedToken { token:    "*".to_string(),
                                                     position: 0, }));
        assert_eq!(parse("()"),
                   Err(ParseError::UnexpectedToken { token:    ")".to_string(),
                                                     position: 1, }));
    }
}
