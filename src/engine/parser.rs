use nom::{
    IResult,
    Parser, // Import the Parser trait to use its methods like .map() and .parse()
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, multispace0, multispace1, satisfy},
    combinator::{eof, map_res, opt, recognize, value},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, terminated},
};
use thiserror::Error;
use tracing::trace;

use crate::engine::ast::{Expr, Statement};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected input: {0:?}")]
    UnexpectedInput(String),
    #[error("invalid syntax: {0}")]
    Syntax(String),
}

// A single punctuation character, skipping any whitespace in front of it.
fn punct<'a>(c: char) -> impl Parser<&'a str, Output = char, Error = nom::error::Error<&'a str>> {
    preceded(multispace0, char(c))
}

// Parses an optionally negative integer literal that fits in an i64 - raw token.
#[tracing::instrument(level = "trace", skip(input), fields(input = %input))]
fn parse_integer_raw(input: &str) -> IResult<&str, Expr> {
    trace!("Attempting to parse raw integer token");
    map_res(recognize(pair(opt(char('-')), digit1)), |digits: &str| {
        digits.parse::<i64>().map(Expr::Integer)
    })
    .parse(input)
}

// Parses a double-quoted string literal. There are no escape sequences.
#[tracing::instrument(level = "trace", skip(input), fields(input = %input))]
fn parse_string_raw(input: &str) -> IResult<&str, Expr> {
    trace!("Attempting to parse raw string token");
    delimited(char('"'), take_while(|c: char| c != '"'), char('"'))
        .map(|s: &str| Expr::String(s.to_string()))
        .parse(input)
}

// Parses the text of an identifier: a letter or underscore, then letters, digits or underscores.
fn identifier_name(input: &str) -> IResult<&str, &str> {
    let initial_char = satisfy(|c: char| c.is_alphabetic() || c == '_');
    let subsequent_char = satisfy(|c: char| c.is_alphanumeric() || c == '_');
    recognize(pair(initial_char, many0(subsequent_char))).parse(input)
}

#[tracing::instrument(level = "trace", skip(input), fields(input = %input))]
fn parse_identifier_raw(input: &str) -> IResult<&str, Expr> {
    trace!("Attempting to parse identifier");
    identifier_name
        .map(|name: &str| Expr::Identifier(name.to_string()))
        .parse(input)
}

#[tracing::instrument(level = "trace", skip(input), fields(input = %input))]
fn parse_array_raw(input: &str) -> IResult<&str, Expr> {
    trace!("Attempting to parse raw array literal");
    delimited(
        char('['),
        separated_list0(punct(','), parse_expr),
        punct(']'),
    )
    .map(Expr::Array)
    .parse(input)
}

// The parenthesized argument list that follows a callee.
fn call_arguments(input: &str) -> IResult<&str, Vec<Expr>> {
    delimited(
        punct('('),
        separated_list0(punct(','), parse_expr),
        punct(')'),
    )
    .parse(input)
}

// Any single non-call expression, without surrounding whitespace.
fn primary_raw(input: &str) -> IResult<&str, Expr> {
    alt((
        parse_integer_raw,
        parse_string_raw,
        parse_array_raw,
        parse_identifier_raw,
    ))
    .parse(input)
}

/// Parses one expression, skipping leading whitespace. Call suffixes chain, so
/// `f(a)(b)` calls the result of `f(a)` with `b`.
#[tracing::instrument(level = "trace", skip(input), fields(input = %input))]
pub fn parse_expr(input: &str) -> IResult<&str, Expr> {
    trace!("Attempting to parse expression");
    let (input, callee) = preceded(multispace0, primary_raw).parse(input)?;
    let (input, calls) = many0(call_arguments).parse(input)?;
    let expr = calls
        .into_iter()
        .fold(callee, |function, arguments| Expr::Call {
            function: Box::new(function),
            arguments,
        });
    Ok((input, expr))
}

fn parse_let(input: &str) -> IResult<&str, Statement> {
    (
        preceded(multispace0, tag("let")),
        multispace1,
        identifier_name,
        punct('='),
        parse_expr,
    )
        .map(|(_, _, name, _, value)| Statement::Let {
            name: name.to_string(),
            value,
        })
        .parse(input)
}

// Statements end at `;`, whitespace or end of input, so `5x` is not two statements.
fn statement_end(input: &str) -> IResult<&str, ()> {
    alt((value((), punct(';')), value((), multispace1), value((), eof))).parse(input)
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    terminated(
        alt((parse_let, parse_expr.map(Statement::Expression))),
        statement_end,
    )
    .parse(input)
}

/// Parses a whole program. Input that is not consumed by a statement is an error.
#[tracing::instrument(level = "trace", skip(input), fields(input = %input))]
pub fn parse_program(input: &str) -> Result<Vec<Statement>, ParseError> {
    let (remaining, statements) = terminated(many0(parse_statement), multispace0)
        .parse(input)
        .map_err(|e| ParseError::Syntax(e.to_string()))?;
    if !remaining.is_empty() {
        return Err(ParseError::UnexpectedInput(remaining.to_string()));
    }
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ast::{call, ident};
    use crate::logging::init_test_logging;

    #[test]
    fn test_parse_integer() {
        init_test_logging();
        assert_eq!(parse_expr("123"), Ok(("", Expr::Integer(123))));
        assert_eq!(parse_expr("  -45"), Ok(("", Expr::Integer(-45))));
    }

    #[test]
    fn test_parse_integer_leaves_remaining_input() {
        init_test_logging();
        assert_eq!(parse_expr("7 rest"), Ok((" rest", Expr::Integer(7))));
    }

    #[test]
    fn test_parse_string() {
        init_test_logging();
        assert_eq!(
            parse_expr("\"hello world\""),
            Ok(("", Expr::String("hello world".to_string())))
        );
        assert_eq!(parse_expr("\"\""), Ok(("", Expr::String(String::new()))));
    }

    #[test]
    fn test_parse_identifier() {
        init_test_logging();
        assert_eq!(parse_expr("my_list2"), Ok(("", ident("my_list2"))));
    }

    #[test]
    fn test_parse_array_literal() {
        init_test_logging();
        assert_eq!(
            parse_expr("[1, \"a\" , [ ] ]"),
            Ok((
                "",
                Expr::Array(vec![
                    Expr::Integer(1),
                    Expr::String("a".to_string()),
                    Expr::Array(vec![]),
                ])
            ))
        );
    }

    #[test]
    fn test_parse_call() {
        init_test_logging();
        assert_eq!(
            parse_expr("push([1, 2], 3)"),
            Ok((
                "",
                call(
                    "push",
                    vec![
                        Expr::Array(vec![Expr::Integer(1), Expr::Integer(2)]),
                        Expr::Integer(3),
                    ]
                )
            ))
        );
        assert_eq!(parse_expr("puts()"), Ok(("", call("puts", vec![]))));
    }

    #[test]
    fn test_parse_nested_and_chained_calls() {
        init_test_logging();
        assert_eq!(
            parse_expr("first(rest(xs))"),
            Ok(("", call("first", vec![call("rest", vec![ident("xs")])])))
        );
        assert_eq!(
            parse_expr("f(1)(2)"),
            Ok((
                "",
                Expr::Call {
                    function: Box::new(call("f", vec![Expr::Integer(1)])),
                    arguments: vec![Expr::Integer(2)],
                }
            ))
        );
    }

    #[test]
    fn test_parse_empty_input_is_an_error() {
        init_test_logging();
        assert!(parse_expr("").is_err());
        assert!(parse_expr("   ").is_err());
    }

    #[test]
    fn test_parse_program_with_let_and_expressions() {
        init_test_logging();
        let program = parse_program("let a = [1, 2];\nlet b = push(a, 3)\nlen(b);").unwrap();
        assert_eq!(
            program,
            vec![
                Statement::Let {
                    name: "a".to_string(),
                    value: Expr::Array(vec![Expr::Integer(1), Expr::Integer(2)]),
                },
                Statement::Let {
                    name: "b".to_string(),
                    value: call("push", vec![ident("a"), Expr::Integer(3)]),
                },
                Statement::Expression(call("len", vec![ident("b")])),
            ]
        );
    }

    #[test]
    fn test_identifier_starting_with_let_is_not_a_let_statement() {
        init_test_logging();
        assert_eq!(
            parse_program("letters"),
            Ok(vec![Statement::Expression(ident("letters"))])
        );
    }

    #[test]
    fn test_parse_program_empty() {
        init_test_logging();
        assert_eq!(parse_program("  \n "), Ok(vec![]));
    }

    #[test]
    fn test_parse_program_rejects_trailing_garbage() {
        init_test_logging();
        assert_eq!(
            parse_program("len([1) + 2"),
            Err(ParseError::UnexpectedInput("len([1) + 2".to_string()))
        );
        assert_eq!(
            parse_program("puts(1) }"),
            Err(ParseError::UnexpectedInput("}".to_string()))
        );
    }

    #[test]
    fn test_parse_program_requires_separator_between_statements() {
        init_test_logging();
        assert_eq!(
            parse_program("5x"),
            Err(ParseError::UnexpectedInput("5x".to_string()))
        );
        assert_eq!(
            parse_program("len([1])len([2])"),
            Err(ParseError::UnexpectedInput("len([1])len([2])".to_string()))
        );
    }

    #[test]
    fn test_parse_program_accepts_each_separator() {
        init_test_logging();
        let expected = vec![
            Statement::Expression(Expr::Integer(1)),
            Statement::Expression(ident("x")),
        ];
        assert_eq!(parse_program("1;x"), Ok(expected.clone()));
        assert_eq!(parse_program("1 x"), Ok(expected.clone()));
        assert_eq!(parse_program("1\nx;"), Ok(expected.clone()));
        assert_eq!(parse_program("1 ; x "), Ok(expected));
    }

    #[test]
    fn test_parse_program_rejects_overflowing_integer() {
        init_test_logging();
        assert!(matches!(
            parse_program("99999999999999999999"),
            Err(ParseError::UnexpectedInput(_))
        ));
    }
}
