use std::io;

use pretty_assertions::assert_eq;

use crate::lex::{
    error::{LexicalError, Type as LexicalType},
    lexer::lex,
    location::Location,
    token::TokenKind,
};

use super::{
    error::{Container, ParsingError, Type},
    limits::Limits,
    parse_document, parse_reader, Parser,
};

macro_rules! assert_error {
    ($src:expr, $error:expr $(,)?) => {
        let result = parse_document($src).expect_err("should not parse");
        assert_eq!(($src, $error), ($src, result));
    };
}

fn syntax_error(error: Type, line: u32, start: usize, end: usize) -> ParsingError {
    ParsingError {
        error,
        line,
        location: Location::new(start, end),
    }
}

fn expect_description(src: &str) -> String {
    parse_document(src)
        .expect_err("should not parse")
        .get_description()
}

#[test]
fn test_valid_documents() {
    let cases = [
        r#"{"a": 1, "b": [true, false, null]}"#,
        "{}",
        "[]",
        "[[], {}, [[]]]",
        "42",
        "1.5e+10",
        r#""lonely string""#,
        "TRUE",
        "NULL",
        "  [1, 2, 3]  ",
        "{\n  \"name\": \"x\",\r\n  \"tags\": [\n    \"a\", \"b\"\n  ]\n}\n",
        r#"{"nested": {"deeper": {"deepest": [FALSE]}}}"#,
    ];

    for src in cases {
        assert_eq!((src, parse_document(src)), (src, Ok(())));
    }
}

#[test]
fn test_missing_value() {
    assert_error!(
        r#"{"a": }"#,
        syntax_error(
            Type::UnexpectedToken {
                token: TokenKind::RightBrace
            },
            1,
            6,
            7
        ),
    );
    assert_eq!(expect_description(r#"{"a": }"#), "Unexpected token: R_LLAVE");
}

#[test]
fn test_trailing_comma() {
    assert_error!(
        "[1, 2,]",
        syntax_error(
            Type::UnexpectedToken {
                token: TokenKind::RightBracket
            },
            1,
            6,
            7
        ),
    );
    assert_eq!(expect_description("[1, 2,]"), "Unexpected token: R_CORCHETE");
    assert_eq!(
        expect_description(r#"{"a": 1,}"#),
        "Expected key as string, found: R_LLAVE"
    );
}

#[test]
fn test_object_errors() {
    assert_error!(
        "{1: 2}",
        syntax_error(
            Type::ExpectedKey {
                token: TokenKind::NumberLiteral
            },
            1,
            1,
            2
        ),
    );
    assert_error!(
        r#"{"a" 1}"#,
        syntax_error(
            Type::ExpectedColon {
                token: TokenKind::NumberLiteral
            },
            1,
            5,
            6
        ),
    );
    assert_error!(
        r#"{"a": 1 "b": 2}"#,
        syntax_error(
            Type::ExpectedDelimiter {
                token: TokenKind::StringLiteral,
                container: Container::Object,
            },
            1,
            8,
            11
        ),
    );
    assert_eq!(
        expect_description(r#"{"a" 1}"#),
        "Expected ':' after key, found: LITERAL_NUM"
    );
    assert_eq!(
        expect_description(r#"{"a": 1 "b": 2}"#),
        "Expected ',' or '}' in object, found: LITERAL_CADENA"
    );
}

#[test]
fn test_array_errors() {
    assert_error!(
        "[1 2]",
        syntax_error(
            Type::ExpectedDelimiter {
                token: TokenKind::NumberLiteral,
                container: Container::Array,
            },
            1,
            3,
            4
        ),
    );
    assert_eq!(
        expect_description("[1 2]"),
        "Expected ',' or ']' in array, found: LITERAL_NUM"
    );
    assert_eq!(expect_description("[:]"), "Unexpected token: DOS_PUNTOS");
}

#[test]
fn test_extra_data() {
    assert_error!(
        "[1] 2",
        syntax_error(
            Type::ExtraData {
                token: TokenKind::NumberLiteral
            },
            1,
            4,
            5
        ),
    );
    assert_eq!(
        expect_description("{}\n{}"),
        "Extra data after JSON value, found: L_LLAVE"
    );
}

#[test]
fn test_early_eof() {
    assert_error!(
        "[1,",
        syntax_error(
            Type::UnexpectedEof {
                expected: "value".into()
            },
            1,
            3,
            3
        ),
    );
    assert_error!(
        "",
        syntax_error(
            Type::UnexpectedEof {
                expected: "value".into()
            },
            0,
            0,
            0
        ),
    );
    assert_eq!(
        expect_description("{"),
        "Unexpected end of input, expected key as string"
    );
    assert_eq!(
        expect_description("{\"a\"\n"),
        "Unexpected end of input, expected ':' after key"
    );
    assert_eq!(
        expect_description("[1"),
        "Unexpected end of input, expected ',' or ']'"
    );
    assert_eq!(
        expect_description(r#"{"a": [1]"#),
        "Unexpected end of input, expected ',' or '}'"
    );
}

#[test]
fn test_error_line() {
    let error = parse_document("{\n  \"a\": ,\n}").expect_err("should not parse");

    assert_eq!(
        error,
        syntax_error(
            Type::UnexpectedToken {
                token: TokenKind::Comma
            },
            2,
            7,
            8
        )
    );
    assert_eq!(
        error.to_string(),
        "Syntax error at line 2: Unexpected token: COMA"
    );
}

#[test]
fn test_lexical_error_stops_parsing() {
    let error = parse_document("[-1]").expect_err("should not parse");

    assert_eq!(
        error,
        ParsingError {
            error: Type::LexicalError {
                error: LexicalError {
                    error: LexicalType::UnrecognizedText { text: "-".into() },
                    line: 1,
                    location: Location::new(1, 2),
                }
            },
            line: 1,
            location: Location::new(1, 2),
        }
    );
    assert_eq!(error.to_string(), "Lexical error at line 1: '-'");
    assert_eq!(error.get_description(), "lexical error: unrecognized text '-'");
}

#[test]
fn test_lexical_error_on_first_token() {
    let error = Parser::new(lex("abc {}")).err().expect("should not start");

    assert_eq!(error.to_string(), "Lexical error at line 1: 'abc'");
}

#[test]
fn test_nesting_limit() {
    let parse_with = |src: &str, depth: u32| {
        Parser::with_limits(lex(src), Limits::new(depth)).and_then(Parser::parse)
    };

    assert_eq!(parse_with("[[1]]", 2), Ok(()));
    assert_eq!(parse_with(r#"{"a": [1]}"#, 2), Ok(()));
    assert_eq!(
        parse_with("[[[1]]]", 2),
        Err(syntax_error(Type::NestingTooDeep { limit: 2 }, 1, 2, 3))
    );
    assert_eq!(parse_with("7", 0), Ok(()));
    assert_eq!(
        parse_with("[]", 0),
        Err(syntax_error(Type::NestingTooDeep { limit: 0 }, 1, 0, 1))
    );
}

#[test]
fn test_default_nesting_limit() {
    let depth = Limits::DEFAULT_NESTING_DEPTH as usize;

    let allowed = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(parse_document(&allowed), Ok(()));

    let too_deep = format!("{}{}", "[".repeat(depth + 1), "]".repeat(depth + 1));
    assert_eq!(
        parse_document(&too_deep).map_err(|error| error.error),
        Err(Type::NestingTooDeep {
            limit: Limits::DEFAULT_NESTING_DEPTH
        })
    );
}

#[test]
fn test_unbounded_nesting() {
    let depth = Limits::DEFAULT_NESTING_DEPTH as usize + 72;
    let parse_unbounded =
        |src: &str| Parser::with_limits(lex(src), Limits::unbounded()).and_then(Parser::parse);

    let arrays = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(parse_unbounded(&arrays), Ok(()));

    let objects = format!("{}null{}", r#"{"k": "#.repeat(depth), "}".repeat(depth));
    assert_eq!(parse_unbounded(&objects), Ok(()));
    assert!(parse_document(&objects).is_err());
}

#[test]
fn test_reader_input() {
    let input = io::Cursor::new("{\n  \"list\": [1, 2.5, NULL]\n}\n");

    assert_eq!(parse_reader(input), Ok(()));
    assert_eq!(
        parse_reader(io::Cursor::new("[\n1,\n")).map_err(|error| error.line),
        Err(2)
    );
}
