//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way the demo driver does: build a
//! registry once, then call `tokenize` until it returns `None`.

use tokenizer::{
    lexer::{
        lexer::{next_token, tokenize, tokenize_all, Cursor},
        recognizers::default_registry,
        tokens::TokenKind,
    },
    Position,
};

const SAMPLE: &str = " <>h</> 11_ . r22 _dr 33  #434334567876543\n  #ffg\"fff //df    9\n 8";

#[test]
fn test_scan_demo_sample() {
    let mut cursor = Cursor::new(SAMPLE);
    let tokens = tokenize_all(&mut cursor, &default_registry());

    let expected = vec![
        (TokenKind::Whitespace, " ", 0, 1),
        (TokenKind::HtmlTag, "<>", 1, 1),
        (TokenKind::Identifier, "h", 3, 1),
        (TokenKind::HtmlTag, "</>", 4, 1),
        (TokenKind::Whitespace, " ", 7, 1),
        (TokenKind::Number, "11", 8, 1),
        (TokenKind::Identifier, "_", 10, 1),
        (TokenKind::Whitespace, " ", 11, 1),
        (TokenKind::Punctuation, ".", 12, 1),
        (TokenKind::Whitespace, " ", 13, 1),
        (TokenKind::Identifier, "r22", 14, 1),
        (TokenKind::Whitespace, " ", 17, 1),
        (TokenKind::Identifier, "_dr", 18, 1),
        (TokenKind::Whitespace, " ", 21, 1),
        (TokenKind::Number, "33", 22, 1),
        (TokenKind::Whitespace, "  ", 24, 1),
        (TokenKind::HexColor, "#434334", 26, 1),
        (TokenKind::Number, "567876543", 33, 1),
        (TokenKind::Whitespace, "\n  ", 42, 1),
        (TokenKind::HexColor, "#ffg000", 45, 2),
        (TokenKind::Unexpected, "\"", 49, 2),
        (TokenKind::Identifier, "fff", 50, 2),
        (TokenKind::Whitespace, " ", 53, 2),
        (TokenKind::Comment, "//df    9\n", 54, 2),
        (TokenKind::Whitespace, " ", 64, 3),
        (TokenKind::Number, "8", 65, 3),
    ];

    let actual: Vec<(TokenKind, &str, usize, u32)> = tokens
        .iter()
        .map(|t| (t.kind, t.value.as_str(), t.position.index, t.position.line))
        .collect();

    assert_eq!(actual, expected);
    assert!(!cursor.has_more());
}

#[test]
fn test_stream_stops_at_invalid_phone_number() {
    let mut cursor = Cursor::new("call +96651 now");
    let registry = default_registry();

    let mut values = vec![];
    while let Some(token) = tokenize(&mut cursor, &registry) {
        values.push(token.value);
    }

    assert_eq!(values, vec!["call", " "]);
    assert!(cursor.has_more());
}

#[test]
fn test_three_ways_to_stop() {
    let registry = default_registry();

    let mut finished = Cursor::new("done");
    next_token(&mut finished, &registry).unwrap();
    assert_eq!(next_token(&mut finished, &registry), Ok(None));

    let mut stalled = Cursor::new("\u{301}");
    let error = next_token(&mut stalled, &registry).unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position(), &Position::new(0, 1));

    let mut rejected = Cursor::new("+9665");
    let error = next_token(&mut rejected, &registry).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidPhoneNumber");
}

#[test]
fn test_token_display_matches_driver_format() {
    let mut cursor = Cursor::new("\n@me");
    let registry = default_registry();
    tokenize(&mut cursor, &registry).unwrap();

    let account = tokenize(&mut cursor, &registry).unwrap();
    assert_eq!(
        account.to_string(),
        "Token: @me \nType: Account | Position: 1 | Line: 2"
    );
}
