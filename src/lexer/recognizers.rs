use tracing::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl, PHONE_NUMBER_LENGTH},
    MK_RUN_HANDLER, MK_TOKEN,
};

use super::{
    classes::{is_digit, is_letter, is_letter_or_digit, is_punctuation, is_symbol, is_whitespace},
    lexer::{Checkpoint, Cursor},
    tokens::{Token, TokenKind},
};

/// Number of characters after `#` in a hex color.
pub const HEX_COLOR_DIGITS: usize = 6;

/// Country code a phone number literal has to start with.
pub const PHONE_PREFIX: [char; 5] = ['+', '9', '6', '6', '5'];

/// One token class: decides whether it applies at the cursor and, if so,
/// consumes its span.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Recognizer {
    Number,
    Identifier,
    Whitespace,
    String,
    HexColor,
    LineComment,
    Brackets,
    PhoneNumber,
    Account,
    Symbol,
    HtmlTag,
    Punctuation,

    // `//` line and `/* */` comments, as a replacement for LineComment
    Comment,
}

/// The recognizers in the order the demo driver uses them.
pub fn default_registry() -> Vec<Recognizer> {
    vec![
        Recognizer::Whitespace,
        Recognizer::LineComment,
        Recognizer::Number,
        Recognizer::Identifier,
        Recognizer::HexColor,
        Recognizer::HtmlTag,
        Recognizer::String,
        Recognizer::Account,
        Recognizer::Brackets,
        Recognizer::PhoneNumber,
        Recognizer::Punctuation,
        Recognizer::Symbol,
    ]
}

/// `default_registry` with `LineComment` swapped for `Comment`.
pub fn registry_with_block_comments() -> Vec<Recognizer> {
    default_registry()
        .into_iter()
        .map(|recognizer| match recognizer {
            Recognizer::LineComment => Recognizer::Comment,
            other => other,
        })
        .collect()
}

impl Recognizer {
    pub fn name(&self) -> &'static str {
        match self {
            Recognizer::Number => "number",
            Recognizer::Identifier => "identifier",
            Recognizer::Whitespace => "whitespace",
            Recognizer::String => "string",
            Recognizer::HexColor => "hex_color",
            Recognizer::LineComment => "line_comment",
            Recognizer::Brackets => "brackets",
            Recognizer::PhoneNumber => "phone_number",
            Recognizer::Account => "account",
            Recognizer::Symbol => "symbol",
            Recognizer::HtmlTag => "html_tag",
            Recognizer::Punctuation => "punctuation",
            Recognizer::Comment => "comment",
        }
    }

    /// Whether this recognizer applies at the cursor. Never consumes.
    pub fn claims(&self, cursor: &Cursor) -> bool {
        if !cursor.has_more() {
            return false;
        }

        let next = cursor.peek();
        match self {
            Recognizer::Number => is_digit(next),
            Recognizer::Identifier => is_letter(next) || next == '_',
            Recognizer::Whitespace => is_whitespace(next),
            Recognizer::String => next == '"',
            Recognizer::HexColor => next == '#',
            Recognizer::LineComment => next == '/' && cursor.peek_at(2) == '/',
            Recognizer::Brackets => next == '[',
            Recognizer::PhoneNumber => PHONE_PREFIX
                .iter()
                .enumerate()
                .all(|(i, &c)| cursor.peek_at(i + 1) == c),
            Recognizer::Account => next == '@',
            Recognizer::Symbol => is_symbol(next),
            Recognizer::HtmlTag => next == '<',
            Recognizer::Punctuation => is_punctuation(next),
            Recognizer::Comment => next == '/' && matches!(cursor.peek_at(2), '/' | '*'),
        }
    }

    /// Consumes this recognizer's span and builds its token.
    ///
    /// Expects `claims` to have returned true. Only a phone number of the
    /// wrong length fails; malformed strings, brackets and comments come
    /// back as `Unexpected` tokens instead.
    pub fn consume(&self, cursor: &mut Cursor) -> Result<Token, Error> {
        let token = match self {
            Recognizer::Number => MK_RUN_HANDLER!(cursor, TokenKind::Number, is_digit),
            Recognizer::Identifier => identifier_handler(cursor),
            Recognizer::Whitespace => MK_RUN_HANDLER!(cursor, TokenKind::Whitespace, is_whitespace),
            Recognizer::String => delimited_handler(cursor, TokenKind::String, '"'),
            Recognizer::HexColor => hex_color_handler(cursor),
            Recognizer::LineComment => line_comment_handler(cursor),
            Recognizer::Brackets => delimited_handler(cursor, TokenKind::SquareBrackets, ']'),
            Recognizer::PhoneNumber => phone_number_handler(cursor)?,
            Recognizer::Account => account_handler(cursor),
            Recognizer::Symbol => MK_RUN_HANDLER!(cursor, TokenKind::Symbol, is_symbol),
            Recognizer::HtmlTag => html_tag_handler(cursor),
            Recognizer::Punctuation => MK_RUN_HANDLER!(cursor, TokenKind::Punctuation, is_punctuation),
            Recognizer::Comment => comment_handler(cursor),
        };

        Ok(token)
    }
}

fn identifier_handler(cursor: &mut Cursor) -> Token {
    let position = cursor.token_start();
    let mut value = String::new();

    // The `_` arm sits outside the `has_more` guard; `peek` yields NUL at the
    // end of input so the loop still stops there.
    while (cursor.has_more() && is_letter_or_digit(cursor.peek())) || cursor.peek() == '_' {
        value.push(cursor.next());
    }

    MK_TOKEN!(TokenKind::Identifier, value, position)
}

/// Rolls back to `checkpoint` and re-consumes a single character as an
/// `Unexpected` token, so scanning resumes right after it.
fn recover(cursor: &mut Cursor, checkpoint: Checkpoint) -> Token {
    cursor.restore(checkpoint);

    let position = cursor.token_start();
    let mut value = String::new();
    if cursor.has_more() {
        value.push(cursor.next());
    }

    debug!(value = %value, index = position.index, line = position.line, "recovered from malformed span");
    MK_TOKEN!(TokenKind::Unexpected, value, position)
}

/// Opening character, then everything up to and including `close`.
fn delimited_handler(cursor: &mut Cursor, kind: TokenKind, close: char) -> Token {
    let checkpoint = cursor.snapshot();
    let position = cursor.token_start();
    let mut value = String::from(cursor.next());

    while cursor.has_more() {
        let c = cursor.next();
        value.push(c);

        if c == close {
            break;
        }
    }

    if !value.ends_with(close) {
        return recover(cursor, checkpoint);
    }

    MK_TOKEN!(kind, value, position)
}

fn hex_color_handler(cursor: &mut Cursor) -> Token {
    let position = cursor.token_start();
    let mut value = String::from(cursor.next());
    let mut digits = 0;

    while cursor.has_more() && is_letter_or_digit(cursor.peek()) && digits < HEX_COLOR_DIGITS {
        value.push(cursor.next());
        digits += 1;
    }

    // Short colors are padded, not read further.
    value.extend(std::iter::repeat('0').take(HEX_COLOR_DIGITS - digits));

    MK_TOKEN!(TokenKind::HexColor, value, position)
}

fn line_comment_handler(cursor: &mut Cursor) -> Token {
    let checkpoint = cursor.snapshot();
    let position = cursor.token_start();

    if cursor.peek() != '/' || cursor.peek_at(2) != '/' {
        return recover(cursor, checkpoint);
    }

    let mut value = String::new();
    while cursor.has_more() {
        let c = cursor.next();
        value.push(c);

        if c == '\n' {
            break;
        }
    }

    MK_TOKEN!(TokenKind::Comment, value, position)
}

fn phone_number_handler(cursor: &mut Cursor) -> Result<Token, Error> {
    let position = cursor.token_start();
    let mut value = String::from(cursor.next());
    let mut taken = 0;

    // Reads one character past the expected length so overlong numbers are
    // caught.
    while cursor.has_more() && cursor.peek() != ' ' && taken <= PHONE_NUMBER_LENGTH {
        value.push(cursor.next());
        taken += 1;
    }

    let length = value.chars().count();
    if length != PHONE_NUMBER_LENGTH {
        warn!(number = %value, length, "Phone number length should be 13 digits");
        return Err(Error::new(
            ErrorImpl::InvalidPhoneNumber {
                number: value,
                length,
            },
            position,
        ));
    }

    Ok(MK_TOKEN!(TokenKind::PhoneNumber, value, position))
}

fn account_handler(cursor: &mut Cursor) -> Token {
    let position = cursor.token_start();
    let mut value = String::new();

    while cursor.has_more()
        && cursor.peek() != '\n'
        && (is_letter_or_digit(cursor.peek()) || cursor.peek() == '@')
    {
        value.push(cursor.next());
    }

    MK_TOKEN!(TokenKind::Account, value, position)
}

fn html_tag_handler(cursor: &mut Cursor) -> Token {
    let position = cursor.token_start();
    let mut value = String::new();

    // No recovery: an unclosed tag is returned as far as it got.
    while cursor.has_more() && (is_letter_or_digit(cursor.peek()) || "</>".contains(cursor.peek())) {
        let c = cursor.next();
        value.push(c);

        if c == '>' {
            break;
        }
    }

    MK_TOKEN!(TokenKind::HtmlTag, value, position)
}

fn comment_handler(cursor: &mut Cursor) -> Token {
    let position = cursor.token_start();
    let mut value = String::from(cursor.next());

    while cursor.has_more() {
        let c = cursor.peek();
        if c == '\n' {
            break;
        }

        value.push(cursor.next());
        if c == '/' && value.ends_with("*/") {
            break;
        }
    }

    MK_TOKEN!(TokenKind::Comment, value, position)
}
