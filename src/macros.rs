//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used by the recognizers:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RUN_HANDLER!` - Consumes a run of characters of one class into a token
//!
//! These macros reduce boilerplate in the recognizer implementations.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Consumes characters from a cursor while `$class` holds for the next one and
/// yields the resulting token.
///
/// # Arguments
///
/// * `$cursor` - The cursor to consume from
/// * `$kind` - The TokenKind to create
/// * `$class` - A `fn(char) -> bool` membership predicate
///
/// # Example
///
/// ```ignore
/// Recognizer::Number => Ok(MK_RUN_HANDLER!(cursor, TokenKind::Number, is_digit)),
/// ```
#[macro_export]
macro_rules! MK_RUN_HANDLER {
    ($cursor:expr, $kind:expr, $class:expr) => {{
        let position = $cursor.token_start();
        let mut value = String::new();

        while $cursor.has_more() && $class($cursor.peek()) {
            value.push($cursor.next());
        }

        $crate::MK_TOKEN!($kind, value, position)
    }};
}
