use tracing::{trace, warn};

use crate::{errors::errors::{Error, ErrorImpl}, Position};

use super::{recognizers::Recognizer, tokens::Token};

/// Returned by lookahead that runs off the end of the input.
pub const NUL: char = '\0';

/// Saved cursor state for a tentative scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
    line: u32,
}

/// A scanning session over an in-memory character sequence.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: Vec<char>,
    // Index of the next unconsumed character.
    offset: usize,
    line: u32,
    halted: Option<Error>,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        Cursor {
            source: source.chars().collect(),
            offset: 0,
            line: 1,
            halted: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset < self.source.len()
    }

    pub fn peek(&self) -> char {
        self.peek_at(1)
    }

    /// Character `n` places after the last consumed one, without consuming.
    ///
    /// Only guarded by `has_more`, so a lookahead that lands past the end of
    /// the input yields `NUL` rather than a character.
    pub fn peek_at(&self, n: usize) -> char {
        if !self.has_more() {
            return NUL;
        }

        (self.offset + n)
            .checked_sub(1)
            .and_then(|index| self.source.get(index).copied())
            .unwrap_or(NUL)
    }

    pub fn next(&mut self) -> char {
        let Some(&c) = self.source.get(self.offset) else {
            return NUL;
        };

        self.offset += 1;
        if c == '\n' {
            self.line += 1;
        }

        c
    }

    /// Index of the last consumed character, `-1` before the first.
    pub fn position(&self) -> isize {
        self.offset as isize - 1
    }

    /// Index of the next character to be consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Where a token starting at the next character would begin.
    pub fn token_start(&self) -> Position {
        Position::new(self.offset, self.line)
    }

    pub fn snapshot(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            line: self.line,
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.line = checkpoint.line;
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    fn halt(&mut self, error: Error) {
        self.halted = Some(error);
    }
}

/// Scans the next token, keeping the three ways a stream can stop apart.
///
/// `Ok(None)` is only returned once the input is exhausted. A character no
/// recognizer claims is an `UnrecognisedToken` error and leaves the cursor
/// where it was. A recognizer that fails validation halts the cursor, and
/// every later call reports the same error.
pub fn next_token(cursor: &mut Cursor, recognizers: &[Recognizer]) -> Result<Option<Token>, Error> {
    if let Some(error) = &cursor.halted {
        return Err(error.clone());
    }

    for recognizer in recognizers {
        if recognizer.claims(cursor) {
            let token = match recognizer.consume(cursor) {
                Ok(token) => token,
                Err(error) => {
                    cursor.halt(error.clone());
                    return Err(error);
                }
            };

            trace!(
                recognizer = recognizer.name(),
                kind = %token.kind,
                value = %token.value,
                index = token.position.index,
                line = token.position.line,
                "scanned token"
            );
            return Ok(Some(token));
        }
    }

    if cursor.has_more() {
        return Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: cursor.peek().to_string(),
            },
            cursor.token_start(),
        ));
    }

    Ok(None)
}

/// Returns the token of the first recognizer that claims the cursor, in
/// registry order.
///
/// `None` ends the stream. It is also returned when input remains but no
/// recognizer claims it, or when a recognizer rejected its span; check
/// `Cursor::has_more` to tell those apart from the end of the input.
pub fn tokenize(cursor: &mut Cursor, recognizers: &[Recognizer]) -> Option<Token> {
    match next_token(cursor, recognizers) {
        Ok(token) => token,
        Err(error) => {
            warn!(%error, "token stream ended before the end of input");
            None
        }
    }
}

/// Drains `tokenize` until it returns `None`.
pub fn tokenize_all(cursor: &mut Cursor, recognizers: &[Recognizer]) -> Vec<Token> {
    let mut tokens = vec![];

    while let Some(token) = tokenize(cursor, recognizers) {
        tokens.push(token);
    }

    tokens
}
