use std::fmt::Display;

use crate::Position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Whitespace,
    String,
    HexColor,
    Comment,
    SquareBrackets,
    PhoneNumber,
    Account,
    Symbol,
    HtmlTag,
    Punctuation,

    // Emitted when a recognizer backs out of a malformed span
    Unexpected,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Identifier => "Identifier",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::String => "String",
            TokenKind::HexColor => "Hex color",
            TokenKind::Comment => "Comment",
            TokenKind::SquareBrackets => "Square Brackets",
            TokenKind::PhoneNumber => "Phone number",
            TokenKind::Account => "Account",
            TokenKind::Symbol => "Symbol",
            TokenKind::HtmlTag => "HTMLTag",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Unexpected => "**Unexpected Token**",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token: {} \nType: {} | Position: {} | Line: {}",
            self.value, self.kind, self.position.index, self.position.line
        )
    }
}

impl Token {
    /// Length in characters, which is what positions are measured in.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
