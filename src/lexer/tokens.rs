use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Keyword);
        map.insert("float", TokenKind::Keyword);
        map.insert("int", TokenKind::Keyword);
        map.insert("bool", TokenKind::Keyword);
        map.insert("colour", TokenKind::Keyword);
        map.insert("__width", TokenKind::Keyword);
        map.insert("__height", TokenKind::Keyword);
        map.insert("__read", TokenKind::Keyword);
        map.insert("__randi", TokenKind::Keyword);
        map.insert("__print", TokenKind::Keyword);
        map.insert("__delay", TokenKind::Keyword);
        map.insert("__pixelr", TokenKind::Keyword);
        map.insert("__pixel", TokenKind::Keyword);
        map.insert("return", TokenKind::Keyword);
        map.insert("if", TokenKind::Keyword);
        map.insert("else", TokenKind::Keyword);
        map.insert("for", TokenKind::Keyword);
        map.insert("while", TokenKind::Keyword);
        map.insert("fun", TokenKind::Keyword);
        map.insert("not", TokenKind::Keyword);

        map.insert("true", TokenKind::BooleanLiteral);
        map.insert("false", TokenKind::BooleanLiteral);
        map
    };
}

/// Single-character operators. `=` is listed here too; the scanner routes it
/// through the assign state but emits it the same way.
pub const OPERATOR_CHARS: &[char] = &['*', '+', '/', '-', '=', '<', '>', '!', ':'];

pub const DELIMITER_CHARS: &[char] = &['{', '}', ',', ';', '(', ')'];

pub const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    ColourLiteral,
    Keyword,
    Operator,
    Delimiter,
    BooleanLiteral,
    StringLiteral,
}

impl TokenKind {
    /// Name used when printing tokens, e.g. `INTEGER_LITERAL`.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::ColourLiteral => "COLOUR_LITERAL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A classified lexeme. String literals hold their decoded content in
/// `value`; every other kind holds the exact source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type: {} | Value: {}", self.kind, self.value)
    }
}
