use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::MalformedColour { .. } => "MalformedColour",
            ErrorImpl::MalformedBoolean { .. } => "MalformedBoolean",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { text } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number may contain at most one decimal point",
                text
            )),
            ErrorImpl::MalformedColour {
                reason: ColourDefect::TooShort,
                text,
            } => ErrorTip::Suggestion(format!(
                "Invalid colour: `{}`, expected `#` followed by 6 hex digits",
                text
            )),
            ErrorImpl::MalformedColour {
                reason: ColourDefect::NonHexDigit,
                text,
            } => ErrorTip::Suggestion(format!(
                "Invalid colour: `{}`, only 0-9, a-f and A-F are hex digits",
                text
            )),
            ErrorImpl::MalformedBoolean { text } => ErrorTip::Suggestion(format!(
                "Invalid boolean: `{}`, expected `true` or `false`",
                text
            )),
            ErrorImpl::InvalidEscape { character } => ErrorTip::Suggestion(format!(
                "Unknown escape `\\{}`, try escaping the `\\` with `\\\\`",
                character
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Missing closing `\"`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Why a colour literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourDefect {
    TooShort,
    NonHexDigit,
}

impl Display for ColourDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColourDefect::TooShort => write!(f, "too short"),
            ColourDefect::NonHexDigit => write!(f, "non-hex digit"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("invalid number format (multiple decimal points): {text:?}")]
    MalformedNumber { text: String },
    #[error("invalid colour format ({reason}): {text:?}")]
    MalformedColour { reason: ColourDefect, text: String },
    #[error("invalid boolean literal: {text:?}")]
    MalformedBoolean { text: String },
    #[error("invalid escape sequence: \\{character}")]
    InvalidEscape { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
}
