//! Character classes, scanner states and the transition table that drives
//! the lexer.

use super::tokens::{DELIMITER_CHARS, OPERATOR_CHARS};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ScanState {
    Start,
    InIdentifier,
    InNumber,
    InColour,
    InBoolean,
    InAssignOrOperator,
    InString,
}

impl ScanState {
    pub const COUNT: usize = 7;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharClass {
    Whitespace,
    Alpha,
    Digit,
    Hash,
    Operator,
    Delimiter,
    Quote,
    Invalid,
}

impl CharClass {
    pub const COUNT: usize = 8;
}

/// Classifies a character. The checks run in a fixed order and the first
/// match wins, so letters never reach the operator set.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_whitespace() || c == '\x0b' {
        CharClass::Whitespace
    } else if c.is_ascii_alphabetic() || c == '_' {
        CharClass::Alpha
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c == '#' {
        CharClass::Hash
    } else if c == '"' {
        CharClass::Quote
    } else if OPERATOR_CHARS.contains(&c) {
        CharClass::Operator
    } else if DELIMITER_CHARS.contains(&c) {
        CharClass::Delimiter
    } else {
        CharClass::Invalid
    }
}

use CharClass as C;
use ScanState as S;

const BACK: Option<ScanState> = Some(S::Start);

/// Rows are indexed by `ScanState`, columns by `CharClass`, both in
/// declaration order. `None` rejects the character.
#[rustfmt::skip]
pub const TRANSITIONS: [[Option<ScanState>; CharClass::COUNT]; ScanState::COUNT] = [
    //               Whitespace      Alpha                   Digit                   Hash                Operator                        Delimiter       Quote               Invalid
    /* Start */      [Some(S::Start), Some(S::InIdentifier),  Some(S::InNumber),      Some(S::InColour),  Some(S::InAssignOrOperator),    Some(S::Start), Some(S::InString),  None],
    /* Identifier */ [BACK,           Some(S::InIdentifier),  Some(S::InIdentifier),  BACK,               BACK,                           BACK,           BACK,               BACK],
    /* Number */     [BACK,           BACK,                   Some(S::InNumber),      BACK,               BACK,                           BACK,           BACK,               BACK],
    /* Colour */     [BACK,           BACK,                   BACK,                   BACK,               BACK,                           BACK,           BACK,               BACK],
    /* Boolean */    [BACK,           BACK,                   BACK,                   BACK,               BACK,                           BACK,           BACK,               BACK],
    /* AssignOrOp */ [BACK,           BACK,                   BACK,                   BACK,               BACK,                           BACK,           BACK,               BACK],
    /* String */     [BACK,           BACK,                   BACK,                   BACK,               BACK,                           BACK,           BACK,               BACK],
];

pub fn transition(state: ScanState, class: CharClass) -> Option<ScanState> {
    TRANSITIONS[state as usize][class as usize]
}
