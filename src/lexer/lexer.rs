use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{ColourDefect, Error, ErrorImpl},
    Position, MK_ERROR, MK_TOKEN,
};

use super::{
    automaton::{classify, transition, CharClass, ScanState},
    tokens::{Token, TokenKind, BOOLEAN_LITERALS, RESERVED_LOOKUP},
};

lazy_static! {
    static ref HEX_DIGITS: Regex = Regex::new("^[0-9A-Fa-f]{6}$").unwrap();
}

const COLOUR_DIGITS: usize = 6;

#[derive(Clone, Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    state: ScanState,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            state: ScanState::Start,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn enter(&mut self, state: ScanState) {
        trace!(from = ?self.state, to = ?state, pos = self.pos, "transition");
        self.state = state;
    }

    fn emit(&mut self, token: Token) {
        trace!(kind = %token.kind, value = ?token.value, pos = self.pos, "emit");
        self.push(token);
        self.state = ScanState::Start;
    }

    /// Runs one automaton step from `Start`: skips a whitespace character,
    /// emits a delimiter, or hands the cursor to the extractor for the state
    /// the table selects.
    pub fn step(&mut self) -> Result<(), Error> {
        debug_assert_eq!(self.state, ScanState::Start);

        let Some(c) = self.peek() else {
            return Ok(());
        };
        let class = classify(c);

        let Some(next) = transition(self.state, class) else {
            return Err(MK_ERROR!(
                self,
                ErrorImpl::UnexpectedCharacter { character: c },
                self.pos
            ));
        };

        match (next, class) {
            (ScanState::Start, CharClass::Whitespace) => {
                self.advance_n(c.len_utf8());
                Ok(())
            }
            (ScanState::Start, CharClass::Delimiter) => {
                self.lex_delimiter(c);
                Ok(())
            }
            (ScanState::InAssignOrOperator, _) => {
                self.enter(next);
                self.lex_operator(c);
                Ok(())
            }
            (state, _) => {
                self.enter(state);
                self.extract()
            }
        }
    }

    /// Extracts one token according to the current state.
    pub fn extract(&mut self) -> Result<(), Error> {
        match self.state {
            ScanState::Start => Ok(()),
            ScanState::InIdentifier => {
                self.lex_identifier();
                Ok(())
            }
            ScanState::InNumber => self.lex_number(),
            ScanState::InColour => self.lex_colour(),
            ScanState::InBoolean => self.lex_boolean(),
            ScanState::InAssignOrOperator => {
                match self.peek() {
                    Some(c) => self.lex_operator(c),
                    None => self.state = ScanState::Start,
                }
                Ok(())
            }
            ScanState::InString => self.lex_string(),
        }
    }

    /// Byte length of the identifier run at the cursor.
    fn identifier_run(&self) -> usize {
        self.remainder()
            .chars()
            .take_while(|c| {
                transition(ScanState::InIdentifier, classify(*c)) == Some(ScanState::InIdentifier)
            })
            .map(char::len_utf8)
            .sum()
    }

    pub fn lex_identifier(&mut self) {
        let len = self.identifier_run();
        let value = self.source[self.pos..self.pos + len].to_string();
        self.advance_n(len);

        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.emit(MK_TOKEN!(kind, value));
    }

    pub fn lex_boolean(&mut self) -> Result<(), Error> {
        let start = self.pos;
        let len = self.identifier_run();
        let value = &self.source[start..start + len];

        if !BOOLEAN_LITERALS.contains(&value) {
            return Err(MK_ERROR!(
                self,
                ErrorImpl::MalformedBoolean {
                    text: value.to_string()
                },
                start
            ));
        }

        let value = value.to_string();
        self.advance_n(len);
        self.emit(MK_TOKEN!(TokenKind::BooleanLiteral, value));
        Ok(())
    }

    pub fn lex_number(&mut self) -> Result<(), Error> {
        let start = self.pos;
        let mut end = start;
        let mut is_float = false;

        for c in self.source[start..].chars() {
            if c == '.' {
                if is_float {
                    return Err(MK_ERROR!(
                        self,
                        ErrorImpl::MalformedNumber {
                            text: self.source[start..=end].to_string()
                        },
                        start
                    ));
                }
                is_float = true;
            } else if transition(ScanState::InNumber, classify(c)) != Some(ScanState::InNumber) {
                break;
            }
            end += c.len_utf8();
        }

        let value = self.source[start..end].to_string();
        self.advance_n(end - start);

        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        self.emit(MK_TOKEN!(kind, value));
        Ok(())
    }

    pub fn lex_colour(&mut self) -> Result<(), Error> {
        let start = self.pos;
        let digits = self.source[start + 1..]
            .chars()
            .take(COLOUR_DIGITS)
            .collect::<String>();

        if digits.chars().count() < COLOUR_DIGITS {
            return Err(MK_ERROR!(
                self,
                ErrorImpl::MalformedColour {
                    reason: ColourDefect::TooShort,
                    text: self.source[start..].to_string()
                },
                start
            ));
        }

        let value = format!("#{}", digits);

        if !HEX_DIGITS.is_match(&digits) {
            return Err(MK_ERROR!(
                self,
                ErrorImpl::MalformedColour {
                    reason: ColourDefect::NonHexDigit,
                    text: value
                },
                start
            ));
        }

        self.advance_n(value.len());
        self.emit(MK_TOKEN!(TokenKind::ColourLiteral, value));
        Ok(())
    }

    /// Emits the operator `c`, which must be the character at the cursor.
    pub fn lex_operator(&mut self, c: char) {
        debug_assert_eq!(self.peek(), Some(c));

        if c == '=' {
            trace!(pos = self.pos, "assign");
        }

        self.advance_n(c.len_utf8());
        self.emit(MK_TOKEN!(TokenKind::Operator, c.to_string()));
    }

    pub fn lex_delimiter(&mut self, c: char) {
        debug_assert_eq!(self.peek(), Some(c));

        self.advance_n(c.len_utf8());
        self.emit(MK_TOKEN!(TokenKind::Delimiter, c.to_string()));
    }

    pub fn lex_string(&mut self) -> Result<(), Error> {
        let start = self.pos;
        let body = start + 1;
        let mut result = String::new();
        let mut end = None;
        let mut chars = self.source[body..].char_indices();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '"' => {
                    end = Some(body + offset + 1);
                    break;
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => result.push('\n'),
                    Some((_, 't')) => result.push('\t'),
                    Some((_, '\\')) => result.push('\\'),
                    Some((_, other)) => {
                        return Err(MK_ERROR!(
                            self,
                            ErrorImpl::InvalidEscape { character: other },
                            start
                        ));
                    }
                    None => break,
                },
                _ => result.push(ch),
            }
        }

        let Some(end) = end else {
            return Err(MK_ERROR!(self, ErrorImpl::UnterminatedString, start));
        };

        self.advance_n(end - start);
        self.emit(MK_TOKEN!(TokenKind::StringLiteral, result));
        Ok(())
    }
}

/// Scans `source` into its full token sequence, or fails on the first
/// lexical error. `file` names the source in error positions and defaults
/// to `shell`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    debug!(file = %lex.file, bytes = lex.source.len(), "tokenize");

    while !lex.at_eof() {
        lex.step()?;
    }

    debug!(tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
