//! Lexical analysis for the pixel-graphics language.
//!
//! This module contains the scanner that converts source text into a flat
//! sequence of tokens. It handles:
//!
//! - Character classification and the state-transition table
//! - Recognition of keywords, identifiers, and boolean literals
//! - Integer, float, colour, and string literals
//! - Single-character operators and delimiters

pub mod automaton;
pub mod lexer;
pub mod tokens;
