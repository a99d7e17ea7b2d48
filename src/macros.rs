//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a lexical Error positioned in the lexer's file

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: String::from($value),
        }
    };
}

/// Creates an `Error` for `$error_impl` at byte offset `$start` of the
/// lexer's file.
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(self, ErrorImpl::UnterminatedString, start));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($lexer:expr, $error_impl:expr, $start:expr) => {
        Error::new(
            $error_impl,
            Position($start as u32, Rc::clone(&$lexer.file)),
        )
    };
}
