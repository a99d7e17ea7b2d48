#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

static TRACING_INIT: Once = Once::new();

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Returns the 1-based line number, the line text and the byte column of
/// `position` within `source`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Position sits at the very end of the source.
    let last = source.rsplit('\n').next().unwrap_or("");
    if !source.is_empty() && !source.ends_with('\n') {
        line_number -= 1;
    }
    Some((line_number, last.to_string(), last.len()))
}


/// Renders `error` as a caret diagnostic against `source`.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> main.pix
           |
        20 | let c: colour = #12;
           | ----------------^
    */

    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let trimmed = line_text.trim_start();
    let removed = line_text.len() - trimmed.len();
    let _ = writeln!(out, "{} | {}", line_string, trimmed.trim_end());

    // Columns count chars, not bytes, from the first non-whitespace char.
    let arrows = line_text
        .get(removed..line_pos)
        .map_or(0, |prefix| prefix.chars().count())
        + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}
