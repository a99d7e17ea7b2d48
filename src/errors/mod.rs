//! Error types for lexical analysis.
//!
//! Every lexical error is fatal to the `tokenize` call that raised it. This
//! module defines:
//!
//! - The closed set of error variants callers can match on
//! - The error wrapper that records where the offending token starts
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;
