//! # ansicolor-translator
//!
//! Escape sequence translation for ansicolor.
//!
//! This crate provides:
//! - Parsing of `ESC [ <params> m` parameter lists
//! - Classification into reset and attribute sequences
//! - Rendering of `<span style="...">` / `</span>` markup
//! - A single-pass `translate` over a block of text
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on ansicolor-core for
//! the attribute table and error types. Everything here is pure: no I/O and
//! no shared mutable state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod markup;
pub mod translator;

// Re-export commonly used types
pub use markup::{opening_tag, CLOSING_TAG};
pub use translator::{
    classify, count_sequences, parse_params, render_sequence, translate, EscapeTranslator,
    SequenceKind,
};
