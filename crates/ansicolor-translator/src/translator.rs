//! SGR escape sequence to span markup translation.

use std::num::IntErrorKind;

use lazy_static::lazy_static;
use regex::Regex;

use ansicolor_core::{Error, Result, StyleDeclaration, ATTRIBUTE_TABLE};

use crate::markup::{opening_tag, CLOSING_TAG};

lazy_static! {
    /// `ESC [ <params> m`. Anything up to the next `m` counts as parameter
    /// text; non-numeric parameters are rejected when parsed.
    static ref ESCAPE_SEQUENCE: Regex =
        Regex::new(r"\x1b\[[^m]+m").expect("escape sequence pattern is valid");
}

/// What a single escape sequence means once its parameters are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceKind {
    /// Parameter list contains 0; rendered as the closing tag
    Reset,
    /// Declarations of every recognized code, in attribute table order
    Attributes(Vec<StyleDeclaration>),
}

impl SequenceKind {
    /// Render this sequence as markup.
    pub fn to_markup(&self) -> String {
        match self {
            SequenceKind::Reset => CLOSING_TAG.to_string(),
            SequenceKind::Attributes(declarations) => opening_tag(declarations),
        }
    }
}

/// Parse the `;`-separated parameter text of a sequence.
///
/// Each segment is trimmed of ASCII whitespace and parsed as a signed
/// decimal integer. Digit strings too large for `i64` are well-formed but
/// can never name an attribute, so they come back as `None`. Empty or
/// non-numeric segments fail with [`Error::MalformedSequence`].
///
/// # Example
/// ```
/// use ansicolor_translator::parse_params;
///
/// assert_eq!(parse_params("31;1").unwrap(), vec![Some(31), Some(1)]);
/// assert!(parse_params("abc").is_err());
/// ```
pub fn parse_params(params: &str) -> Result<Vec<Option<i64>>> {
    params
        .split(';')
        .map(|segment| {
            let trimmed = segment.trim_matches(|c: char| c.is_ascii_whitespace());
            match trimmed.parse::<i64>() {
                Ok(code) => Ok(Some(code)),
                Err(e)
                    if matches!(
                        e.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    Ok(None)
                }
                Err(_) => Err(Error::MalformedSequence {
                    sequence: format!("\x1b[{params}m"),
                    segment: segment.to_string(),
                }),
            }
        })
        .collect()
}

/// Decide whether a parsed parameter list is a reset or a set of attributes.
///
/// A 0 anywhere makes the whole sequence a reset. Otherwise the attribute
/// table is walked in its own order and each code present in `params`
/// contributes its declaration once.
pub fn classify(params: &[Option<i64>]) -> SequenceKind {
    if params.contains(&Some(0)) {
        return SequenceKind::Reset;
    }

    let declarations = ATTRIBUTE_TABLE
        .iter()
        .filter(|(code, _)| params.contains(&Some(i64::from(code.value()))))
        .map(|(_, decl)| *decl)
        .collect();

    SequenceKind::Attributes(declarations)
}

/// Replacement text for one parsed sequence.
pub fn render_sequence(params: &[Option<i64>]) -> String {
    classify(params).to_markup()
}

/// Replace every escape sequence in `input` with span markup.
///
/// Text outside sequences is copied unchanged. Open and close tags are not
/// balanced; each sequence yields exactly one tag. A malformed sequence
/// fails the whole call and no output is returned.
///
/// # Example
/// ```
/// use ansicolor_translator::translate;
///
/// let html = translate("\x1b[31mhello\x1b[0m").unwrap();
/// assert_eq!(html, r#"<span style="color: red">hello</span>"#);
/// ```
pub fn translate(input: &str) -> Result<String> {
    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for found in ESCAPE_SEQUENCE.find_iter(input) {
        output.push_str(&input[last_end..found.start()]);
        let params = parse_params(parameter_text(found.as_str()))?;
        output.push_str(&render_sequence(&params));
        last_end = found.end();
    }

    output.push_str(&input[last_end..]);
    Ok(output)
}

/// Strip the `ESC [` prefix and `m` suffix from a matched sequence.
fn parameter_text(sequence: &str) -> &str {
    sequence
        .strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
        .unwrap_or(sequence)
}

/// Number of escape sequences `translate` would replace.
pub fn count_sequences(input: &str) -> usize {
    ESCAPE_SEQUENCE.find_iter(input).count()
}

/// Object form of [`translate`] for callers that hold a translator value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeTranslator;

impl EscapeTranslator {
    /// Create a new translator.
    pub fn new() -> Self {
        Self
    }

    /// Translate a block of text. See [`translate`].
    pub fn translate(&self, input: &str) -> Result<String> {
        translate(input)
    }

    /// Check whether a block of text contains any escape sequence.
    pub fn has_sequences(&self, input: &str) -> bool {
        ESCAPE_SEQUENCE.is_match(input)
    }
}
