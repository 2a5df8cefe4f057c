//! Span markup rendering.

use ansicolor_core::StyleDeclaration;

/// Tag emitted for every reset sequence.
pub const CLOSING_TAG: &str = "</span>";

/// Render an opening span tag carrying the given declarations.
///
/// Declarations are joined with `"; "` in the order given. An empty slice
/// still yields a tag, with an empty style attribute.
///
/// # Example
/// ```
/// use ansicolor_core::{Color, StyleDeclaration};
/// use ansicolor_translator::opening_tag;
///
/// let tag = opening_tag(&[StyleDeclaration::foreground(Color::Red)]);
/// assert_eq!(tag, r#"<span style="color: red">"#);
/// assert_eq!(opening_tag(&[]), r#"<span style="">"#);
/// ```
pub fn opening_tag(declarations: &[StyleDeclaration]) -> String {
    let style = declarations
        .iter()
        .map(|decl| decl.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    format!("<span style=\"{style}\">")
}
