//! Final document composition.
//!
//! The document template carries three structural markers; each marker
//! occurrence expands to the entire corresponding fragment, which may span many
//! lines. Contact placeholders substitute afterwards, on the already-expanded
//! line, so contact tokens inside a fragment are substituted too.

use crate::project::Context;

/// Structural marker expanded to the header fragment
pub const HEADER_MARKER: &str = "<!-- HEADER_REG_EXP -->";
/// Structural marker expanded to the highlight fragment
pub const HIGHLIGHT_MARKER: &str = "<!-- HIGHLIGHT_REG_EXP -->";
/// Structural marker expanded to the accumulated content fragment
pub const CONTENT_MARKER: &str = "<!-- CONTENT_REG_EXP -->";

/// Compose the final document from the document template, the three rendered
/// fragments, and the contacts mapping.
///
/// Contact values are strings by construction (the mapping is built from
/// already-stringified settings), so no coercion happens here and none can be
/// skipped by a broken type check.
pub fn compose(
    document_template: &str,
    header: &str,
    highlight: &str,
    content: &str,
    contacts: &Context,
) -> String {
    let mut output = String::with_capacity(
        document_template.len() + header.len() + highlight.len() + content.len(),
    );
    for line in document_template.split_inclusive('\n') {
        let mut line = line.to_string();
        for (marker, fragment) in [
            (HEADER_MARKER, header),
            (HIGHLIGHT_MARKER, highlight),
            (CONTENT_MARKER, content),
        ] {
            if line.contains(marker) {
                line = line.replace(marker, fragment);
            }
        }
        for (key, value) in contacts.iter() {
            if line.contains(key.as_str()) {
                line = line.replace(key.as_str(), value);
            }
        }
        output.push_str(&line);
    }
    output
}
