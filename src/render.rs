//! Line-oriented template rendering.
//!
//! Placeholder tokens are matched as plain substrings, not delimited
//! placeholders. This permissive semantic is a compatibility contract with the
//! existing template set: a token that happens to be a substring of prose would
//! also match, so templates choose distinctive ALL_CAPS token names. Tightening
//! to delimited tokens would be a behavior change and is deliberately not done.
//!
//! One primitive serves three roles: header rendering (single context),
//! highlight rendering (role context plus specs context), and content rendering
//! (per-record contexts, appended cumulatively via [`FragmentBuffer`]).

use crate::project::Context;

/// Render a template against contexts, line by line.
///
/// For each line, each context is applied in the order supplied; every
/// occurrence of every key present in the line is replaced by its value. Later
/// contexts substitute into the already-substituted line, so context order is
/// part of the contract. Lines without matches and original line terminators
/// pass through verbatim.
pub fn render(template: &str, contexts: &[&Context]) -> String {
    let mut output = String::with_capacity(template.len());
    for line in template.split_inclusive('\n') {
        output.push_str(&render_line(line, contexts));
    }
    output
}

fn render_line(line: &str, contexts: &[&Context]) -> String {
    let mut line = line.to_string();
    for ctx in contexts {
        for (key, value) in ctx.iter() {
            if line.contains(key.as_str()) {
                line = line.replace(key.as_str(), value);
            }
        }
    }
    line
}

/// Accumulating buffer for content fragments.
///
/// Content rendering appends: each record's fragment lands after all previously
/// rendered fragments, never overwriting, so the final buffer equals the
/// concatenation of the per-record renders in record order.
#[derive(Debug, Default)]
pub struct FragmentBuffer {
    buf: String,
}

impl FragmentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the template against the contexts and append the result
    pub fn append(&mut self, template: &str, contexts: &[&Context]) {
        self.buf.push_str(&render(template, contexts));
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
