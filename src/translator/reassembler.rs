//! Text reassembly
//!
//! Concatenates passthrough text and expanded directives in document order.
//! Every line of an expansion gets the source directive's indentation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::ast::{Directive, Document, Item};
use crate::translator::aggregator::aggregate;

static REPEATED_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// The output lines for one directive, each ending the way the source directive did
pub fn render_directive(directive: &Directive) -> Vec<String> {
    aggregate(&directive.construct)
        .iter()
        .map(|omp| {
            let text = omp.text();
            format!(
                "{}{}{}",
                directive.indent,
                REPEATED_SPACES.replace_all(text.trim_end(), " "),
                directive.line_ending
            )
        })
        .collect()
}

/// Render a whole document back to text
pub fn render(document: &Document) -> String {
    let mut output = String::new();
    for item in &document.items {
        match item {
            Item::Passthrough(text) => output.push_str(text),
            Item::Directive(directive) => {
                for line in render_directive(directive) {
                    output.push_str(&line);
                }
            }
        }
    }
    output
}
