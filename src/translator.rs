//! Translation from OpenACC to OpenMP
//!
//! Ties the pipeline together: scoped lexing, parsing into a [`Document`],
//! clause aggregation per construct and reassembly of the output text. A
//! document either translates completely or not at all.

pub mod aggregator;
pub mod reassembler;

pub use aggregator::{aggregate, OmpDirective};
pub use reassembler::{render, render_directive};

use tracing::debug;

use crate::error::TranslateError;
use crate::parser::{parse_document, Document};

/// Translate a whole document
pub fn translate(source: &str) -> Result<String, TranslateError> {
    let document = parse_document(source)?;
    log_directives(&document);
    Ok(render(&document))
}

fn log_directives(document: &Document) {
    for directive in document.directives() {
        let clauses = directive
            .construct
            .clauses()
            .map(|set| {
                set.attributes
                    .keys()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        debug!(
            line = directive.line,
            clauses = %clauses,
            outputs = aggregate(&directive.construct).len(),
            "translating directive"
        );
    }
}
