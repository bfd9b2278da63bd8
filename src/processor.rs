//! File processing API
//!
//! Runs a source file through a chosen stage of the pipeline and formats the
//! result. Besides the translated text, the intermediate stages (scoped
//! tokens, parsed document) can be dumped for debugging.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use acc2omp::processor::{process_source, OutputFormat};
//!
//! let format = OutputFormat::from_string("token-simple").unwrap();
//! let dump = process_source("#pragma acc loop\n", &format).unwrap();
//! ```

use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::Serialize;

use crate::error::ProcessingError;
use crate::lexer::{lex, lex_with_spans, Token};
use crate::parser::parse_document;
use crate::translator::translate;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Translated OpenMP source
    Omp,
    /// One scoped token per line
    TokenSimple,
    /// Scoped tokens with their text and byte spans
    TokenJson,
    /// The parsed document
    AstJson,
}

impl OutputFormat {
    /// Parse a format string like "omp" or "token-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "omp" => Ok(OutputFormat::Omp),
            "token-simple" => Ok(OutputFormat::TokenSimple),
            "token-json" => Ok(OutputFormat::TokenJson),
            "ast-json" => Ok(OutputFormat::AstJson),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Omp => "omp",
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
            OutputFormat::AstJson => "ast-json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Omp => "Source with OpenACC directives rewritten as OpenMP",
            OutputFormat::TokenSimple => "Directive-scoped token stream, one token per line",
            OutputFormat::TokenJson => "Directive-scoped token stream as JSON",
            OutputFormat::AstJson => "Parsed document as JSON",
        }
    }

    /// Get all available output formats
    pub fn available_formats() -> Vec<OutputFormat> {
        vec![
            OutputFormat::Omp,
            OutputFormat::TokenSimple,
            OutputFormat::TokenJson,
            OutputFormat::AstJson,
        ]
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    token: Token,
    text: &'a str,
    span: Range<usize>,
}

/// Process source text according to the given format
pub fn process_source(source: &str, format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Omp => Ok(translate(source)?),
        OutputFormat::TokenSimple => Ok(lex(source)
            .into_iter()
            .map(|token| format!("{:?}\n", token))
            .collect()),
        OutputFormat::TokenJson => {
            let records: Vec<TokenRecord> = lex_with_spans(source)
                .into_iter()
                .map(|(token, span)| TokenRecord {
                    token,
                    text: &source[span.clone()],
                    span,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&records)?)
        }
        OutputFormat::AstJson => {
            let document = parse_document(source)?;
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

/// Process a file according to the given format
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source(&content, format)
}
