//! Public API for the parser.

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use std::sync::Arc;

use crate::error::TranslateError;
use crate::lexer::{lex_with_spans, Token};
use crate::parser::ast::Document;
use crate::parser::combinators::{ParserError, TokenSpan};
use crate::parser::document::document;
use crate::parser::location::SourceLocation;

/// Main parser function that takes source text and returns a parsed document
/// This is the primary entry point for parsing annotated sources
pub fn parse_document(source: &str) -> Result<Document, TranslateError> {
    parse_with_source(lex_with_spans(source), source)
}

/// Parse a document from scoped tokens with source, extracting text through spans
pub fn parse_with_source(
    tokens_with_spans: Vec<TokenSpan>,
    source: &str,
) -> Result<Document, TranslateError> {
    let location = Arc::new(SourceLocation::new(source));
    document(Arc::new(source.to_string()), location.clone())
        .parse(tokens_with_spans.clone())
        .map_err(|errors| to_syntax_error(errors, &tokens_with_spans, source, &location))
}

fn to_syntax_error(
    errors: Vec<ParserError>,
    tokens: &[TokenSpan],
    source: &str,
    location: &SourceLocation,
) -> TranslateError {
    let Some(error) = errors.into_iter().next() else {
        let position = location.byte_to_position(source.len());
        return TranslateError::Syntax {
            line: position.line,
            column: position.column,
            found: "end of input".to_string(),
            expected: "a valid document".to_string(),
        };
    };

    let offset = error
        .found()
        .map(|(_, span)| span.start)
        .or_else(|| tokens.get(error.span().start).map(|(_, span)| span.start))
        .unwrap_or(source.len());
    let position = location.byte_to_position(offset);

    let found = match error.found() {
        Some((Token::PragmaClose, _)) => Token::PragmaClose.describe().to_string(),
        Some((_, span)) => format!("'{}'", &source[span.clone()]),
        None => "end of input".to_string(),
    };

    TranslateError::Syntax {
        line: position.line,
        column: position.column,
        found,
        expected: describe_expected(&error),
    }
}

fn describe_expected(error: &ParserError) -> String {
    if let SimpleReason::Custom(message) = error.reason() {
        return message.clone();
    }
    if let Some(label) = error.label() {
        return label.to_string();
    }

    let mut expected: Vec<&str> = error
        .expected()
        .filter_map(|token| token.as_ref().map(|(t, _)| t.describe()))
        .collect();
    expected.sort_unstable();
    expected.dedup();

    if expected.is_empty() {
        "a supported OpenACC directive".to_string()
    } else {
        expected.join(" or ")
    }
}
