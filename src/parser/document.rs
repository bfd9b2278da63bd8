//! Document-level grammar
//!
//! A document is a sequence of lines, each tried in this order:
//!
//! 1. an OpenACC directive (`#pragma acc <construct>`), optionally indented
//! 2. any other `#pragma`, kept verbatim including its continuation lines
//! 3. plain text up to and including a newline (or the end of input)
//!
//! Everything that is not an OpenACC directive is sliced straight out of the
//! source, so passthrough text never depends on how it was tokenized.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use crate::lexer::Token;
use crate::parser::ast::{Directive, Document, Item};
use crate::parser::combinators::{token, ParserError, TokenSpan};
use crate::parser::constructs::construct;
use crate::parser::location::SourceLocation;

fn acc_directive(
    source: Arc<String>,
    location: Arc<SourceLocation>,
) -> impl Parser<TokenSpan, Item, Error = ParserError> + Clone {
    token(Token::Whitespace)
        .or_not()
        .then(token(Token::PragmaOpen))
        .then_ignore(token(Token::Acc))
        .then(construct(source.clone()))
        .then(token(Token::PragmaClose))
        .map(move |(((indent, open), construct), close)| {
            let indent = indent
                .map(|span| source[span].to_string())
                .unwrap_or_default();
            Item::Directive(Directive {
                indent,
                line: location.byte_to_position(open.start).line,
                construct,
                line_ending: line_ending(&source, &close).to_string(),
            })
        })
}

/// `\r\n` when the directive's closing newline is preceded by a carriage return
fn line_ending(source: &str, close: &Range<usize>) -> &'static str {
    if !close.is_empty() && source[..close.start].ends_with('\r') {
        "\r\n"
    } else {
        "\n"
    }
}

fn foreign_directive(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Item, Error = ParserError> + Clone {
    // A marker inside someone else's pragma (or a comment) is just text
    let body_start = filter(|(t, _): &TokenSpan| !matches!(t, Token::Acc | Token::PragmaClose));
    let body = filter(|(t, _): &TokenSpan| *t != Token::PragmaClose);

    token(Token::Whitespace)
        .or_not()
        .then(token(Token::PragmaOpen))
        .then_ignore(body_start.then(body.repeated()).or_not())
        .then(token(Token::PragmaClose))
        .map(move |((indent, open), close)| {
            let start = indent.map_or(open.start, |span| span.start);
            Item::Passthrough(source[start..close.end].to_string())
        })
}

fn plain_line(source: Arc<String>) -> impl Parser<TokenSpan, Item, Error = ParserError> + Clone {
    let text = filter(|(t, _): &TokenSpan| {
        !matches!(t, Token::Newline | Token::PragmaOpen | Token::PragmaClose)
    })
    .map(|(_, span)| span);

    let source_for_blank = source.clone();
    let with_text = text
        .repeated()
        .at_least(1)
        .then(token(Token::Newline).or_not())
        .map(move |(spans, newline): (Vec<Range<usize>>, Option<Range<usize>>)| {
            let start = spans.first().map_or(0, |span| span.start);
            let end = newline
                .or_else(|| spans.last().cloned())
                .map_or(start, |span| span.end);
            Item::Passthrough(source[start..end].to_string())
        });

    let blank = token(Token::Newline)
        .map(move |span| Item::Passthrough(source_for_blank[span].to_string()));

    with_text.or(blank)
}

/// Parse a full document
pub fn document(
    source: Arc<String>,
    location: Arc<SourceLocation>,
) -> impl Parser<TokenSpan, Document, Error = ParserError> + Clone {
    choice((
        acc_directive(source.clone(), location),
        foreign_directive(source.clone()),
        plain_line(source),
    ))
    .repeated()
    .then_ignore(end())
    .map(Document::new)
}
