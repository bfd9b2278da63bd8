//! Parser combinator functions shared by the clause and construct grammars.

use chumsky::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use std::sync::Arc;

use crate::lexer::Token;

/// A backslash continuation, including any blanks between it and the newline
static CONTINUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[ \t\r\x0B\x0C]*\n").unwrap());

/// Type alias for token with span
pub(crate) type TokenSpan = (Token, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: extract source text for a span, dropping line continuations
pub(crate) fn extract_text(source: &str, span: &Range<usize>) -> String {
    CONTINUATION
        .replace_all(&source[span.start..span.end], "")
        .into_owned()
}

/// Helper: match a specific token type, yielding its span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| *tok == t)
        .map(|(_, span)| span)
        .labelled(t.describe())
}

/// A variable name; reserved words are accepted as names inside clause arguments
pub(crate) fn name() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_name())
        .map(|(_, span)| span)
        .labelled("a variable name")
}

/// Wrap a parser in parentheses
pub(crate) fn parenthesized<O, P>(inner: P) -> impl Parser<TokenSpan, O, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, O, Error = ParserError> + Clone,
{
    inner.delimited_by(token(Token::OpenParen), token(Token::CloseParen))
}

/// A single integer or name argument in parentheses, e.g. `(4)` or `(nw)`
pub(crate) fn scalar_argument(
    source: Arc<String>,
) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    let scalar = filter(|(t, _): &TokenSpan| *t == Token::Int || t.is_name())
        .map(move |(_, span)| extract_text(&source, &span))
        .labelled("an integer");
    parenthesized(scalar)
}

/// A balanced `[...]` group; the contents are never interpreted
pub(crate) fn bracket_group() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone
{
    recursive(|group| {
        let content = filter(|(t, _): &TokenSpan| {
            !matches!(
                t,
                Token::OpenBracket | Token::CloseBracket | Token::PragmaOpen | Token::PragmaClose
            )
        })
        .map(|(_, span)| span);

        token(Token::OpenBracket)
            .then_ignore(group.or(content).repeated())
            .then(token(Token::CloseBracket))
            .map(|(open, close)| open.start..close.end)
    })
}

/// A data clause item: a bare name or a sub-range such as `a[0:n]` or `m[i][0:n]`
pub(crate) fn data_item(
    source: Arc<String>,
) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    name()
        .then(bracket_group().repeated())
        .map(move |(name, groups)| {
            let end = groups.last().map_or(name.end, |group| group.end);
            extract_text(&source, &(name.start..end))
        })
}

/// Comma separated data items in parentheses
pub(crate) fn data_list(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Vec<String>, Error = ParserError> + Clone {
    parenthesized(
        data_item(source)
            .separated_by(token(Token::Comma))
            .at_least(1),
    )
}

/// Comma separated plain names, as used by `reduction`
pub(crate) fn name_list(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Vec<String>, Error = ParserError> + Clone {
    name()
        .map(move |span| extract_text(&source, &span))
        .separated_by(token(Token::Comma))
        .at_least(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex_with_spans;

    fn run<O>(
        parser: impl Parser<TokenSpan, O, Error = ParserError>,
        source: &str,
    ) -> Result<O, Vec<ParserError>> {
        parser.then_ignore(end()).parse(lex_with_spans(source))
    }

    #[test]
    fn test_extract_text_drops_continuations() {
        assert_eq!(extract_text("a[0:\\\nn]", &(0..8)), "a[0:n]");
        assert_eq!(extract_text("a[0:n]", &(0..6)), "a[0:n]");
    }

    #[test]
    fn test_extract_text_drops_continuations_with_trailing_blanks() {
        assert_eq!(extract_text("a[0: \\ \t\nn]", &(0..11)), "a[0: n]");
        assert_eq!(extract_text("a[0:\\\r\nn]", &(0..9)), "a[0:n]");
    }

    #[test]
    fn test_data_item_bare_name() {
        let source = Arc::new("abc".to_string());
        assert_eq!(run(data_item(source.clone()), &source).unwrap(), "abc");
    }

    #[test]
    fn test_data_item_keeps_brackets_verbatim() {
        let source = Arc::new("a[0:n - 1]".to_string());
        assert_eq!(run(data_item(source.clone()), &source).unwrap(), "a[0:n - 1]");
    }

    #[test]
    fn test_data_item_nested_and_repeated_brackets() {
        let source = Arc::new("m[idx[i]:2*n][0:k]".to_string());
        assert_eq!(
            run(data_item(source.clone()), &source).unwrap(),
            "m[idx[i]:2*n][0:k]"
        );
    }

    #[test]
    fn test_unbalanced_brackets_fail() {
        let source = Arc::new("a[0:n".to_string());
        assert!(run(data_item(source.clone()), &source).is_err());
    }

    #[test]
    fn test_data_list() {
        let source = Arc::new("(a,b[1:2],c)".to_string());
        assert_eq!(
            run(data_list(source.clone()), &source).unwrap(),
            vec!["a", "b[1:2]", "c"]
        );
    }

    #[test]
    fn test_empty_data_list_fails() {
        let source = Arc::new("()".to_string());
        assert!(run(data_list(source.clone()), &source).is_err());
    }

    #[test]
    fn test_scalar_argument() {
        let source = Arc::new("(16)".to_string());
        assert_eq!(run(scalar_argument(source.clone()), &source).unwrap(), "16");
    }
}
