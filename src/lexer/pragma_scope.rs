//! Pragma scope tracking
//!
//! Wraps the raw logos lexer and delimits where a directive begins and ends.
//! Outside a directive every token is forwarded unchanged. Inside one, the
//! tracker keeps a continuation depth:
//!
//! - `#pragma` moves from outside to inside with a depth of 1.
//! - A backslash increments the depth and is not forwarded.
//! - A newline decrements the depth. When it reaches 0 the newline is replaced
//!   by a [`Token::PragmaClose`]; otherwise it is absorbed.
//! - Whitespace is dropped.
//!
//! The grammar therefore sees a directive, however many physical lines it
//! spans, as one logical statement terminated by a single close token.

use std::ops::Range;

use logos::Logos;
use tracing::warn;

use crate::lexer::tokens::Token;

/// Lexer adaptor holding the per-document directive state
pub struct PragmaScope<'source> {
    lexer: logos::Lexer<'source, Token>,
    continuation_depth: usize,
}

impl<'source> PragmaScope<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Token::lexer(source),
            continuation_depth: 0,
        }
    }

    /// Whether the scanner is currently inside a directive
    pub fn in_directive(&self) -> bool {
        self.continuation_depth > 0
    }

    pub fn continuation_depth(&self) -> usize {
        self.continuation_depth
    }
}

impl Iterator for PragmaScope<'_> {
    type Item = (Token, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(result) = self.lexer.next() else {
                // A directive on the last line may lack its newline
                if self.continuation_depth > 0 {
                    self.continuation_depth = 0;
                    let end = self.lexer.source().len();
                    return Some((Token::PragmaClose, end..end));
                }
                return None;
            };

            let span = self.lexer.span();
            let token = match result {
                Ok(token) => token,
                Err(()) => {
                    warn!(
                        offset = span.start,
                        text = self.lexer.slice(),
                        "skipping illegal character"
                    );
                    continue;
                }
            };

            if self.continuation_depth == 0 {
                if token == Token::PragmaOpen {
                    self.continuation_depth = 1;
                }
                return Some((token, span));
            }

            match token {
                Token::Backslash => self.continuation_depth += 1,
                Token::Newline => {
                    self.continuation_depth -= 1;
                    if self.continuation_depth == 0 {
                        return Some((Token::PragmaClose, span));
                    }
                }
                Token::Whitespace => {}
                _ => return Some((token, span)),
            }
        }
    }
}
