//! Token definitions for OpenACC directive scanning
//!
//! This module defines all the tokens that can be produced by the lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//! Only the directive grammar interprets tokens structurally; everything between
//! directives is carried through by the catch-all classes.
use logos::Logos;
use serde::Serialize;

/// All possible tokens in an annotated source file
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Token {
    // Directive markers
    #[regex(r"#[ ]*pragma")]
    PragmaOpen,
    /// Synthesized by the pragma scope tracker, never matched directly
    PragmaClose,

    // Reserved words
    #[token("acc")]
    Acc,
    #[token("scop")]
    Scop,
    #[token("endscop")]
    EndScop,
    #[token("parallel")]
    Parallel,
    #[token("kernels")]
    Kernels,
    #[token("loop")]
    Loop,
    #[token("data")]
    Data,
    #[token("num_workers")]
    NumWorkers,
    #[token("vector")]
    Vector,
    #[token("collapse")]
    Collapse,
    #[token("reduction")]
    Reduction,
    #[token("independent")]
    Independent,
    #[token("gang")]
    Gang,
    #[token("copy")]
    Copy,
    #[token("copyin")]
    CopyIn,
    #[token("copyout")]
    CopyOut,
    #[token("create")]
    Create,
    #[token("max")]
    Max,
    #[token("min")]
    Min,

    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("\\")]
    Backslash,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    // Reduction operators
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("&")]
    BitAnd,
    #[token("|")]
    BitOr,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("%")]
    Percent,

    // Whitespace (excluding newlines)
    #[regex(r"[ \t\r\x0B\x0C]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    // Anything the grammar never looks inside
    #[regex(r"[^ \t\r\n\x0B\x0Ca-zA-Z0-9_()\[\]\\:,+*&|%]+")]
    Other,
}

impl Token {
    /// Check if this token is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Acc
                | Token::Scop
                | Token::EndScop
                | Token::Parallel
                | Token::Kernels
                | Token::Loop
                | Token::Data
                | Token::NumWorkers
                | Token::Vector
                | Token::Collapse
                | Token::Reduction
                | Token::Independent
                | Token::Gang
                | Token::Copy
                | Token::CopyIn
                | Token::CopyOut
                | Token::Create
                | Token::Max
                | Token::Min
        )
    }

    /// Check if this token can name a variable inside a clause argument
    pub fn is_name(&self) -> bool {
        matches!(self, Token::Ident) || self.is_keyword()
    }

    /// Human-readable name used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Token::PragmaOpen => "'#pragma'",
            Token::PragmaClose => "end of directive",
            Token::Acc => "'acc'",
            Token::Scop => "'scop'",
            Token::EndScop => "'endscop'",
            Token::Parallel => "'parallel'",
            Token::Kernels => "'kernels'",
            Token::Loop => "'loop'",
            Token::Data => "'data'",
            Token::NumWorkers => "'num_workers'",
            Token::Vector => "'vector'",
            Token::Collapse => "'collapse'",
            Token::Reduction => "'reduction'",
            Token::Independent => "'independent'",
            Token::Gang => "'gang'",
            Token::Copy => "'copy'",
            Token::CopyIn => "'copyin'",
            Token::CopyOut => "'copyout'",
            Token::Create => "'create'",
            Token::Max => "'max'",
            Token::Min => "'min'",
            Token::Int => "an integer",
            Token::Ident => "an identifier",
            Token::OpenParen => "'('",
            Token::CloseParen => "')'",
            Token::OpenBracket => "'['",
            Token::CloseBracket => "']'",
            Token::Backslash => "'\\'",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::Plus => "'+'",
            Token::Star => "'*'",
            Token::BitAnd => "'&'",
            Token::BitOr => "'|'",
            Token::And => "'&&'",
            Token::Or => "'||'",
            Token::Percent => "'%'",
            Token::Whitespace => "whitespace",
            Token::Newline => "end of line",
            Token::Other => "text",
        }
    }
}
