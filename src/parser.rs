//! Parser module for OpenACC directives
//!
//! This module contains the directive grammar, built with chumsky over the
//! scoped token stream, and the typed AST it produces.
//!
//! The grammar only looks inside `#pragma acc` directives. Every other line,
//! other pragmas included, becomes a passthrough item holding the exact source
//! text, which is what lets files without OpenACC come out byte-for-byte
//! identical.

pub mod api;
pub mod ast;
pub mod clauses;
pub mod combinators;
pub mod constructs;
pub mod document;
pub mod location;

pub use api::{parse_document, parse_with_source};
pub use ast::{
    Attributes, Clause, ClauseKey, ClauseOutcome, ClauseSet, ClauseValue, Construct, Directive,
    Document, Item, ReductionOp,
};
pub use location::{Position, SourceLocation};
