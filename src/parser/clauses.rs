//! Clause grammar
//!
//! Grammar:
//!
//! ```text
//! <compute-clause> = "num_workers" "(" <scalar> ")"
//!                  | "vector" [ "(" <scalar> ")" ]
//!                  | "collapse" "(" <scalar> ")"
//!                  | "independent" | "gang"
//!                  | "reduction" "(" <operator> ":" <name> ("," <name>)* ")"
//! <data-clause>    = ("copy" | "copyin" | "copyout" | "create") "(" <item> ("," <item>)* ")"
//! ```

use chumsky::prelude::*;
use std::sync::Arc;

use crate::lexer::Token;
use crate::parser::ast::{Clause, ReductionOp};
use crate::parser::combinators::{
    data_list, name_list, parenthesized, scalar_argument, token, ParserError, TokenSpan,
};

fn reduction_op_for(token: Token) -> Option<ReductionOp> {
    match token {
        Token::Plus => Some(ReductionOp::Add),
        Token::Star => Some(ReductionOp::Mul),
        Token::Max => Some(ReductionOp::Max),
        Token::Min => Some(ReductionOp::Min),
        Token::BitAnd => Some(ReductionOp::BitAnd),
        Token::BitOr => Some(ReductionOp::BitOr),
        Token::And => Some(ReductionOp::And),
        Token::Or => Some(ReductionOp::Or),
        Token::Percent => Some(ReductionOp::Mod),
        _ => None,
    }
}

fn reduction_operator() -> impl Parser<TokenSpan, ReductionOp, Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenSpan| match reduction_op_for(tok) {
        Some(op) => Ok(op),
        None => Err(ParserError::expected_input_found(
            span,
            None,
            Some((tok, range)),
        )),
    })
    .labelled("a reduction operator")
}

/// Clauses that shape the parallel region or loop itself
pub(crate) fn compute_clause(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Clause, Error = ParserError> + Clone {
    let num_workers = token(Token::NumWorkers)
        .ignore_then(scalar_argument(source.clone()))
        .map(Clause::NumWorkers);

    let vector = token(Token::Vector)
        .ignore_then(scalar_argument(source.clone()).or_not())
        .map(Clause::Vector);

    let collapse = token(Token::Collapse)
        .ignore_then(scalar_argument(source.clone()))
        .map(Clause::Collapse);

    let independent = token(Token::Independent).to(Clause::Independent);

    let gang = token(Token::Gang).to(Clause::Gang);

    let reduction = token(Token::Reduction)
        .ignore_then(parenthesized(
            reduction_operator()
                .then_ignore(token(Token::Colon))
                .then(name_list(source)),
        ))
        .map(|(op, vars)| Clause::Reduction { op, vars });

    choice((num_workers, vector, collapse, independent, gang, reduction))
}

/// Data-movement clauses, hoisted into a `target data` directive on output
pub(crate) fn data_clause(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Clause, Error = ParserError> + Clone {
    choice((
        token(Token::Copy)
            .ignore_then(data_list(source.clone()))
            .map(Clause::Copy),
        token(Token::CopyIn)
            .ignore_then(data_list(source.clone()))
            .map(Clause::CopyIn),
        token(Token::CopyOut)
            .ignore_then(data_list(source.clone()))
            .map(Clause::CopyOut),
        token(Token::Create)
            .ignore_then(data_list(source))
            .map(Clause::Create),
    ))
}
