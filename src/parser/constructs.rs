//! Construct grammar
//!
//! ```text
//! <construct> = "parallel" "loop" <clause>*
//!             | "parallel" <clause>*
//!             | "loop" <compute-clause>*
//!             | "data" <data-clause>*
//!             | "scop" | "endscop"
//! ```
//!
//! `parallel` is tried with a following `loop` first so the fused form wins.
//! A `loop` has no data region to hoist data-movement clauses into and a `data`
//! region has nothing to attach compute clauses to, so both are syntax errors.

use chumsky::prelude::*;
use std::sync::Arc;

use crate::lexer::Token;
use crate::parser::ast::{ClauseSet, Construct};
use crate::parser::clauses::{compute_clause, data_clause};
use crate::parser::combinators::{token, ParserError, TokenSpan};

pub(crate) fn construct(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Construct, Error = ParserError> + Clone {
    let any_clause = compute_clause(source.clone()).or(data_clause(source.clone()));

    let parallel = token(Token::Parallel)
        .ignore_then(token(Token::Loop).or_not())
        .then(any_clause.repeated())
        .map(|(fused, clauses)| {
            let set = ClauseSet::from_clauses(clauses);
            if fused.is_some() {
                Construct::ParallelLoop(set)
            } else {
                Construct::Parallel(set)
            }
        });

    let work_sharing = token(Token::Loop)
        .ignore_then(compute_clause(source.clone()).repeated())
        .map(|clauses| Construct::Loop(ClauseSet::from_clauses(clauses)));

    let data = token(Token::Data)
        .ignore_then(data_clause(source).repeated())
        .map(|clauses| Construct::DataRegion(ClauseSet::from_clauses(clauses)));

    let scop = token(Token::Scop).to(Construct::ScopMarker);
    let endscop = token(Token::EndScop).to(Construct::EndScopMarker);

    choice((parallel, work_sharing, data, scop, endscop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex_with_spans;
    use crate::parser::ast::{Clause, ClauseKey};

    fn parse_construct(text: &str) -> Result<Construct, Vec<ParserError>> {
        let source = format!("#pragma {}\n", text);
        let tokens: Vec<_> = lex_with_spans(&source)
            .into_iter()
            .filter(|(t, _)| *t != Token::PragmaOpen)
            .collect();
        construct(Arc::new(source))
            .then_ignore(token(Token::PragmaClose))
            .then_ignore(end())
            .parse(tokens)
    }

    #[test]
    fn test_fused_parallel_loop() {
        match parse_construct("parallel loop num_workers(2)").unwrap() {
            Construct::ParallelLoop(set) => {
                assert_eq!(set.clauses, vec![Clause::NumWorkers("2".to_string())]);
            }
            other => panic!("expected a fused construct, got {:?}", other),
        }
    }

    #[test]
    fn test_parallel_alone() {
        assert!(matches!(
            parse_construct("parallel").unwrap(),
            Construct::Parallel(_)
        ));
    }

    #[test]
    fn test_loop_with_gang() {
        let construct = parse_construct("loop gang independent").unwrap();
        let set = construct.clauses().unwrap();
        assert!(set.contains(ClauseKey::Gang));
        assert!(set.contains(ClauseKey::Independent));
    }

    #[test]
    fn test_data_region() {
        let construct = parse_construct("data copyin(a) copyout(b)").unwrap();
        assert!(matches!(construct, Construct::DataRegion(_)));
    }

    #[test]
    fn test_markers() {
        assert_eq!(parse_construct("scop").unwrap(), Construct::ScopMarker);
        assert_eq!(parse_construct("endscop").unwrap(), Construct::EndScopMarker);
    }

    #[test]
    fn test_loop_rejects_data_clauses() {
        assert!(parse_construct("loop copy(a)").is_err());
    }

    #[test]
    fn test_data_rejects_compute_clauses() {
        assert!(parse_construct("data num_workers(4)").is_err());
    }

    #[test]
    fn test_kernels_is_not_supported() {
        assert!(parse_construct("kernels").is_err());
    }
}
