//! # acc2omp
//!
//! Rewrites OpenACC directives embedded in C/C++ source text into equivalent
//! OpenMP directives, leaving every other byte of the input unchanged.
//!
//! The pipeline is: [`lexer`] (logos tokens plus pragma scope tracking) →
//! [`parser`] (chumsky grammar producing a typed document) → [`translator`]
//! (clause aggregation and text reassembly).

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod translator;

pub use error::{ProcessingError, TranslateError};
pub use translator::translate;
