//! Library entrypoint for `vesper` fragment analysis.
//!
//! The crate classifies what syntactic construct a cursor sits inside
//! given the source characters to its left, backed by minimal tokenizer
//! collaborators in [`lexis`].

pub mod fragment;
pub mod lexis;
