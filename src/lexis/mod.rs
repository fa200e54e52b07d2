//! Minimal tokenization collaborators consulted by fragment
//! classification.
//!
//! These are deliberately small ports of the language tokenizer: just
//! enough to answer "is this accumulator a valid identifier?" and "what
//! token shape is this operator run?" on demand.

pub mod expr;
pub mod ident;
pub mod operator;

pub use expr::{TokenShape, tokenize_operator};
pub use ident::{IdentKind, IdentToken};
pub use operator::TextualOperator;
