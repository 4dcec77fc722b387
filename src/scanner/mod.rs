//! Tokenizing and classifying source text for highlighting

mod classify;
pub mod lexer;

pub use classify::{classify, Fragment, TokenClass};
pub use lexer::{is_single_token, tokenize, Span, Token};
