//! A small regular expression matcher: a lexer and Pratt parser produce an
//! expression tree, Thompson's construction compiles it to an NFA, and a
//! two-set simulation walks the NFA one byte at a time.
//!
//! Matching is left-anchored; see [`Regex`] for exactly what that means.
//! There's no capture groups, no Unicode-aware classes, no backreferences:
//! this is a deliberately small engine over `[u8]` haystacks with linear
//! (no backtracking) match time.

mod ast;
mod error;
mod lexer;
mod nfa;
mod parser;
mod pool;
mod regex;
mod token;

pub use error::{CompileError, ParseError, ParseErrorKind};
pub use nfa::executor::Cache;
pub use regex::Regex;
