//! The core engine: object model, builtin registry, and the thin parser and
//! evaluator that resolve identifiers and call builtins.

pub mod ast;
pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod object;
pub mod parser;
