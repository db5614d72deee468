pub mod cli;
pub mod engine;
pub mod logging;
pub mod repl;

pub use engine::eval::evaluate_source;
