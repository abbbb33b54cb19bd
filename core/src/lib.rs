pub mod api;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod region;
pub mod text;
