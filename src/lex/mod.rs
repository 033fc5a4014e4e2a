pub mod batch;
pub mod error;
pub mod lexer;
mod lines;
pub mod location;
pub mod pattern;
pub mod token;
