pub mod client;
pub mod inference;
pub mod parser;
pub mod prompts;

pub use client::{CompletionError, CompletionService, GroqClient};
pub use parser::parse_classification;
