pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, GroqConfig, NlpConfig};
pub use loader::load_config;
