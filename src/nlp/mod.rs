pub mod keywords;
pub mod normalizer;
pub mod pipeline;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use pipeline::Preprocessor;
