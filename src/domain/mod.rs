pub mod message;
pub mod types;

pub use message::RawEmail;
pub use types::{
    Category, ClassificationResult, ItemResult, PreprocessResult, PreprocessStats,
    ProcessResponse,
};
