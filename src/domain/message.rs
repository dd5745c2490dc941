use serde::{Deserialize, Serialize};

pub const DEFAULT_IDENTIFIER: &str = "texto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmail {
    pub identifier: String,
    pub text: String,
}

impl RawEmail {
    pub fn new(identifier: Option<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IDENTIFIER.to_string()),
            text: text.into(),
        }
    }
}
