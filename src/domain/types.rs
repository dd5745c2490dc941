use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Produtivo,
    #[default]
    Improdutivo,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Produtivo => "PRODUTIVO",
            Category::Improdutivo => "IMPRODUTIVO",
        }
    }

    /// Anything that does not uppercase to exactly `PRODUTIVO` is treated as non-actionable.
    /// Surrounding whitespace is not forgiven.
    pub fn from_label(label: &str) -> Self {
        if label.to_uppercase() == "PRODUTIVO" {
            Category::Produtivo
        } else {
            Category::Improdutivo
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "confianca")]
    pub confidence: u8,
    #[serde(rename = "razao")]
    pub reason: String,
}

impl ClassificationResult {
    pub fn new(category: Category, confidence: i64, reason: impl Into<String>) -> Self {
        Self {
            category,
            confidence: confidence.clamp(0, 100) as u8,
            reason: reason.into(),
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self::new(Category::Improdutivo, 0, reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PreprocessStats {
    pub original_length: usize,
    pub cleaned_length: usize,
    pub total_tokens: usize,
    pub tokens_after_stopwords: usize,
    pub final_tokens: usize,
    pub reduction_percentage: f64,
}

impl PreprocessStats {
    pub fn reduction(final_tokens: usize, total_tokens: usize) -> f64 {
        let ratio = 1.0 - final_tokens as f64 / total_tokens.max(1) as f64;
        round2(ratio * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreprocessResult {
    pub original: String,
    pub cleaned: String,
    pub tokens: Vec<String>,
    pub stemmed_tokens: Option<Vec<String>>,
    pub processed_text: String,
    pub stats: PreprocessStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemResult {
    pub id: String,
    #[serde(rename = "classificacao")]
    pub classification: ClassificationResult,
    #[serde(rename = "resposta")]
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preprocessing_stats: Option<PreprocessStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(rename = "resultados")]
    pub results: Vec<ItemResult>,
}

impl ProcessResponse {
    pub fn new(results: Vec<ItemResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
