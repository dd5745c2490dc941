use crate::domain::{PreprocessResult, PreprocessStats};

use super::{
    keywords::rank_by_frequency,
    normalizer::{fold_token, normalize},
    stemmer::{SnowballStemmer, TokenStemmer},
    stopwords::StopwordSet,
    tokenizer::{filter_short, tokenize},
};

/// Read-only preprocessing pipeline, built once at startup and shared by every request.
pub struct Preprocessor {
    stopwords: StopwordSet,
    stemmer: Box<dyn TokenStemmer>,
}

impl Preprocessor {
    pub fn new(stopwords: StopwordSet, stemmer: Box<dyn TokenStemmer>) -> Self {
        tracing::debug!(target: "nlp", stopwords = stopwords.len(), "preprocessor ready");
        Self { stopwords, stemmer }
    }

    pub fn portuguese() -> Self {
        Self::new(
            StopwordSet::portuguese(),
            Box::new(SnowballStemmer::portuguese()),
        )
    }

    /// normalize -> tokenize -> fold -> drop short -> drop stopwords -> (stem) -> join.
    pub fn preprocess(&self, text: &str, apply_stem: bool) -> PreprocessResult {
        let cleaned = normalize(text);

        let folded = tokenize(&cleaned)
            .iter()
            .map(|token| fold_token(token))
            .collect();
        let tokens = filter_short(folded);
        let without_stopwords = self.stopwords.remove_stopwords(&tokens);

        let stemmed_tokens = apply_stem.then(|| self.stemmer.stem(&without_stopwords));
        let final_tokens = stemmed_tokens.as_ref().unwrap_or(&without_stopwords);
        let processed_text = final_tokens.join(" ");

        let stats = PreprocessStats {
            original_length: text.chars().count(),
            cleaned_length: cleaned.chars().count(),
            total_tokens: tokens.len(),
            tokens_after_stopwords: without_stopwords.len(),
            final_tokens: final_tokens.len(),
            reduction_percentage: PreprocessStats::reduction(final_tokens.len(), tokens.len()),
        };

        tracing::debug!(
            target: "nlp",
            total = stats.total_tokens,
            kept = stats.final_tokens,
            reduction = stats.reduction_percentage,
            "text preprocessed"
        );

        PreprocessResult {
            original: text.to_string(),
            cleaned,
            tokens: without_stopwords,
            stemmed_tokens,
            processed_text,
            stats,
        }
    }

    pub fn top_keywords(&self, text: &str, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }
        let processed = self.preprocess(text, true);
        let tokens = processed.stemmed_tokens.unwrap_or(processed.tokens);
        rank_by_frequency(&tokens, n)
    }
}
