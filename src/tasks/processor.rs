use std::{any::Any, panic::AssertUnwindSafe};

use futures::{future::join_all, FutureExt};

use crate::{
    ai::{
        parse_classification,
        prompts::{classification_prompt, reply_prompt, with_keywords},
        CompletionError, CompletionService,
    },
    config::NlpConfig,
    domain::{Category, ClassificationResult, ItemResult, PreprocessStats, RawEmail},
    nlp::{keywords::rank_by_frequency, Preprocessor},
};

const CLASSIFY_TEMPERATURE: f32 = 0.0;
const CLASSIFY_MAX_TOKENS: u32 = 300;
const MISSING_KEY_REASON: &str = "GROQ_API_KEY ausente (fallback)";

/// Outcome of the classification stage for one email.
#[derive(Debug, Clone)]
pub struct Classified {
    pub classification: ClassificationResult,
    pub stats: Option<PreprocessStats>,
    pub keywords: Option<Vec<String>>,
}

impl Classified {
    fn failed(reason: String) -> Self {
        Self {
            classification: ClassificationResult::fallback(reason),
            stats: None,
            keywords: None,
        }
    }
}

pub struct BatchProcessor<C> {
    completion: C,
    preprocessor: Preprocessor,
    nlp: NlpConfig,
}

impl<C: CompletionService> BatchProcessor<C> {
    pub fn new(completion: C, preprocessor: Preprocessor, nlp: NlpConfig) -> Self {
        Self {
            completion,
            preprocessor,
            nlp,
        }
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    /// Runs every classification concurrently, then every reply concurrently. A failure in
    /// one item, including a panic, only ever degrades that item's own result.
    pub async fn process_batch(&self, items: &[RawEmail]) -> Vec<ItemResult> {
        tracing::info!(target: "processor", total = items.len(), "processing batch");

        let classified: Vec<Classified> = join_all(
            items
                .iter()
                .map(|item| AssertUnwindSafe(self.classify_one(&item.text)).catch_unwind()),
        )
        .await
        .into_iter()
        .zip(items)
        .map(|(outcome, item)| {
            outcome.unwrap_or_else(|panic| {
                let detail = panic_message(panic.as_ref());
                tracing::error!(target: "processor", id = %item.identifier, %detail, "classification task panicked");
                Classified::failed(format!("Erro LLM: {detail}"))
            })
        })
        .collect();

        let replies: Vec<String> = join_all(items.iter().zip(&classified).map(|(item, done)| {
            AssertUnwindSafe(self.generate_one(&item.text, done.classification.category))
                .catch_unwind()
        }))
        .await
        .into_iter()
        .zip(items)
        .map(|(outcome, item)| {
            outcome.unwrap_or_else(|panic| {
                let detail = panic_message(panic.as_ref());
                tracing::error!(target: "processor", id = %item.identifier, %detail, "reply task panicked");
                String::new()
            })
        })
        .collect();

        let results: Vec<ItemResult> = items
            .iter()
            .zip(classified)
            .zip(replies)
            .map(|((item, done), reply)| ItemResult {
                id: item.identifier.clone(),
                classification: done.classification,
                reply,
                preprocessing_stats: done.stats,
                keywords: done.keywords,
            })
            .collect();

        let productive = results
            .iter()
            .filter(|r| r.classification.category == Category::Produtivo)
            .count();
        tracing::info!(target: "processor", total = results.len(), productive, "batch finished");
        results
    }

    pub async fn classify_one(&self, text: &str) -> Classified {
        let enrichment = (self.nlp.enabled && !text.trim().is_empty()).then(|| {
            let processed = self.preprocessor.preprocess(text, true);
            let stems = processed.stemmed_tokens.unwrap_or(processed.tokens);
            (processed.stats, rank_by_frequency(&stems, self.nlp.keyword_count))
        });

        let prompt = match &enrichment {
            Some((_, keywords)) => classification_prompt(&with_keywords(text, keywords)),
            None => classification_prompt(text),
        };

        let (stats, keywords) = enrichment.unzip();
        match self
            .completion
            .complete(&prompt, CLASSIFY_TEMPERATURE, CLASSIFY_MAX_TOKENS)
            .await
        {
            Ok(raw) => Classified {
                classification: parse_classification(&raw),
                stats,
                keywords,
            },
            Err(err) => {
                tracing::warn!(target: "processor", error = %err, "classification call failed");
                // Stats survive a failed call; keywords are only reported alongside a verdict.
                Classified {
                    classification: ClassificationResult::fallback(failure_reason(&err)),
                    stats,
                    keywords: keywords.map(|_| Vec::new()),
                }
            }
        }
    }

    pub async fn generate_one(&self, text: &str, category: Category) -> String {
        let (temperature, max_tokens) = reply_sampling(category);
        let prompt = reply_prompt(text, category);
        match self.completion.complete(&prompt, temperature, max_tokens).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(target: "processor", error = %err, %category, "reply generation failed");
                String::new()
            }
        }
    }
}

fn reply_sampling(category: Category) -> (f32, u32) {
    match category {
        Category::Produtivo => (0.5, 450),
        Category::Improdutivo => (0.3, 350),
    }
}

fn failure_reason(err: &CompletionError) -> String {
    match err {
        CompletionError::Unavailable(_) => MISSING_KEY_REASON.to_string(),
        CompletionError::Status(status) => format!("Erro LLM: {}", status.as_u16()),
        other => format!("Erro LLM: {other}"),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "falha inesperada".to_string()
    }
}
