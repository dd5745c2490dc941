//! Offline accuracy check of the classifier against a fixed, labelled reference set.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    ai::CompletionService,
    domain::{types::round2, Category},
    tasks::BatchProcessor,
};

const EMAIL_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationExample {
    pub email: &'static str,
    pub expected_category: Category,
    pub rationale: &'static str,
}

pub fn validation_set() -> Vec<ValidationExample> {
    vec![
        ValidationExample {
            email: "Preciso urgentemente do relatório financeiro do Q1. Prazo até sexta-feira.",
            expected_category: Category::Produtivo,
            rationale: "Solicitação urgente com prazo definido",
        },
        ValidationExample {
            email: "Parabéns pela promoção! Você merece!",
            expected_category: Category::Improdutivo,
            rationale: "Mensagem de congratulações",
        },
        ValidationExample {
            email: "O servidor de produção está fora do ar. Clientes reportando erro 503.",
            expected_category: Category::Produtivo,
            rationale: "Problema crítico que requer ação imediata",
        },
        ValidationExample {
            email: "Aproveitando para agradecer o suporte de sempre. Forte abraço!",
            expected_category: Category::Improdutivo,
            rationale: "Agradecimento sem demanda de ação",
        },
        ValidationExample {
            email: "Gostaria de agendar uma reunião para discutir o novo projeto. Você tem disponibilidade na quinta?",
            expected_category: Category::Produtivo,
            rationale: "Solicitação de agendamento",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDetail {
    pub email: String,
    pub expected: Category,
    pub predicted: Category,
    pub confidence: u8,
    pub correct: bool,
    pub model_reason: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// `PRODUTIVO` is the positive class.
    pub fn from_details(details: &[ValidationDetail]) -> Self {
        let mut matrix = Self::default();
        for detail in details {
            match (detail.expected, detail.correct) {
                (Category::Produtivo, true) => matrix.true_positives += 1,
                (Category::Produtivo, false) => matrix.false_negatives += 1,
                (Category::Improdutivo, true) => matrix.true_negatives += 1,
                (Category::Improdutivo, false) => matrix.false_positives += 1,
            }
        }
        matrix
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub details: Vec<ValidationDetail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NeedsPromptReview,
    Adequate,
    Excellent,
}

impl ValidationReport {
    pub fn from_details(details: Vec<ValidationDetail>) -> Self {
        let total = details.len();
        let correct = details.iter().filter(|d| d.correct).count();
        let matrix = ConfusionMatrix::from_details(&details);

        let accuracy = percentage(correct, total);
        let precision = percentage(
            matrix.true_positives,
            matrix.true_positives + matrix.false_positives,
        );
        let recall = percentage(
            matrix.true_positives,
            matrix.true_positives + matrix.false_negatives,
        );
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            generated_at: Utc::now(),
            total,
            correct,
            incorrect: total - correct,
            accuracy: round2(accuracy),
            precision: round2(precision),
            recall: round2(recall),
            f1_score: round2(f1_score),
            confusion_matrix: matrix,
            details,
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.accuracy < 80.0 {
            Verdict::NeedsPromptReview
        } else if self.accuracy >= 90.0 {
            Verdict::Excellent
        } else {
            Verdict::Adequate
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn preview(email: &str) -> String {
    let head: String = email.chars().take(EMAIL_PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Classifies each reference example in turn and scores the predictions.
pub async fn validate_model<C: CompletionService>(
    processor: &BatchProcessor<C>,
    examples: &[ValidationExample],
) -> ValidationReport {
    let mut details = Vec::with_capacity(examples.len());
    for example in examples {
        let classified = processor.classify_one(example.email).await;
        let predicted = classified.classification.category;
        let correct = predicted == example.expected_category;
        if !correct {
            tracing::warn!(
                target: "validation",
                expected = %example.expected_category,
                %predicted,
                "misclassified reference example"
            );
        }
        details.push(ValidationDetail {
            email: preview(example.email),
            expected: example.expected_category,
            predicted,
            confidence: classified.classification.confidence,
            correct,
            model_reason: classified.classification.reason,
        });
    }

    let report = ValidationReport::from_details(details);
    tracing::info!(
        target: "validation",
        total = report.total,
        correct = report.correct,
        accuracy = report.accuracy,
        precision = report.precision,
        recall = report.recall,
        f1 = report.f1_score,
        "validation finished"
    );
    match report.verdict() {
        Verdict::NeedsPromptReview => tracing::warn!(
            target: "validation",
            "accuracy below 80%: review few-shot examples, add edge cases, or lower temperature"
        ),
        Verdict::Adequate => tracing::info!(target: "validation", "adequate accuracy"),
        Verdict::Excellent => tracing::info!(target: "validation", "excellent accuracy"),
    }
    report
}
