use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::{Category, ClassificationResult};

static OBJECT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object regex"));

const SNIPPET_CHARS: usize = 200;

/// Model output after the structural parse, before field coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedOutput {
    Structured(Map<String, Value>),
    Malformed(String),
}

impl ParsedOutput {
    /// Strict parse first; only when that fails, the widest `{...}` span in the text.
    pub fn from_raw(raw: &str) -> Self {
        let parsed = match serde_json::from_str::<Value>(raw) {
            Ok(value) => Some(value),
            Err(_) => OBJECT_REGEX
                .find(raw)
                .and_then(|found| serde_json::from_str::<Value>(found.as_str()).ok()),
        };

        match parsed {
            Some(Value::Object(map)) if !map.is_empty() => ParsedOutput::Structured(map),
            _ => ParsedOutput::Malformed(raw.chars().take(SNIPPET_CHARS).collect()),
        }
    }
}

/// Never fails: anything unusable becomes an `IMPRODUTIVO`/0 result.
pub fn parse_classification(raw: &str) -> ClassificationResult {
    match ParsedOutput::from_raw(raw) {
        ParsedOutput::Structured(fields) => ClassificationResult::new(
            coerce_category(fields.get("categoria")),
            coerce_confidence(fields.get("confianca")),
            coerce_reason(&fields),
        ),
        ParsedOutput::Malformed(snippet) => {
            tracing::warn!(target: "ai", snippet = %snippet, "model output is not a JSON object");
            ClassificationResult::fallback(format!(
                "Resposta do modelo não foi JSON válido. Trecho: {snippet}"
            ))
        }
    }
}

fn coerce_category(value: Option<&Value>) -> Category {
    value
        .and_then(Value::as_str)
        .map(Category::from_label)
        .unwrap_or_default()
}

/// Integers pass through, floats and numeric strings (`"42"`, `"42.0"`) truncate toward
/// zero, booleans count as 1/0, everything else is 0.
pub fn coerce_confidence(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| number.as_f64().and_then(truncate_finite))
            .unwrap_or(0),
        Some(Value::String(text)) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(truncate_finite))
                .unwrap_or(0)
        }
        Some(Value::Bool(flag)) => i64::from(*flag),
        _ => 0,
    }
}

fn truncate_finite(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

fn coerce_reason(fields: &Map<String, Value>) -> String {
    ["razao", "reason"]
        .iter()
        .find_map(|key| match fields.get(*key) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn uppercases_category_and_clamps_high_confidence() {
        let result = parse_classification(r#"{"categoria":"produtivo","confianca":150,"razao":"x"}"#);
        assert_eq!(
            result,
            ClassificationResult::new(Category::Produtivo, 100, "x")
        );
    }

    #[test]
    fn negative_confidence_clamps_and_reason_defaults_empty() {
        let result = parse_classification(r#"{"categoria":"IMPRODUTIVO","confianca":-5}"#);
        assert_eq!(result.category, Category::Improdutivo);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.reason, "");
    }

    #[test]
    fn plain_text_falls_back_with_an_echo() {
        let result = parse_classification("not json at all");
        assert_eq!(result.category, Category::Improdutivo);
        assert_eq!(result.confidence, 0);
        assert!(result.reason.contains("not json at all"));
    }

    #[test]
    fn echo_is_truncated_to_two_hundred_chars() {
        let raw = "ç".repeat(250);
        let result = parse_classification(&raw);
        let echoed = result.reason.split("Trecho: ").nth(1).unwrap();
        assert_eq!(echoed.chars().count(), 200);
    }

    #[test]
    fn extracts_object_embedded_in_prose() {
        let raw = "Claro! Segue a classificação:\n```json\n{\n  \"categoria\": \"PRODUTIVO\",\n  \
                   \"confianca\": \"87.5\",\n  \"razao\": \"pedido com prazo\"\n}\n```";
        let result = parse_classification(raw);
        assert_eq!(result.category, Category::Produtivo);
        assert_eq!(result.confidence, 87);
        assert_eq!(result.reason, "pedido com prazo");
    }

    #[test]
    fn greedy_span_over_two_objects_is_malformed() {
        let raw = r#"primeiro {"categoria":"PRODUTIVO"} depois {"categoria":"IMPRODUTIVO"}"#;
        let result = parse_classification(raw);
        assert_eq!(result.confidence, 0);
        assert!(result.reason.starts_with("Resposta do modelo não foi JSON válido"));
    }

    #[test]
    fn non_object_json_uses_the_safe_default() {
        for raw in ["[1, 2, 3]", "42", "\"PRODUTIVO\"", "null", "{}", "", "   "] {
            let result = parse_classification(raw);
            assert_eq!(result.category, Category::Improdutivo, "input: {raw:?}");
            assert_eq!(result.confidence, 0, "input: {raw:?}");
        }
    }

    #[test]
    fn unknown_category_and_english_reason_key() {
        let result =
            parse_classification(r#"{"categoria":"urgente","confianca":70,"reason":"fallback key"}"#);
        assert_eq!(result.category, Category::Improdutivo);
        assert_eq!(result.confidence, 70);
        assert_eq!(result.reason, "fallback key");
    }

    #[test]
    fn never_panics_on_odd_inputs() {
        let inputs = [
            "{",
            "}{",
            "{\"categoria\":",
            "{\"confianca\": 1e400}",
            "{\"categoria\": null, \"confianca\": [], \"razao\": {\"a\": 1}}",
            "\u{0}\u{1}{}",
        ];
        for raw in inputs {
            let result = parse_classification(raw);
            assert!(result.confidence <= 100);
        }
    }

    #[test]
    fn confidence_coercion() {
        assert_eq!(coerce_confidence(Some(&json!("42"))), 42);
        assert_eq!(coerce_confidence(Some(&json!("42.0"))), 42);
        assert_eq!(coerce_confidence(Some(&json!(" 17 "))), 17);
        assert_eq!(coerce_confidence(Some(&json!("abc"))), 0);
        assert_eq!(coerce_confidence(Some(&json!(null))), 0);
        assert_eq!(coerce_confidence(None), 0);
        assert_eq!(coerce_confidence(Some(&json!(42.9))), 42);
        assert_eq!(coerce_confidence(Some(&json!(-3.7))), -3);
        assert_eq!(coerce_confidence(Some(&json!(true))), 1);
        assert_eq!(coerce_confidence(Some(&json!("NaN"))), 0);
        assert_eq!(coerce_confidence(Some(&json!("inf"))), 0);
        assert_eq!(coerce_confidence(Some(&json!([90]))), 0);
        assert_eq!(coerce_confidence(Some(&json!(u64::MAX))), i64::MAX);
    }

    #[test]
    fn padded_category_label_is_not_productive() {
        let result = parse_classification(r#"{"categoria":" PRODUTIVO ","confianca":90}"#);
        assert_eq!(result.category, Category::Improdutivo);
        assert_eq!(result.confidence, 90);
    }
}
