use reqwest::Response;
use serde::{Deserialize, Serialize};

use super::client::CompletionError;

pub fn build_request(
    model: String,
    prompt: &str,
    temperature: f32,
    max_tokens: u32,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model,
        messages: vec![ChatMessage {
            role: "user".into(),
            content: prompt.to_string(),
        }],
        temperature,
        max_tokens,
    }
}

pub async fn parse_response(response: Response) -> Result<String, CompletionError> {
    let completion: ChatCompletionResponse = response.json().await?;
    extract_content(completion)
}

fn extract_content(completion: ChatCompletionResponse) -> Result<String, CompletionError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|msg| msg.content)
        .map(|content| content.trim().to_string())
        .ok_or(CompletionError::EmptyResponse)
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_sampling_parameters() {
        let request = build_request("llama-3.1-8b-instant".into(), "oi", 0.0, 300);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "oi");
        assert_eq!(value["max_tokens"], 300);
        assert_eq!(value["temperature"], 0.0);
    }

    #[test]
    fn first_choice_content_is_trimmed() {
        let completion: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"  {\"categoria\":\"PRODUTIVO\"}\n"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            extract_content(completion).unwrap(),
            r#"{"categoria":"PRODUTIVO"}"#
        );
    }

    #[test]
    fn missing_content_is_an_error() {
        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":null}]}"#).unwrap();
        assert!(matches!(
            extract_content(completion),
            Err(CompletionError::EmptyResponse)
        ));

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_content(empty),
            Err(CompletionError::EmptyResponse)
        ));
    }
}
