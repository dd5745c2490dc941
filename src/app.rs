use std::path::PathBuf;

use anyhow::{bail, Result};
use reqwest::Client;
use serde::Serialize;

use crate::{
    ai::GroqClient,
    config::AppConfig,
    domain::ProcessResponse,
    infrastructure::directories::ResolvedPaths,
    ingest,
    nlp::Preprocessor,
    tasks::BatchProcessor,
    validation::{self, validation_set},
};

pub enum Command {
    Process {
        files: Vec<PathBuf>,
        text: Option<String>,
    },
    Validate,
    Keywords {
        text: String,
        count: usize,
    },
}

pub struct AutoEmailApp {
    _paths: ResolvedPaths,
    processor: BatchProcessor<GroqClient>,
}

impl AutoEmailApp {
    pub fn initialize(config: AppConfig, paths: ResolvedPaths) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("autoemail-rust/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        if config.groq.api_key.is_none() {
            tracing::warn!(
                target: "app",
                "GROQ_API_KEY is not set; every item will get the fallback classification"
            );
        }

        let groq = GroqClient::new(http_client, config.groq.clone());
        let processor = BatchProcessor::new(groq, Preprocessor::portuguese(), config.nlp.clone());

        Ok(Self {
            _paths: paths,
            processor,
        })
    }

    pub async fn run(self, command: Command) -> Result<()> {
        match command {
            Command::Process { files, text } => {
                let items = ingest::load_inputs(&files, text.as_deref()).await?;
                if items.is_empty() {
                    bail!("Nenhum arquivo ou texto enviado.");
                }
                let results = self.processor.process_batch(&items).await;
                print_json(&ProcessResponse::new(results))
            }
            Command::Validate => {
                let report = validation::validate_model(&self.processor, &validation_set()).await;
                print_json(&report)
            }
            Command::Keywords { text, count } => {
                let keywords = self.processor.preprocessor().top_keywords(&text, count);
                print_json(&keywords)
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
