use std::{env, str::FromStr, time::Duration};

use url::Url;

use super::env::{AppConfig, ConfigError, DirectoryConfig, GroqConfig, LoggingConfig, NlpConfig};

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = non_empty("GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url).map_err(|_| ConfigError::Invalid {
            key: "GROQ_API_URL",
            value: raw_url,
        })?;

        let groq = GroqConfig {
            api_key: non_empty("GROQ_API_KEY"),
            model: non_empty("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url,
            timeout: Duration::from_secs(parse_or(
                "GROQ_TIMEOUT_SECS",
                non_empty("GROQ_TIMEOUT_SECS"),
                30,
            )?),
        };

        let nlp = NlpConfig {
            enabled: parse_bool(
                "USE_NLP_PREPROCESSING",
                non_empty("USE_NLP_PREPROCESSING"),
                true,
            )?,
            keyword_count: parse_or("KEYWORD_COUNT", non_empty("KEYWORD_COUNT"), 5)?,
        };

        let directories = DirectoryConfig {
            logs_dir: non_empty("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        Ok(Self {
            groq,
            nlp,
            directories,
            logging,
        })
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn parse_bool(
    key: &'static str,
    raw: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    match raw {
        Some(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        None => Ok(default),
    }
}
