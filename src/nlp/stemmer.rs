use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

/// One-to-one, deterministic reduction of tokens to stems.
pub trait TokenStemmer: Send + Sync {
    fn stem_token(&self, token: &str) -> String;

    fn stem(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.stem_token(token)).collect()
    }
}

/// Snowball suffix-stripping stemmer for Portuguese.
pub struct SnowballStemmer {
    inner: Stemmer,
    algorithm: Algorithm,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: Stemmer::create(algorithm),
            algorithm,
        }
    }

    pub fn portuguese() -> Self {
        Self::new(Algorithm::Portuguese)
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl TokenStemmer for SnowballStemmer {
    fn stem_token(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_length_and_is_deterministic() {
        let stemmer = SnowballStemmer::portuguese();
        let tokens: Vec<String> = ["relatorios", "financeiro", "urgentemente", "projeto"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let first = stemmer.stem(&tokens);
        assert_eq!(first.len(), tokens.len());
        assert_eq!(first, stemmer.stem(&tokens));
    }

    #[test]
    fn plural_and_singular_share_a_stem() {
        let stemmer = SnowballStemmer::portuguese();
        assert_eq!(stemmer.stem_token("projetos"), stemmer.stem_token("projeto"));
        assert_eq!(stemmer.stem_token("relatorios"), stemmer.stem_token("relatorio"));
    }

    #[test]
    fn custom_stemmers_plug_in_through_the_trait() {
        struct Truncate;
        impl TokenStemmer for Truncate {
            fn stem_token(&self, token: &str) -> String {
                token.chars().take(4).collect()
            }
        }

        let tokens = vec!["servidor".to_string(), "api".to_string()];
        assert_eq!(Truncate.stem(&tokens), vec!["serv", "api"]);
    }
}
