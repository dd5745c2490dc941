use unicode_segmentation::UnicodeSegmentation;

const MIN_TOKEN_CHARS: usize = 3;

/// Splits on Unicode word boundaries; punctuation never becomes a token. A single hyphen
/// between letters stays inside the word, so `sexta-feira` and `e-mail` are one token each.
pub fn tokenize(cleaned: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut hyphen_pending = false;

    for segment in cleaned.split_word_bounds() {
        if segment.chars().any(char::is_alphanumeric) {
            if hyphen_pending && segment.starts_with(char::is_alphabetic) {
                current.push('-');
            } else {
                flush(&mut tokens, &mut current);
            }
            current.push_str(segment);
            hyphen_pending = false;
        } else if segment == "-" && !hyphen_pending && current.ends_with(char::is_alphabetic) {
            hyphen_pending = true;
        } else {
            flush(&mut tokens, &mut current);
            hyphen_pending = false;
        }
    }
    flush(&mut tokens, &mut current);

    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

pub fn filter_short(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_drops_punctuation() {
        assert_eq!(
            tokenize("Olá, preciso do relatório. Obrigado!"),
            vec!["Olá", "preciso", "do", "relatório", "Obrigado"]
        );
    }

    #[test]
    fn hyphenated_words_stay_whole() {
        assert_eq!(
            tokenize("Por favor reenviar o e-mail até sexta-feira."),
            vec!["Por", "favor", "reenviar", "o", "e-mail", "até", "sexta-feira"]
        );
        assert_eq!(tokenize("guarda-roupa-novo"), vec!["guarda-roupa-novo"]);
    }

    #[test]
    fn loose_or_numeric_hyphens_split() {
        assert_eq!(tokenize("prazo - urgente"), vec!["prazo", "urgente"]);
        assert_eq!(tokenize("fim-"), vec!["fim"]);
        assert_eq!(tokenize("-inicio"), vec!["inicio"]);
        assert_eq!(tokenize("2024-05"), vec!["2024", "05"]);
        assert_eq!(tokenize("lote-42"), vec!["lote", "42"]);
        assert_eq!(tokenize("a--b"), vec!["a", "b"]);
    }

    #[test]
    fn short_tokens_are_removed_in_order() {
        let tokens: Vec<String> = ["de", "reunião", "às", "a", "pão", "sexta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let filtered = filter_short(tokens.clone());
        assert_eq!(filtered, vec!["reunião", "pão", "sexta"]);
        assert!(filtered.iter().all(|t| t.chars().count() > 2));

        let mut source = tokens.iter();
        for kept in &filtered {
            assert!(source.any(|t| t == kept), "{kept} is out of order");
        }
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(filter_short(Vec::new()).is_empty());
    }
}
