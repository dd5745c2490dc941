use std::collections::HashSet;

/// Standard Portuguese stopword list (the Snowball/NLTK `portuguese` corpus).
const PORTUGUESE_STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às",
    "até", "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do",
    "dos", "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "éramos",
    "essa", "essas", "esse", "esses", "esta", "está", "estamos", "estão", "estar", "estas",
    "estava", "estavam", "estávamos", "este", "esteja", "estejam", "estejamos", "estes",
    "esteve", "estive", "estivemos", "estiver", "estivera", "estiveram", "estivéramos",
    "estiverem", "estivermos", "estivesse", "estivessem", "estivéssemos", "estou", "eu",
    "foi", "fomos", "for", "fora", "foram", "fôramos", "forem", "formos", "fosse", "fossem",
    "fôssemos", "fui", "há", "haja", "hajam", "hajamos", "hão", "havemos", "haver", "hei",
    "houve", "houvemos", "houver", "houvera", "houverá", "houveram", "houvéramos",
    "houverão", "houverei", "houverem", "houveremos", "houveria", "houveriam",
    "houveríamos", "houvermos", "houvesse", "houvessem", "houvéssemos", "isso", "isto",
    "já", "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu", "meus", "minha", "minhas",
    "muito", "na", "não", "nas", "nem", "no", "nos", "nós", "nossa", "nossas", "nosso",
    "nossos", "num", "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo", "pelos",
    "por", "qual", "quando", "que", "quem", "são", "se", "seja", "sejam", "sejamos", "sem",
    "ser", "será", "serão", "serei", "seremos", "seria", "seriam", "seríamos", "seu", "seus",
    "só", "somos", "sou", "sua", "suas", "também", "te", "tem", "tém", "temos", "tenha",
    "tenham", "tenhamos", "tenho", "terá", "terão", "terei", "teremos", "teria", "teriam",
    "teríamos", "teu", "teus", "teve", "tinha", "tinham", "tínhamos", "tive", "tivemos",
    "tiver", "tivera", "tiveram", "tivéramos", "tiverem", "tivermos", "tivesse", "tivessem",
    "tivéssemos", "tu", "tua", "tuas", "um", "uma", "você", "vocês", "vos",
];

/// Salutations and sign-offs that carry no signal in business email.
const CUSTOM_STOPWORDS: &[&str] = &[
    "email",
    "assunto",
    "att",
    "atenciosamente",
    "cordialmente",
    "prezado",
    "prezada",
    "senhor",
    "senhora",
    "sr",
    "sra",
];

/// Immutable stopword set. Matching ignores case only: entries keep their accents, so an
/// accent-folded token such as `nao` is not a stopword while `não` is.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn portuguese() -> Self {
        Self::from_words(PORTUGUESE_STOPWORDS.iter().chain(CUSTOM_STOPWORDS))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn remove_stopwords(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.contains(token))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn removes_language_and_custom_stopwords() {
        let set = StopwordSet::portuguese();
        let tokens = owned(&["prezado", "preciso", "para", "relatorio", "atenciosamente"]);
        assert_eq!(set.remove_stopwords(&tokens), owned(&["preciso", "relatorio"]));
    }

    #[test]
    fn membership_ignores_case_but_not_accents() {
        let set = StopwordSet::portuguese();
        assert!(set.contains("NÃO"));
        assert!(set.contains("Você"));
        assert!(set.contains("ASSUNTO"));
        assert!(!set.contains("servidor"));

        for folded in ["nao", "voce", "ate", "tambem", "ja", "sera"] {
            assert!(!set.contains(folded), "{folded} should survive");
        }
    }

    #[test]
    fn folded_tokens_keep_their_accentless_stopword_lookalikes() {
        let set = StopwordSet::portuguese();
        let tokens = owned(&["voce", "nao", "ate", "sexta-feira", "para"]);
        assert_eq!(
            set.remove_stopwords(&tokens),
            owned(&["voce", "nao", "ate", "sexta-feira"])
        );
    }

    #[test]
    fn entries_differing_only_in_case_collapse() {
        let set = StopwordSet::from_words(["Está", "ESTÁ", "esta"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("está"));
        assert!(!set.contains("estao"));
    }
}
