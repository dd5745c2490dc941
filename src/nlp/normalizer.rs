use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9$\-_@.&+!*(),/?=#~:]|%[0-9a-fA-F]{2})+")
        .expect("valid url regex")
});
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("valid email regex"));
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{2,3}\)?\s?\d{4,5}-?\d{4}").expect("valid phone regex")
});
static SYMBOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^\w\s.,!?;:\-áéíóúâêîôûãõàèìòùäëïöüçÁÉÍÓÚÂÊÎÔÛÃÕÀÈÌÒÙÄËÏÖÜÇ]",
    )
    .expect("valid symbol regex")
});
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Strips URLs, email addresses, phone numbers and non-linguistic symbols.
///
/// The pass is repeated until the text stops changing: removing a match can join
/// fragments into a new one (`"12 •34567890"` only looks like a phone number after the
/// bullet is gone), and callers rely on `normalize` being a fixed point.
pub fn normalize(text: &str) -> String {
    let mut current = clean_pass(text);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let text = URL_REGEX.replace_all(text, "");
    let text = EMAIL_REGEX.replace_all(&text, "");
    let text = PHONE_REGEX.replace_all(&text, "");
    let text = SYMBOL_REGEX.replace_all(&text, " ");
    let text = WHITESPACE_REGEX.replace_all(&text, " ");
    text.trim().to_string()
}

/// Lowercases a token and drops its diacritics (`"Ação"` -> `"acao"`).
pub fn fold_token(token: &str) -> String {
    token
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}
