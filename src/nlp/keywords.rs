use std::collections::HashMap;

/// Most frequent tokens first; equal counts keep the order in which tokens first appeared.
pub fn rank_by_frequency(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(n)
        .map(|(token, _, _)| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn ranks_by_count_then_first_appearance() {
        let tokens = owned(&["prazo", "relat", "serv", "relat", "prazo", "erro", "relat"]);
        assert_eq!(rank_by_frequency(&tokens, 3), owned(&["relat", "prazo", "serv"]));
    }

    #[test]
    fn zero_requested_returns_nothing() {
        assert!(rank_by_frequency(&owned(&["a", "b"]), 0).is_empty());
    }

    #[test]
    fn fewer_distinct_tokens_than_requested() {
        let tokens = owned(&["erro", "serv", "erro"]);
        assert_eq!(rank_by_frequency(&tokens, 10), owned(&["erro", "serv"]));
    }
}
