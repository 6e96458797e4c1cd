/// Characters a document is split on. Everything between two delimiters is a
/// word; there is no stemming or stopword removal.
const DELIMITERS: &[char] = &[
    ' ', '\t', '\r', '\n', ',', '.', ';', ':', '!', '?', '"', '\'',
];

/// Split `text` into lower-cased words. Pure function of its input; empty and
/// whitespace-only fragments are dropped. Case folding is locale-independent,
/// so two tokens differing only in case always normalize identically.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(DELIMITERS)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation() {
        assert_eq!(
            tokenize("hello, world! how:are;you"),
            vec!["hello", "world", "how", "are", "you"]
        );
    }

    #[test]
    fn case_folds() {
        assert_eq!(tokenize("Dogs DOGS dogs"), vec!["dogs", "dogs", "dogs"]);
    }

    #[test]
    fn drops_empty_fragments() {
        assert_eq!(tokenize("  ...  !!  "), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }
}
