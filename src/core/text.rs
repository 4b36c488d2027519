use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Common English function words plus the boilerplate every posting in this
/// domain carries ("lost", "found") - matching on those would pair almost
/// any two reports.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has", "have",
    "in", "is", "it", "its", "my", "no", "not", "of", "on", "or", "our", "so", "that", "the",
    "their", "them", "then", "there", "they", "this", "to", "was", "were", "will", "with", "your",
    "lost", "found",
];

/// Normalize free text into a keyword set
///
/// Mirrors a "simple"/unaccented analyzer: NFKD fold with combining marks
/// stripped, lowercased, split on non-alphanumerics, stop words and
/// single-character fragments dropped.
pub fn keywords(text: &str) -> HashSet<String> {
    let folded: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    folded
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Boolean relevance test between two free-text blobs
///
/// A hit means the normalized keyword sets share at least one token. An
/// empty keyword set on either side is a miss, never a wildcard.
pub fn keywords_overlap(query: &str, text: &str) -> bool {
    let query_keywords = keywords(query);
    if query_keywords.is_empty() {
        return false;
    }

    let text_keywords = keywords(text);
    !query_keywords.is_disjoint(&text_keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_basic() {
        let tokens = keywords("Found wallet near park");
        assert!(tokens.contains("wallet"));
        assert!(tokens.contains("park"));
        assert!(tokens.contains("near"));
        // Domain boilerplate is dropped
        assert!(!tokens.contains("found"));
    }

    #[test]
    fn test_keywords_strips_accents_and_case() {
        let tokens = keywords("Trouvé: PORTEFEUILLE café");
        assert!(tokens.contains("trouve"));
        assert!(tokens.contains("portefeuille"));
        assert!(tokens.contains("cafe"));
    }

    #[test]
    fn test_keywords_drops_stop_words_and_fragments() {
        let tokens = keywords("I lost my keys at the station");
        assert!(tokens.contains("keys"));
        assert!(tokens.contains("station"));
        assert!(!tokens.contains("my"));
        assert!(!tokens.contains("the"));
        assert!(!tokens.contains("i"));
    }

    #[test]
    fn test_overlap_hit() {
        assert!(keywords_overlap(
            "Found wallet near park",
            "Lost my Gucci wallet at the park"
        ));
    }

    #[test]
    fn test_overlap_miss() {
        assert!(!keywords_overlap(
            "Found black umbrella",
            "Lost my silver ring downtown"
        ));
    }

    #[test]
    fn test_overlap_empty_is_miss_not_wildcard() {
        assert!(!keywords_overlap("", "Lost my Gucci wallet"));
        assert!(!keywords_overlap("the of and", "Lost my Gucci wallet"));
        assert!(!keywords_overlap("Lost my Gucci wallet", ""));
    }

    #[test]
    fn test_overlap_punctuation_and_numbers() {
        assert!(keywords_overlap(
            "iPhone 13, cracked screen!",
            "found an iphone near the mall"
        ));
    }
}
