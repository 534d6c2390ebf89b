//! Banned-term lexicon — case-insensitive substring matching.
//!
//! Matching is deliberately permissive: a message violates the policy when it
//! contains ANY lexicon term as a substring, with no word-boundary check.
//! "expressPAMper" containing "spam"-like fragments of legitimate words is an
//! accepted false positive, not a bug.

/// Immutable set of lowercase banned terms.
///
/// Built once at startup from config and shared read-only (behind an `Arc`)
/// by all concurrent pipeline invocations — no locking needed.
#[derive(Debug, Clone, Default)]
pub struct BannedLexicon {
    terms: Vec<String>,
}

impl BannedLexicon {
    /// Build the lexicon from configured terms.
    ///
    /// Terms are trimmed and lowercased; empty entries are dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `true` when `text` contains any banned term as a case-insensitive
    /// substring. Empty text never matches; an empty lexicon matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() || self.terms.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        self.terms.iter().any(|term| lowered.contains(term.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_term() {
        let lexicon = BannedLexicon::new(["spam"]);
        assert!(lexicon.matches("spam"));
    }

    #[test]
    fn matches_case_insensitive() {
        let lexicon = BannedLexicon::new(["spam"]);
        assert!(lexicon.matches("buy Spam now"));
        assert!(lexicon.matches("SPAM"));
    }

    #[test]
    fn matches_substring_without_word_boundary() {
        // Permissive policy: substrings of larger words count.
        let lexicon = BannedLexicon::new(["spam"]);
        assert!(lexicon.matches("antispamming"));
    }

    #[test]
    fn clean_text_does_not_match() {
        let lexicon = BannedLexicon::new(["spam"]);
        assert!(!lexicon.matches("hello world"));
    }

    #[test]
    fn empty_text_never_matches() {
        let lexicon = BannedLexicon::new(["spam", "scam"]);
        assert!(!lexicon.matches(""));
    }

    #[test]
    fn empty_lexicon_matches_nothing() {
        let lexicon = BannedLexicon::new(Vec::<String>::new());
        assert!(!lexicon.matches("spam spam spam"));
        assert!(lexicon.is_empty());
    }

    #[test]
    fn any_term_suffices() {
        let lexicon = BannedLexicon::new(["casino", "scam"]);
        assert!(lexicon.matches("this is a scam"));
        assert!(lexicon.matches("visit my casino"));
        assert!(!lexicon.matches("this is fine"));
    }

    #[test]
    fn construction_lowercases_terms() {
        let lexicon = BannedLexicon::new(["SpAm"]);
        assert!(lexicon.matches("spam"));
    }

    #[test]
    fn construction_drops_empty_and_whitespace_terms() {
        let lexicon = BannedLexicon::new(["", "  ", "spam"]);
        assert_eq!(lexicon.len(), 1);
        // an empty surviving term would match every message
        assert!(!lexicon.matches("hello"));
    }

    #[test]
    fn non_ascii_case_folding() {
        let lexicon = BannedLexicon::new(["КАЗИНО"]);
        assert!(lexicon.matches("лучшее казино города"));
    }
}
