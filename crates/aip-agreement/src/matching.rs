const NEGATION_MARKERS: &[&str] = &["never", "no ", "don't", "do not"];

/// Rewrites `snake_case` action/condition names into space-joined words for
/// matching against free-text conscience content.
pub fn normalize_name(name: &str) -> String {
    name.replace('_', " ").to_lowercase()
}

/// True if `phrase` appears in `haystack` bounded by non-alphanumeric
/// characters (or the string edges) on both sides — a whole-word match.
pub fn contains_whole_word(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(phrase) {
        let start = search_from + offset;
        let end = start + phrase.len();

        let left_ok = haystack[..start]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
        let right_ok = haystack[end..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);

        if left_ok && right_ok {
            return true;
        }

        search_from = start + 1;
        if search_from >= haystack.len() {
            break;
        }
    }

    false
}

/// True if `content` contains any of the recognized negation markers.
pub fn contains_negation(content: &str) -> bool {
    NEGATION_MARKERS.iter().any(|marker| content.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_name_rewrites_underscores_and_lowercases() {
        assert_eq!(normalize_name("Delete_Account"), "delete account");
    }

    #[test]
    fn whole_word_match_requires_boundaries() {
        assert!(contains_whole_word("never delete account data", "delete account"));
        assert!(!contains_whole_word("never undelete accounting", "delete account"));
    }

    #[test]
    fn whole_word_match_at_string_edges() {
        assert!(contains_whole_word("delete account", "delete account"));
    }

    #[test]
    fn negation_markers_are_detected() {
        assert!(contains_negation("never do this"));
        assert!(contains_negation("no action without approval"));
        assert!(contains_negation("don't proceed"));
        assert!(contains_negation("do not proceed"));
        assert!(!contains_negation("always proceed"));
    }
}
