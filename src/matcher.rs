//! Matching engine: filter dictionary entries against a validated query.

use crate::constraints::Constraints;
use crate::dictionary::{Dictionary, WordEntry, seed_entries};

/// Decide whether a single word satisfies every constraint.
///
/// Checks run as a short-circuiting conjunction, cheapest first: length,
/// excluded letters, required letters, known positions. Case-insensitive.
#[must_use]
pub fn matches_constraints(word: &str, constraints: &Constraints) -> bool {
    let word = word.to_lowercase();

    // The dictionary is pre-filtered by length, but the engine does not
    // assume it.
    if word.chars().count() != constraints.word_length() {
        return false;
    }

    if constraints.excluded.iter().any(|&c| word.contains(c)) {
        return false;
    }

    // Each required letter must occur somewhere outside its own
    // excluded-position set. A letter found only at excluded positions does
    // not count as present.
    for (&letter, excluded_positions) in &constraints.required {
        let found = word
            .chars()
            .enumerate()
            .any(|(i, c)| c == letter && !excluded_positions.contains(&i));
        if !found {
            return false;
        }
    }

    for (&position, &letter) in &constraints.known_positions {
        if word.chars().nth(position) != Some(letter) {
            return false;
        }
    }

    true
}

/// Stable filter: surviving entries keep their dictionary order. No
/// deduplication and no bound on the result size.
#[must_use]
pub fn filter_entries(entries: &[WordEntry], constraints: &Constraints) -> Vec<WordEntry> {
    entries
        .iter()
        .filter(|entry| matches_constraints(&entry.word, constraints))
        .cloned()
        .collect()
}

/// Filter the dictionary, or the built-in seed list when no load has
/// completed yet. Never fails; the worst outcome is an empty result.
#[must_use]
pub fn suggestions(dictionary: &Dictionary, constraints: &Constraints) -> Vec<WordEntry> {
    match dictionary.entries() {
        Some(entries) => filter_entries(entries, constraints),
        None => {
            log::warn!("dictionary not loaded yet; matching against the built-in seed list");
            filter_entries(&seed_entries(), constraints)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{ParsedQuery, parse_query};

    fn query(known: &str, required: &str, excluded: &str) -> Constraints {
        match parse_query(known, required, excluded, 5).unwrap() {
            ParsedQuery::Query(constraints) => constraints,
            ParsedQuery::Empty => panic!("expected a non-empty query"),
        }
    }

    fn fixture() -> Vec<WordEntry> {
        ["apple", "brave", "crane", "dance", "eagle"]
            .iter()
            .map(|w| WordEntry::new(w, ""))
            .collect()
    }

    fn words(entries: &[WordEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_known_position_fixture() {
        // "a2": 'a' confirmed as the second letter.
        let matches = filter_entries(&fixture(), &query("a2", "", ""));
        assert_eq!(words(&matches), vec!["dance", "eagle"]);
    }

    #[test]
    fn test_known_position_mismatch_excludes() {
        let constraints = query("z1", "", "");
        assert!(!matches_constraints("crane", &constraints));
    }

    #[test]
    fn test_all_known_positions_must_match() {
        let constraints = query("c1r2e5", "", "");
        assert!(matches_constraints("crane", &constraints));
        assert!(!matches_constraints("crumb", &constraints));
    }

    #[test]
    fn test_excluded_letter_anywhere_excludes() {
        let matches = filter_entries(&fixture(), &query("", "", "a"));
        assert!(matches.is_empty());

        let matches = filter_entries(&fixture(), &query("", "", "p"));
        assert_eq!(words(&matches), vec!["brave", "crane", "dance", "eagle"]);
    }

    #[test]
    fn test_required_letter_must_be_present() {
        let matches = filter_entries(&fixture(), &query("", "g", ""));
        assert_eq!(words(&matches), vec!["eagle"]);
    }

    #[test]
    fn test_required_letter_with_excluded_position() {
        // 'e' required but not as the third letter: a word whose only 'e' is
        // third is out; a word with another 'e' elsewhere stays in.
        let constraints = query("", "e3", "");
        assert!(!matches_constraints("dress", &constraints));
        assert!(matches_constraints("eagle", &constraints));
        assert!(matches_constraints("erect", &constraints));
    }

    #[test]
    fn test_required_letter_only_at_excluded_positions_fails() {
        let constraints = query("", "e15", "");
        // "edges": e at positions 1 and 4; position 4 is allowed, so it stays.
        assert!(matches_constraints("edges", &constraints));
        // "ernie": e at positions 1 and 5 only, both excluded, so it fails.
        assert!(!matches_constraints("ernie", &constraints));
    }

    #[test]
    fn test_constraints_combine_conjunctively() {
        let constraints = query("e1", "l", "p");
        // eagle: e first, contains l, no p.
        assert!(matches_constraints("eagle", &constraints));
        // elbow: e first, contains l, no p.
        assert!(matches_constraints("elbow", &constraints));
        // erupt: e first but has p and no l.
        assert!(!matches_constraints("erupt", &constraints));
    }

    #[test]
    fn test_length_mismatch_never_matches() {
        let constraints = query("", "a", "");
        assert!(!matches_constraints("apples", &constraints));
        assert!(!matches_constraints("ape", &constraints));
        assert!(!matches_constraints("", &constraints));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let constraints = query("A2", "E", "Q");
        assert!(matches_constraints("EAGLE", &constraints));
        assert!(matches_constraints("eagle", &constraints));
    }

    #[test]
    fn test_stray_punctuation_fails_to_match_without_error() {
        let constraints = query("!2", "", "");
        assert!(!matches_constraints("crane", &constraints));
    }

    #[test]
    fn test_filter_preserves_order_and_is_subsequence() {
        let entries = fixture();
        let matches = filter_entries(&entries, &query("", "a", ""));

        // Every match appears in the source, in the same relative order.
        let mut source = entries.iter();
        for m in &matches {
            assert!(source.any(|e| e == m));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let constraints = query("a2", "e", "");
        let once = filter_entries(&fixture(), &constraints);
        let twice = filter_entries(&once, &constraints);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unconstrained_query_keeps_all_entries() {
        let entries = fixture();
        let constraints = query("", "", "q");
        let mut unconstrained = constraints.clone();
        unconstrained.excluded.clear();
        assert!(unconstrained.is_unconstrained());
        assert_eq!(filter_entries(&entries, &unconstrained), entries);
    }

    #[test]
    fn test_suggestions_uses_loaded_dictionary() {
        let dictionary = Dictionary::from_entries(fixture(), 5);
        let matches = suggestions(&dictionary, &query("a2", "", ""));
        assert_eq!(words(&matches), vec!["dance", "eagle"]);
    }

    #[test]
    fn test_suggestions_falls_back_when_unloaded() {
        let dictionary = Dictionary::unloaded(5);
        let matches = suggestions(&dictionary, &query("", "j", ""));
        // Seed list contains "jolly".
        assert_eq!(words(&matches), vec!["jolly"]);
    }
}
