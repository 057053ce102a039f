//! Dictionary loading and the degraded-availability fallback.
//!
//! The dictionary is a JSON array of `{"word", "definition"}` records. Loading
//! is forgiving at the entry level (malformed or wrong-length entries are
//! dropped with a warning) and at the source level (an unreadable or unusable
//! source degrades to the built-in seed list instead of failing the request).

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default dictionary compiled into the binary, used when no file is supplied.
pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/words.json");

/// One dictionary record. Created at load time, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub definition: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: &str, definition: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            definition: definition.to_string(),
        }
    }
}

/// Readiness of the dictionary resource.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DictionaryState {
    /// Load has not happened yet; matching falls back to the seed list.
    Unloaded,
    Loaded(Vec<WordEntry>),
    /// The source was unavailable or unusable; the seed list stands in.
    FallenBack(Vec<WordEntry>),
}

/// An owned, swappable word list handle.
///
/// Reloading builds a fresh `Dictionary` and the owner replaces the whole
/// value; entries are never mutated in place, so readers observe either the
/// old list or the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    state: DictionaryState,
    word_length: usize,
}

impl Dictionary {
    /// A handle for the time before any load has completed.
    #[must_use]
    pub fn unloaded(word_length: usize) -> Self {
        Self {
            state: DictionaryState::Unloaded,
            word_length,
        }
    }

    /// The degraded-availability dictionary backed by the seed list.
    #[must_use]
    pub fn fallen_back(word_length: usize) -> Self {
        Self {
            state: DictionaryState::FallenBack(seed_entries()),
            word_length,
        }
    }

    /// Build a dictionary from already-decoded entries, dropping the ones
    /// that fail shape checks. Falls back to the seed list when nothing
    /// usable remains.
    #[must_use]
    pub fn from_entries(entries: Vec<WordEntry>, word_length: usize) -> Self {
        let usable = validate_entries(entries, word_length);
        if usable.is_empty() {
            log::warn!(
                "dictionary contained no usable {word_length}-letter entries; using the built-in seed list"
            );
            return Self::fallen_back(word_length);
        }
        Self {
            state: DictionaryState::Loaded(usable),
            word_length,
        }
    }

    /// Parse a JSON array of `{"word", "definition"}` records.
    ///
    /// A record that fails to decode is dropped with a warning; a source that
    /// fails to parse at all degrades to the seed list.
    #[must_use]
    pub fn from_json_str(json: &str, word_length: usize) -> Self {
        let raw: Vec<serde_json::Value> = match serde_json::from_str(json) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to parse dictionary JSON: {e}; using the built-in seed list");
                return Self::fallen_back(word_length);
            }
        };

        let mut entries = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<WordEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("dropping malformed dictionary entry at index {index}: {e}"),
            }
        }
        Self::from_entries(entries, word_length)
    }

    /// Read and parse a dictionary file. I/O failure degrades to the seed
    /// list; it is never propagated to the caller.
    #[must_use]
    pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(json) => Self::from_json_str(&json, word_length),
            Err(e) => {
                log::warn!(
                    "failed to read dictionary '{}': {e}; using the built-in seed list",
                    path.as_ref().display()
                );
                Self::fallen_back(word_length)
            }
        }
    }

    /// The entries to match against, or `None` before any load completed.
    #[must_use]
    pub fn entries(&self) -> Option<&[WordEntry]> {
        match &self.state {
            DictionaryState::Unloaded => None,
            DictionaryState::Loaded(entries) | DictionaryState::FallenBack(entries) => {
                Some(entries)
            }
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// True when the dictionary is standing in with the seed list.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.state, DictionaryState::FallenBack(_))
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, DictionaryState::Loaded(_))
    }
}

fn validate_entries(entries: Vec<WordEntry>, word_length: usize) -> Vec<WordEntry> {
    let mut usable = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.word.len() != word_length {
            log::warn!(
                "dropping '{}': expected {word_length} letters, got {}",
                entry.word,
                entry.word.len()
            );
            continue;
        }
        if !entry.word.chars().all(|c| c.is_ascii_alphabetic()) {
            log::warn!("dropping '{}': non-alphabetic characters", entry.word);
            continue;
        }
        usable.push(WordEntry {
            word: entry.word.to_lowercase(),
            definition: entry.definition,
        });
    }
    usable
}

/// The built-in fallback words used whenever the real dictionary is
/// unavailable.
#[must_use]
pub fn seed_entries() -> Vec<WordEntry> {
    vec![
        WordEntry::new("apple", "A round fruit with crisp flesh"),
        WordEntry::new("brave", "Ready to face danger or pain"),
        WordEntry::new("crane", "A large tall machine for lifting heavy objects"),
        WordEntry::new("dance", "Move rhythmically to music"),
        WordEntry::new("eagle", "A large bird of prey"),
        WordEntry::new("fable", "A short story conveying a moral"),
        WordEntry::new("grape", "A small sweet fruit used to make wine"),
        WordEntry::new("hazel", "A light brown or greenish-brown color"),
        WordEntry::new("ivory", "A hard white material from elephant tusks"),
        WordEntry::new("jolly", "Happy and cheerful"),
    ]
}

/// Per-user dictionary location, consulted when no path is given on the
/// command line.
#[must_use]
pub fn default_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordle-helper").join("words.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str_loads_entries() {
        let json = r#"[
            {"word": "crane", "definition": "a lifting machine"},
            {"word": "slate", "definition": "a fine-grained rock"}
        ]"#;
        let dictionary = Dictionary::from_json_str(json, 5);
        assert!(dictionary.is_loaded());
        let entries = dictionary.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "crane");
        assert_eq!(entries[1].definition, "a fine-grained rock");
    }

    #[test]
    fn test_from_json_str_normalizes_case() {
        let json = r#"[{"word": "CRANE", "definition": ""}]"#;
        let dictionary = Dictionary::from_json_str(json, 5);
        assert_eq!(dictionary.entries().unwrap()[0].word, "crane");
    }

    #[test]
    fn test_from_json_str_drops_wrong_length() {
        let json = r#"[
            {"word": "crane", "definition": ""},
            {"word": "cranes", "definition": ""},
            {"word": "ace", "definition": ""}
        ]"#;
        let dictionary = Dictionary::from_json_str(json, 5);
        assert!(dictionary.is_loaded());
        assert_eq!(dictionary.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_from_json_str_drops_non_alphabetic() {
        let json = r#"[
            {"word": "cr4ne", "definition": ""},
            {"word": "slate", "definition": ""}
        ]"#;
        let dictionary = Dictionary::from_json_str(json, 5);
        assert_eq!(dictionary.entries().unwrap().len(), 1);
        assert_eq!(dictionary.entries().unwrap()[0].word, "slate");
    }

    #[test]
    fn test_from_json_str_drops_malformed_records() {
        let json = r#"[
            {"word": "crane", "definition": ""},
            {"definition": "no word here"},
            {"word": 42, "definition": ""},
            null
        ]"#;
        let dictionary = Dictionary::from_json_str(json, 5);
        assert!(dictionary.is_loaded());
        assert_eq!(dictionary.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_definition_defaults_to_empty() {
        let json = r#"[{"word": "crane"}]"#;
        let dictionary = Dictionary::from_json_str(json, 5);
        assert_eq!(dictionary.entries().unwrap()[0].definition, "");
    }

    #[test]
    fn test_invalid_json_falls_back_to_seed() {
        let dictionary = Dictionary::from_json_str("not json at all", 5);
        assert!(dictionary.is_fallback());
        assert_eq!(dictionary.entries().unwrap().len(), seed_entries().len());
    }

    #[test]
    fn test_no_usable_entries_falls_back_to_seed() {
        let json = r#"[{"word": "toolong", "definition": ""}]"#;
        let dictionary = Dictionary::from_json_str(json, 5);
        assert!(dictionary.is_fallback());
    }

    #[test]
    fn test_missing_file_falls_back_to_seed() {
        let dictionary = Dictionary::load_from_file("/nonexistent/words.json", 5);
        assert!(dictionary.is_fallback());
    }

    #[test]
    fn test_load_from_file_roundtrip() {
        use std::io::Write;

        let path = std::env::temp_dir().join("wordle_helper_dictionary_test.json");
        {
            let mut file = fs::File::create(&path).unwrap();
            write!(
                file,
                r#"[{{"word": "grape", "definition": "a small fruit"}}]"#
            )
            .unwrap();
        }

        let dictionary = Dictionary::load_from_file(&path, 5);
        assert!(dictionary.is_loaded());
        assert_eq!(dictionary.entries().unwrap()[0].word, "grape");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unloaded_has_no_entries() {
        let dictionary = Dictionary::unloaded(5);
        assert!(dictionary.entries().is_none());
        assert!(!dictionary.is_loaded());
        assert!(!dictionary.is_fallback());
    }

    #[test]
    fn test_seed_entries_shape() {
        let seed = seed_entries();
        assert_eq!(seed.len(), 10);
        assert!(seed.iter().all(|e| e.word.len() == 5));
        assert!(seed.iter().all(|e| !e.definition.is_empty()));
        assert_eq!(seed[0].word, "apple");
    }

    #[test]
    fn test_embedded_dictionary_is_usable() {
        let dictionary = Dictionary::from_json_str(EMBEDDED_DICTIONARY, 5);
        assert!(dictionary.is_loaded());
        assert!(dictionary.entries().unwrap().len() >= seed_entries().len());
    }
}
