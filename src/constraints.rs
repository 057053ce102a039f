//! Constraint model for narrowing the word dictionary.
//!
//! Three free-text fields describe what is known about the hidden word:
//!
//! - known letters: `letter` + `position` pairs, e.g. `a1c3` means `a` is the
//!   first letter and `c` the third
//! - required letters: letters confirmed present, each optionally followed by
//!   positions it is known *not* to occupy, e.g. `e34` means the word contains
//!   `e` but not as its third or fourth letter
//! - excluded letters: letters confirmed absent anywhere in the word
//!
//! Positions are 1-indexed in user input and 0-indexed in the parsed
//! [`Constraints`]. Parsing is pure: no I/O, no panics, total over all inputs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

// Either bare letters only, or every letter followed by excluded-position
// digits. A mix of the two forms (e.g. "e3x") is rejected.
static REQUIRED_LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[a-zA-Z]+|(?:[a-zA-Z]\d+)+)$").unwrap());

/// Validation failure for a constraint field.
///
/// Both variants are recoverable: the caller corrects the input and retries.
/// They gate matching; the engine never runs on an invalid query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// The required-letters field does not match the letter/digit grammar.
    #[error("invalid format \"{input}\": expected letters each optionally followed by position digits, e.g. \"e34\"")]
    InvalidFormat { input: String },

    /// A position digit in the required-letters field is outside `1..=word_length`.
    #[error("position {position} is out of range: valid positions are 1-{word_length}")]
    InvalidPosition { position: usize, word_length: usize },
}

/// A validated solve query.
///
/// `known_positions` and the keys of `required`'s position sets are 0-indexed.
/// All letters are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    word_length: usize,
    /// Position -> letter confirmed at that position.
    pub known_positions: BTreeMap<usize, char>,
    /// Letter confirmed present -> positions it is known not to occupy.
    pub required: BTreeMap<char, BTreeSet<usize>>,
    /// Characters confirmed absent from the word.
    pub excluded: BTreeSet<char>,
}

impl Constraints {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            known_positions: BTreeMap::new(),
            required: BTreeMap::new(),
            excluded: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// True when no field carries any information.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.known_positions.is_empty() && self.required.is_empty() && self.excluded.is_empty()
    }
}

/// Outcome of parsing the three raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    /// All fields were blank. Reported to the caller as its own condition;
    /// the matching engine is not invoked for it.
    Empty,
    Query(Constraints),
}

/// Parse and validate the three constraint fields.
///
/// Blank input in every field yields [`ParsedQuery::Empty`]. The
/// known-letters field is best-effort (malformed or out-of-range pairs are
/// dropped); the required-letters field is strict and produces the only two
/// error conditions.
pub fn parse_query(
    known_letters: &str,
    required_letters: &str,
    excluded_letters: &str,
    word_length: usize,
) -> Result<ParsedQuery, ConstraintError> {
    let known_letters = known_letters.trim();
    let required_letters = required_letters.trim();
    let excluded_letters = excluded_letters.trim();

    if known_letters.is_empty() && required_letters.is_empty() && excluded_letters.is_empty() {
        return Ok(ParsedQuery::Empty);
    }

    let mut constraints = Constraints::new(word_length);
    constraints.known_positions = parse_known_letters(known_letters, word_length);
    constraints.required = parse_required_letters(required_letters, word_length)?;
    constraints.excluded = parse_excluded_letters(excluded_letters);
    Ok(ParsedQuery::Query(constraints))
}

/// Parse the required-letters field, case-insensitive.
///
/// Accepted forms: bare letters (`"abc"`), or letters each followed by one or
/// more position digits (`"a1e25"`). Mixing the two forms in one string is an
/// [`ConstraintError::InvalidFormat`]. Each digit names a 1-indexed position
/// at which that letter does *not* occur. Digits outside `1..=word_length`
/// are a hard [`ConstraintError::InvalidPosition`]; the first offender in
/// input order is reported. Duplicate positions for the same letter are
/// idempotent, and a letter appearing twice merges its position sets.
pub fn parse_required_letters(
    input: &str,
    word_length: usize,
) -> Result<BTreeMap<char, BTreeSet<usize>>, ConstraintError> {
    let mut required: BTreeMap<char, BTreeSet<usize>> = BTreeMap::new();
    if input.is_empty() {
        return Ok(required);
    }
    if !REQUIRED_LETTERS_RE.is_match(input) {
        return Err(ConstraintError::InvalidFormat {
            input: input.to_string(),
        });
    }

    // The grammar guarantees the string is letters and digits, with a letter
    // before the first digit.
    let mut letter = None;
    for c in input.chars() {
        match c.to_digit(10) {
            None => {
                let lower = c.to_ascii_lowercase();
                required.entry(lower).or_default();
                letter = Some(lower);
            }
            Some(digit) => {
                let position = digit as usize;
                if position < 1 || position > word_length {
                    return Err(ConstraintError::InvalidPosition {
                        position,
                        word_length,
                    });
                }
                if let Some(lower) = letter {
                    required.entry(lower).or_default().insert(position - 1);
                }
            }
        }
    }
    Ok(required)
}

/// Parse the known-letters field: consecutive 2-character `letter` + `digit`
/// pairs.
///
/// Best-effort by design: a pair whose second character is not a digit in
/// `1..=word_length` is dropped rather than rejected, and a trailing unpaired
/// character is ignored. When two pairs name the same position, the last one
/// wins. A non-letter first character is kept as-is; it constrains a position
/// to a character no word contains, so the query simply matches nothing.
#[must_use]
pub fn parse_known_letters(input: &str, word_length: usize) -> BTreeMap<usize, char> {
    let mut known = BTreeMap::new();
    let chars: Vec<char> = input.chars().collect();
    for pair in chars.chunks_exact(2) {
        let Some(digit) = pair[1].to_digit(10) else {
            continue;
        };
        let position = digit as usize;
        if position < 1 || position > word_length {
            continue;
        }
        known.insert(position - 1, pair[0].to_ascii_lowercase());
    }
    known
}

/// Parse the excluded-letters field: an unstructured set of characters.
///
/// Non-letter content is not an error; it is kept verbatim and simply never
/// matches any word. Whitespace is ignored.
#[must_use]
pub fn parse_excluded_letters(input: &str) -> BTreeSet<char> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
