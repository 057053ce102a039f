//! The solve loop shared by the CLI and TUI front ends.
//!
//! A [`SolverInterface`] supplies user actions and renders results; the loop
//! itself owns the control flow: parse the three constraint fields, report
//! empty or invalid queries without matching, and filter the dictionary for
//! everything else.

use crate::constraints::{ConstraintError, ParsedQuery, parse_query};
use crate::dictionary::{Dictionary, WordEntry};
use crate::matcher::suggestions;

/// Raw text of the three constraint fields, exactly as the user entered them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    pub known_letters: String,
    pub required_letters: String,
    pub excluded_letters: String,
}

impl QueryInput {
    #[must_use]
    pub fn new(known_letters: &str, required_letters: &str, excluded_letters: &str) -> Self {
        Self {
            known_letters: known_letters.to_string(),
            required_letters: required_letters.to_string(),
            excluded_letters: excluded_letters.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Solve(QueryInput),
    NewQuery,
    Exit,
}

/// Seam between the solve loop and a front end (CLI or TUI).
pub trait SolverInterface {
    fn display_dictionary_info(&mut self, dictionary: &Dictionary);

    /// Next user action; `None` means "nothing actionable yet, ask again".
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_matches(&mut self, matches: &[WordEntry]);

    /// All three fields were blank: reported as its own condition, never as
    /// "no results".
    fn display_empty_query(&mut self);

    fn display_validation_error(&mut self, error: &ConstraintError);

    fn display_reset_message(&mut self);

    fn display_exit_message(&mut self);
}

/// Run solve requests against `dictionary` until the user exits.
///
/// Validation errors and empty queries are reported and the loop continues;
/// nothing here is fatal.
pub fn solve_loop<I: SolverInterface>(dictionary: &Dictionary, interface: &mut I) {
    interface.display_dictionary_info(dictionary);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewQuery => {
                interface.display_reset_message();
            }
            UserAction::Solve(input) => {
                let parsed = parse_query(
                    &input.known_letters,
                    &input.required_letters,
                    &input.excluded_letters,
                    dictionary.word_length(),
                );
                match parsed {
                    Ok(ParsedQuery::Empty) => interface.display_empty_query(),
                    Ok(ParsedQuery::Query(constraints)) => {
                        let matches = suggestions(dictionary, &constraints);
                        interface.display_matches(&matches);
                    }
                    Err(error) => interface.display_validation_error(&error),
                }
            }
        }
    }
}
