// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod constraints;
pub mod dictionary;
pub mod logging;
pub mod matcher;
pub mod session;
pub mod tui;

// Re-export the core types for easier testing
pub use constraints::{ConstraintError, Constraints, ParsedQuery, parse_query};
pub use dictionary::{Dictionary, EMBEDDED_DICTIONARY, WordEntry, seed_entries};
pub use matcher::{filter_entries, matches_constraints, suggestions};
pub use session::{QueryInput, SolverInterface, UserAction, solve_loop};
