use crate::constraints::ConstraintError;
use crate::dictionary::{Dictionary, WordEntry};
use crate::session::{QueryInput, SolverInterface, UserAction};
use clap::Parser;
use std::io::BufRead;

const MAX_MATCHES_DISPLAY: usize = 20;

/// Wordle Helper CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON dictionary file (array of {"word", "definition"} records)
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<String>,

    /// Word length to solve for
    #[arg(short = 'l', long = "length", default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=9))]
    pub word_length: u8,

    /// Run the interactive terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Hide word definitions in the output
    #[arg(long = "no-definitions")]
    pub no_definitions: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

enum FieldInput {
    Value(String),
    Exit,
    NewQuery,
}

fn read_field<R: BufRead>(reader: &mut R, prompt: &str) -> FieldInput {
    println!("{prompt}");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // End of input behaves like an explicit exit.
        Ok(0) | Err(_) => FieldInput::Exit,
        Ok(_) => {
            let input = input.trim();
            match input.to_lowercase().as_str() {
                "exit" => FieldInput::Exit,
                "new" | "next" => FieldInput::NewQuery,
                _ => FieldInput::Value(input.to_string()),
            }
        }
    }
}

/// Read the three constraint fields as one solve request.
///
/// `exit` or end-of-input at any prompt quits; `new` (or `next`) abandons the
/// current request and starts over. Blank answers are allowed everywhere; a
/// request with all three blank is reported as the empty-query condition by
/// the solve loop.
pub fn read_query<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter constraints (blank to skip a field, 'exit' to quit, 'new' to start over):");

    let mut fields = Vec::with_capacity(3);
    for prompt in [
        "Known letters with their positions (e.g. a1c3 = 'a' first, 'c' third):",
        "Letters in the word, with positions ruled out (e.g. e34 = 'e', but not third or fourth):",
        "Letters not in the word (e.g. qzx):",
    ] {
        match read_field(reader, prompt) {
            FieldInput::Value(value) => fields.push(value),
            FieldInput::Exit => return Some(UserAction::Exit),
            FieldInput::NewQuery => return Some(UserAction::NewQuery),
        }
    }

    Some(UserAction::Solve(QueryInput::new(
        &fields[0], &fields[1], &fields[2],
    )))
}

pub fn display_dictionary_info(dictionary: &Dictionary) {
    match dictionary.entries() {
        Some(entries) if dictionary.is_fallback() => println!(
            "Dictionary unavailable; using the built-in seed list ({} words).",
            entries.len()
        ),
        Some(entries) => println!("Loaded {} words.", entries.len()),
        None => println!("Dictionary not loaded yet; the built-in seed list will be used."),
    }
}

pub fn display_matches(matches: &[WordEntry], show_definitions: bool) {
    println!("Matching words ({}):", matches.len());
    for entry in matches.iter().take(MAX_MATCHES_DISPLAY) {
        if show_definitions && !entry.definition.is_empty() {
            println!("{} - {}", entry.word, entry.definition);
        } else {
            println!("{}", entry.word);
        }
    }
    if matches.len() > MAX_MATCHES_DISPLAY {
        println!("...and {} more", matches.len() - MAX_MATCHES_DISPLAY);
    }
}

pub fn display_empty_query_message() {
    println!("Enter at least one constraint before solving.");
}

pub fn display_validation_error(error: &ConstraintError) {
    println!("Invalid input: {error}");
}

pub fn display_reset_message() {
    println!("Starting a new query.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `SolverInterface` trait over any `BufRead`
/// input, so the whole flow is scriptable in tests.
pub struct CliInterface<R: BufRead> {
    reader: R,
    show_definitions: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            show_definitions: true,
        }
    }

    pub fn with_definitions(reader: R, show_definitions: bool) -> Self {
        Self {
            reader,
            show_definitions,
        }
    }
}

impl<R: BufRead> SolverInterface for CliInterface<R> {
    fn display_dictionary_info(&mut self, dictionary: &Dictionary) {
        display_dictionary_info(dictionary);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_query(&mut self.reader)
    }

    fn display_matches(&mut self, matches: &[WordEntry]) {
        display_matches(matches, self.show_definitions);
    }

    fn display_empty_query(&mut self) {
        display_empty_query_message();
    }

    fn display_validation_error(&mut self, error: &ConstraintError) {
        display_validation_error(error);
    }

    fn display_reset_message(&mut self) {
        display_reset_message();
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
