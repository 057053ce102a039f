use std::io;

use wordle_helper::cli::{Cli, CliInterface, parse_cli};
use wordle_helper::dictionary::{Dictionary, EMBEDDED_DICTIONARY, default_dictionary_path};
use wordle_helper::session::solve_loop;
use wordle_helper::tui::TuiInterface;

fn main() {
    env_logger::init();
    let cli = parse_cli();
    let dictionary = load_dictionary(&cli);

    if cli.tui {
        match TuiInterface::new(!cli.no_definitions) {
            Ok(mut interface) => solve_loop(&dictionary, &mut interface),
            Err(e) => eprintln!("Failed to start the terminal interface: {e}"),
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::with_definitions(stdin.lock(), !cli.no_definitions);
        solve_loop(&dictionary, &mut interface);
    }
}

/// Resolve the dictionary source: explicit path, then the per-user file,
/// then the embedded default. Every branch degrades to the seed list
/// internally rather than failing.
fn load_dictionary(cli: &Cli) -> Dictionary {
    let word_length = usize::from(cli.word_length);

    if let Some(path) = &cli.dictionary_path {
        return Dictionary::load_from_file(path, word_length);
    }

    if let Some(path) = default_dictionary_path()
        && path.exists()
    {
        log::info!("loading dictionary from {}", path.display());
        return Dictionary::load_from_file(&path, word_length);
    }

    Dictionary::from_json_str(EMBEDDED_DICTIONARY, word_length)
}
