//! TUI (Terminal User Interface) module for Wordle Helper
//!
//! This module provides an interactive terminal interface using Ratatui:
//! a form with one input per constraint field and a results panel.
//!
//! # Key bindings
//! - TAB / Down: focus the next field, Shift-TAB / Up: the previous one
//! - ENTER: solve with the current fields
//! - CTRL+D: toggle definition display
//! - CTRL+R: reset the form and results
//! - ESC: quit

use crate::constraints::ConstraintError;
use crate::dictionary::{Dictionary, WordEntry};
use crate::session::{QueryInput, SolverInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_RESULTS_DISPLAY: usize = 12;
const MAX_FIELD_LEN: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const HINT_STYLE: Style = Style::new().fg(Color::DarkGray);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FocusField {
    Known,
    Required,
    Excluded,
}

impl FocusField {
    const ALL: [Self; 3] = [Self::Known, Self::Required, Self::Excluded];

    fn index(self) -> usize {
        match self {
            Self::Known => 0,
            Self::Required => 1,
            Self::Excluded => 2,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Known => "Known positions",
            Self::Required => "Required letters",
            Self::Excluded => "Excluded letters",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            Self::Known => "letter+position pairs, e.g. a1c3",
            Self::Required => "letters with ruled-out positions, e.g. e34",
            Self::Excluded => "letters not in the word, e.g. qzx",
        }
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many
/// function arguments.
struct RenderContext<'a> {
    fields: &'a [String; 3],
    focus: FocusField,
    results: Option<&'a [WordEntry]>,
    show_definitions: bool,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal, the three-field form, and the latest results.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    fields: [String; 3],
    focus: FocusField,
    results: Option<Vec<WordEntry>>,
    show_definitions: bool,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new(show_definitions: bool) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            fields: [String::new(), String::new(), String::new()],
            focus: FocusField::Known,
            results: None,
            show_definitions,
            message: String::new(),
            error_message: String::new(),
            status: "Fill in any field and press ENTER".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            fields: &self.fields,
            focus: self.focus,
            results: self.results.as_deref(),
            show_definitions: self.show_definitions,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(9), // Constraint form (three fields)
                Constraint::Min(8),    // Results panel
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_form(f, chunks[1], ctx.fields, ctx.focus);
        Self::render_results(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE HELPER")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_form(f: &mut Frame, area: Rect, fields: &[String; 3], focus: FocusField) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        for field in FocusField::ALL {
            let focused = field == focus;
            let value = &fields[field.index()];

            let border_style = if focused { HEADER_STYLE } else { HINT_STYLE };
            let block = Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border_style);

            let content = if value.is_empty() && !focused {
                Line::from(Span::styled(field.hint(), HINT_STYLE))
            } else if focused {
                Line::from(vec![
                    Span::raw(value.clone()),
                    Span::styled("_", HEADER_STYLE),
                ])
            } else {
                Line::from(value.clone())
            };

            f.render_widget(Paragraph::new(content).block(block), rows[field.index()]);
        }
    }

    fn render_results(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(results) = ctx.results {
            lines.push(Line::from(vec![Span::styled(
                format!("Matching words ({}):", results.len()),
                INFO_STYLE,
            )]));
            for entry in results.iter().take(MAX_RESULTS_DISPLAY) {
                if ctx.show_definitions && !entry.definition.is_empty() {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {}", entry.word), SUCCESS_STYLE),
                        Span::raw(format!(" - {}", entry.definition)),
                    ]));
                } else {
                    lines.push(Line::from(vec![Span::styled(
                        format!("  {}", entry.word),
                        SUCCESS_STYLE,
                    )]));
                }
            }
            if results.len() > MAX_RESULTS_DISPLAY {
                lines.push(Line::from(format!(
                    "  ... and {} more",
                    results.len() - MAX_RESULTS_DISPLAY
                )));
            }
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Results").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect) {
        let text =
            "TAB: Next field | ENTER: Solve | CTRL+D: Definitions on/off | CTRL+R: Reset | ESC: Quit";
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        // Filter out non-key events (mouse, focus, etc.)
        let Event::Key(key) = event else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid
        // double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Filter out invalid characters that come from terminal escape
        // sequences (alt-tab and friends)
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring escape-sequence character: {:?}", c);
            return Ok(None);
        }

        Ok(self.handle_key(key))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        // Control shortcuts first; other modified keys are ignored.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('d' | 'D') => {
                    self.show_definitions = !self.show_definitions;
                    self.status = if self.show_definitions {
                        "Definitions shown".to_string()
                    } else {
                        "Definitions hidden".to_string()
                    };
                }
                KeyCode::Char('r' | 'R') => {
                    info_log!("handle_key() - CTRL+R pressed, returning NewQuery");
                    return Some(UserAction::NewQuery);
                }
                _ => {}
            }
            return None;
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            debug_log!("handle_key() - Ignoring input with ALT modifier");
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_key() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Enter => {
                let query = QueryInput::new(&self.fields[0], &self.fields[1], &self.fields[2]);
                info_log!("handle_key() - ENTER pressed, submitting {:?}", query);
                Some(UserAction::Solve(query))
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Backspace => {
                self.fields[self.focus.index()].pop();
                self.error_message.clear();
                None
            }
            KeyCode::Char(c) if c.is_ascii_graphic() => {
                let field = &mut self.fields[self.focus.index()];
                if field.len() < MAX_FIELD_LEN {
                    field.push(c);
                    self.error_message.clear();
                } else {
                    debug_log!("handle_key() - Field full, dropping '{}'", c);
                }
                None
            }
            _ => {
                debug_log!("handle_key() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }
}

impl SolverInterface for TuiInterface {
    fn display_dictionary_info(&mut self, dictionary: &Dictionary) {
        self.message = match dictionary.entries() {
            Some(entries) if dictionary.is_fallback() => format!(
                "Dictionary unavailable; using the built-in seed list ({} words).",
                entries.len()
            ),
            Some(entries) => format!("Loaded {} words.", entries.len()),
            None => "Dictionary not loaded yet; the built-in seed list will be used.".to_string(),
        };
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Input error, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_matches(&mut self, matches: &[WordEntry]) {
        self.error_message.clear();
        self.status = match matches.len() {
            0 => "No words match these constraints".to_string(),
            1 => "Exactly one word matches".to_string(),
            n => format!("{n} words match"),
        };
        self.results = Some(matches.to_vec());
        self.draw_or_log();
    }

    fn display_empty_query(&mut self) {
        self.results = None;
        self.error_message = "Enter at least one constraint before solving.".to_string();
        self.status = "Waiting for input".to_string();
        self.draw_or_log();
    }

    fn display_validation_error(&mut self, error: &ConstraintError) {
        self.results = None;
        self.error_message = format!("Invalid input: {error}");
        self.status = "Fix the highlighted input and try again".to_string();
        self.draw_or_log();
    }

    fn display_reset_message(&mut self) {
        self.fields = [String::new(), String::new(), String::new()];
        self.focus = FocusField::Known;
        self.results = None;
        self.error_message.clear();
        self.status = "Form cleared".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_field_cycles_forward_and_back() {
        let mut focus = FocusField::Known;
        focus = focus.next();
        assert_eq!(focus, FocusField::Required);
        focus = focus.next();
        assert_eq!(focus, FocusField::Excluded);
        focus = focus.next();
        assert_eq!(focus, FocusField::Known);

        assert_eq!(FocusField::Known.prev(), FocusField::Excluded);
        assert_eq!(FocusField::Excluded.prev(), FocusField::Required);
    }

    #[test]
    fn test_focus_field_labels_are_distinct() {
        let labels: std::collections::HashSet<&str> =
            FocusField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels.len(), FocusField::ALL.len());
    }
}
