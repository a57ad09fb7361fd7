//! Headless command console for the portfolio terminal page.
//!
//! This crate intentionally implements only the small subset needed by the
//! site's pseudo-terminal: first-token command parsing, a static command
//! registry, and the read-eval-append transcript reducer. Rendering, focus,
//! and scrolling stay in the UI layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// Output text returned for tokens with no registered command.
pub const UNKNOWN_COMMAND_OUTPUT: &str = "Command not found. Type 'help'.";

/// Zero-argument pure handler producing a command's display text.
pub type CommandHandler = fn() -> String;

/// One recognized command: a lowercase token plus its handler.
#[derive(Clone, Copy)]
pub struct CommandEntry {
    /// Lowercase token the command is looked up by.
    pub name: &'static str,
    /// One-line summary shown by `help`.
    pub summary: &'static str,
    /// Handler invoked when the command runs.
    pub handler: CommandHandler,
}

/// Immutable name-to-handler table assembled once at startup.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

fn run_help() -> String {
    [
        "Available commands:",
        "  help      - Show this list",
        "  about     - About me",
        "  projects  - My projects",
        "  skills    - My skills",
        "  contact   - How to reach me",
        "  clear     - Clear terminal history",
    ]
    .join("\n")
}

fn run_about() -> String {
    "I'm a developer building web apps. More about me on the Home page.".to_string()
}

fn run_projects() -> String {
    "Check the Projects page for my work.".to_string()
}

fn run_skills() -> String {
    "Rust, WebAssembly, TypeScript, and more. See the Skills page.".to_string()
}

fn run_contact() -> String {
    "Reach me via the Contact page - email, GitHub, LinkedIn.".to_string()
}

impl CommandRegistry {
    /// Builds the registry of built-in site commands.
    ///
    /// `clear` is deliberately absent: it is a console pseudo-command with a
    /// transcript side effect, so [`reduce_console`] intercepts it before
    /// lookup.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CommandEntry {
                    name: "help",
                    summary: "Show this list",
                    handler: run_help,
                },
                CommandEntry {
                    name: "about",
                    summary: "About me",
                    handler: run_about,
                },
                CommandEntry {
                    name: "projects",
                    summary: "My projects",
                    handler: run_projects,
                },
                CommandEntry {
                    name: "skills",
                    summary: "My skills",
                    handler: run_skills,
                },
                CommandEntry {
                    name: "contact",
                    summary: "How to reach me",
                    handler: run_contact,
                },
            ],
        }
    }

    /// Registered entries in declaration order.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Looks up `token` and runs its handler, or returns the fixed fallback
    /// text for unknown tokens. Unknown input is a handled case, not an error.
    pub fn resolve(&self, token: &str) -> String {
        self.entries
            .iter()
            .find(|entry| entry.name == token)
            .map(|entry| (entry.handler)())
            .unwrap_or_else(|| UNKNOWN_COMMAND_OUTPUT.to_string())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Extracts the command token from a raw input line.
///
/// Returns the empty string for whitespace-only input; otherwise the first
/// whitespace-delimited word, lower-cased. Total over all inputs.
pub fn parse(raw: &str) -> String {
    raw.split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// One executed command's record in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Verbatim trimmed user input.
    pub input: String,
    /// Text produced by the resolved handler, possibly multi-line.
    pub output: String,
}

/// Console state: the append-only transcript plus the uncommitted input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConsoleState {
    /// Executed commands in submission order.
    pub transcript: Vec<TranscriptEntry>,
    /// Current uncommitted input buffer. Never contains a newline: the
    /// line-terminator key submits instead of inserting.
    pub pending_input: String,
}

/// Actions accepted by [`reduce_console`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    /// Replace the pending input buffer unconditionally.
    UpdateInput(String),
    /// Commit the pending input line.
    Submit,
}

/// View-layer intents emitted by [`reduce_console`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEffect {
    /// Scroll the transcript view so its last entry is visible.
    ScrollToEnd,
}

/// Applies a [`ConsoleAction`] to the console state.
///
/// Submission is total: every input, recognized or not, results in a
/// deterministic transcript mutation or an explicit no-op. There are no
/// failure modes.
pub fn reduce_console(
    state: &mut ConsoleState,
    registry: &CommandRegistry,
    action: ConsoleAction,
) -> Vec<ConsoleEffect> {
    match action {
        ConsoleAction::UpdateInput(text) => {
            state.pending_input = text;
            vec![ConsoleEffect::ScrollToEnd]
        }
        ConsoleAction::Submit => {
            let token = parse(&state.pending_input);
            if token == "clear" {
                state.transcript.clear();
                state.pending_input.clear();
                return vec![ConsoleEffect::ScrollToEnd];
            }
            if token.is_empty() {
                return Vec::new();
            }
            let output = registry.resolve(&token);
            state.transcript.push(TranscriptEntry {
                input: state.pending_input.trim().to_string(),
                output,
            });
            state.pending_input.clear();
            vec![ConsoleEffect::ScrollToEnd]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn submit(state: &mut ConsoleState, registry: &CommandRegistry, line: &str) -> Vec<ConsoleEffect> {
        reduce_console(
            state,
            registry,
            ConsoleAction::UpdateInput(line.to_string()),
        );
        reduce_console(state, registry, ConsoleAction::Submit)
    }

    #[test]
    fn parse_strips_whitespace_and_case() {
        assert_eq!(parse(""), "");
        assert_eq!(parse("   "), "");
        assert_eq!(parse("HELP"), "help");
        assert_eq!(parse("  About me please  "), "about");
        assert_eq!(parse("projects\textra"), "projects");
    }

    #[test]
    fn parse_output_has_no_whitespace_or_uppercase() {
        for raw in ["", " ", "Skills NOW", "\tCONTACT\t", "a B c"] {
            let token = parse(raw);
            assert!(!token.chars().any(char::is_whitespace), "raw: {raw:?}");
            assert!(!token.chars().any(char::is_uppercase), "raw: {raw:?}");
        }
    }

    #[test]
    fn resolve_known_token_is_deterministic() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.resolve("about"), registry.resolve("about"));
        assert!(registry.resolve("help").contains("Available commands"));
    }

    #[test]
    fn resolve_unknown_token_returns_fallback() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.resolve("frobnicate"), UNKNOWN_COMMAND_OUTPUT);
        assert_eq!(registry.resolve(""), UNKNOWN_COMMAND_OUTPUT);
    }

    #[test]
    fn submit_appends_entry_and_clears_input() {
        let registry = CommandRegistry::builtin();
        let mut state = ConsoleState::default();

        let effects = submit(&mut state, &registry, "About me please");

        assert_eq!(effects, vec![ConsoleEffect::ScrollToEnd]);
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].input, "About me please");
        assert_eq!(state.transcript[0].output, run_about());
        assert_eq!(state.pending_input, "");
    }

    #[test]
    fn submit_unknown_command_records_fallback_output() {
        let registry = CommandRegistry::builtin();
        let mut state = ConsoleState::default();

        submit(&mut state, &registry, "launch-missiles now");

        assert_eq!(state.transcript[0].input, "launch-missiles now");
        assert_eq!(state.transcript[0].output, UNKNOWN_COMMAND_OUTPUT);
    }

    #[test]
    fn clear_empties_transcript_without_recording_itself() {
        let registry = CommandRegistry::builtin();
        let mut state = ConsoleState::default();

        submit(&mut state, &registry, "help");
        assert_eq!(state.transcript.len(), 1);

        submit(&mut state, &registry, "clear");
        assert_eq!(state.transcript, Vec::new());
        assert_eq!(state.pending_input, "");
    }

    #[test]
    fn empty_submit_is_a_noop_that_preserves_pending_input() {
        let registry = CommandRegistry::builtin();
        let mut state = ConsoleState::default();

        submit(&mut state, &registry, "help");
        let before = state.transcript.clone();

        for line in ["", "   "] {
            reduce_console(
                &mut state,
                &registry,
                ConsoleAction::UpdateInput(line.to_string()),
            );
            let effects = reduce_console(&mut state, &registry, ConsoleAction::Submit);
            assert_eq!(effects, Vec::new());
            assert_eq!(state.transcript, before);
            assert_eq!(state.pending_input, line);
        }
    }

    #[test]
    fn transcript_preserves_submission_order() {
        let registry = CommandRegistry::builtin();
        let mut state = ConsoleState::default();

        submit(&mut state, &registry, "help");
        submit(&mut state, &registry, "skills");
        submit(&mut state, &registry, "contact");

        let inputs: Vec<&str> = state
            .transcript
            .iter()
            .map(|entry| entry.input.as_str())
            .collect();
        assert_eq!(inputs, vec!["help", "skills", "contact"]);
    }
}
