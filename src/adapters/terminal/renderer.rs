//! Plain-text rendering of the conversation for terminals.
//!
//! The renderer keeps only how much of the transcript it has already printed,
//! so each state change prints just what is new.

use std::io::Write;
use std::sync::Mutex;

use crate::domain::chat::{ConversationState, Message};
use crate::ports::TranscriptObserver;

/// Shown while a round-trip is pending.
pub const PENDING_INDICATOR: &str = "Thinking... (first request may take 60 seconds)";

/// Intro printed while the transcript is empty.
pub const EMPTY_STATE: &[&str] = &[
    "No messages yet. Ask about an error!",
    "Try asking:",
    "  \"Cannot read property of undefined\"",
    "  \"CORS error in my API\"",
    "  \"React state not updating\"",
];

/// Usage tip shown under the prompt.
pub const INPUT_TIP: &str =
    "Tip: Paste the exact error message only (no code needed). The Prolog assistant is trained on common errors.";

/// Formats one message as a labelled block.
pub fn format_message(message: &Message) -> Vec<String> {
    let mut lines = vec![format!("[{}]", message.role.label())];
    lines.extend(message.lines().map(|line| format!("  {}", line)));
    lines
}

#[derive(Debug, Default)]
struct Progress {
    printed: usize,
    error_shown: Option<String>,
}

/// Renders state changes as lines of text.
pub struct TerminalRenderer<W: Write + Send> {
    progress: Mutex<Progress>,
    out: Mutex<W>,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            progress: Mutex::new(Progress::default()),
            out: Mutex::new(out),
        }
    }

    /// Lines to print for the transition into `state`.
    ///
    /// A transcript shorter than what was printed means it was cleared, in
    /// which case rendering starts over with the empty-state intro.
    pub fn frame(&self, state: &ConversationState) -> Vec<String> {
        let mut progress = self.progress.lock().unwrap_or_else(|e| e.into_inner());
        let mut lines = Vec::new();

        if state.messages().len() < progress.printed {
            progress.printed = 0;
            progress.error_shown = None;
            if state.is_empty() {
                lines.push("-- conversation cleared --".to_string());
                lines.extend(EMPTY_STATE.iter().map(|s| s.to_string()));
            }
        }

        for message in &state.messages()[progress.printed..] {
            lines.extend(format_message(message));
        }
        progress.printed = state.messages().len();

        match state.error() {
            Some(error) if progress.error_shown.as_deref() != Some(error) => {
                lines.push(format!("Connection Issue: {}", error));
                progress.error_shown = Some(error.to_string());
            }
            None => progress.error_shown = None,
            _ => {}
        }

        if state.is_busy() {
            lines.push(PENDING_INDICATOR.to_string());
        }
        lines
    }

    /// Consumes the renderer, returning its writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> TranscriptObserver for TerminalRenderer<W> {
    fn on_change(&self, state: &ConversationState) {
        let lines = self.frame(state);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        for line in lines {
            if writeln!(out, "{}", line).is_err() {
                tracing::warn!("failed to write to terminal");
                return;
            }
        }
        let _ = out.flush();
    }
}
