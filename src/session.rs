//! The command interpreter: transcript, recall history and the input buffer
//! behind the prompt. Independent of any particular view.

use tracing::debug;

use crate::commands::{normalize, CommandOutput, CommandRegistry};
use crate::profile;
use crate::recall::{RecallList, DEFAULT_RECALL_CAPACITY};
use crate::transcript::{Transcript, TranscriptLine};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub prompt: String,
    pub recall_capacity: usize,
    pub show_welcome: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: profile::DEFAULT_PROMPT.to_string(),
            recall_capacity: DEFAULT_RECALL_CAPACITY,
            show_welcome: true,
        }
    }
}

/// Change notification returned by every session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Lines were appended to the transcript starting at `start`.
    Appended { start: usize },
    /// The transcript was emptied.
    Cleared,
    /// Only the input buffer changed.
    InputChanged,
    Unchanged,
}

/// How a submission was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Empty or whitespace-only input.
    Blank,
    Ran(&'static str),
    Cleared,
    /// No command matched; carries the raw input.
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub dispatch: Dispatch,
    pub event: SessionEvent,
}

pub struct Session {
    registry: CommandRegistry,
    prompt: String,
    transcript: Transcript,
    recall: RecallList,
    input: String,
    revision: u64,
}

impl Session {
    pub fn new(registry: CommandRegistry, options: SessionOptions) -> Self {
        let mut transcript = Transcript::new();
        if options.show_welcome {
            transcript.extend(
                profile::welcome_banner()
                    .into_iter()
                    .map(TranscriptLine::output),
            );
        }

        Self {
            registry,
            prompt: options.prompt,
            transcript,
            recall: RecallList::new(options.recall_capacity),
            input: String::new(),
            revision: 0,
        }
    }

    /// Run `raw` as if it had been typed at the prompt.
    pub fn submit(&mut self, raw: &str) -> Submission {
        let start = self.transcript.len();
        self.transcript
            .push(TranscriptLine::command(format!("{} {}", self.prompt, raw)));

        let key = normalize(raw);
        if key.is_empty() {
            self.recall.reset_cursor();
            return self.finish(Dispatch::Blank, SessionEvent::Appended { start });
        }

        let (dispatch, event) = match self.registry.execute(&key) {
            Some(CommandOutput::Lines(lines)) => {
                debug!(command = %key, lines = lines.len(), "ran command");
                self.transcript
                    .extend(lines.into_iter().map(TranscriptLine::output));
                self.transcript.push(TranscriptLine::blank());
                let name = self.registry.lookup(&key).map_or("", |def| def.name);
                (Dispatch::Ran(name), SessionEvent::Appended { start })
            }
            Some(CommandOutput::ClearTranscript) => {
                debug!("clearing transcript");
                self.transcript.clear();
                (Dispatch::Cleared, SessionEvent::Cleared)
            }
            None => {
                debug!(input = %raw, "command not found");
                self.transcript
                    .push(TranscriptLine::error(format!("Command not found: {raw}")));
                self.transcript.push(TranscriptLine::output(profile::HINT));
                self.transcript.push(TranscriptLine::blank());
                (
                    Dispatch::Unknown(raw.to_string()),
                    SessionEvent::Appended { start },
                )
            }
        };

        self.recall.push(key);
        self.finish(dispatch, event)
    }

    /// Submit whatever is in the input buffer and empty it (the Enter key).
    pub fn submit_input(&mut self) -> Submission {
        let raw = std::mem::take(&mut self.input);
        self.submit(&raw)
    }

    fn finish(&mut self, dispatch: Dispatch, event: SessionEvent) -> Submission {
        self.bump(event);
        Submission { dispatch, event }
    }

    fn bump(&mut self, event: SessionEvent) -> SessionEvent {
        if event != SessionEvent::Unchanged {
            self.revision += 1;
        }
        event
    }

    /// Recall the next older command into the input buffer.
    pub fn recall_older(&mut self) -> SessionEvent {
        let Some(entry) = self.recall.older() else {
            return SessionEvent::Unchanged;
        };
        self.input = entry.to_string();
        debug!(cursor = ?self.recall.cursor(), "recalled older command");
        self.bump(SessionEvent::InputChanged)
    }

    /// Recall the next newer command, or empty the buffer when leaving the list.
    pub fn recall_newer(&mut self) -> SessionEvent {
        let Some(entry) = self.recall.newer() else {
            return SessionEvent::Unchanged;
        };
        self.input = entry.map(str::to_string).unwrap_or_default();
        debug!(cursor = ?self.recall.cursor(), "recalled newer command");
        self.bump(SessionEvent::InputChanged)
    }

    /// Complete the input buffer against command names.
    ///
    /// A single match replaces the buffer; several matches extend it to their
    /// longest common prefix.
    pub fn complete(&mut self) -> SessionEvent {
        let prefix = normalize(&self.input);
        let matches = self.registry.completions(&prefix);
        let completed = match matches.as_slice() {
            [] => return SessionEvent::Unchanged,
            [only] => only.to_string(),
            [first, rest @ ..] => rest.iter().fold(first.to_string(), |common, name| {
                common
                    .chars()
                    .zip(name.chars())
                    .take_while(|(a, b)| a == b)
                    .map(|(a, _)| a)
                    .collect()
            }),
        };

        if completed == self.input {
            return SessionEvent::Unchanged;
        }
        self.input = completed;
        self.bump(SessionEvent::InputChanged)
    }

    pub fn insert_char(&mut self, c: char) -> SessionEvent {
        self.input.push(c);
        self.bump(SessionEvent::InputChanged)
    }

    pub fn backspace(&mut self) -> SessionEvent {
        if self.input.pop().is_none() {
            return SessionEvent::Unchanged;
        }
        self.bump(SessionEvent::InputChanged)
    }

    pub fn set_input(&mut self, input: impl Into<String>) -> SessionEvent {
        self.input = input.into();
        self.bump(SessionEvent::InputChanged)
    }

    pub fn clear_input(&mut self) -> SessionEvent {
        if self.input.is_empty() {
            return SessionEvent::Unchanged;
        }
        self.input.clear();
        self.bump(SessionEvent::InputChanged)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn recall(&self) -> &RecallList {
        &self.recall
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Increases every time the transcript or input buffer changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
