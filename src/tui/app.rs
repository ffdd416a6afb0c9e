use chrono::Local;
use crossterm::event::{Event, MouseEventKind};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::config::TuiConfig;
use crate::session::{Dispatch, Session, SessionEvent};
use crate::transcript::LineKind;

use super::types::{key_action, KeyAction, WHEEL_SCROLL};

/// One transcript line after wrapping to the pane width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub kind: LineKind,
    pub text: String,
}

pub struct App {
    pub session: Session,

    // UI state
    pub status_message: String,
    pub current_time: String,
    pub scroll_offset: usize,
    pub follow_tail: bool,
    pub auto_scroll_enabled: bool,
    pub show_profile: bool,

    // Last transcript pane size, inside the borders
    pub viewport_width: u16,
    pub viewport_height: u16,

    // Application state
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, config: &TuiConfig) -> Self {
        Self {
            session,
            status_message: "Ready".to_string(),
            current_time: Local::now().format("%H:%M:%S").to_string(),
            scroll_offset: 0,
            follow_tail: true,
            auto_scroll_enabled: config.auto_scroll,
            show_profile: config.show_profile,
            viewport_width: 0,
            viewport_height: 0,
            should_quit: false,
        }
    }

    pub fn update_time(&mut self) {
        self.current_time = Local::now().format("%H:%M:%S").to_string();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.apply(key_action(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll_up(WHEEL_SCROLL),
                MouseEventKind::ScrollDown => self.scroll_down(WHEEL_SCROLL),
                _ => {}
            },
            Event::Paste(text) => {
                // single-line entry: keep only the first line
                let first = text.lines().next().unwrap_or_default();
                let input = format!("{}{}", self.session.input(), first);
                self.session.set_input(input);
            }
            _ => {}
        }
    }

    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Submit => {
                let submission = self.session.submit_input();
                self.status_message = match &submission.dispatch {
                    Dispatch::Unknown(raw) => format!("Unknown command: {}", raw.trim()),
                    Dispatch::Cleared => "Cleared".to_string(),
                    _ => "Ready".to_string(),
                };
                self.on_session_event(submission.event);
            }
            KeyAction::ClearScreen => {
                let event = self.session.submit("clear").event;
                self.status_message = "Cleared".to_string();
                self.on_session_event(event);
            }
            KeyAction::RecallOlder => {
                self.session.recall_older();
            }
            KeyAction::RecallNewer => {
                self.session.recall_newer();
            }
            KeyAction::Complete => {
                if self.session.complete() == SessionEvent::Unchanged {
                    let matches = self.session.registry().completions(self.session.input());
                    if matches.len() > 1 {
                        self.status_message = matches.join("  ");
                    }
                }
            }
            KeyAction::Backspace => {
                self.session.backspace();
            }
            KeyAction::Insert(c) => {
                self.session.insert_char(c);
            }
            KeyAction::ScrollUp(n) => self.scroll_up(n),
            KeyAction::ScrollDown(n) => self.scroll_down(n),
            KeyAction::ScrollTop => {
                self.follow_tail = false;
                self.scroll_offset = 0;
            }
            KeyAction::ScrollBottom => self.follow_tail = true,
            KeyAction::ToggleAutoScroll => self.toggle_auto_scroll(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
        }
    }

    /// React to a transcript change: jump to the newest line when auto-scroll is on.
    pub fn on_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Appended { start } => {
                debug!(start, "transcript appended");
                self.auto_scroll_to_bottom();
            }
            SessionEvent::Cleared => {
                self.scroll_offset = 0;
                self.follow_tail = true;
            }
            SessionEvent::InputChanged | SessionEvent::Unchanged => {}
        }
    }

    pub fn auto_scroll_to_bottom(&mut self) {
        if self.auto_scroll_enabled {
            self.follow_tail = true;
        }
    }

    pub fn toggle_auto_scroll(&mut self) {
        self.auto_scroll_enabled = !self.auto_scroll_enabled;
        if self.auto_scroll_enabled {
            self.follow_tail = true;
        }
        self.status_message = format!("Auto-scroll: {}",
            if self.auto_scroll_enabled { "ON" } else { "OFF" });
    }

    /// Transcript lines wrapped to `width` columns. Lines that already fit
    /// are kept verbatim, trailing spaces included.
    pub fn transcript_rows(&self, width: u16) -> Vec<Row> {
        let width = usize::from(width.max(1));
        let options = textwrap::Options::new(width).break_words(true);
        let mut rows = Vec::with_capacity(self.session.transcript().len());
        for line in self.session.transcript().lines() {
            if line.text.width() <= width {
                rows.push(Row {
                    kind: line.kind,
                    text: line.text.clone(),
                });
                continue;
            }
            rows.extend(textwrap::wrap(&line.text, &options).into_iter().map(|text| Row {
                kind: line.kind,
                text: text.into_owned(),
            }));
        }
        rows
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn row_count(&self) -> usize {
        self.transcript_rows(self.viewport_width).len()
    }

    /// Largest top-row offset for a transcript of `rows` wrapped rows.
    pub fn max_scroll_for(&self, rows: usize) -> usize {
        rows.saturating_sub(usize::from(self.viewport_height))
    }

    /// First visible row for a transcript of `rows` wrapped rows.
    pub fn visible_offset_for(&self, rows: usize) -> usize {
        let max = self.max_scroll_for(rows);
        if self.follow_tail {
            max
        } else {
            self.scroll_offset.min(max)
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.max_scroll_for(self.row_count())
    }

    pub fn visible_offset(&self) -> usize {
        self.visible_offset_for(self.row_count())
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let current = self.visible_offset();
        self.follow_tail = false;
        self.scroll_offset = current.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let rows = self.row_count();
        let next = self.visible_offset_for(rows).saturating_add(lines);
        if next >= self.max_scroll_for(rows) {
            self.follow_tail = true;
        } else {
            self.scroll_offset = next;
        }
    }
}
