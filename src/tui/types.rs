use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown.
pub const PAGE_SCROLL: usize = 10;
/// Lines moved per mouse wheel notch.
pub const WHEEL_SCROLL: usize = 3;

pub enum AppMessage {
    Input(Event),
    Tick,
    InputFailed(String),
}

/// What a key press means to the terminal view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    RecallOlder,
    RecallNewer,
    Complete,
    Backspace,
    Insert(char),
    /// Ctrl+L, shorthand for submitting `clear`.
    ClearScreen,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollTop,
    ScrollBottom,
    ToggleAutoScroll,
    Quit,
    Ignore,
}

pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => KeyAction::Quit,
            KeyCode::Char('l') => KeyAction::ClearScreen,
            KeyCode::Char('a') => KeyAction::ToggleAutoScroll,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Up => KeyAction::RecallOlder,
        KeyCode::Down => KeyAction::RecallNewer,
        KeyCode::Tab => KeyAction::Complete,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::PageUp => KeyAction::ScrollUp(PAGE_SCROLL),
        KeyCode::PageDown => KeyAction::ScrollDown(PAGE_SCROLL),
        KeyCode::Home => KeyAction::ScrollTop,
        KeyCode::End => KeyAction::ScrollBottom,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) => KeyAction::Insert(c),
        _ => KeyAction::Ignore,
    }
}
