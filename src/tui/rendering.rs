use std::io;
use std::time::Duration;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Position, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{error, info};
use unicode_width::UnicodeWidthStr;

use crate::config::TuiConfig;
use crate::session::Session;

use super::app::App;
use super::types::AppMessage;
use super::widgets;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;
/// Narrower terminals hide the profile sidebar.
const PROFILE_MIN_WIDTH: u16 = 100;
const PROFILE_WIDTH: u16 = 32;

pub async fn run_tui(session: Session, config: &TuiConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, config);

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx.clone());
    spawn_clock(tx, Duration::from_millis(config.tick_millis));

    info!("terminal UI started");
    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!("terminal UI failed: {e:#}");
    }
    res
}

/// Forward terminal events from a blocking reader until the loop goes away.
fn spawn_input_reader(tx: mpsc::UnboundedSender<AppMessage>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            let message = match event::poll(Duration::from_millis(100)) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(ev) => AppMessage::Input(ev),
                    Err(e) => AppMessage::InputFailed(e.to_string()),
                },
                Err(e) => AppMessage::InputFailed(e.to_string()),
            };
            let failed = matches!(message, AppMessage::InputFailed(_));
            if tx.send(message).is_err() || failed {
                break;
            }
        }
    });
}

fn spawn_clock(tx: mpsc::UnboundedSender<AppMessage>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if tx.send(AppMessage::Tick).is_err() {
                break;
            }
        }
    });
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Some(msg) = rx.recv().await else {
            return Ok(());
        };
        match msg {
            AppMessage::Input(ev) => app.handle_event(ev),
            AppMessage::Tick => app.update_time(),
            AppMessage::InputFailed(e) => anyhow::bail!("Error reading terminal input: {}", e),
        }

        // Drain whatever else arrived before redrawing
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AppMessage::Input(ev) => app.handle_event(ev),
                AppMessage::Tick => app.update_time(),
                AppMessage::InputFailed(e) => anyhow::bail!("Error reading terminal input: {}", e),
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        f.render_widget(widgets::create_small_terminal_warning(), area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(3),     // Main area
            Constraint::Length(3),  // Input
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    f.render_widget(widgets::create_header(app), chunks[0]);

    // Main area - profile sidebar on wide terminals
    let show_profile = app.show_profile && area.width >= PROFILE_MIN_WIDTH;
    let terminal_area = if show_profile {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(PROFILE_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);
        f.render_widget(widgets::create_profile_card(app), main_chunks[0]);
        main_chunks[1]
    } else {
        chunks[1]
    };

    let inner = inner_area(terminal_area);
    app.set_viewport(inner.width, inner.height);
    let rows = app.transcript_rows(inner.width);
    let offset = app.visible_offset_for(rows.len());
    f.render_widget(widgets::create_transcript_view(app, rows, offset), terminal_area);

    f.render_widget(widgets::create_input_area(app), chunks[2]);
    f.set_cursor_position(input_cursor(app, chunks[2]));

    f.render_widget(widgets::create_status_bar(app), chunks[3]);
}

/// Cursor position at the end of the typed input, kept inside the input box.
pub fn input_cursor(app: &App, area: Rect) -> Position {
    let typed = app.session.prompt().width() + 1 + app.session.input().width();
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(u16::try_from(typed).unwrap_or(u16::MAX));
    Position::new(x.min(area.right().saturating_sub(2)), area.y.saturating_add(1))
}

/// Area inside a bordered block.
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
