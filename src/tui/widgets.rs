use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::profile;
use crate::transcript::LineKind;
use super::app::{App, Row};

pub fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Command => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        LineKind::Output => Style::default().fg(Color::Green),
        LineKind::Error => Style::default().fg(Color::Red),
    }
}

pub fn create_header(app: &App) -> Paragraph {
    let header_text = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::styled("● ", Style::default().fg(Color::Yellow)),
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(profile::TERMINAL_TITLE, Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(&app.current_time, Style::default().fg(Color::Yellow)),
        ]),
    ];

    Paragraph::new(header_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
}

/// Transcript pane. `rows` are already wrapped to the pane width and
/// `offset` is the first visible row; only rows that fit are handed to ratatui.
pub fn create_transcript_view(app: &App, rows: Vec<Row>, offset: usize) -> Paragraph<'static> {
    let height = usize::from(app.viewport_height);
    let lines: Vec<Line> = rows
        .into_iter()
        .skip(offset)
        .take(height)
        .map(|row| Line::from(Span::styled(row.text, line_style(row.kind))))
        .collect();

    let title = if app.follow_tail {
        " Terminal ".to_string()
    } else {
        format!(" Terminal (line {}) ", offset + 1)
    };

    Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Green)))
}

pub fn create_input_area(app: &App) -> Paragraph {
    let input_line = Line::from(vec![
        Span::styled(app.session.prompt(), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(app.session.input(), Style::default().fg(Color::White)),
    ]);

    Paragraph::new(vec![input_line])
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)))
}

pub fn create_profile_card(_app: &App) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            profile::OWNER_NAME,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile::OWNER_ROLE, Style::default().fg(Color::Green))),
        Line::from(""),
    ];

    for (label, target) in profile::LINKS {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
            Span::styled(*target, Style::default().fg(Color::Cyan)),
        ]));
    }

    lines.push(Line::from(""));
    for status in profile::STATUS {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled(*status, Style::default().fg(Color::DarkGray)),
        ]));
    }

    Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .border_style(Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

pub fn create_status_bar(app: &App) -> Paragraph {
    let shortcuts = "Tab: complete • ↑/↓: history • PgUp/PgDn: scroll • Ctrl+C: quit";

    let auto_scroll_indicator = if app.auto_scroll_enabled {
        Span::styled("AUTO", Style::default().fg(Color::Green))
    } else {
        Span::styled("MANUAL", Style::default().fg(Color::Yellow))
    };

    let status = vec![
        Line::from(vec![
            auto_scroll_indicator,
            Span::raw(" | "),
            Span::raw(&app.status_message),
            Span::raw(" | "),
            Span::styled(shortcuts, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    Paragraph::new(status)
        .style(Style::default().bg(Color::Black).fg(Color::White))
}

pub fn create_small_terminal_warning() -> Paragraph<'static> {
    let warning_text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            )
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Please resize your terminal or run with --plain")
        ]),
    ];

    Paragraph::new(warning_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}
