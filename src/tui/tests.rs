#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    use crate::commands::CommandRegistry;
    use crate::config::TuiConfig;
    use crate::profile;
    use crate::session::{Session, SessionOptions};
    use crate::transcript::LineKind;
    use crate::tui::app::App;
    use crate::tui::rendering::{input_cursor, ui};
    use crate::tui::types::{key_action, KeyAction, PAGE_SCROLL};

    fn app() -> App {
        let session = Session::new(CommandRegistry::new(), SessionOptions::default());
        App::new(session, &TuiConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_and_submit(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(Event::Key(key(KeyCode::Char(c))));
        }
        app.handle_event(Event::Key(key(KeyCode::Enter)));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert_eq!(app.session.input(), "");
        assert_eq!(app.session.transcript().len(), 3);
        assert!(app.auto_scroll_enabled);
        assert!(app.follow_tail);
        assert!(!app.should_quit);
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_action(key(KeyCode::Enter)), KeyAction::Submit);
        assert_eq!(key_action(key(KeyCode::Up)), KeyAction::RecallOlder);
        assert_eq!(key_action(key(KeyCode::Down)), KeyAction::RecallNewer);
        assert_eq!(key_action(key(KeyCode::Tab)), KeyAction::Complete);
        assert_eq!(key_action(key(KeyCode::Char('k'))), KeyAction::Insert('k'));
        assert_eq!(key_action(key(KeyCode::PageUp)), KeyAction::ScrollUp(PAGE_SCROLL));
        assert_eq!(key_action(ctrl('c')), KeyAction::Quit);
        assert_eq!(key_action(ctrl('l')), KeyAction::ClearScreen);
        assert_eq!(key_action(ctrl('x')), KeyAction::Ignore);

        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_action(release), KeyAction::Ignore);
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut app = app();
        type_and_submit(&mut app, "whoami");

        let lines = app.session.transcript().since(3);
        assert_eq!(lines[0].text, "alex@portfolio:~$ whoami");
        assert_eq!(lines[1].text, profile::WHOAMI);
        assert_eq!(app.session.input(), "");
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn test_unknown_command_sets_status() {
        let mut app = app();
        type_and_submit(&mut app, "sudo");
        assert_eq!(app.status_message, "Unknown command: sudo");
        let lines = app.session.transcript().since(3);
        assert_eq!(lines[1].kind, LineKind::Error);
    }

    #[test]
    fn test_arrow_keys_recall_history() {
        let mut app = app();
        type_and_submit(&mut app, "about");
        type_and_submit(&mut app, "Skills");

        app.handle_event(Event::Key(key(KeyCode::Up)));
        assert_eq!(app.session.input(), "skills");
        app.handle_event(Event::Key(key(KeyCode::Up)));
        assert_eq!(app.session.input(), "about");
        app.handle_event(Event::Key(key(KeyCode::Up)));
        assert_eq!(app.session.input(), "about");

        app.handle_event(Event::Key(key(KeyCode::Down)));
        app.handle_event(Event::Key(key(KeyCode::Down)));
        assert_eq!(app.session.input(), "");
    }

    #[test]
    fn test_tab_completion_lists_ambiguous_matches() {
        let mut app = app();
        app.handle_event(Event::Key(key(KeyCode::Char('c'))));
        app.handle_event(Event::Key(key(KeyCode::Tab)));

        assert_eq!(app.session.input(), "c");
        assert_eq!(app.status_message, "contact  clear");

        app.handle_event(Event::Key(key(KeyCode::Char('o'))));
        app.handle_event(Event::Key(key(KeyCode::Tab)));
        assert_eq!(app.session.input(), "contact");
    }

    #[test]
    fn test_ctrl_l_clears() {
        let mut app = app();
        type_and_submit(&mut app, "about");
        app.handle_event(Event::Key(ctrl('l')));

        assert!(app.session.transcript().is_empty());
        assert_eq!(app.session.recall().get(0), Some("clear"));
    }

    #[test]
    fn test_paste_keeps_first_line() {
        let mut app = app();
        app.handle_event(Event::Paste("proj\nignored".to_string()));
        assert_eq!(app.session.input(), "proj");
    }

    #[test]
    fn test_quit_keys() {
        for event in [ctrl('c'), ctrl('d'), key(KeyCode::Esc)] {
            let mut app = app();
            app.handle_event(Event::Key(event));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_transcript_rows_wrap() {
        let mut app = app();
        type_and_submit(&mut app, "clear");
        app.session.submit("whoami");

        let rows = app.transcript_rows(20);
        // the whoami line is longer than 20 columns
        assert!(rows.len() > 3);
        assert!(rows.iter().all(|row| row.text.chars().count() <= 20));
        assert_eq!(rows.last().map(|row| row.text.as_str()), Some(""));
    }

    #[test]
    fn test_scrolling_follows_tail() {
        let mut app = app();
        app.set_viewport(80, 5);
        type_and_submit(&mut app, "projects");

        let max = app.max_scroll();
        assert!(max > 0);
        assert_eq!(app.visible_offset(), max);

        app.scroll_up(PAGE_SCROLL);
        assert!(!app.follow_tail);
        assert_eq!(app.visible_offset(), max.saturating_sub(PAGE_SCROLL));

        app.scroll_down(PAGE_SCROLL);
        assert!(app.follow_tail);
        assert_eq!(app.visible_offset(), max);

        app.apply(KeyAction::ScrollTop);
        assert_eq!(app.visible_offset(), 0);

        // new output jumps back to the bottom
        type_and_submit(&mut app, "skills");
        assert!(app.follow_tail);
        assert_eq!(app.visible_offset(), app.max_scroll());
    }

    #[test]
    fn test_auto_scroll_functionality() {
        let mut app = app();
        app.set_viewport(80, 5);

        app.toggle_auto_scroll();
        assert!(!app.auto_scroll_enabled);
        assert_eq!(app.status_message, "Auto-scroll: OFF");

        app.apply(KeyAction::ScrollTop);
        type_and_submit(&mut app, "experience");
        assert!(!app.follow_tail);
        assert_eq!(app.visible_offset(), 0);

        app.toggle_auto_scroll();
        assert!(app.auto_scroll_enabled);
        assert!(app.follow_tail);
    }

    #[test]
    fn test_render_shows_newest_line_and_prompt() {
        let backend = TestBackend::new(120, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app();
        type_and_submit(&mut app, "contact");

        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("interesting conversations."));
        assert!(!screen.contains("Welcome to Alex Chen"));
        assert!(screen.contains("alex@portfolio:~$"));
        assert!(screen.contains(profile::OWNER_ROLE));
        assert!(screen.contains("AUTO"));
    }

    #[test]
    fn test_render_hides_profile_on_narrow_terminal() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app();

        terminal.draw(|f| ui(f, &mut app)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("Welcome to Alex Chen"));
        assert!(!screen.contains("Profile"));
    }

    #[test]
    fn test_render_small_terminal_warning() {
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app();

        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn test_render_very_long_input_keeps_cursor_in_box() {
        let backend = TestBackend::new(120, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app();
        app.session.set_input("x".repeat(70_000));

        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("alex@portfolio:~$ xxx"));

        let area = Rect::new(0, 16, 120, 3);
        let cursor = input_cursor(&app, area);
        assert_eq!(cursor.x, 118);
        assert_eq!(cursor.y, 17);
    }

    #[test]
    fn test_cursor_follows_short_input() {
        let mut app = app();
        app.session.set_input("ab");
        let cursor = input_cursor(&app, Rect::new(0, 16, 120, 3));
        // border + prompt + space + "ab"
        assert_eq!(usize::from(cursor.x), 1 + "alex@portfolio:~$".len() + 1 + 2);
    }

    #[test]
    fn test_scrolling_past_u16_rows() {
        let mut app = app();
        app.set_viewport(60, 10);
        for _ in 0..66_000 {
            app.session.submit("");
        }
        app.session.submit("whoami");

        let max = app.max_scroll();
        assert!(max > usize::from(u16::MAX));
        assert_eq!(app.visible_offset(), max);

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("alex@portfolio:~$ whoami"));

        // the draw resized the viewport to the pane
        let max = app.max_scroll();
        app.scroll_up(PAGE_SCROLL);
        assert_eq!(app.visible_offset(), max - PAGE_SCROLL);
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains(&format!("line {}", max - PAGE_SCROLL + 1)));
    }

    #[test]
    fn test_blank_submission_row_keeps_trailing_space() {
        let mut app = app();
        app.session.submit("");

        let rows = app.transcript_rows(80);
        assert_eq!(rows.last().map(|row| row.text.as_str()), Some("alex@portfolio:~$ "));
    }

    #[test]
    fn test_footer_lists_shortcuts() {
        let backend = TestBackend::new(120, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = app();

        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal)
            .contains("Tab: complete • ↑/↓: history • PgUp/PgDn: scroll • Ctrl+C: quit"));
    }
}
