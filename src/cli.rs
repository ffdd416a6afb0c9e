use std::io::{self, BufRead, IsTerminal, Write};
use anyhow::{Context, Result};
use colored::*;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use reedline::{
    FileBackedHistory, History, HistoryItem, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, Signal,
};
use tracing::{debug, info};

use crate::session::{Session, SessionEvent};
use crate::transcript::{LineKind, TranscriptLine};

/// Options for the line-oriented interface
#[derive(Debug, Clone, Default)]
pub struct PlainOptions {
    /// Emit one JSON object per transcript line
    pub json: bool,
    /// Run these commands in order and exit instead of reading stdin
    pub commands: Vec<String>,
}

/// Runs the plain line interface on stdin/stdout. A terminal on both ends
/// gets a line editor with Up/Down recall; anything else is read line by line.
pub fn run_plain(mut session: Session, options: PlainOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let interactive = options.commands.is_empty() && stdin.is_terminal() && stdout.is_terminal();
    let screen = stdout.is_terminal() && !options.json;

    if !screen {
        colored::control::set_override(false);
    }
    info!(interactive, json = options.json, "starting plain mode");

    if interactive {
        return run_editor(&mut session, &mut stdout, &options, screen);
    }
    run_lines(&mut session, stdin.lock(), &mut stdout, &options, screen)
}

/// Print the banner, then run the `--command` list or every line of `input`
/// until EOF. Each command is echoed with its prompt.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    options: &PlainOptions,
    screen: bool,
) -> Result<()> {
    write_lines(out, session.transcript().lines(), options.json)?;

    if !options.commands.is_empty() {
        for command in &options.commands {
            let event = session.submit(command).event;
            emit(out, session, event, options, screen, false)?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("Failed to read from stdin")?;
        let event = session.submit(&line).event;
        emit(out, session, event, options, screen, false)?;
    }
    Ok(())
}

fn run_editor(
    session: &mut Session,
    out: &mut io::Stdout,
    options: &PlainOptions,
    screen: bool,
) -> Result<()> {
    write_lines(out, session.transcript().lines(), options.json)?;
    let prompt = PortfolioPrompt {
        label: session.prompt().to_string(),
    };

    loop {
        let mut line_editor = Reedline::create().with_history(Box::new(recall_history(session)?));
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                let event = session.submit(&line).event;
                emit(out, session, event, options, screen, true)?;
            }
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                debug!("line editor closed");
                writeln!(out)?;
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!("Error reading input: {}", e)),
        }
    }
}

/// Recall entries oldest first, the order a line editor history is filled in.
fn history_lines(session: &Session) -> Vec<String> {
    session.recall().entries().rev().map(str::to_string).collect()
}

/// Editor history mirroring the session's recall list, so Up/Down walk the
/// same commands the full-screen UI would.
fn recall_history(session: &Session) -> Result<FileBackedHistory> {
    let mut history = FileBackedHistory::default();
    for line in history_lines(session) {
        history
            .save(HistoryItem::from_command_line(line))
            .map_err(|e| anyhow::anyhow!("Failed to fill history: {}", e))?;
    }
    Ok(history)
}

struct PortfolioPrompt {
    label: String,
}

impl Prompt for PortfolioPrompt {
    fn render_prompt_left(&self) -> std::borrow::Cow<str> {
        self.label.bright_green().to_string().into()
    }

    fn render_prompt_right(&self) -> std::borrow::Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> std::borrow::Cow<str> {
        " ".into()
    }

    fn render_prompt_multiline_indicator(&self) -> std::borrow::Cow<str> {
        "... ".dimmed().to_string().into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> std::borrow::Cow<str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

/// Print what an operation changed. Interactive sessions skip the command echo
/// because the user just typed it.
fn emit<W: Write>(
    out: &mut W,
    session: &Session,
    event: SessionEvent,
    options: &PlainOptions,
    screen: bool,
    skip_echo: bool,
) -> Result<()> {
    match event {
        SessionEvent::Appended { start } => {
            let appended = session.transcript().since(start);
            let appended = match appended.split_first() {
                Some((first, rest)) if skip_echo && first.kind == LineKind::Command => rest,
                _ => appended,
            };
            write_lines(out, appended, options.json)?;
        }
        SessionEvent::Cleared => {
            if screen {
                execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
        }
        SessionEvent::InputChanged | SessionEvent::Unchanged => {}
    }
    out.flush()?;
    Ok(())
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[TranscriptLine], json: bool) -> Result<()> {
    for line in lines {
        if json {
            writeln!(out, "{}", serde_json::to_string(line)?)?;
        } else {
            writeln!(out, "{}", styled(line))?;
        }
    }
    Ok(())
}

fn styled(line: &TranscriptLine) -> ColoredString {
    match line.kind {
        LineKind::Command => line.text.bright_white().bold(),
        LineKind::Output => line.text.green(),
        LineKind::Error => line.text.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::profile;
    use crate::session::SessionOptions;

    fn session() -> Session {
        Session::new(
            CommandRegistry::new(),
            SessionOptions {
                show_welcome: false,
                ..SessionOptions::default()
            },
        )
    }

    fn emit_to_string(session: &Session, event: SessionEvent, skip_echo: bool, json: bool) -> String {
        colored::control::set_override(false);
        let options = PlainOptions { json, commands: Vec::new() };
        let mut buffer = Vec::new();
        emit(&mut buffer, session, event, &options, false, skip_echo).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_emit_includes_echo_for_scripts() {
        let mut session = session();
        let event = session.submit("whoami").event;

        let printed = emit_to_string(&session, event, false, false);
        let lines: Vec<_> = printed.lines().collect();
        assert_eq!(lines, vec!["alex@portfolio:~$ whoami", profile::WHOAMI, ""]);
    }

    #[test]
    fn test_emit_skips_echo_when_interactive() {
        let mut session = session();
        let event = session.submit("nope").event;

        let printed = emit_to_string(&session, event, true, false);
        assert!(printed.starts_with("Command not found: nope\n"));
    }

    #[test]
    fn test_emit_json_lines() {
        let mut session = session();
        let event = session.submit("").event;

        let printed = emit_to_string(&session, event, false, true);
        assert_eq!(printed, "{\"kind\":\"command\",\"text\":\"alex@portfolio:~$ \"}\n");
    }

    fn run_script(session: &mut Session, input: &str, options: &PlainOptions) -> Vec<String> {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        run_lines(session, input.as_bytes(), &mut buffer, options, false).unwrap();
        String::from_utf8(buffer).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_run_lines_scripted_stdin() {
        let mut session = Session::new(CommandRegistry::new(), SessionOptions::default());
        let printed = run_script(&mut session, "HELP\nfoobar\n\nclear\n", &PlainOptions::default());

        let banner = profile::welcome_banner();
        assert_eq!(&printed[..banner.len()], banner.as_slice());

        let mut expected = vec!["alex@portfolio:~$ HELP".to_string()];
        expected.extend(CommandRegistry::new().help_lines());
        expected.push(String::new());
        expected.push("alex@portfolio:~$ foobar".to_string());
        expected.push("Command not found: foobar".to_string());
        expected.push(profile::HINT.to_string());
        expected.push(String::new());
        expected.push("alex@portfolio:~$ ".to_string());
        // clear prints nothing off screen
        assert_eq!(&printed[banner.len()..], expected.as_slice());

        assert!(session.transcript().is_empty());
        assert_eq!(session.recall().entries().collect::<Vec<_>>(), vec!["clear", "foobar", "help"]);
    }

    #[test]
    fn test_run_lines_runs_command_list_in_order() {
        let mut session = session();
        let options = PlainOptions {
            json: false,
            commands: vec!["whoami".to_string(), "nope".to_string()],
        };
        // stdin is ignored when commands are given
        let printed = run_script(&mut session, "about\n", &options);

        assert_eq!(printed, vec![
            "alex@portfolio:~$ whoami".to_string(),
            profile::WHOAMI.to_string(),
            String::new(),
            "alex@portfolio:~$ nope".to_string(),
            "Command not found: nope".to_string(),
            profile::HINT.to_string(),
            String::new(),
        ]);
    }

    #[test]
    fn test_run_lines_json_output() {
        let mut session = session();
        let options = PlainOptions { json: true, commands: Vec::new() };
        let printed = run_script(&mut session, "whoami\n", &options);

        let kinds: Vec<String> = printed
            .iter()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["kind"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(kinds, vec!["command", "output", "output"]);
        assert!(printed[0].contains("alex@portfolio:~$ whoami"));
    }

    #[test]
    fn test_run_lines_empty_input_prints_banner_only() {
        let mut session = Session::new(CommandRegistry::new(), SessionOptions::default());
        let printed = run_script(&mut session, "", &PlainOptions::default());
        assert_eq!(printed, profile::welcome_banner());
    }

    #[test]
    fn test_history_lines_oldest_first() {
        let mut session = session();
        session.submit("about");
        session.submit("Skills");
        session.submit("help");

        assert_eq!(history_lines(&session), vec!["about", "skills", "help"]);
    }

    #[test]
    fn test_emit_clear_off_screen_prints_nothing() {
        let mut session = session();
        session.submit("about");
        let event = session.submit("clear").event;

        assert_eq!(emit_to_string(&session, event, false, false), "");
    }
}
