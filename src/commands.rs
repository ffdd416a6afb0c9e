use chrono::Local;

use crate::profile;

/// What a command does when it is run.
#[derive(Clone, Copy)]
pub enum CommandAction {
    /// Produce a fixed block of display lines.
    Lines(fn() -> Vec<String>),
    /// List every registered command.
    Help,
    /// Empty the transcript. Produces no lines of its own.
    Clear,
}

#[derive(Clone, Copy)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub action: CommandAction,
}

/// Result of running a registered command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Lines(Vec<String>),
    ClearTranscript,
}

/// Trim surrounding whitespace and lower-case, the form used for lookup.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Registry of every command the terminal understands, in help order.
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            definitions: Vec::new(),
        };

        registry.register("help", "Show this help message", CommandAction::Help);
        registry.register("about", "Learn about me", CommandAction::Lines(about));
        registry.register(
            "experience",
            "View my work experience",
            CommandAction::Lines(experience),
        );
        registry.register(
            "projects",
            "See my recent projects",
            CommandAction::Lines(projects),
        );
        registry.register(
            "skills",
            "Check out my technical skills",
            CommandAction::Lines(skills),
        );
        registry.register("contact", "Get in touch with me", CommandAction::Lines(contact));
        registry.register("resume", "Download my resume", CommandAction::Lines(resume));
        registry.register("clear", "Clear the terminal", CommandAction::Clear);
        registry.register("whoami", "Display current user", CommandAction::Lines(whoami));
        registry.register(
            "date",
            "Show current date and time",
            CommandAction::Lines(date),
        );

        registry
    }

    fn register(&mut self, name: &'static str, description: &'static str, action: CommandAction) {
        debug_assert!(self.lookup(name).is_none(), "duplicate command {name}");
        self.definitions.push(CommandDefinition {
            name,
            description,
            action,
        });
    }

    /// Find a command by its normalized key.
    pub fn lookup(&self, key: &str) -> Option<&CommandDefinition> {
        self.definitions.iter().find(|def| def.name == key)
    }

    /// Run the command registered under `key`, or `None` on a miss.
    pub fn execute(&self, key: &str) -> Option<CommandOutput> {
        let definition = self.lookup(key)?;
        let output = match definition.action {
            CommandAction::Lines(produce) => CommandOutput::Lines(produce()),
            CommandAction::Help => CommandOutput::Lines(self.help_lines()),
            CommandAction::Clear => CommandOutput::ClearTranscript,
        };
        Some(output)
    }

    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.definitions
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.iter().map(|def| def.name)
    }

    /// Command names starting with the normalized `prefix`, in help order.
    pub fn completions(&self, prefix: &str) -> Vec<&'static str> {
        let prefix = normalize(prefix);
        self.names().filter(|name| name.starts_with(&prefix)).collect()
    }

    pub fn help_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Available Commands:".to_string(),
            "─────────────────".to_string(),
        ];
        for def in &self.definitions {
            lines.push(format!("{:<14}- {}", def.name, def.description));
        }
        lines.push(String::new());
        lines.push(profile::RECALL_TIP.to_string());
        lines
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn about() -> Vec<String> {
    profile::block(profile::ABOUT)
}

fn experience() -> Vec<String> {
    profile::block(profile::EXPERIENCE)
}

fn projects() -> Vec<String> {
    profile::block(profile::PROJECTS)
}

fn skills() -> Vec<String> {
    profile::block(profile::SKILLS)
}

fn contact() -> Vec<String> {
    profile::block(profile::CONTACT)
}

fn resume() -> Vec<String> {
    profile::block(profile::RESUME)
}

fn whoami() -> Vec<String> {
    vec![profile::WHOAMI.to_string()]
}

// Matches the shape of a browser's Date.toString(), e.g. "Sun Oct 18 2026 14:03:11 GMT+0200".
fn date() -> Vec<String> {
    vec![Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string()]
}
