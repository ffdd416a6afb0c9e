use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod commands;
mod config;
mod logging;
mod profile;
mod recall;
mod session;
mod transcript;
mod tui;

use commands::CommandRegistry;
use config::PortfolioConfig;
use logging::LogTarget;
use session::Session;

#[derive(Parser, Debug)]
#[command(name = "portfolio-terminal", version, about = "Interactive terminal-style portfolio")]
struct Args {
    /// Line-oriented mode instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Print transcript lines as JSON objects (plain mode)
    #[arg(long)]
    json: bool,

    /// Run a command and exit; repeat to run several in order
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    commands: Vec<String>,

    /// Config file (default: ~/.portfolio-terminal/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override a config value, e.g. --set prompt='me@host:~$'
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = config::parse_override)]
    overrides: Vec<(String, String)>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Start with an empty transcript
    #[arg(long)]
    no_welcome: bool,

    /// Write the effective configuration and exit
    #[arg(long)]
    write_config: bool,
}

impl Args {
    fn wants_plain(&self) -> bool {
        self.plain
            || self.json
            || !self.commands.is_empty()
            || !io::stdin().is_terminal()
            || !io::stdout().is_terminal()
    }
}

fn load_config(args: &Args) -> Result<PortfolioConfig> {
    let mut config = config::load_or_default(args.config.as_deref())?;
    config.merge_overrides(args.overrides.clone())?;
    if let Some(path) = &args.log_file {
        config.general.log_file = Some(path.clone());
    }
    if args.no_welcome {
        config.session.show_welcome = false;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(&args)?;

    let plain = args.wants_plain() || args.write_config;
    let target = if plain { LogTarget::FileOrStderr } else { LogTarget::FileOnly };
    logging::init(&config.general, target)?;
    config.report_notices();

    if args.write_config {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => PortfolioConfig::default_path()?,
        };
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    info!(plain, prompt = %config.session.prompt, "starting portfolio terminal");

    let session = Session::new(CommandRegistry::new(), config.session_options());

    if plain {
        let options = cli::PlainOptions {
            json: args.json,
            commands: args.commands,
        };
        cli::run_plain(session, options)
    } else {
        tui::run_tui(session, &config.tui).await
    }
}
