//! Boxing CLI - Command-line interface for managing boxers and staging fights.

use boxing_cli::commands;
use boxing_cli::config::Overrides;
use boxing_cli::repl;
use boxing_cli::{Cli, Command, Config, Formatter, Session};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> boxing_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the home directory is unusable
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Using default configuration: {}", e);
            Config::default()
        }),
    };

    config.apply(Overrides {
        db: cli.db,
        random_url: cli.random_url,
        seed: cli.seed,
    });
    config.validate()?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let mut session = Session::open(&config)?;

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut session, &config, &formatter)?;
        }
        Some(Command::Create(args)) => {
            commands::execute_create(args, &mut session.repo, &formatter)?;
        }
        Some(Command::Delete(args)) => {
            commands::execute_delete(args, &mut session.repo, &formatter)?;
        }
        Some(Command::Get(args)) => {
            commands::execute_get(args, &session.repo, &formatter)?;
        }
        Some(Command::Record(args)) => {
            commands::execute_record(args, &mut session.repo, &formatter)?;
        }
        Some(Command::Leaderboard(args)) => {
            commands::execute_leaderboard(args, &session.repo, &formatter)?;
        }
        Some(Command::Fight(args)) => {
            commands::execute_fight(args, &mut session.repo, &mut session.random, &formatter)?;
        }
        Some(Command::Health) => {
            commands::execute_health(&session.repo, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` applies unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
