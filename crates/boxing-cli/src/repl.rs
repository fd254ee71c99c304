//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The REPL keeps one ring for the whole session, so boxers can be entered
//! one line at a time and fought later.

use crate::cli::{Command, CreateArgs, DeleteArgs, GetArgs, LeaderboardArgs, OutcomeArg, RecordArgs, SortArg};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use boxing_domain::traits::{BoxerRepository, RandomSource};
use boxing_domain::{roster, BoxerId, LeaderboardSort, Outcome, Ring, RING_CAPACITY};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl<R, S>(session: &mut Session<R, S>, config: &Config, formatter: &Formatter) -> Result<()>
where
    R: BoxerRepository,
    S: RandomSource,
{
    println!("{}", formatter.info("Boxing REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut ring = Ring::new();

    loop {
        let prompt = format!("boxing [{}/{}]> ", ring.len(), RING_CAPACITY);

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, session, &mut ring, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Print the command list
    Help,
    /// Put a boxer in the ring by name
    Enter(String),
    /// Show who is in the ring
    ShowRing,
    /// Empty the ring
    Clear,
    /// Fight the two boxers in the ring
    Fight,
    /// A command shared with the command line
    Command(Command),
}

/// Parse a REPL command line.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((&name, args)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match name {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "enter" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: enter <name>".to_string()));
            }
            Ok(ReplCommand::Enter(args.join(" ")))
        }
        "ring" => Ok(ReplCommand::ShowRing),
        "clear" => Ok(ReplCommand::Clear),
        "fight" => Ok(ReplCommand::Fight),
        "create" => parse_create_command(args),
        "delete" => parse_delete_command(args),
        "get" => parse_get_command(args),
        "record" => parse_record_command(args),
        "leaderboard" => parse_leaderboard_command(args),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            name
        ))),
    }
}

/// Execute a REPL command against the session and the session's ring.
pub fn execute_repl_command<R, S>(
    cmd: ReplCommand,
    session: &mut Session<R, S>,
    ring: &mut Ring,
    formatter: &Formatter,
) -> Result<()>
where
    R: BoxerRepository,
    S: RandomSource,
{
    match cmd {
        ReplCommand::Exit | ReplCommand::Help => {}
        ReplCommand::Enter(name) => {
            let boxer = roster::get_boxer_by_name(&session.repo, &name)?;
            ring.enter(boxer)?;
            println!("{}", formatter.success(&format!("{} entered the ring", name)));
        }
        ReplCommand::ShowRing => {
            println!("{}", formatter.format_ring(ring.boxers())?);
        }
        ReplCommand::Clear => {
            ring.clear();
            println!("{}", formatter.info("Ring cleared"));
        }
        ReplCommand::Fight => {
            commands::run_bout(ring, &mut session.repo, &mut session.random, formatter)?;
        }
        ReplCommand::Command(cmd) => match cmd {
            Command::Create(args) => {
                commands::execute_create(args, &mut session.repo, formatter)?;
            }
            Command::Delete(args) => {
                if ring.contains(args.id) {
                    return Err(CliError::InvalidInput(format!(
                        "Boxer with ID {} is in the ring; clear it first",
                        args.id
                    )));
                }
                commands::execute_delete(args, &mut session.repo, formatter)?;
            }
            Command::Get(args) => {
                commands::execute_get(args, &session.repo, formatter)?;
            }
            Command::Record(args) => {
                commands::execute_record(args, &mut session.repo, formatter)?;
            }
            Command::Leaderboard(args) => {
                commands::execute_leaderboard(args, &session.repo, formatter)?;
            }
            other => {
                return Err(CliError::InvalidInput(format!("{:?} is not available in the REPL", other)));
            }
        },
    }

    Ok(())
}

// Simple command parsers for REPL (minimal argument parsing)

fn parse_create_command(args: &[&str]) -> Result<ReplCommand> {
    let usage = || CliError::InvalidInput("Usage: create <name> <weight> <height> <reach> <age>".to_string());

    // The last four tokens are the numbers; everything before them is the name
    if args.len() < 5 {
        return Err(usage());
    }
    let (name, numbers) = args.split_at(args.len() - 4);
    let [weight, height, reach, age] = numbers else {
        return Err(usage());
    };

    Ok(ReplCommand::Command(Command::Create(CreateArgs {
        name: name.join(" "),
        weight: parse_number(weight, "weight")?,
        height: parse_number(height, "height")?,
        reach: parse_number(reach, "reach")?,
        age: parse_number(age, "age")?,
    })))
}

fn parse_delete_command(args: &[&str]) -> Result<ReplCommand> {
    let Some(id) = args.first() else {
        return Err(CliError::InvalidInput("Usage: delete <id> [-y]".to_string()));
    };

    Ok(ReplCommand::Command(Command::Delete(DeleteArgs {
        id: parse_id(id)?,
        yes: args[1..].iter().any(|a| *a == "-y" || *a == "--yes"),
    })))
}

fn parse_get_command(args: &[&str]) -> Result<ReplCommand> {
    let usage = || CliError::InvalidInput("Usage: get <id|name> | get --id <id> | get --name <name>".to_string());

    let get = match args {
        [] | ["--id"] | ["--name"] => return Err(usage()),
        ["--id", id] => GetArgs {
            id: Some(parse_id(id)?),
            name: None,
        },
        ["--id", ..] => return Err(usage()),
        ["--name", name @ ..] => GetArgs {
            id: None,
            name: Some(name.join(" ")),
        },
        // Without a flag, a positive integer is an id and anything else a name
        _ => {
            let key = args.join(" ");
            match key.parse::<BoxerId>() {
                Ok(id) => GetArgs { id: Some(id), name: None },
                Err(_) => GetArgs { id: None, name: Some(key) },
            }
        }
    };

    Ok(ReplCommand::Command(Command::Get(get)))
}

fn parse_record_command(args: &[&str]) -> Result<ReplCommand> {
    let [id, result] = args else {
        return Err(CliError::InvalidInput("Usage: record <id> <win|loss>".to_string()));
    };

    let result = match Outcome::parse(result)? {
        Outcome::Win => OutcomeArg::Win,
        Outcome::Loss => OutcomeArg::Loss,
    };

    Ok(ReplCommand::Command(Command::Record(RecordArgs {
        id: parse_id(id)?,
        result,
    })))
}

fn parse_leaderboard_command(args: &[&str]) -> Result<ReplCommand> {
    let sort = match args.first() {
        None => SortArg::Wins,
        Some(s) => match LeaderboardSort::parse(s)? {
            LeaderboardSort::Wins => SortArg::Wins,
            LeaderboardSort::WinPct => SortArg::WinPct,
        },
    };

    Ok(ReplCommand::Command(Command::Leaderboard(LeaderboardArgs { sort })))
}

fn parse_id(s: &str) -> Result<BoxerId> {
    s.parse().map_err(CliError::InvalidInput)
}

fn parse_number<T: std::str::FromStr>(s: &str, field: &str) -> Result<T> {
    s.parse()
        .map_err(|_| CliError::InvalidInput(format!("{} must be a number, got '{}'", field, s)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  create <name> <w> <h> <r> <a>  - Register a boxer");
    println!("    w: weight in pounds (at least 125)");
    println!("    h: height in inches");
    println!("    r: reach in inches");
    println!("    a: age (18-40)");
    println!("  delete <id> [-y]               - Delete a boxer");
    println!("  get <id|name>                  - Show a boxer and their record");
    println!("  get --name <name>              - Look up by name, even an all-digit one");
    println!("  record <id> <win|loss>         - Record a fight result");
    println!("  leaderboard [wins|win_pct]     - Show the leaderboard");
    println!("  enter <name>                   - Put a boxer in the ring");
    println!("  ring                           - Show who is in the ring");
    println!("  clear                          - Empty the ring");
    println!("  fight                          - Fight the two boxers in the ring");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
